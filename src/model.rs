//! Extension data as the host hands it to the dashlet.
//!
//! Field names follow the host's JSON state tree (`modId`, `description.short`, ...)
//! so snapshots deserialize without any mapping layer.

use crate::constants::{DEFAULT_EXTENSION_TYPE, ENDORSED_UNDECIDED, NEXUS_SITE_MODS_URL};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Remote mod id of an extension
pub type ModId = u64;

/// Catalog entry of an installable extension.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtensionDescriptor {
    pub mod_id: Option<ModId>,
    pub name: String,
    #[serde(rename = "type")]
    pub extension_type: Option<String>,
    pub image: String,
    pub description: ExtensionDescription,
    pub author: String,
    /// Remote account that published the extension
    pub uploader: Option<String>,
    pub version: Option<String>,
    pub timestamp: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtensionDescription {
    pub short: String,
    pub long: Option<String>,
}

impl ExtensionDescriptor {
    /// Type label shown on the row, `extension` when the catalog has none
    pub fn type_label(&self) -> &str {
        match self.extension_type.as_deref() {
            Some(kind) if !kind.is_empty() => kind,
            _ => DEFAULT_EXTENSION_TYPE,
        }
    }

    /// Account compared against the current user when deciding endorsement candidacy
    pub fn owner(&self) -> &str {
        self.uploader.as_deref().unwrap_or(&self.author)
    }

    pub fn nexus_url(&self) -> Option<String> {
        self.mod_id.map(|mod_id| format!("{}/{}", NEXUS_SITE_MODS_URL, mod_id))
    }
}

/// An extension present locally.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstalledExtension {
    pub mod_id: Option<ModId>,
    pub version: String,
}

/// Installed extensions keyed by internal id, iterated in insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InstalledExtensions {
    entries: Vec<(String, InstalledExtension)>,
}

impl InstalledExtensions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a record. Replacing keeps the original position.
    pub fn insert(&mut self, ext_id: impl Into<String>, record: InstalledExtension) {
        let ext_id = ext_id.into();
        if let Some(slot) = self.entries.iter_mut().find(|(id, _)| *id == ext_id) {
            slot.1 = record;
        } else {
            self.entries.push((ext_id, record));
        }
    }

    pub fn get(&self, ext_id: &str) -> Option<&InstalledExtension> {
        self.entries.iter().find(|(id, _)| id == ext_id).map(|(_, record)| record)
    }

    pub fn contains(&self, ext_id: &str) -> bool {
        self.get(ext_id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &InstalledExtension)> {
        self.entries.iter().map(|(id, record)| (id.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, InstalledExtension)> for InstalledExtensions {
    fn from_iter<I: IntoIterator<Item = (K, InstalledExtension)>>(iter: I) -> Self {
        let mut installed = Self::new();
        for (ext_id, record) in iter {
            installed.insert(ext_id, record);
        }
        installed
    }
}

/// Per-extension state kept by the host (`app.extensions.<id>`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtensionState {
    pub enabled: Option<bool>,
    pub endorsed: Option<String>,
}

impl ExtensionState {
    pub fn endorsed_label(&self) -> &str {
        self.endorsed.as_deref().unwrap_or(ENDORSED_UNDECIDED)
    }
}

/// Decision the user can send for an installed extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndorseDecision {
    Endorse,
    Abstain,
}

impl EndorseDecision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Endorse => "endorse",
            Self::Abstain => "abstain",
        }
    }
}

impl fmt::Display for EndorseDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the dashlet reads for one render.
#[derive(Debug, Clone, Default)]
pub struct DashletInputs {
    pub catalog: Vec<ExtensionDescriptor>,
    pub extension_state: HashMap<String, ExtensionState>,
    pub installed: InstalledExtensions,
    pub user: Option<String>,
}

impl DashletInputs {
    /// Endorsement label of an extension, `Undecided` when the host has none
    pub fn endorsed_label(&self, ext_id: &str) -> &str {
        self.extension_state
            .get(ext_id)
            .map(ExtensionState::endorsed_label)
            .unwrap_or(ENDORSED_UNDECIDED)
    }
}
