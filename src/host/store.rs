//! In-memory read model of the host state tree.

use crate::model::{DashletInputs, ExtensionDescriptor, ExtensionState, InstalledExtension, InstalledExtensions};
use crate::utils::safe_get::{get_safe, get_safe_or};
use anyhow::{Context, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, RwLock};

/// State snapshot bundled with the binary, used when no state file is configured
pub const SAMPLE_STATE: &str = include_str!("../../data/sample_state.json");

const PATH_EXTENSION_STATE: &[&str] = &["app", "extensions"];
const PATH_AVAILABLE: &[&str] = &["session", "extensions", "available"];
const PATH_INSTALLED: &[&str] = &["session", "extensions", "installed"];
const PATH_USER_NAME: &[&str] = &["persistent", "nexus", "userInfo", "name"];

/// Shared store holding what the dashlet reads.
///
/// Cloning shares the same state. Mutation only happens through the named
/// actions below, mirroring how the host's reducers are the only writers.
#[derive(Debug, Clone, Default)]
pub struct StateStore {
    inner: Arc<RwLock<DashletInputs>>,
}

impl StateStore {
    pub fn new(inputs: DashletInputs) -> Self {
        Self {
            inner: Arc::new(RwLock::new(inputs)),
        }
    }

    /// Build the read model from a host state tree. Missing branches become empty.
    pub fn from_state_json(state: &Value) -> Self {
        let catalog: Vec<ExtensionDescriptor> = get_safe(state, PATH_AVAILABLE)
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|entry| serde_json::from_value(entry.clone()).ok())
                    .collect()
            })
            .unwrap_or_default();

        // Field by field, so a malformed entry never resets anybody's endorsement
        let extension_state: HashMap<String, ExtensionState> = get_safe(state, PATH_EXTENSION_STATE)
            .and_then(Value::as_object)
            .map(|entries| {
                entries
                    .iter()
                    .map(|(ext_id, entry)| {
                        let entry_state = ExtensionState {
                            enabled: get_safe_or(entry, &["enabled"], None),
                            endorsed: get_safe_or(entry, &["endorsed"], None),
                        };
                        (ext_id.clone(), entry_state)
                    })
                    .collect()
            })
            .unwrap_or_default();

        // serde_json keeps object key order, which is the installed iteration order
        let installed: InstalledExtensions = get_safe(state, PATH_INSTALLED)
            .and_then(Value::as_object)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|(ext_id, record)| {
                        serde_json::from_value::<InstalledExtension>(record.clone())
                            .ok()
                            .map(|record| (ext_id.clone(), record))
                    })
                    .collect()
            })
            .unwrap_or_default();

        let user: Option<String> = get_safe_or(state, PATH_USER_NAME, None);

        Self::new(DashletInputs {
            catalog,
            extension_state,
            installed,
            user,
        })
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let state: Value = serde_json::from_str(content).context("Failed to parse state snapshot")?;
        Ok(Self::from_state_json(&state))
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read state file: {}", path.as_ref().display()))?;
        Self::from_json_str(&content).with_context(|| format!("Invalid state file: {}", path.as_ref().display()))
    }

    pub fn sample() -> Result<Self> {
        Self::from_json_str(SAMPLE_STATE)
    }

    /// Copy of the current read model
    pub fn snapshot(&self) -> DashletInputs {
        match self.inner.read() {
            Ok(inputs) => inputs.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn write<R>(&self, f: impl FnOnce(&mut DashletInputs) -> R) -> R {
        match self.inner.write() {
            Ok(mut inputs) => f(&mut *inputs),
            Err(poisoned) => {
                let mut inputs = poisoned.into_inner();
                f(&mut *inputs)
            }
        }
    }

    /// `setExtensionEndorsed`
    pub fn set_extension_endorsed(&self, ext_id: &str, endorsed: &str) {
        self.write(|inputs| {
            inputs.extension_state.entry(ext_id.to_string()).or_default().endorsed = Some(endorsed.to_string());
        });
    }

    pub fn add_installed(&self, ext_id: &str, record: InstalledExtension) {
        self.write(|inputs| inputs.installed.insert(ext_id, record));
    }
}
