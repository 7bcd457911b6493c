//! Pure view derivations of the extensions dashlet.
//!
//! Nothing in here keeps state between renders: every function takes the read model
//! the host supplied for this render and returns plain values. The ratatui component
//! in [`crate::ui::components::DashletComponent`] is a thin shell over these.

use crate::constants::ENDORSED_UNDECIDED;
use crate::host::HostError;
use crate::model::{DashletInputs, EndorseDecision, ExtensionDescriptor, ModId};
use std::collections::{HashMap, HashSet};

/// Which of the two mutually exclusive lists the dashlet shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Newly available extensions
    News,
    /// Installed extensions waiting for an endorse/abstain decision
    Endorse,
}

/// Arguments of one `endorse-nexus-mod` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndorseRequest {
    pub ext_id: String,
    pub mod_id: ModId,
    pub version: String,
    pub decision: EndorseDecision,
}

/// Catalog keyed by mod id. On duplicate ids the last entry wins.
pub fn extensions_by_mod_id(catalog: &[ExtensionDescriptor]) -> HashMap<ModId, &ExtensionDescriptor> {
    catalog
        .iter()
        .filter_map(|ext| ext.mod_id.map(|mod_id| (mod_id, ext)))
        .collect()
}

pub fn installed_mod_ids(inputs: &DashletInputs) -> HashSet<ModId> {
    inputs.installed.iter().filter_map(|(_, record)| record.mod_id).collect()
}

/// Newest not-yet-installed catalog entries, at most `limit` of them.
pub fn sorted_available(inputs: &DashletInputs, limit: usize) -> Vec<&ExtensionDescriptor> {
    let installed = installed_mod_ids(inputs);

    let mut available: Vec<&ExtensionDescriptor> = inputs
        .catalog
        .iter()
        .filter(|ext| ext.timestamp.is_some())
        .filter(|ext| matches!(ext.mod_id, Some(mod_id) if !installed.contains(&mod_id)))
        .collect();

    // sort_by is stable, equal timestamps keep catalog order
    available.sort_by(|lhs, rhs| rhs.timestamp.cmp(&lhs.timestamp));
    available.truncate(limit);
    available
}

/// Installed extension ids the user has not decided on yet, in installed order.
///
/// Extensions published by the current user are never offered for endorsement.
/// An id whose mod id does not resolve in the catalog has no known owner and is
/// kept; its row is dropped at render time instead.
pub fn unendorsed(inputs: &DashletInputs) -> Vec<String> {
    let by_mod_id = extensions_by_mod_id(&inputs.catalog);
    let user = inputs.user.as_deref();

    inputs
        .installed
        .iter()
        .filter(|(ext_id, record)| {
            let Some(mod_id) = record.mod_id else {
                return false;
            };
            let owner = by_mod_id.get(&mod_id).map(|ext| ext.owner());
            owner != user && inputs.endorsed_label(ext_id) == ENDORSED_UNDECIDED
        })
        .map(|(ext_id, _)| ext_id.to_string())
        .collect()
}

pub fn display_mode(skip_endorsing: bool, unendorsed: &[String]) -> DisplayMode {
    if skip_endorsing || unendorsed.is_empty() {
        DisplayMode::News
    } else {
        DisplayMode::Endorse
    }
}

/// First catalog entry carrying `mod_id`.
pub fn find_by_mod_id(catalog: &[ExtensionDescriptor], mod_id: ModId) -> Option<&ExtensionDescriptor> {
    catalog.iter().find(|ext| ext.mod_id == Some(mod_id))
}

/// Catalog entry shown on the endorse row of `ext_id`, if it still resolves.
pub fn endorse_row_extension<'a>(inputs: &'a DashletInputs, ext_id: &str) -> Option<&'a ExtensionDescriptor> {
    let mod_id = inputs.installed.get(ext_id)?.mod_id?;
    find_by_mod_id(&inputs.catalog, mod_id)
}

/// Descriptor to hand to `install-extension` for an Install control tagged `mod_id`.
///
/// Resolved against the catalog at activation time; `None` when the catalog changed
/// underneath the rendered row.
pub fn install_request(inputs: &DashletInputs, mod_id: ModId) -> Option<ExtensionDescriptor> {
    find_by_mod_id(&inputs.catalog, mod_id).cloned()
}

pub fn endorse_request(inputs: &DashletInputs, ext_id: &str, decision: EndorseDecision) -> Option<EndorseRequest> {
    let record = inputs.installed.get(ext_id)?;
    Some(EndorseRequest {
        ext_id: ext_id.to_string(),
        mod_id: record.mod_id?,
        version: record.version.clone(),
        decision,
    })
}

/// Endorsement label to store once `endorse-nexus-mod` settles.
///
/// The first label the host answered with, or `Undecided` when the command failed
/// so the row is offered again instead of staying in limbo.
pub fn endorsed_after(result: &Result<Vec<String>, HostError>) -> String {
    match result {
        Ok(labels) => labels
            .first()
            .cloned()
            .unwrap_or_else(|| ENDORSED_UNDECIDED.to_string()),
        Err(_) => ENDORSED_UNDECIDED.to_string(),
    }
}

/// Everything one render of the dashlet needs, derived in one pass.
#[derive(Debug, Clone)]
pub struct DashletView<'a> {
    pub mode: DisplayMode,
    pub available: Vec<&'a ExtensionDescriptor>,
    pub unendorsed: Vec<String>,
}

impl<'a> DashletView<'a> {
    pub fn derive(inputs: &'a DashletInputs, skip_endorsing: bool, limit: usize) -> Self {
        let unendorsed = unendorsed(inputs);
        Self {
            mode: display_mode(skip_endorsing, &unendorsed),
            available: sorted_available(inputs, limit),
            unendorsed,
        }
    }

    /// Rows of the active list. Endorse rows that no longer resolve are skipped.
    pub fn rows(&self, inputs: &'a DashletInputs) -> Vec<DashletRow<'a>> {
        match self.mode {
            DisplayMode::News => self.available.iter().map(|ext| DashletRow::Available(*ext)).collect(),
            DisplayMode::Endorse => self
                .unendorsed
                .iter()
                .filter_map(|ext_id| {
                    endorse_row_extension(inputs, ext_id).map(|ext| DashletRow::Endorse {
                        ext_id: ext_id.clone(),
                        extension: ext,
                    })
                })
                .collect(),
        }
    }
}

/// One rendered row, tagged with what its controls act on.
#[derive(Debug, Clone, PartialEq)]
pub enum DashletRow<'a> {
    Available(&'a ExtensionDescriptor),
    Endorse {
        ext_id: String,
        extension: &'a ExtensionDescriptor,
    },
}

impl DashletRow<'_> {
    pub fn extension(&self) -> &ExtensionDescriptor {
        match self {
            Self::Available(ext) => ext,
            Self::Endorse { extension, .. } => extension,
        }
    }
}
