//! Host boundary of the dashlet.
//!
//! The dashlet never installs or endorses anything itself. It reads a
//! [`DashletInputs`](crate::model::DashletInputs) snapshot from the [`StateStore`]
//! and asks an [`ExtensionHost`] to run the two remote commands; results come back
//! as actions that the shell forwards to the store.

use crate::model::{EndorseDecision, ExtensionDescriptor, ModId};
use async_trait::async_trait;

pub mod local;
pub mod store;

pub use local::LocalHost;
pub use store::StateStore;

/// Errors reported by host commands.
#[derive(Debug, Clone, thiserror::Error)]
pub enum HostError {
    #[error("Extension not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request rejected: {0}")]
    Rejected(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Commands the host runtime executes on behalf of the dashlet.
#[async_trait]
pub trait ExtensionHost: Send + Sync {
    /// `install-extension`: download and install a catalog entry.
    async fn install_extension(&self, extension: ExtensionDescriptor) -> Result<(), HostError>;

    /// `endorse-nexus-mod`: record a decision against the remote repository.
    ///
    /// Resolves to the resulting endorsement labels, first one being the new state.
    async fn endorse_nexus_mod(
        &self,
        domain: &str,
        mod_id: ModId,
        version: &str,
        decision: EndorseDecision,
    ) -> Result<Vec<String>, HostError>;
}
