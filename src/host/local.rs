//! Host implementation backed by the in-memory [`StateStore`].
//!
//! Commands are simulated: installing records the extension as installed and
//! endorsing echoes the decision back as the host's endorsement label. Both wait for
//! the configured latency first so the shell behaves like it would against a remote.

use super::{ExtensionHost, HostError, StateStore};
use crate::config::HostConfig;
use crate::model::{EndorseDecision, ExtensionDescriptor, InstalledExtension, ModId};
use async_trait::async_trait;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct LocalHost {
    store: StateStore,
    latency: Duration,
    fail_install: bool,
    fail_endorse: bool,
}

impl LocalHost {
    pub fn new(store: StateStore) -> Self {
        Self {
            store,
            latency: Duration::ZERO,
            fail_install: false,
            fail_endorse: false,
        }
    }

    pub fn from_config(store: StateStore, config: &HostConfig) -> Self {
        Self {
            store,
            latency: Duration::from_millis(config.command_latency_ms),
            fail_install: config.fail_install,
            fail_endorse: config.fail_endorse,
        }
    }

    pub fn with_failures(mut self, fail_install: bool, fail_endorse: bool) -> Self {
        self.fail_install = fail_install;
        self.fail_endorse = fail_endorse;
        self
    }

    async fn round_trip(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    /// Internal id an installed extension is filed under
    pub fn extension_id(extension: &ExtensionDescriptor) -> String {
        let slug: String = extension
            .name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
            .collect();
        let slug = slug.split('-').filter(|part| !part.is_empty()).collect::<Vec<_>>().join("-");

        match (slug.is_empty(), extension.mod_id) {
            (false, _) => slug,
            (true, Some(mod_id)) => format!("mod-{}", mod_id),
            (true, None) => "extension".to_string(),
        }
    }

    fn endorsed_label(decision: EndorseDecision) -> &'static str {
        match decision {
            EndorseDecision::Endorse => "Endorsed",
            EndorseDecision::Abstain => "Abstained",
        }
    }
}

#[async_trait]
impl ExtensionHost for LocalHost {
    async fn install_extension(&self, extension: ExtensionDescriptor) -> Result<(), HostError> {
        self.round_trip().await;

        if self.fail_install {
            return Err(HostError::Network(format!("download of '{}' failed", extension.name)));
        }

        let Some(mod_id) = extension.mod_id else {
            return Err(HostError::InvalidData(format!("'{}' has no mod id", extension.name)));
        };

        let ext_id = Self::extension_id(&extension);
        self.store.add_installed(
            &ext_id,
            InstalledExtension {
                mod_id: Some(mod_id),
                version: extension.version.clone().unwrap_or_default(),
            },
        );
        Ok(())
    }

    async fn endorse_nexus_mod(
        &self,
        domain: &str,
        mod_id: ModId,
        version: &str,
        decision: EndorseDecision,
    ) -> Result<Vec<String>, HostError> {
        self.round_trip().await;

        if self.fail_endorse {
            return Err(HostError::Rejected(format!(
                "{} of {}/{} ({}) was refused",
                decision, domain, mod_id, version
            )));
        }

        let known = self.store.snapshot().catalog.iter().any(|ext| ext.mod_id == Some(mod_id));
        if !known {
            return Err(HostError::NotFound(format!("{}/{}", domain, mod_id)));
        }

        Ok(vec![Self::endorsed_label(decision).to_string()])
    }
}
