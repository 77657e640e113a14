//! Deploy-target configuration loader.
//!
//! Targets are read from a `deploy_targets.json` file, first from the working
//! directory and then from the platform config dir. The list is read-only at
//! runtime: the deploy dialog snapshots it when it opens, and an empty list
//! simply fails the dialog's presence validation.
//!
//! # deploy_targets.json Format
//!
//! ```json
//! {
//!   "app_base_url": "http://localhost:8080/modeler",
//!   "deploy_urls": [
//!     { "name": "Staging", "url": "http://staging.example.com/runtime/workflow/deploy" }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

pub const CONFIG_FILE_NAME: &str = "deploy_targets.json";

/// One runtime engine endpoint able to receive deployments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployTarget {
    /// Label shown in the dialog's environment picker.
    pub name: String,
    /// Deploy endpoint; suspend/activate URLs are derived from it.
    pub url: String,
}

/// Application-wide deployment configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployConfig {
    /// Base URL of the modeler backend that serves the export artifact.
    #[serde(default = "default_app_base_url")]
    pub app_base_url: String,

    /// Configured deploy targets, possibly empty.
    #[serde(default)]
    pub deploy_urls: Vec<DeployTarget>,
}

fn default_app_base_url() -> String {
    "http://localhost:8080/modeler".to_string()
}

impl Default for DeployConfig {
    fn default() -> Self {
        DeployConfig {
            app_base_url: default_app_base_url(),
            deploy_urls: Vec::new(),
        }
    }
}

impl DeployConfig {
    /// Load configuration from the working directory, then the platform
    /// config dir. Falls back to an empty default when neither exists.
    pub fn load() -> Self {
        if let Some(config) = Self::load_from_path(CONFIG_FILE_NAME) {
            return config;
        }

        if let Some(proj_dirs) = directories::ProjectDirs::from("com", "", "flowdash") {
            let path = proj_dirs.config_dir().join(CONFIG_FILE_NAME);
            if let Some(config) = Self::load_from_path(&path) {
                return config;
            }
        }

        debug!("no deploy target configuration found, starting with empty target list");
        DeployConfig::default()
    }

    /// Load configuration from a specific path.
    ///
    /// Returns None if the file doesn't exist or is invalid.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let path = path.as_ref();

        if !path.exists() {
            debug!("no {} at {:?}", CONFIG_FILE_NAME, path);
            return None;
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<DeployConfig>(&contents) {
                Ok(config) => {
                    debug!(
                        "loaded deploy config: app_base={}, {} target(s)",
                        config.app_base_url,
                        config.deploy_urls.len()
                    );
                    Some(config)
                }
                Err(e) => {
                    warn!("failed to parse {}: {}", CONFIG_FILE_NAME, e);
                    None
                }
            },
            Err(e) => {
                warn!("failed to read {}: {}", CONFIG_FILE_NAME, e);
                None
            }
        }
    }
}
