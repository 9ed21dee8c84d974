//! Application configuration
//!
//! Defaults, optionally overridden by a read-only JSON file named in
//! `ROTAVIEW_CONFIG`. Nothing is ever written back.

use std::path::Path;

use anyhow::Context;
use capture::CaptureOptions;
use serde::{Deserialize, Serialize};
use view_state::ViewerConfig;

/// Environment variable naming an optional JSON config file
pub const CONFIG_ENV: &str = "ROTAVIEW_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// `tracing` filter used when `RUST_LOG` is not set
    pub log_filter: String,
    pub viewer: ViewerConfig,
    /// Forwarded verbatim to `getDisplayMedia`
    pub capture: CaptureOptions,
}

impl Default for AppConfig {
    fn default() -> Self {
        let log_filter = if cfg!(debug_assertions) {
            "info,rotaview=debug,view_state=debug,capture=debug"
        } else {
            "info"
        };

        Self {
            log_filter: log_filter.to_string(),
            viewer: ViewerConfig::default(),
            capture: CaptureOptions::default(),
        }
    }
}

impl AppConfig {
    /// Defaults, or the file named by [`CONFIG_ENV`] when set
    pub fn load() -> anyhow::Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }
}
