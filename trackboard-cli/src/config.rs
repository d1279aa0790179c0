//! Per-user defaults for the CLI.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use trackboard_dnd::RoleDetection;

const CONFIG_DIR_NAME: &str = "trackboard";
const CONFIG_FILE_NAME: &str = "config.json";

/// Rendering of command output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

/// CLI-facing name for [`RoleDetection`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RoleMode {
    /// Look ids up in the board's arenas
    #[default]
    Lookup,
    /// Infer roles from "item"/"container" in the id text
    Substring,
}

impl From<RoleMode> for RoleDetection {
    fn from(mode: RoleMode) -> Self {
        match mode {
            RoleMode::Lookup => RoleDetection::Lookup,
            RoleMode::Substring => RoleDetection::Substring,
        }
    }
}

/// Persisted CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub format: OutputFormat,
    pub roles: RoleMode,
}

impl CliConfig {
    /// Load config from the per-user config dir, returning default if not found.
    pub fn load() -> Self {
        Self::load_from(&config_file_path())
    }

    /// Load config from an explicit path. Unreadable or malformed files
    /// fall back to defaults.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Ignoring malformed config {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                tracing::debug!("No config at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Output format, with a command-line flag taking precedence.
    pub fn format_or(&self, flag: Option<OutputFormat>) -> OutputFormat {
        flag.unwrap_or(self.format)
    }

    /// Role detection, with a command-line flag taking precedence.
    pub fn detection_or(&self, flag: Option<RoleMode>) -> RoleDetection {
        flag.unwrap_or(self.roles).into()
    }
}

fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME)
}
