/// Tool configuration
use crate::error::{Result, ToolError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tapedeck_playback::PlayerConfig;

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "tapedeck.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ToolConfig {
    #[serde(default)]
    pub player: PlayerConfig,

    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingSettings {
    /// `EnvFilter` directives, used when `RUST_LOG` is unset
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl ToolConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit path must exist; the default file is optional.
    /// `TAPEDECK_` variables override both, with `__` between levels
    /// (`TAPEDECK_PLAYER__MANUAL_LINK_TITLE`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()).required(true));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("TAPEDECK")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ToolError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ToolError::Config(e.to_string()))
    }
}

fn default_filter() -> String {
    "tapedeck=info,tapedeck_playlist_tool=info,tapedeck_playback=info,tapedeck_importer=info"
        .to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}
