/// Dashboard configuration
use crate::error::{DashboardError, Result};
use motive_assets::AssetRoot;
use motive_core::Track;
use motive_playback::PlayerConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "motive.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DashboardConfig {
    #[serde(default = "default_assets")]
    pub assets: AssetSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_rotation")]
    pub rotation: RotationSettings,

    #[serde(default)]
    pub playback: PlayerConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AssetSettings {
    /// Directory or `http(s)://` base URL holding the JSON resources and tones
    #[serde(default = "default_assets_root")]
    pub root: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_database_url")]
    pub database_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RotationSettings {
    /// Seconds between automatic advances of the slideshow and the wins list
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

impl RotationSettings {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

impl StorageSettings {
    /// Filesystem path of the database, if the URL points at a file
    pub fn database_path(&self) -> Option<PathBuf> {
        let rest = self
            .database_url
            .strip_prefix("sqlite://")
            .or_else(|| self.database_url.strip_prefix("sqlite:"))?;
        let path = rest.split('?').next().unwrap_or(rest);

        if path.is_empty() || path == ":memory:" {
            None
        } else {
            Some(PathBuf::from(path))
        }
    }
}

impl DashboardConfig {
    /// Load configuration from file and environment
    ///
    /// `path` must exist when given; otherwise `motive.toml` in the working
    /// directory is used if present. `MOTIVE_<SECTION>__<KEY>` variables
    /// override both (e.g. `MOTIVE_ROTATION__INTERVAL_SECS=10`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path).required(true));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("MOTIVE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| DashboardError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| DashboardError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        AssetRoot::parse(&self.assets.root)
            .map_err(|e| DashboardError::Config(format!("assets.root: {e}")))?;

        if self.storage.database_url.trim().is_empty() {
            return Err(DashboardError::Config(
                "storage.database_url is required".to_string(),
            ));
        }

        if self.rotation.interval_secs == 0 {
            return Err(DashboardError::Config(
                "rotation.interval_secs must be at least 1".to_string(),
            ));
        }

        let volume = self.playback.volume;
        if !volume.is_finite() || !(0.0..=1.0).contains(&volume) {
            return Err(DashboardError::Config(format!(
                "playback.volume must be between 0 and 1 (got {volume})"
            )));
        }

        if !Track::tone_tracks()
            .iter()
            .any(|t| t.file == self.playback.initial_track)
        {
            return Err(DashboardError::Config(format!(
                "playback.initial_track {:?} is not one of the built-in tones",
                self.playback.initial_track
            )));
        }

        Ok(())
    }
}

// Default values
fn default_assets() -> AssetSettings {
    AssetSettings {
        root: default_assets_root(),
    }
}

fn default_assets_root() -> String {
    "./public".to_string()
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        database_url: default_database_url(),
    }
}

fn default_database_url() -> String {
    "sqlite://./data/motive.db".to_string()
}

fn default_rotation() -> RotationSettings {
    RotationSettings {
        interval_secs: default_interval_secs(),
    }
}

fn default_interval_secs() -> u64 {
    motive_rotation::DEFAULT_ROTATION_INTERVAL.as_secs()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            assets: default_assets(),
            storage: default_storage(),
            rotation: default_rotation(),
            playback: PlayerConfig::default(),
        }
    }
}
