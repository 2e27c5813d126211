use std::{path::PathBuf, sync::Arc};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::fs;

/// Shared handle to the loaded configuration.
pub type Cfg = Arc<RwLock<CoreConfig>>;

/// Settings read from `config.toml` in the configuration directory.
///
/// Every field is optional; a missing or unparsable file behaves exactly like
/// an empty one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    data_dir: Option<PathBuf>,
}

impl CoreConfig {
    pub fn load() -> Self {
        let path = fs::config_dir().join("config.toml");

        match std::fs::read_to_string(&path) {
            Ok(text) => toml::from_str(&text).unwrap_or_else(|err| {
                warn!("Ignoring unparsable config file {}: {err}", path.display());
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// The directory holding the record files.
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(fs::data_dir)
    }

    #[cfg(test)]
    pub(crate) fn mock(data_dir: PathBuf) -> Self {
        Self {
            data_dir: Some(data_dir),
        }
    }
}
