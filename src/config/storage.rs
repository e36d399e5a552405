use crate::core::Result;
use std::env;
use std::path::PathBuf;

/// Storage configuration for the flat-file data directory
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    /// Load storage settings from environment variables
    ///
    /// Defaults to the working directory, where the legacy service kept
    /// its data files.
    pub fn from_env() -> Result<Self> {
        let data_dir = env::var("DATA_DIR").unwrap_or_else(|_| ".".to_string());

        Ok(Self {
            data_dir: PathBuf::from(data_dir),
        })
    }
}
