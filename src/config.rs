use serde_derive::Deserialize;
use std::io::Read;
use std::time::Duration;
use std::{
    fs::File,
    path::{Path, PathBuf},
};
use thiserror::*;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("io error {0} when reading config")]
    IoError(#[from] std::io::Error),
    #[error("cannot open config file '{0}' : {1}")]
    OpeningError(PathBuf, std::io::Error),
    #[error("UTF8 format error when reading config")]
    Utf8Error,
    #[error("format error {0} when reading config")]
    FormatError(#[from] serde_yaml::Error),
}

fn default_namespace() -> String {
    "taskflow".to_string()
}

/// Where collections live on disk and how their slots are named: slot for
/// an entity type is `"<namespace>_<suffix>"`, e.g. `taskflow_tasks`.
#[derive(Clone, Debug, Deserialize)]
pub struct StorageConfig {
    pub dir: PathBuf,
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub storage: StorageConfig,
    pub log: Option<crate::log::Log>,
}

impl Config {
    pub fn from_str(s: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(s)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let p = path.as_ref();
        let mut file = File::open(p).map_err(|e| ConfigError::OpeningError(p.to_owned(), e))?;
        let mut contents = vec![];
        file.read_to_end(&mut contents)?;
        let contents = String::from_utf8(contents).map_err(|_| ConfigError::Utf8Error)?;
        let config = Config::from_str(&contents)?;
        Ok(config)
    }
}

/// Per-operation simulated delays. The defaults reproduce the original
/// application's distinct per-entity timings; `get_by_category` shares the
/// `get_all` class.
#[derive(Clone, Copy, Debug)]
pub struct LatencyProfile {
    pub get_all: Duration,
    pub get_by_id: Duration,
    pub create: Duration,
    pub update: Duration,
    pub delete: Duration,
}

impl LatencyProfile {
    pub fn new(get_all_ms: u64, get_by_id_ms: u64, create_ms: u64, update_ms: u64, delete_ms: u64) -> Self {
        Self {
            get_all: Duration::from_millis(get_all_ms),
            get_by_id: Duration::from_millis(get_by_id_ms),
            create: Duration::from_millis(create_ms),
            update: Duration::from_millis(update_ms),
            delete: Duration::from_millis(delete_ms),
        }
    }

    pub fn tasks() -> Self {
        Self::new(300, 200, 400, 350, 250)
    }

    pub fn categories() -> Self {
        Self::new(200, 150, 300, 250, 200)
    }

    pub fn zero() -> Self {
        Self::new(0, 0, 0, 0, 0)
    }
}

pub mod testdata {
    use super::Config;

    #[allow(dead_code)]
    pub fn test_config() -> Config {
        Config::from_str(
            r#"
        log:
            level: trace
            structured: false
        storage:
            dir: "/tmp/taskstore"
            namespace: taskflow
        "#,
        )
        .unwrap()
    }
}
