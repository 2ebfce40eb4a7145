use std::path::PathBuf;

use config::Config;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;
use serde::Serialize;

use crate::Error;
use crate::Result;

/// Store layout applied under a log store root directory.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorePolicy {
    /// One dedicated store instance per raft group replica
    Regular,
    /// A bounded set of shared store instances; groups are assigned to
    /// shards by group id
    Multiplexed,
}

/// Configuration parameters for a multiplexed log store root
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LogStoreConfig {
    /// Root directory that holds every store directory
    /// Default value is set via default_root_dir() function
    #[serde(default = "default_root_dir")]
    pub root_dir: PathBuf,

    /// Store layout policy
    /// Default value is set via default_policy() function
    #[serde(default = "default_policy")]
    pub policy: StorePolicy,
}

impl Default for LogStoreConfig {
    fn default() -> Self {
        Self {
            root_dir: default_root_dir(),
            policy: default_policy(),
        }
    }
}

impl LogStoreConfig {
    /// Load configuration from multiple sources with priority:
    /// 1. Default values
    /// 2. Config file
    /// 3. Environment variables
    ///
    /// # Arguments
    /// * `config_path` - Optional path to a config file
    ///
    /// # Returns
    /// Merged and validated configuration
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut config = Config::builder();

        // 1. Overwrite defaults with the config file
        if let Some(path) = config_path {
            config = config.add_source(File::with_name(path).required(true));
        }

        // 2. Environment variables (highest priority)
        config = config.add_source(
            Environment::with_prefix("SHARDSTORE")
                .separator("__")
                .ignore_empty(true)
                .try_parsing(true),
        );

        let settings: LogStoreConfig = config.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validates log store configuration consistency
    pub fn validate(&self) -> Result<()> {
        if self.root_dir.as_os_str().is_empty() {
            return Err(Error::Config(ConfigError::Message(
                "root_dir path cannot be empty".into(),
            )));
        }

        Ok(())
    }
}

fn default_root_dir() -> PathBuf {
    PathBuf::from("/tmp/shardstore")
}
fn default_policy() -> StorePolicy {
    StorePolicy::Multiplexed
}
