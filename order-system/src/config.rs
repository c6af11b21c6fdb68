use std::path::Path;

use domain_order::model::{entity::Personnel, vo::Actor};
use serde::Deserialize;

use crate::telemetry::TelemetryConfig;

pub const CONFIG_FILE: &str = "config";
pub const CONFIG_ENV_PREFIX: &str = "REPAIR";
pub const CONFIG_ENV_SEPARATOR: &str = "__";

#[derive(Default, Clone, Deserialize, Debug)]
pub struct SystemConfig {
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    #[serde(default)]
    pub blob: BlobConfig,
    /// Principals known to the static identity provider.
    #[serde(default)]
    pub principals: Vec<Actor>,
    /// Crew roster seeded into the personnel repository.
    #[serde(default)]
    pub personnel: Vec<Personnel>,
}

/// Where documentation blobs are written.
#[derive(Default, Clone, Deserialize, Debug, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BlobConfig {
    #[default]
    Memory,
    Fs {
        #[serde(default = "BlobConfig::default_root")]
        root: String,
    },
}

impl BlobConfig {
    fn default_root() -> String {
        "./blobs".to_string()
    }
}

impl SystemConfig {
    /// Reads `config.yaml` from the working directory, any `*.yaml`/`*.yml`
    /// path passed on the command line, then `REPAIR__*` environment variables.
    pub fn load() -> anyhow::Result<Self> {
        let args = std::env::args().filter(|el| el.ends_with("yaml") || el.ends_with("yml"));
        Self::from_config(build_config(args)?)
    }

    pub fn from_config(config: config::Config) -> anyhow::Result<Self> {
        Ok(config.try_deserialize::<Self>()?)
    }
}

pub fn build_config(
    files: impl IntoIterator<Item = impl AsRef<Path>>,
) -> anyhow::Result<config::Config> {
    let mut config = config::Config::builder().add_source(
        config::File::with_name(CONFIG_FILE)
            .required(false)
            .format(config::FileFormat::Yaml),
    );
    for file in files {
        config = config.add_source(
            config::File::from(file.as_ref())
                .format(config::FileFormat::Yaml)
                .required(false),
        );
    }
    config = config.add_source(
        config::Environment::with_prefix(CONFIG_ENV_PREFIX)
            .separator(CONFIG_ENV_SEPARATOR)
            .try_parsing(true),
    );
    Ok(config.build()?)
}
