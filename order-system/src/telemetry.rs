use serde::{Deserialize, Serialize};
use tracing::metadata::LevelFilter;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    filter::Directive, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

/// Logging configuration.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct TelemetryConfig {
    #[serde(default = "default_enabled")]
    pub enable: bool,
    /// Global level.
    #[serde(default)]
    pub max_level: LoggingLevel,
    /// Extra `EnvFilter` directives, e.g. `service_order=debug`.
    #[serde(default)]
    pub level_filter: String,
    /// Variable read for directives when `level_filter` is empty, `RUST_LOG` by default.
    #[serde(default)]
    pub level_filter_env: String,
    #[serde(default)]
    pub console: ConsoleConfig,
    #[serde(default)]
    pub file: FileConfig,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enable: default_enabled(),
            max_level: Default::default(),
            level_filter: Default::default(),
            level_filter_env: Default::default(),
            console: Default::default(),
            file: Default::default(),
        }
    }
}

#[derive(Default, Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoggingLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
    Off,
}

impl From<LoggingLevel> for LevelFilter {
    fn from(val: LoggingLevel) -> Self {
        match val {
            LoggingLevel::Error => LevelFilter::ERROR,
            LoggingLevel::Warn => LevelFilter::WARN,
            LoggingLevel::Info => LevelFilter::INFO,
            LoggingLevel::Debug => LevelFilter::DEBUG,
            LoggingLevel::Trace => LevelFilter::TRACE,
            LoggingLevel::Off => LevelFilter::OFF,
        }
    }
}

impl From<LoggingLevel> for Directive {
    fn from(val: LoggingLevel) -> Self {
        let level: LevelFilter = val.into();
        level.into()
    }
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct ConsoleConfig {
    #[serde(default = "default_enabled")]
    pub enable: bool,
    /// Prints file, line, thread and target with every event.
    #[serde(default)]
    pub enable_debug_logging: bool,
    #[serde(default)]
    pub max_level: LoggingLevel,
    #[serde(default)]
    pub level_filter: String,
    #[serde(default)]
    pub level_filter_env: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            enable: default_enabled(),
            enable_debug_logging: Default::default(),
            max_level: Default::default(),
            level_filter: Default::default(),
            level_filter_env: Default::default(),
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct FileConfig {
    #[serde(default)]
    pub enable: bool,
    #[serde(default)]
    pub enable_debug_logging: bool,
    #[serde(default)]
    pub max_level: LoggingLevel,
    #[serde(default)]
    pub level_filter: String,
    #[serde(default)]
    pub level_filter_env: String,
    /// Log directory.
    #[serde(default = "default_path")]
    pub path: String,
    /// File name, or prefix when rolling.
    #[serde(default = "default_filename")]
    pub prefix: String,
    #[serde(default)]
    pub rolling_time: RotationLevel,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            enable: Default::default(),
            enable_debug_logging: Default::default(),
            max_level: Default::default(),
            level_filter: Default::default(),
            level_filter_env: Default::default(),
            path: default_path(),
            prefix: default_filename(),
            rolling_time: Default::default(),
        }
    }
}

#[derive(Default, Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotationLevel {
    Daily,
    Hourly,
    Minutely,
    #[default]
    Never,
}

impl From<RotationLevel> for Rotation {
    fn from(val: RotationLevel) -> Self {
        match val {
            RotationLevel::Daily => Rotation::DAILY,
            RotationLevel::Hourly => Rotation::HOURLY,
            RotationLevel::Minutely => Rotation::MINUTELY,
            RotationLevel::Never => Rotation::NEVER,
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_path() -> String {
    "./logs".to_string()
}

fn default_filename() -> String {
    "order-system.log".to_string()
}

fn env_filter(max_level: LoggingLevel, directives: &str, env: &str) -> EnvFilter {
    let mut builder = EnvFilter::builder().with_default_directive(max_level.into());
    if !env.is_empty() {
        builder = builder.with_env_var(env);
    }
    if directives.is_empty() {
        builder.from_env_lossy()
    } else {
        builder.parse_lossy(directives)
    }
}

/// Installs the global subscriber. Fails if one is already set.
pub fn initialize_telemetry(config: &TelemetryConfig) -> anyhow::Result<()> {
    if !config.enable {
        return Ok(());
    }
    let filter = env_filter(config.max_level, &config.level_filter, &config.level_filter_env);
    let console = {
        let config = &config.console;
        config.enable.then(|| {
            let debug = config.enable_debug_logging;
            tracing_subscriber::fmt::layer()
                .with_file(debug)
                .with_line_number(debug)
                .with_thread_ids(debug)
                .with_target(debug)
                .with_filter(env_filter(
                    config.max_level,
                    &config.level_filter,
                    &config.level_filter_env,
                ))
        })
    };
    let file = {
        let config = &config.file;
        config.enable.then(|| {
            let debug = config.enable_debug_logging;
            let appender =
                RollingFileAppender::new(config.rolling_time.into(), &config.path, &config.prefix);
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(appender)
                .with_file(debug)
                .with_line_number(debug)
                .with_thread_ids(debug)
                .with_target(debug)
                .with_filter(env_filter(
                    config.max_level,
                    &config.level_filter,
                    &config.level_filter_env,
                ))
        })
    };
    Registry::default().with(filter).with(console).with(file).try_init()?;
    Ok(())
}
