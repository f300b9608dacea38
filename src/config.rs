//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub animation: AnimationConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Counter and progress-bar timing
#[derive(Debug, Clone, Deserialize)]
pub struct AnimationConfig {
    #[serde(default = "default_counter_duration")]
    pub counter_duration_ms: u64,

    #[serde(default = "default_counter_delay")]
    pub counter_delay_ms: u64,

    #[serde(default = "default_recount_duration")]
    pub recount_duration_ms: u64,

    #[serde(default = "default_progress_delay")]
    pub progress_delay_ms: u64,

    #[serde(default = "default_frame_interval")]
    pub frame_interval_ms: u64,
}

fn default_counter_duration() -> u64 {
    2500
}

fn default_counter_delay() -> u64 {
    500
}

fn default_recount_duration() -> u64 {
    2000
}

fn default_progress_delay() -> u64 {
    200
}

fn default_frame_interval() -> u64 {
    16 // ~60fps
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            counter_duration_ms: default_counter_duration(),
            counter_delay_ms: default_counter_delay(),
            recount_duration_ms: default_recount_duration(),
            progress_delay_ms: default_progress_delay(),
            frame_interval_ms: default_frame_interval(),
        }
    }
}

impl AnimationConfig {
    pub fn counter_duration(&self) -> Duration {
        Duration::from_millis(self.counter_duration_ms)
    }

    pub fn counter_delay(&self) -> Duration {
        Duration::from_millis(self.counter_delay_ms)
    }

    /// Count-up replayed when the total value card comes back into view
    pub fn recount_duration(&self) -> Duration {
        Duration::from_millis(self.recount_duration_ms)
    }

    pub fn progress_delay(&self) -> Duration {
        Duration::from_millis(self.progress_delay_ms)
    }

    /// Frame step for simulated frame loops; never zero
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms.max(1))
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    /// Install the global tracing subscriber.
    ///
    /// `RUST_LOG` takes precedence over the configured level.
    pub fn init_tracing(&self) {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| format!("folio={}", self.level).into());

        let registry = tracing_subscriber::registry().with(filter);
        let result = if self.format == "json" {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .try_init()
        } else {
            registry.with(tracing_subscriber::fmt::layer()).try_init()
        };

        if let Err(e) = result {
            eprintln!("Tracing already initialized: {}", e);
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("folio").join("config.toml")),
            Some(PathBuf::from("./folio.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        // Animation overrides
        if let Ok(value) = std::env::var("FOLIO_COUNTER_DURATION_MS") {
            if let Ok(ms) = value.parse() {
                self.animation.counter_duration_ms = ms;
            }
        }
        if let Ok(value) = std::env::var("FOLIO_COUNTER_DELAY_MS") {
            if let Ok(ms) = value.parse() {
                self.animation.counter_delay_ms = ms;
            }
        }

        // Logging overrides
        if let Ok(level) = std::env::var("FOLIO_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("FOLIO_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Folio Configuration
#
# Environment variables override these settings:
# - FOLIO_COUNTER_DURATION_MS
# - FOLIO_COUNTER_DELAY_MS
# - FOLIO_LOG_LEVEL
# - FOLIO_LOG_FORMAT

[animation]
# How long the total-value counter takes to count up (ms)
counter_duration_ms = 2500

# Pause between the total value scrolling into view and the count starting (ms)
counter_delay_ms = 500

# Count-up replayed when the total value card scrolls back into view (ms)
recount_duration_ms = 2000

# Pause before a goal's progress bar grows back to its width (ms)
progress_delay_ms = 200

# Frame step used when simulating the page outside a browser (ms)
frame_interval_ms = 16

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
