// RUNTIME PREFERENCES (User Experience)

use super::compile_time::reader::{DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE, MIN_CHUNK_SIZE};
use crate::logging::LogLevel;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Read a typed value from the environment, falling back to `default`
fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Errors raised while loading a runtime configuration file
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read configuration file '{}': {message}", .path.display())]
    Io { path: PathBuf, message: String },

    #[error("Invalid configuration in '{}': {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Invalid configuration value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub fn error_code(&self) -> crate::logging::Code {
        use crate::logging::codes;
        match self {
            ConfigError::Io { .. } => codes::config::CONFIG_UNREADABLE,
            ConfigError::Parse { .. } => codes::config::CONFIG_INVALID,
            ConfigError::Invalid { .. } => codes::config::CONFIG_INVALID,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderPreferences {
    /// Preferred chunk size for buffered file reads, clamped to compile-time bounds
    pub chunk_size: usize,
}

impl Default for ReaderPreferences {
    fn default() -> Self {
        Self {
            chunk_size: env_or(env_vars::READER_CHUNK_SIZE, DEFAULT_CHUNK_SIZE),
        }
    }
}

impl ReaderPreferences {
    /// Chunk size actually used by `FileReader`
    pub fn effective_chunk_size(&self) -> usize {
        self.chunk_size.clamp(MIN_CHUNK_SIZE, MAX_CHUNK_SIZE)
    }
}

/// What happens to the delimiter that ends generic error recovery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryDelimiter {
    /// Consume the delimiter without adding it to the UNKNOWN lexeme
    #[default]
    Drop,
    /// Append the delimiter to the UNKNOWN lexeme
    Include,
}

impl RecoveryDelimiter {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecoveryDelimiter::Drop => "drop",
            RecoveryDelimiter::Include => "include",
        }
    }
}

impl FromStr for RecoveryDelimiter {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "drop" => Ok(RecoveryDelimiter::Drop),
            "include" => Ok(RecoveryDelimiter::Include),
            other => Err(ConfigError::Invalid {
                field: "recovery_delimiter",
                reason: format!("expected 'drop' or 'include', found '{}'", other),
            }),
        }
    }
}

impl fmt::Display for RecoveryDelimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LexicalPreferences {
    /// Delimiter handling when recovery resynchronizes on whitespace or a quote
    pub recovery_delimiter: RecoveryDelimiter,

    /// Whether each UNKNOWN token is reported through the global logger
    pub log_lexical_errors: bool,

    /// Whether to collect per-category token counts during the scan
    pub collect_detailed_metrics: bool,
}

impl Default for LexicalPreferences {
    fn default() -> Self {
        Self {
            recovery_delimiter: env_or(
                env_vars::LEXICAL_RECOVERY_DELIMITER,
                RecoveryDelimiter::Drop,
            ),
            log_lexical_errors: env_or(env_vars::LEXICAL_LOG_ERRORS, true),
            collect_detailed_metrics: env_or(env_vars::LEXICAL_DETAILED_METRICS, true),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingPreferences {
    /// Whether to use structured JSON logging
    pub use_structured_logging: bool,

    /// Whether to enable console output
    pub enable_console_logging: bool,

    /// Minimum level that reaches the configured logger
    pub min_log_level: LogLevel,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            use_structured_logging: env_or(env_vars::LOGGING_USE_STRUCTURED, false),
            enable_console_logging: env_or(env_vars::LOGGING_ENABLE_CONSOLE, true),
            min_log_level: env::var(env_vars::LOGGING_MIN_LEVEL)
                .ok()
                .and_then(|v| parse_log_level(&v))
                .unwrap_or(LogLevel::Warning),
        }
    }
}

/// Parse log level from string (used for environment variables)
pub fn parse_log_level(level: &str) -> Option<LogLevel> {
    match level.trim().to_lowercase().as_str() {
        "error" | "0" => Some(LogLevel::Error),
        "warning" | "warn" | "1" => Some(LogLevel::Warning),
        "info" | "2" => Some(LogLevel::Info),
        "debug" | "3" => Some(LogLevel::Debug),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub reader: ReaderPreferences,
    pub lexical: LexicalPreferences,
    pub logging: LoggingPreferences,
}

impl RuntimeConfig {
    /// Parse a runtime configuration document; missing keys fall back to defaults
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        let config: RuntimeConfig = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load a runtime configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content, path)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reader.chunk_size == 0 {
            return Err(ConfigError::Invalid {
                field: "reader.chunk_size",
                reason: "chunk size must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Environment variable names for configuration
pub mod env_vars {
    // Reader
    pub const READER_CHUNK_SIZE: &str = "LETT_READER_CHUNK_SIZE";

    // Lexical
    pub const LEXICAL_RECOVERY_DELIMITER: &str = "LETT_LEXICAL_RECOVERY_DELIMITER";
    pub const LEXICAL_LOG_ERRORS: &str = "LETT_LEXICAL_LOG_ERRORS";
    pub const LEXICAL_DETAILED_METRICS: &str = "LETT_LEXICAL_DETAILED_METRICS";

    // Logging
    pub const LOGGING_USE_STRUCTURED: &str = "LETT_LOGGING_USE_STRUCTURED";
    pub const LOGGING_ENABLE_CONSOLE: &str = "LETT_LOGGING_ENABLE_CONSOLE";
    pub const LOGGING_MIN_LEVEL: &str = "LETT_LOGGING_MIN_LEVEL";
}
