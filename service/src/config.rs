use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_aux::prelude::deserialize_vec_from_string_or_vec;

/// Application configuration loaded from multiple sources.
///
/// Configuration is loaded in priority order (lowest to highest):
/// 1. Struct defaults
/// 2. config.yaml file (if exists)
/// 3. Environment variables with PS_ prefix (always wins)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// HTTP server bind address.
    #[serde(default = "default_host")]
    pub host: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level filter (debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataConfig {
    /// Directory holding the dataset files (politicians.json,
    /// parties.json, comments.json). Relative paths resolve against
    /// the server's working directory.
    #[serde(default = "default_data_dir")]
    pub dir: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    /// Allowed origins for CORS requests.
    /// Use `"*"` to allow any origin (not recommended for production).
    /// Accepts either an array or comma-separated string.
    /// Example: `["http://localhost:5173"]` or `"http://localhost:5173,https://app.example.com"`
    #[serde(
        default = "default_allowed_origins",
        deserialize_with = "deserialize_origins"
    )]
    pub allowed_origins: Vec<String>,
}

/// Deserialize origins from comma-separated string or array, filtering empty values.
fn deserialize_origins<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let origins: Vec<String> = deserialize_vec_from_string_or_vec(deserializer)?;
    Ok(origins.into_iter().filter(|s| !s.is_empty()).collect())
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SwaggerConfig {
    /// Enable Swagger UI at /swagger-ui.
    /// Default: false (disabled for security - exposes API documentation).
    /// Enable in development via `PS_SWAGGER__ENABLED=true`
    #[serde(default)]
    pub enabled: bool,
}

// These functions cannot be const because serde uses function pointers for defaults
#[allow(clippy::missing_const_for_fn)]
fn default_port() -> u16 {
    8080
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_data_dir() -> String {
    "data".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_allowed_origins() -> Vec<String> {
    // Default to empty (no cross-origin requests allowed) - safe for production
    // Configure explicitly via PS_CORS__ALLOWED_ORIGINS or config.yaml
    vec![]
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                port: default_port(),
                host: default_host(),
            },
            logging: LoggingConfig {
                level: default_log_level(),
            },
            cors: CorsConfig::default(),
            data: DataConfig::default(),
            swagger: SwaggerConfig::default(),
        }
    }
}

/// Configuration loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Figment(#[from] Box<figment::Error>),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Sources are merged in priority order:
    /// 1. Struct defaults (lowest)
    /// 2. config.yaml file (if exists)
    /// 3. Environment variables with PS_ prefix (highest)
    ///
    /// # Errors
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Yaml::file("config.yaml"))
            .merge(Env::prefixed("PS_").split("__"))
            .extract()?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with a custom YAML file path.
    ///
    /// # Errors
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load_from(yaml_path: &str) -> Result<Self, ConfigError> {
        let config: Self = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Yaml::file(yaml_path))
            .merge(Env::prefixed("PS_").split("__"))
            .extract()?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    /// Returns an error if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Port must be non-zero
        if self.server.port == 0 {
            return Err(ConfigError::Validation("server.port cannot be 0".into()));
        }

        // Data directory is required
        if self.data.dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "data.dir cannot be empty. Set PS_DATA__DIR environment variable or configure in config.yaml.".into(),
            ));
        }

        // CORS origins must be valid URLs or "*"
        for origin in &self.cors.allowed_origins {
            if origin != "*" && !origin.starts_with("http://") && !origin.starts_with("https://") {
                return Err(ConfigError::Validation(format!(
                    "cors.allowed_origins contains invalid origin '{origin}'. Must be '*' or start with http:// or https://"
                )));
            }
        }

        Ok(())
    }
}
