use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{Config, DatabaseSettings, LoggingSettings, ServerSettings};

/// Prefix of the environment variables that override file settings,
/// e.g. `FYYUR__SERVER__PORT=8080`.
const ENV_PREFIX: &str = "FYYUR";

/// Loads the application configuration from the `config.toml` file.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(Path::new("config.toml"))
}

/// Loads the configuration from `path`, layering environment overrides on top.
///
/// The file is optional. `DATABASE_URL`, when set, wins over `database.url`.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
        .build()?;

    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    tracing::debug!(path = %path.display(), "Configuration loaded.");
    Ok(config)
}

/// Parses a configuration from TOML text without consulting the environment.
pub fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    let config = config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()?
        .try_deserialize::<Config>()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.database.url, "sqlite://fyyur.db");
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.logging.filter, "info");
        assert!(config.logging.log_dir.is_none());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = parse_config(
            r#"
            [server]
            port = 8080

            [database]
            url = "sqlite::memory:"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.socket_addr().unwrap().port(), 8080);
        assert_eq!(config.database.url, "sqlite::memory:");
        assert_eq!(config.database.acquire_timeout_secs, 5);
    }

    #[test]
    fn rejects_zero_connections() {
        let err = parse_config("[database]\nmax_connections = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn rejects_non_ip_host() {
        let err = parse_config("[server]\nhost = \"not a host\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let config = load_config_from(Path::new("does-not-exist.toml")).unwrap();
        assert!(config.server.port > 0);
    }
}
