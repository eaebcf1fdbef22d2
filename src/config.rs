use std::{
    env,
    net::IpAddr,
    path::{Path, PathBuf},
    str::FromStr,
};

use crate::errors::ConfigError;
use crate::validations::validate_url;

// Server-specific configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub workers: usize,
    /// Largest accepted body on the create endpoint
    pub max_body_bytes: usize,
}

// Application-specific configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub name: String,
    pub version: String,
    pub environment: Environment,
    pub log_level: String,
    /// Prefix of every short link handed back to clients
    pub base_url: String,
}

// Environment enum for different deployment environments
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Testing,
    Production,
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "testing" | "test" => Ok(Environment::Testing),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(format!(
                "Invalid environment: {}. Must be one of: development, testing, production",
                s
            )),
        }
    }
}

/// Outcome of looking for a `.env` file.
///
/// Returned instead of logged: the file is read before the configuration
/// that decides the log level, so nothing is listening yet.
#[derive(Debug, PartialEq)]
pub enum EnvFile {
    Loaded(PathBuf),
    Missing(String),
}

/// Loads the given env file, or `.env` from the working directory or its parents
pub fn load_env_file(path: Option<&Path>) -> EnvFile {
    let loaded = match path {
        Some(path) => dotenvy::from_path(path).map(|_| path.to_path_buf()),
        None => dotenvy::dotenv(),
    };

    match loaded {
        Ok(path) => EnvFile::Loaded(path),
        Err(e) => EnvFile::Missing(e.to_string()),
    }
}

// Result type for configuration functions
type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub app: AppConfig,
}

impl Config {
    // Load configuration from environment variables, see `load_env_file` for `.env`
    pub fn load() -> ConfigResult<Self> {
        let server = ServerConfig {
            host: get_env_or_default("SERVER_HOST", "127.0.0.1")?,
            port: get_env_or_default("SERVER_PORT", "8080")?,
            workers: get_env_or_default("SERVER_WORKERS", "4")?,
            max_body_bytes: get_env_or_default("MAX_BODY_BYTES", "65536")?,
        };

        let app = AppConfig {
            name: get_env_or_default("APP_NAME", "shortener")?,
            version: env::var("APP_VERSION").unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string()),
            environment: get_env_or_default("APP_ENVIRONMENT", "development")?,
            log_level: get_env_or_default("RUST_LOG", "info")?,
            base_url: get_env_or_default("BASE_URL", "http://localhost:8080")?,
        };

        let config = Config { app, server };
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> ConfigResult<()> {
        if let Err(e) = validate_url(&self.app.base_url) {
            return Err(ConfigError::InvalidValue {
                key: "BASE_URL".to_string(),
                reason: e.message.map(|m| m.into_owned()).unwrap_or_default(),
            });
        }

        if self.server.workers == 0 {
            return Err(ConfigError::InvalidValue {
                key: "SERVER_WORKERS".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}

/// Helper function to get an env variable with a default value
fn get_env_or_default<T: FromStr>(key: &str, default: &str) -> ConfigResult<T>
where
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| ConfigError::ParseError(format!("Could not parse {}: {}", key, e))),
        Err(env::VarError::NotPresent) => {
            default.parse::<T>().map_err(|e| {
                ConfigError::ParseError(format!("Could not parse default for {}: {}", key, e))
            })
        }
        Err(e) => Err(ConfigError::EnvVarError(e)),
    }
}

#[cfg(test)]
impl Config {
    /// Configuration with the built-in defaults, without touching the environment
    pub fn for_tests() -> Self {
        Config {
            server: ServerConfig {
                host: IpAddr::from([127, 0, 0, 1]),
                port: 8080,
                workers: 1,
                max_body_bytes: 65536,
            },
            app: AppConfig {
                name: "shortener".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                environment: Environment::Testing,
                log_level: "debug".to_string(),
                base_url: "http://localhost:8080".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_str() {
        assert_eq!("dev".parse::<Environment>(), Ok(Environment::Development));
        assert_eq!("Testing".parse::<Environment>(), Ok(Environment::Testing));
        assert_eq!("PROD".parse::<Environment>(), Ok(Environment::Production));
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn test_get_env_or_default() {
        let port: u16 = get_env_or_default("SHORTENER_TEST_UNSET_PORT", "8080").unwrap();
        assert_eq!(port, 8080);

        env::set_var("SHORTENER_TEST_SET_PORT", "9090");
        let port: u16 = get_env_or_default("SHORTENER_TEST_SET_PORT", "8080").unwrap();
        assert_eq!(port, 9090);

        env::set_var("SHORTENER_TEST_BAD_PORT", "eighty");
        let result: ConfigResult<u16> = get_env_or_default("SHORTENER_TEST_BAD_PORT", "8080");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_missing_env_file_is_reported() {
        let outcome = load_env_file(Some(Path::new("/nonexistent/shortener/.env")));
        assert!(matches!(outcome, EnvFile::Missing(_)));
    }

    #[test]
    fn test_load_reads_environment() {
        env::set_var("BASE_URL", "https://sho.rt");
        env::set_var("MAX_BODY_BYTES", "1024");

        let config = Config::load().unwrap();
        assert_eq!(config.app.base_url, "https://sho.rt");
        assert_eq!(config.server.max_body_bytes, 1024);

        env::set_var("BASE_URL", "https:sho.rt");
        assert!(matches!(
            Config::load(),
            Err(ConfigError::InvalidValue { ref key, .. }) if key == "BASE_URL"
        ));

        env::remove_var("BASE_URL");
        env::remove_var("MAX_BODY_BYTES");
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let mut config = Config::for_tests();
        assert!(config.validate().is_ok());

        config.app.base_url = "ftp://files.example".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { ref key, .. }) if key == "BASE_URL"
        ));
    }

    #[test]
    fn test_validate_rejects_zero_workers() {
        let mut config = Config::for_tests();
        config.server.workers = 0;
        assert!(config.validate().is_err());
    }
}
