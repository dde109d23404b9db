//! # Settings — layered server configuration
//!
//! Sources, later ones winning:
//!
//! 1. built-in defaults (local Postgres, `127.0.0.1:8080`),
//! 2. an optional `config.toml` in the working directory,
//! 3. environment variables prefixed with `YANOTE`, sections separated by `__`
//!    (`YANOTE__DATABASE__HOST=db`, `YANOTE__SESSION__SECURE=true`).
//!
//! `.env` files are loaded into the environment first via `dotenvy`.

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Database {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database: String,
    pub max_connections: u32,
}

impl Database {
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.database
        )
    }
}

impl Default for Database {
    fn default() -> Self {
        Self {
            user: "yanote".into(),
            password: "password".into(),
            host: "localhost".into(),
            port: 5432,
            database: "yanote".into(),
            max_connections: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

impl Server {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Server {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8080,
        }
    }
}

/// Session cookie settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Session {
    /// Send the cookie over HTTPS only.
    pub secure: bool,
    /// Inactivity timeout in days.
    pub expiry_days: i64,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            secure: false,
            expiry_days: 7,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct Settings {
    pub database: Database,
    pub server: Server,
    pub session: Session,
}

impl Settings {
    /// Load settings from defaults, `config.toml` and the environment.
    pub fn new() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::builder()?
            .add_source(
                File::with_name("config.toml")
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Environment::with_prefix("YANOTE").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Defaults overlaid with a TOML document only.
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        Self::builder()?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        let defaults = Settings::default();
        Config::builder()
            .set_default("database.user", defaults.database.user)?
            .set_default("database.password", defaults.database.password)?
            .set_default("database.host", defaults.database.host)?
            .set_default("database.port", i64::from(defaults.database.port))?
            .set_default("database.database", defaults.database.database)?
            .set_default(
                "database.max_connections",
                i64::from(defaults.database.max_connections),
            )?
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("session.secure", defaults.session.secure)?
            .set_default("session.expiry_days", defaults.session.expiry_days)
    }
}
