use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgConnectOptions;
use std::path::PathBuf;

/// Application configuration managed by Figment.
///
/// Sources, lowest to highest precedence: struct defaults, process
/// environment, `config.toml` when present. The file wins over the
/// environment so a deployment can pin values regardless of what the shell
/// carries.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Database name. Env: `DATABASE_NAME`. Required.
    #[serde(default)]
    pub database_name: String,

    /// Database role. Env: `DATABASE_USER`. Required.
    #[serde(default)]
    pub database_user: String,

    /// Database password. Env: `DATABASE_PASSWORD`. May be empty for
    /// trust-authenticated local setups.
    #[serde(default)]
    pub database_password: String,

    /// Database server host. Env: `DATABASE_HOST`. Required.
    #[serde(default)]
    pub database_host: String,

    /// Database server port. Env: `DATABASE_PORT`. Default: `5432`.
    #[serde(default = "default_database_port")]
    pub database_port: u16,

    /// HTTP listen port. Env: `HTTP_PORT`. Default: `8080`.
    #[serde(default = "default_http_port")]
    pub http_port: u16,

    /// Log level for tracing subscriber initialization (e.g. "info",
    /// "debug"). Env: `LOGLEVEL`. Default: `info`.
    #[serde(default = "default_loglevel")]
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_name: String::new(),
            database_user: String::new(),
            database_password: String::new(),
            database_host: String::new(),
            database_port: default_database_port(),
            http_port: default_http_port(),
            loglevel: default_loglevel(),
        }
    }
}

const DEFAULT_CONFIG_FILE: &str = "config.toml";

const ENV_KEYS: [&str; 7] = [
    "database_name",
    "database_user",
    "database_password",
    "database_host",
    "database_port",
    "http_port",
    "loglevel",
];

impl Config {
    /// Builds a Figment merging defaults, the environment, and the config
    /// TOML file when one exists.
    pub fn figment() -> Figment {
        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Env::raw().only(&ENV_KEYS));
        if PathBuf::from(DEFAULT_CONFIG_FILE).is_file() {
            figment.merge(Toml::file(DEFAULT_CONFIG_FILE))
        } else {
            figment
        }
    }

    /// Loads configuration and validates the fields the service cannot run
    /// without. Callers treat an error here as fatal.
    pub fn load() -> Result<Self, figment::Error> {
        let cfg: Self = Self::figment().extract()?;
        for (field, value) in [
            ("database_name", &cfg.database_name),
            ("database_user", &cfg.database_user),
            ("database_host", &cfg.database_host),
        ] {
            if value.trim().is_empty() {
                return Err(figment::Error::from(format!(
                    "{field} must be set via the environment or {DEFAULT_CONFIG_FILE}"
                )));
            }
        }
        Ok(cfg)
    }

    /// Connection options for the configured Postgres server.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.database_host)
            .port(self.database_port)
            .username(&self.database_user)
            .password(&self.database_password)
            .database(&self.database_name)
    }
}

fn default_database_port() -> u16 {
    5432
}

fn default_http_port() -> u16 {
    8080
}

fn default_loglevel() -> String {
    "info".to_string()
}
