use std::{path::PathBuf, str::FromStr};

use serde::Deserialize;
use serde_with::serde_as;
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use strum::{Display, EnumString};

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    /// When absent, users are kept in memory for the lifetime of the process.
    pub database: Option<DatabaseSettings>,
    pub profile_api: ProfileApiSettings,
    pub avatars: AvatarSettings,
    #[serde(default)]
    pub events: EventSettings,
}

#[serde_as]
#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub port: u16,
    pub host: String,
    pub app_url: String,
}

#[serde_as]
#[derive(Deserialize, Clone, Debug)]
pub struct DatabaseSettings {
    pub username: String,
    pub password: String,
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub port: u16,
    pub host: String,
    pub database_name: String,
    pub require_ssl: bool,
}

impl DatabaseSettings {
    pub fn without_db(&self) -> PgConnectOptions {
        let ssl_mode = if self.require_ssl {
            PgSslMode::Require
        } else {
            PgSslMode::Prefer
        };

        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .password(&self.password)
            .ssl_mode(ssl_mode)
    }

    pub fn with_db(&self) -> PgConnectOptions {
        self.without_db().database(&self.database_name)
    }
}

#[serde_as]
#[derive(Deserialize, Clone, Debug)]
pub struct ProfileApiSettings {
    pub base_url: String,
    pub api_key: Option<String>,
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub timeout_secs: u64,
}

#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CacheMode {
    /// Remember only the most recent download and serve it for every URL.
    #[default]
    SingleSlot,
    /// Cache downloads per avatar URL.
    PerUrl,
}

#[serde_as]
#[derive(Deserialize, Clone, Debug)]
pub struct AvatarSettings {
    pub directory: PathBuf,
    #[serde(default)]
    pub cache_mode: CacheMode,
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: u64,
    #[serde_as(as = "Option<serde_with::DisplayFromStr>")]
    pub max_size_bytes: Option<u64>,
}

fn default_cache_capacity() -> u64 {
    1_000
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct EventSettings {
    pub webhook_url: Option<String>,
}

pub fn read_config() -> Result<Settings, config::ConfigError> {
    let base_path =
        std::env::current_dir().map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;
    read_config_from(base_path.join("config"))
}

pub fn read_config_from(config_directory: PathBuf) -> Result<Settings, config::ConfigError> {
    let environment = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "local".into());
    let environment = Environment::from_str(&environment).map_err(|_| {
        config::ConfigError::Message(format!("Failed to parse APP_ENVIRONMENT '{environment}'"))
    })?;
    let environment_filename = format!("{}.yaml", environment);

    let settings = config::Config::builder()
        .add_source(config::File::from(config_directory.join("base.yaml")))
        .add_source(config::File::from(config_directory.join(environment_filename)).required(false))
        .add_source(
            config::Environment::with_prefix("USERS")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

#[derive(Display, Debug, EnumString, PartialEq, Eq)]
pub enum Environment {
    #[strum(ascii_case_insensitive, serialize = "local")]
    Local,
    #[strum(ascii_case_insensitive, serialize = "production")]
    Production,
}
