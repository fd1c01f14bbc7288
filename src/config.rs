use std::env;
use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value {value:?} for environment variable {key}")]
    Invalid { key: &'static str, value: String },
}

/// Process configuration, read once at startup and passed down to the
/// components that need it.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub app_name: String,
    pub environment: String,
    pub debug: bool,

    // Declared for the planned auth flow; nothing consumes these yet.
    pub jwt_secret_key: String,
    pub jwt_algorithm: String,
    pub access_token_expire_minutes: u64,
    pub refresh_token_expire_days: u64,

    pub postgres_user: String,
    pub postgres_password: String,
    pub postgres_db: String,
    pub postgres_host: String,
    pub postgres_port: u16,

    pub redis_host: String,
    pub redis_port: u16,

    pub log_level: String,

    pub server_host: String,
    pub server_port: u16,
}

impl Settings {
    /// Reads settings from the process environment, loading a `.env` file
    /// first if one is present. Fails with the name of the first missing or
    /// unparseable variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_vars(env::vars())
    }

    /// Builds settings from an explicit set of variables. Variable names are
    /// matched case-insensitively.
    pub fn from_vars(
        vars: impl Iterator<Item = (String, String)>,
    ) -> Result<Self, ConfigError> {
        let vars = EnvVars(vars.collect());

        Ok(Settings {
            app_name: vars.required("APP_NAME")?,
            environment: vars.required("ENVIRONMENT")?,
            debug: vars.parsed_bool("DEBUG", false)?,
            jwt_secret_key: vars.required("JWT_SECRET_KEY")?,
            jwt_algorithm: vars.or_default("JWT_ALGORITHM", "HS256"),
            access_token_expire_minutes: vars.parsed("ACCESS_TOKEN_EXPIRE_MINUTES", 30)?,
            refresh_token_expire_days: vars.parsed("REFRESH_TOKEN_EXPIRE_DAYS", 7)?,
            postgres_user: vars.required("POSTGRES_USER")?,
            postgres_password: vars.required("POSTGRES_PASSWORD")?,
            postgres_db: vars.required("POSTGRES_DB")?,
            postgres_host: vars.required("POSTGRES_HOST")?,
            postgres_port: vars.parsed("POSTGRES_PORT", 5432)?,
            redis_host: vars.required("REDIS_HOST")?,
            redis_port: vars.parsed("REDIS_PORT", 6379)?,
            log_level: vars.or_default("LOG_LEVEL", "INFO"),
            server_host: vars.or_default("SERVER_HOST", "0.0.0.0"),
            server_port: vars.parsed("SERVER_PORT", 8000)?,
        })
    }

    /// Connection URI for the relational database.
    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.postgres_user,
            self.postgres_password,
            self.postgres_host,
            self.postgres_port,
            self.postgres_db
        )
    }

    /// Connection URI for the cache server.
    pub fn redis_url(&self) -> String {
        format!("redis://{}:{}", self.redis_host, self.redis_port)
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

struct EnvVars(Vec<(String, String)>);

impl EnvVars {
    fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .map(|(_, value)| value.as_str())
    }

    fn required(&self, key: &'static str) -> Result<String, ConfigError> {
        self.get(key)
            .map(str::to_string)
            .ok_or(ConfigError::Missing(key))
    }

    fn or_default(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or(default).to_string()
    }

    fn parsed<T: FromStr>(&self, key: &'static str, default: T) -> Result<T, ConfigError> {
        match self.get(key) {
            None => Ok(default),
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                key,
                value: raw.to_string(),
            }),
        }
    }

    fn parsed_bool(&self, key: &'static str, default: bool) -> Result<bool, ConfigError> {
        match self.get(key) {
            None => Ok(default),
            Some(raw) => match raw.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::Invalid {
                    key,
                    value: raw.to_string(),
                }),
            },
        }
    }
}
