use lyceum_core::secret::WriteSecret;

/// Error raised while reading [`ServerConfig`] from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} must be a valid {expected}, got '{value}'")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// The database URL and the write secret are required; everything else has
/// a default suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// MongoDB connection string.
    pub database_url: String,
    /// Database holding the `teachers` and `courses` collections (default: `lyceum`).
    pub database_name: String,
    /// Shared secret required in the `auth` field of every write.
    pub write_secret: WriteSecret,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default    |
    /// |------------------------|------------|
    /// | `HOST`                 | `0.0.0.0`  |
    /// | `PORT`                 | `8080`     |
    /// | `DATABASE_URL`         | required   |
    /// | `DATABASE_NAME`        | `lyceum`   |
    /// | `WRITE_SECRET`         | required   |
    /// | `REQUEST_TIMEOUT_SECS` | `30`       |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| lookup(name).ok_or(ConfigError::Missing(name));

        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or(&lookup, "PORT", "port number", 8080u16)?;
        let database_url = required("DATABASE_URL")?;
        let database_name = lookup("DATABASE_NAME").unwrap_or_else(|| "lyceum".into());
        let write_secret = WriteSecret::new(required("WRITE_SECRET")?);
        let request_timeout_secs =
            parse_or(&lookup, "REQUEST_TIMEOUT_SECS", "number of seconds", 30u64)?;

        Ok(Self {
            host,
            port,
            database_url,
            database_name,
            write_secret,
            request_timeout_secs,
        })
    }
}

fn parse_or<F, T>(
    lookup: &F,
    name: &'static str,
    expected: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            name,
            expected,
            value,
        }),
        None => Ok(default),
    }
}
