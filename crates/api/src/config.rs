use pagila_core::filter::DEFAULT_FILM_QUERY_BUCKETS;
use pagila_db::services::DataAccessConfig;

/// A configuration variable that is set but cannot be used.
#[derive(Debug, thiserror::Error)]
#[error("Invalid value for {var}: '{value}' ({reason})")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: String,
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Which data-access strategy backs the services.
    pub data_access: DataAccessConfig,
    /// Apply the bundled schema migrations on startup (default: `false`).
    pub apply_schema: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                 |
    /// |------------------------|-------------------------|
    /// | `HOST`                 | `0.0.0.0`               |
    /// | `PORT`                 | `8080`                  |
    /// | `CORS_ORIGINS`         | `http://localhost:8080` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                    |
    /// | `USE_SQL_BUILDER`      | `false`                 |
    /// | `FILM_QUERY_BUCKETS`   | `4`                     |
    /// | `APPLY_SCHEMA`         | `false`                 |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port = parse_var(&lookup, "PORT", 8080u16)?;

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:8080".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = parse_var(&lookup, "REQUEST_TIMEOUT_SECS", 30u64)?;

        let use_sql_builder = parse_bool(&lookup, "USE_SQL_BUILDER")?;
        let film_query_buckets =
            parse_var(&lookup, "FILM_QUERY_BUCKETS", DEFAULT_FILM_QUERY_BUCKETS)?;
        if film_query_buckets == 0 {
            return Err(ConfigError {
                var: "FILM_QUERY_BUCKETS",
                value: "0".into(),
                reason: "must be at least 1".into(),
            });
        }

        let apply_schema = parse_bool(&lookup, "APPLY_SCHEMA")?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            data_access: DataAccessConfig {
                use_sql_builder,
                film_query_buckets,
            },
            apply_schema,
        })
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError {
            var,
            reason: e.to_string(),
            value,
        }),
    }
}

fn parse_bool(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<bool, ConfigError> {
    match lookup(var).as_deref().map(str::trim) {
        None | Some("") => Ok(false),
        Some(v) if v.eq_ignore_ascii_case("true") || v == "1" => Ok(true),
        Some(v) if v.eq_ignore_ascii_case("false") || v == "0" => Ok(false),
        Some(v) => Err(ConfigError {
            var,
            value: v.to_string(),
            reason: "expected true or false".into(),
        }),
    }
}
