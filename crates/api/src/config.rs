use crate::auth::jwt::JwtConfig;
use crate::mailer::MailerConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry durations).
    pub jwt: JwtConfig,
    /// Object storage configuration. When absent the server falls back to
    /// the in-memory store, which only makes sense for local development.
    pub storage: Option<StorageConfig>,
    /// SMTP configuration for feedback responses. When absent the respond
    /// endpoint reports the mailer as unconfigured.
    pub smtp: Option<MailerConfig>,
}

/// S3 object storage settings.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Bucket that holds uploaded objects.
    pub bucket: String,
    /// Base URL objects are publicly served from (bucket endpoint or CDN).
    pub public_base_url: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                    |
    /// |---------------------------|----------------------------|
    /// | `HOST`                    | `0.0.0.0`                  |
    /// | `PORT`                    | `3000`                     |
    /// | `CORS_ORIGINS`            | `http://localhost:3001`    |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                       |
    /// | `STORAGE_BUCKET`          | (unset: in-memory storage) |
    /// | `STORAGE_PUBLIC_BASE_URL` | (unset: in-memory storage) |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3001".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let storage = match (
            std::env::var("STORAGE_BUCKET"),
            std::env::var("STORAGE_PUBLIC_BASE_URL"),
        ) {
            (Ok(bucket), Ok(public_base_url)) => Some(StorageConfig {
                bucket,
                public_base_url,
            }),
            _ => None,
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt: JwtConfig::from_env(),
            storage,
            smtp: MailerConfig::from_env(),
        }
    }
}
