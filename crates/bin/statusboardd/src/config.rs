//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `statusboard.toml` in the working directory, or the file named by
//! `STATUSBOARD_CONFIG`. The file is optional and environment variables take
//! precedence over file values. The store location, the reporter password and
//! the session signing secret have no defaults: startup fails without them.

use serde::Deserialize;

/// Default config file, relative to the working directory.
pub const DEFAULT_PATH: &str = "statusboard.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Database settings.
    pub database: DatabaseConfig,
    /// Reporter login and session settings.
    pub reporter: ReporterConfig,
    /// Public dashboard settings.
    pub dashboard: DashboardConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// `SQLite` database configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `SQLite` connection URL (e.g. `sqlite:statusboard.db?mode=rwc`).
    pub url: Option<String>,
}

/// Shared-password gate and session cookie settings.
#[derive(Deserialize)]
#[serde(default)]
pub struct ReporterConfig {
    /// The single password granting the reporter role.
    pub password: Option<String>,
    /// Secret used to sign session cookies.
    pub session_secret: Option<String>,
    /// Session lifetime after login.
    pub session_ttl_minutes: u32,
    /// Mark the session cookie `Secure` (HTTPS deployments).
    pub secure_cookie: bool,
}

/// Public dashboard settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Seconds between two polls of `/api/status` by the dashboard page.
    pub poll_seconds: u32,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Settings that have been checked and are ready to wire in.
pub struct Resolved<'a> {
    pub database_url: &'a str,
    pub reporter_password: &'a str,
    pub session_secret: &'a str,
}

impl Config {
    /// Load configuration from the config file (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is incomplete or invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("STATUSBOARD_CONFIG").unwrap_or_else(|_| DEFAULT_PATH.to_string());
        let mut config = Self::from_file(&path)?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("STATUSBOARD_HOST") {
            self.server.host = val;
        }
        if let Some(port) = var("STATUSBOARD_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = var("STATUSBOARD_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Some(val) = var("DATABASE_URL") {
            self.database.url = Some(val);
        }
        if let Some(val) = var("STATUSBOARD_DATABASE_URL") {
            self.database.url = Some(val);
        }
        if let Some(val) = var("STATUSBOARD_REPORTER_PASSWORD") {
            self.reporter.password = Some(val);
        }
        if let Some(val) = var("STATUSBOARD_SESSION_SECRET") {
            self.reporter.session_secret = Some(val);
        }
        if let Some(ttl) = var("STATUSBOARD_SESSION_TTL_MINUTES").and_then(|val| val.parse().ok()) {
            self.reporter.session_ttl_minutes = ttl;
        }
        if let Some(secure) = var("STATUSBOARD_SECURE_COOKIE").and_then(|val| val.parse().ok()) {
            self.reporter.secure_cookie = secure;
        }
        if let Some(poll) = var("STATUSBOARD_POLL_SECONDS").and_then(|val| val.parse().ok()) {
            self.dashboard.poll_seconds = poll;
        }
        if let Some(val) = var("STATUSBOARD_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.resolve()?;
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.reporter.session_ttl_minutes == 0 {
            return Err(ConfigError::Validation(
                "session_ttl_minutes must be non-zero".to_string(),
            ));
        }
        if self.dashboard.poll_seconds == 0 {
            return Err(ConfigError::Validation(
                "poll_seconds must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Extract the required settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] naming the first required value that
    /// is unset or blank.
    pub fn resolve(&self) -> Result<Resolved<'_>, ConfigError> {
        Ok(Resolved {
            database_url: required(self.database.url.as_deref(), "database.url")?,
            reporter_password: required(self.reporter.password.as_deref(), "reporter.password")?,
            session_secret: required(
                self.reporter.session_secret.as_deref(),
                "reporter.session_secret",
            )?,
        })
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Session lifetime as a duration.
    #[must_use]
    pub fn session_ttl(&self) -> chrono::Duration {
        chrono::Duration::minutes(i64::from(self.reporter.session_ttl_minutes))
    }
}

fn required<'a>(value: Option<&'a str>, name: &'static str) -> Result<&'a str, ConfigError> {
    value
        .filter(|val| !val.trim().is_empty())
        .ok_or(ConfigError::Missing(name))
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            password: None,
            session_secret: None,
            session_ttl_minutes: 12 * 60,
            secure_cookie: false,
        }
    }
}

impl std::fmt::Debug for ReporterConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redact = |value: &Option<String>| value.as_ref().map(|_| "<redacted>");
        f.debug_struct("ReporterConfig")
            .field("password", &redact(&self.password))
            .field("session_secret", &redact(&self.session_secret))
            .field("session_ttl_minutes", &self.session_ttl_minutes)
            .field("secure_cookie", &self.secure_cookie)
            .finish()
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self { poll_seconds: 10 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "statusboardd=info,statusboard=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// A required value is not set.
    #[error("missing required setting `{0}`")]
    Missing(&'static str),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
