//! Connection configuration
//!
//! `HostConnection` is built once at startup, from the process environment
//! (and a `.env` file when present) or from an injected lookup, validated,
//! and then handed to `HttpTransport::new`.
//!
//! | Variable | Default |
//! |---|---|
//! | `FM_USERNAME` | `myFileMakerDatabaseUsername` |
//! | `FM_PASSWORD` | `myFileMakerDatabasePassword` |
//! | `FM_HOST` | `127.0.0.1` |
//! | `FM_DATABASE` | `myFileMakerDatabaseFileName` |
//! | `FM_PROTOCOL` | `http` |
//! | `FM_PORT` | `80` |
//! | `FM_SSLVERIFYPEER` | `true` |
//! | `FM_TIMEOUT_SECS` | `30` |

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use fmxml_core_types::Sensitive;
use thiserror::Error;
use url::Url;

pub const ENV_USERNAME: &str = "FM_USERNAME";
pub const ENV_PASSWORD: &str = "FM_PASSWORD";
pub const ENV_HOST: &str = "FM_HOST";
pub const ENV_DATABASE: &str = "FM_DATABASE";
pub const ENV_PROTOCOL: &str = "FM_PROTOCOL";
pub const ENV_PORT: &str = "FM_PORT";
pub const ENV_SSL_VERIFY_PEER: &str = "FM_SSLVERIFYPEER";
pub const ENV_TIMEOUT_SECS: &str = "FM_TIMEOUT_SECS";

const DEFAULT_USERNAME: &str = "myFileMakerDatabaseUsername";
const DEFAULT_PASSWORD: &str = "myFileMakerDatabasePassword";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_DATABASE: &str = "myFileMakerDatabaseFileName";
const DEFAULT_PORT: u16 = 80;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Path of the result-set grammar on the web publishing engine
pub const FMRESULTSET_PATH: &str = "/fmi/xml/fmresultset.xml";

/// Invalid connection configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: '{value}' ({reason})")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error("{var} must not be empty")]
    Empty { var: &'static str },

    #[error("Cannot build endpoint URL: {message}")]
    Endpoint { message: String },
}

/// URL scheme used to reach the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Protocol {
    #[default]
    Http,
    Https,
}

impl Protocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(Protocol::Http),
            "https" => Ok(Protocol::Https),
            _ => Err("expected 'http' or 'https'".to_string()),
        }
    }
}

/// Everything needed to reach one database on one server
#[derive(Debug, Clone)]
pub struct HostConnection {
    pub hostname: String,
    pub database: String,
    pub username: String,
    pub password: Sensitive<String>,
    pub protocol: Protocol,
    pub port: u16,
    /// Verify the server's TLS certificate
    pub ssl_verify_peer: bool,
    /// Upper bound for one request, connect to last byte
    pub timeout: Duration,
}

impl Default for HostConnection {
    fn default() -> Self {
        Self {
            hostname: DEFAULT_HOST.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            username: DEFAULT_USERNAME.to_string(),
            password: Sensitive::new(DEFAULT_PASSWORD.to_string()),
            protocol: Protocol::Http,
            port: DEFAULT_PORT,
            ssl_verify_peer: true,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl HostConnection {
    /// Read the configuration from the process environment
    ///
    /// A `.env` file in the working directory (or a parent) is loaded first;
    /// variables already set in the environment take precedence over it.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` naming the first invalid variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is not an error
        dotenvy::dotenv().ok();
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the configuration from an arbitrary variable lookup
    ///
    /// Unset variables take their documented defaults.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` naming the first invalid variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let protocol = match lookup(ENV_PROTOCOL) {
            Some(raw) => parse_var(ENV_PROTOCOL, raw)?,
            None => defaults.protocol,
        };
        let port = match lookup(ENV_PORT) {
            Some(raw) => parse_var(ENV_PORT, raw)?,
            None => defaults.port,
        };
        let ssl_verify_peer = match lookup(ENV_SSL_VERIFY_PEER) {
            Some(raw) => parse_flag(ENV_SSL_VERIFY_PEER, raw)?,
            None => defaults.ssl_verify_peer,
        };
        let timeout = match lookup(ENV_TIMEOUT_SECS) {
            Some(raw) => Duration::from_secs(parse_var(ENV_TIMEOUT_SECS, raw)?),
            None => defaults.timeout,
        };

        let connection = Self {
            hostname: lookup(ENV_HOST).unwrap_or(defaults.hostname),
            database: lookup(ENV_DATABASE).unwrap_or(defaults.database),
            username: lookup(ENV_USERNAME).unwrap_or(defaults.username),
            password: lookup(ENV_PASSWORD)
                .map(Sensitive::new)
                .unwrap_or(defaults.password),
            protocol,
            port,
            ssl_verify_peer,
            timeout,
        };
        connection.validate()?;
        Ok(connection)
    }

    /// Check the settings that cannot be enforced by their types
    ///
    /// # Errors
    ///
    /// Empty host or database, port 0, a zero timeout, or a host that does
    /// not form a valid URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hostname.trim().is_empty() {
            return Err(ConfigError::Empty { var: ENV_HOST });
        }
        if self.database.trim().is_empty() {
            return Err(ConfigError::Empty { var: ENV_DATABASE });
        }
        if self.port == 0 {
            return Err(ConfigError::InvalidValue {
                var: ENV_PORT,
                value: "0".to_string(),
                reason: "port must be between 1 and 65535".to_string(),
            });
        }
        if self.timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                var: ENV_TIMEOUT_SECS,
                value: "0".to_string(),
                reason: "timeout must be at least one second".to_string(),
            });
        }
        self.endpoint().map(drop)
    }

    /// The result-set endpoint, `<protocol>://<host>:<port>/fmi/xml/fmresultset.xml`
    ///
    /// A port equal to the protocol's default is omitted from the rendered
    /// URL.
    ///
    /// # Errors
    ///
    /// `ConfigError::Endpoint` if the host does not form a valid URL.
    pub fn endpoint(&self) -> Result<Url, ConfigError> {
        let raw = format!(
            "{}://{}:{}{}",
            self.protocol, self.hostname, self.port, FMRESULTSET_PATH
        );
        Url::parse(&raw).map_err(|e| ConfigError::Endpoint {
            message: format!("{} ({})", e, raw),
        })
    }
}

fn parse_var<T>(var: &'static str, raw: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        var,
        reason: e.to_string(),
        value: raw,
    })
}

fn parse_flag(var: &'static str, raw: String) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var,
            value: raw,
            reason: "expected true or false".to_string(),
        }),
    }
}
