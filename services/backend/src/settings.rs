// settings
use std::env;
use std::net::{Ipv4Addr, SocketAddr};
use thiserror::Error;
use tracing::Level;
use url::Url;

/// Public instance of the music catalog the relay forwards to
pub const DEFAULT_UPSTREAM_URL: &str = "https://saavn.sumit.co";
const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Dev,
    Prod,
}

impl Mode {
    /// Default verbosity; `RUST_LOG` directives still apply on top.
    pub fn log_level(self) -> Level {
        match self {
            Mode::Dev => Level::DEBUG,
            Mode::Prod => Level::INFO,
        }
    }
}

const KEYS: [&str; 4] = ["MODE", "PORT", "BACKEND_URL", "UPSTREAM_URL"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT `{0}`")]
    InvalidPort(String),
    #[error("invalid UPSTREAM_URL `{url}`: {source}")]
    InvalidUpstreamUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("UPSTREAM_URL `{0}` must use http or https")]
    UnsupportedScheme(String),
}

/// Immutable runtime configuration, built once at startup and handed to `build_app`.
#[derive(Debug, Clone)]
pub struct Settings {
    pub mode: Mode,
    pub port: u16,
    pub backend_url: String,
    pub upstream: Url,
    /// Keys that were set in the environment. Values are never kept here.
    pub configured: Vec<&'static str>,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup so tests don't have to touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mode = match lookup("MODE") {
            Some(mode) if mode.to_lowercase() == "prod" => Mode::Prod,
            _ => Mode::Dev,
        };

        let port = match lookup("PORT").filter(|p| !p.is_empty()) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        let backend_url = match (mode, lookup("BACKEND_URL")) {
            (_, Some(url)) => url,
            (Mode::Dev, None) => format!("http://localhost:{}", port),
            (Mode::Prod, None) => String::new(),
        };

        let upstream = parse_upstream(
            &lookup("UPSTREAM_URL")
                .filter(|u| !u.is_empty())
                .unwrap_or_else(|| DEFAULT_UPSTREAM_URL.to_string()),
        )?;

        let configured = KEYS.into_iter().filter(|key| lookup(key).is_some()).collect();

        Ok(Settings {
            mode,
            port,
            backend_url,
            upstream,
            configured,
        })
    }

    pub fn upstream_url(&self) -> &str {
        self.upstream.as_str().trim_end_matches('/')
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }

    /// Settings pointing at an arbitrary upstream, used by tests and embedders.
    pub fn with_upstream(upstream_url: &str) -> Result<Self, ConfigError> {
        Ok(Settings {
            mode: Mode::Dev,
            port: DEFAULT_PORT,
            backend_url: format!("http://localhost:{}", DEFAULT_PORT),
            upstream: parse_upstream(upstream_url)?,
            configured: Vec::new(),
        })
    }
}

fn parse_upstream(raw: &str) -> Result<Url, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed = Url::parse(trimmed).map_err(|source| ConfigError::InvalidUpstreamUrl {
        url: raw.to_string(),
        source,
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedScheme(raw.to_string()));
    }
    Ok(parsed)
}
