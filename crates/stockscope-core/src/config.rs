//! Proxy configuration, resolved once at startup.
//!
//! Values come from the process environment. The provider credential is the
//! only required entry; the proxy must not start without it.

use std::fmt::{Debug, Formatter};
use std::path::PathBuf;
use std::str::FromStr;

use crate::adapters::polygon::POLYGON_BASE_URL;
use crate::data_source::{DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT};
use crate::http_client::DEFAULT_TIMEOUT_MS;
use crate::ConfigError;

pub const API_KEY_VARS: [&str; 2] = ["STOCKSCOPE_POLYGON_API_KEY", "POLYGON_API_KEY"];
pub const PROVIDER_BASE_URL_VAR: &str = "STOCKSCOPE_PROVIDER_BASE_URL";
pub const HOST_VAR: &str = "HOST";
pub const PORT_VAR: &str = "PORT";
pub const TIMEOUT_VAR: &str = "STOCKSCOPE_TIMEOUT_MS";
pub const SEARCH_LIMIT_VAR: &str = "STOCKSCOPE_SEARCH_LIMIT";
pub const CORS_ORIGIN_VAR: &str = "STOCKSCOPE_CORS_ORIGIN";
pub const STATIC_DIR_VAR: &str = "STOCKSCOPE_STATIC_DIR";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3001;

/// Provider credential. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl Debug for ApiKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    pub api_key: ApiKey,
    pub provider_base_url: String,
    pub host: String,
    pub port: u16,
    pub timeout_ms: u64,
    pub search_limit: u32,
    /// Allowed browser origin; `None` allows any.
    pub cors_origin: Option<String>,
    /// Directory of a prebuilt UI served for non-API paths.
    pub static_dir: Option<PathBuf>,
}

impl ProxyConfig {
    /// Configuration with defaults for everything but the credential.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: ApiKey::new(api_key),
            provider_base_url: String::from(POLYGON_BASE_URL),
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            search_limit: DEFAULT_SEARCH_LIMIT,
            cors_origin: None,
            static_dir: None,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let api_key = API_KEY_VARS
            .iter()
            .find_map(|name| get(*name))
            .ok_or_else(|| ConfigError::MissingCredential {
                vars: API_KEY_VARS.to_vec(),
            })?;

        let mut config = Self::new(api_key);
        if let Some(base_url) = get(PROVIDER_BASE_URL_VAR) {
            if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
                return Err(ConfigError::InvalidValue {
                    var: PROVIDER_BASE_URL_VAR,
                    value: base_url,
                    reason: String::from("expected an http(s) URL"),
                });
            }
            config.provider_base_url = base_url.trim_end_matches('/').to_owned();
        }
        if let Some(host) = get(HOST_VAR) {
            config.host = host;
        }
        if let Some(port) = get(PORT_VAR) {
            config.port = parse_var(PORT_VAR, &port)?;
        }
        if let Some(timeout) = get(TIMEOUT_VAR) {
            config.timeout_ms = parse_var(TIMEOUT_VAR, &timeout)?;
        }
        if let Some(limit) = get(SEARCH_LIMIT_VAR) {
            let limit: u32 = parse_var(SEARCH_LIMIT_VAR, &limit)?;
            if limit == 0 || limit > MAX_SEARCH_LIMIT {
                return Err(ConfigError::InvalidValue {
                    var: SEARCH_LIMIT_VAR,
                    value: limit.to_string(),
                    reason: format!("must be between 1 and {MAX_SEARCH_LIMIT}"),
                });
            }
            config.search_limit = limit;
        }
        config.cors_origin = get(CORS_ORIGIN_VAR);
        config.static_dir = get(STATIC_DIR_VAR).map(PathBuf::from);

        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T>(var: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|error: T::Err| ConfigError::InvalidValue {
        var,
        value: value.to_owned(),
        reason: error.to_string(),
    })
}
