//! HTTP client for the uinames API.
//!
//! One GET per call. The request is validated locally, sent, and a non-2xx
//! status is turned into a [`ClientError`] carrying the status code. Bodies
//! of successful responses are decoded and wrapped without shape checks.

use std::time::Duration;

use reqwest::{Client, Url};
use serde_json::Value;
use tracing::{debug, warn};
use uinames_core::{GenerationRequest, People, Person};

use crate::error::{body_preview, ClientError};

/// Public endpoint of the service.
pub const DEFAULT_BASE_URL: &str = "https://uinames.com/api/";

const DEFAULT_USER_AGENT: &str = concat!("uinames-rs/", env!("CARGO_PKG_VERSION"));

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Endpoint receiving the GET requests
    pub base_url: Url,
    /// Whole-request timeout (transport default when `None`)
    pub timeout: Option<Duration>,
    /// User-Agent header sent with every request
    pub user_agent: String,
    /// Honour proxy settings from the environment (`HTTPS_PROXY`, ...)
    pub system_proxy: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            system_proxy: true,
        }
    }
}

impl ClientConfig {
    /// Create a config for a specific endpoint.
    pub fn with_base_url(base_url: &str) -> Result<Self, ClientError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            ..Default::default()
        })
    }

    /// Read overrides from `UINAMES_BASE_URL`, `UINAMES_TIMEOUT_SECS` and
    /// `UINAMES_SYSTEM_PROXY` (`0`/`false`/`off` disables environment proxies).
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("UINAMES_BASE_URL") {
            config.base_url = parse_base_url(&url)?;
        }

        if let Some(secs) = lookup("UINAMES_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                ClientError::Config(format!(
                    "UINAMES_TIMEOUT_SECS must be a whole number of seconds, got {secs:?}"
                ))
            })?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        if let Some(flag) = lookup("UINAMES_SYSTEM_PROXY") {
            config.system_proxy = match flag.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "on" => true,
                "0" | "false" | "off" => false,
                _ => {
                    return Err(ClientError::Config(format!(
                        "UINAMES_SYSTEM_PROXY must be true or false, got {flag:?}"
                    )))
                }
            };
        }

        Ok(config)
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL must be a valid URL")
}

fn parse_base_url(raw: &str) -> Result<Url, ClientError> {
    let url = Url::parse(raw.trim())
        .map_err(|e| ClientError::Config(format!("invalid base URL {raw:?}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ClientError::Config(format!(
            "base URL must use http or https, got {other}"
        ))),
    }
}

/// Client for the identity generation endpoint.
///
/// Holds no per-call state, so clones can be shared freely across tasks.
#[derive(Debug, Clone)]
pub struct NamesClient {
    http: Client,
    config: ClientConfig,
}

impl NamesClient {
    /// Create a client from the given config.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if !config.system_proxy {
            builder = builder.no_proxy();
        }
        let http = builder.build()?;
        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Client for the public endpoint with transport defaults.
    pub fn default_client() -> Result<Self, ClientError> {
        Self::new(ClientConfig::default())
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Generate one identity.
    ///
    /// `amount` is ignored here; the remaining filters are honoured.
    pub async fn generate_random_identity(
        &self,
        filters: &GenerationRequest,
    ) -> Result<Person, ClientError> {
        let body = self.fetch(&filters.single_query_pairs()).await?;
        let value: Value = serde_json::from_slice(&body)?;
        Ok(Person::wrap_single(value)?)
    }

    /// Generate `request.amount` identities.
    ///
    /// An out-of-range amount fails with [`ClientError::InvalidRequest`]
    /// without touching the network.
    pub async fn generate_random_identities(
        &self,
        request: &GenerationRequest,
    ) -> Result<People, ClientError> {
        request.validate()?;
        let body = self.fetch(&request.query_pairs()).await?;
        let value: Value = serde_json::from_slice(&body)?;
        let people = People::wrap_many(value)?;
        debug!(requested = request.amount, received = people.len(), "identities decoded");
        Ok(people)
    }

    async fn fetch(&self, query: &[(&'static str, String)]) -> Result<Vec<u8>, ClientError> {
        debug!(url = %self.config.base_url, ?query, "requesting identities");

        let response = self
            .http
            .get(self.config.base_url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .query(query)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "response received");

        if !status.is_success() {
            warn!(
                status = status.as_u16(),
                body = %body_preview(&body),
                "identity request failed"
            );
            return Err(ClientError::from_status(status, &body));
        }

        Ok(body.to_vec())
    }
}
