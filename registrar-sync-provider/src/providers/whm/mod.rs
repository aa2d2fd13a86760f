//! WHM Provider (JSON API, bandwidth usage)

use async_trait::async_trait;
use reqwest::Client;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::providers::common::create_insecure_http_client;
use crate::traits::UsageProvider;
use crate::types::{UsageCredentials, UsageSnapshot};
use crate::utils::log_sanitizer::mask_secret;

/// WHM 默认监听端口
const WHM_PORT: u16 = 2087;
const SHOWBW_PATH: &str = "/json-api/showbw?api.version=1";

/// WHM Provider
///
/// The panel usually serves a self-signed certificate on its IP address,
/// so certificate verification is disabled for this client only.
pub struct WhmProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

/// WHM Provider Builder
pub struct WhmProviderBuilder {
    credentials: UsageCredentials,
    base_url: Option<String>,
}

impl WhmProviderBuilder {
    /// Override `https://{host}:2087` (used by tests against a mock server).
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn build(self) -> Result<WhmProvider> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| format!("https://{}:{WHM_PORT}", self.credentials.host));
        log::debug!(
            "WHM provider at {base_url} (token {})",
            mask_secret(&self.credentials.api_key)
        );
        Ok(WhmProvider {
            client: create_insecure_http_client("whm")?,
            api_key: self.credentials.api_key,
            base_url,
        })
    }
}

impl WhmProvider {
    pub fn new(credentials: UsageCredentials) -> Result<Self> {
        Self::builder(credentials).build()
    }

    #[must_use]
    pub fn builder(credentials: UsageCredentials) -> WhmProviderBuilder {
        WhmProviderBuilder {
            credentials,
            base_url: None,
        }
    }

    async fn fetch(&self) -> Result<UsageSnapshot> {
        let url = format!("{}{SHOWBW_PATH}", self.base_url.trim_end_matches('/'));
        let request = self
            .client
            .get(&url)
            .header("Authorization", format!("WHM root:{}", self.api_key));

        let (status, response_text) =
            HttpUtils::execute_request(request, "whm", "GET", &url).await?;
        HttpUtils::ensure_success(status, &response_text, "whm")?;
        HttpUtils::parse_json(&response_text, "whm")
    }
}

#[async_trait]
impl UsageProvider for WhmProvider {
    async fn fetch_usage(&self) -> Option<UsageSnapshot> {
        match self.fetch().await {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                log::warn!("[whm] Bandwidth usage unavailable: {e}");
                None
            }
        }
    }
}
