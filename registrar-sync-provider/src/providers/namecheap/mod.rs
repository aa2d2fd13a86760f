//! Namecheap Provider (XML API)

mod error;
mod http;
mod provider;
mod types;

use reqwest::Client;

use crate::error::Result;
use crate::providers::common::create_http_client;
use crate::types::RegistrarCredentials;
use crate::utils::log_sanitizer::mask_secret;

pub(crate) use types::{ApiEnvelope, CommandResponse, RawDomain, RawHost};

pub(crate) const NAMECHEAP_API_BASE: &str = "https://api.namecheap.com/xml.response";
/// Namecheap 列表接口单页最大记录数
pub const MAX_PAGE_SIZE: u32 = 100;

/// Namecheap Provider
pub struct NamecheapProvider {
    pub(crate) client: Client,
    pub(crate) credentials: RegistrarCredentials,
    pub(crate) base_url: String,
}

/// Namecheap Provider Builder
pub struct NamecheapProviderBuilder {
    credentials: RegistrarCredentials,
    base_url: String,
}

impl NamecheapProviderBuilder {
    fn new(credentials: RegistrarCredentials) -> Self {
        Self {
            credentials,
            base_url: NAMECHEAP_API_BASE.to_string(),
        }
    }

    /// Override the API endpoint (sandbox or a local mock server).
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn build(self) -> Result<NamecheapProvider> {
        log::debug!(
            "Namecheap provider for user {} (key {}, client ip {})",
            self.credentials.api_user,
            mask_secret(&self.credentials.api_key),
            self.credentials.client_ip
        );
        Ok(NamecheapProvider {
            client: create_http_client("namecheap")?,
            credentials: self.credentials,
            base_url: self.base_url,
        })
    }
}

impl NamecheapProvider {
    pub fn new(credentials: RegistrarCredentials) -> Result<Self> {
        Self::builder(credentials).build()
    }

    #[must_use]
    pub fn builder(credentials: RegistrarCredentials) -> NamecheapProviderBuilder {
        NamecheapProviderBuilder::new(credentials)
    }
}
