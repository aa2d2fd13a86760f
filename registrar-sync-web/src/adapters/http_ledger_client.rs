//! Accounting server client

use async_trait::async_trait;
use registrar_sync_core::types::{AccountPayload, DomainBatchPayload, TeamPayload};
use registrar_sync_core::{CoreError, CoreResult, LedgerClient};
use registrar_sync_provider::log_sanitizer::truncate_for_log;
use serde::Serialize;
use serde_json::Value;

use super::build_client;

const TEAM_PATH: &str = "/api/team/update-team";
const ACCOUNT_PATH: &str = "/api/team/update-account";
const DOMAINS_PATH: &str = "/api/domains/array";

/// `LedgerClient` over HTTP: JSON `POST`s with a bearer token, one attempt each.
pub struct HttpLedgerClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl HttpLedgerClient {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> CoreResult<Self> {
        let client = build_client().map_err(|e| CoreError::NetworkError(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    async fn post<T: Serialize + Sync>(&self, path: &str, payload: &T) -> CoreResult<String> {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!("POST {path}");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(payload)
            .send()
            .await
            .map_err(|e| CoreError::NetworkError(format!("POST {path}: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CoreError::NetworkError(format!("POST {path}: {e}")))?;

        if !status.is_success() {
            tracing::warn!("POST {path} returned HTTP {}", status.as_u16());
            return Err(CoreError::NetworkError(format!(
                "HTTP {}: {}",
                status.as_u16(),
                truncate_for_log(&body)
            )));
        }
        Ok(body)
    }

    fn parse(path: &str, body: &str) -> CoreResult<Value> {
        serde_json::from_str(body)
            .map_err(|e| CoreError::SerializationError(format!("POST {path}: {e}")))
    }
}

#[async_trait]
impl LedgerClient for HttpLedgerClient {
    async fn upsert_team(&self, payload: &TeamPayload) -> CoreResult<Value> {
        let body = self.post(TEAM_PATH, payload).await?;
        Self::parse(TEAM_PATH, &body)
    }

    async fn upsert_account(&self, payload: &AccountPayload) -> CoreResult<Value> {
        let body = self.post(ACCOUNT_PATH, payload).await?;
        Self::parse(ACCOUNT_PATH, &body)
    }

    async fn insert_domains(&self, payload: &DomainBatchPayload) -> CoreResult<()> {
        self.post(DOMAINS_PATH, payload).await?;
        Ok(())
    }
}
