//! 远程公钥集解析器
//!
//! Keys are fetched from the configured key-set URL on the first lookup of an
//! unknown `kid` and cached for the life of the process. Refetches are spaced
//! at least [`MIN_REFETCH_INTERVAL`] apart, so unknown key IDs cannot force one
//! outbound request per inbound request. A fetch failure is reported as
//! "not found" so the request is rejected with a 401.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use jsonwebtoken::DecodingKey;
use registrar_sync_core::{CoreError, CoreResult, KeyResolver};
use serde::Deserialize;
use tokio::sync::{Mutex, RwLock};
use tokio::time::Instant;

use super::build_client;

/// 两次拉取公钥集的最小间隔
pub const MIN_REFETCH_INTERVAL: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct KeySet {
    #[serde(default)]
    keys: Vec<RawJwk>,
}

#[derive(Debug, Deserialize)]
struct RawJwk {
    #[serde(default)]
    kty: Option<String>,
    #[serde(default)]
    kid: Option<String>,
    #[serde(default)]
    n: Option<String>,
    #[serde(default)]
    e: Option<String>,
}

pub struct JwksKeyResolver {
    client: reqwest::Client,
    url: String,
    min_refetch_interval: Duration,
    cache: RwLock<HashMap<String, DecodingKey>>,
    last_fetch: Mutex<Option<Instant>>,
}

impl JwksKeyResolver {
    pub fn new(url: impl Into<String>) -> CoreResult<Self> {
        let client = build_client().map_err(|e| CoreError::NetworkError(e.to_string()))?;
        Ok(Self {
            client,
            url: url.into(),
            min_refetch_interval: MIN_REFETCH_INTERVAL,
            cache: RwLock::new(HashMap::new()),
            last_fetch: Mutex::new(None),
        })
    }

    #[must_use]
    pub fn with_min_refetch_interval(mut self, interval: Duration) -> Self {
        self.min_refetch_interval = interval;
        self
    }

    /// Claim the next fetch slot; `false` while the last fetch is too recent.
    async fn claim_fetch(&self) -> bool {
        let mut last = self.last_fetch.lock().await;
        if last.is_some_and(|at| at.elapsed() < self.min_refetch_interval) {
            return false;
        }
        *last = Some(Instant::now());
        true
    }

    async fn fetch(&self) -> CoreResult<HashMap<String, DecodingKey>> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| CoreError::NetworkError(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(CoreError::NetworkError(format!(
                "HTTP {} from key set",
                status.as_u16()
            )));
        }
        let set: KeySet = response
            .json()
            .await
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;

        let mut keys = HashMap::new();
        for jwk in set.keys {
            let (Some(kid), Some(n), Some(e)) = (jwk.kid, jwk.n, jwk.e) else {
                continue;
            };
            if jwk.kty.as_deref() != Some("RSA") {
                continue;
            }
            match DecodingKey::from_rsa_components(&n, &e) {
                Ok(key) => {
                    keys.insert(kid, key);
                }
                Err(err) => tracing::warn!("Skipping key {kid}: {err}"),
            }
        }
        Ok(keys)
    }
}

#[async_trait]
impl KeyResolver for JwksKeyResolver {
    async fn resolve(&self, kid: &str) -> Option<DecodingKey> {
        if let Some(key) = self.cache.read().await.get(kid) {
            return Some(key.clone());
        }

        if !self.claim_fetch().await {
            tracing::debug!("Unknown kid {kid}; key set fetched recently, not refetching");
            return self.cache.read().await.get(kid).cloned();
        }

        let fetched = match self.fetch().await {
            Ok(keys) => keys,
            Err(e) => {
                tracing::warn!("Failed to fetch signing keys: {e}");
                return None;
            }
        };
        tracing::debug!("Fetched {} signing keys", fetched.len());

        let mut cache = self.cache.write().await;
        cache.extend(fetched);
        cache.get(kid).cloned()
    }
}
