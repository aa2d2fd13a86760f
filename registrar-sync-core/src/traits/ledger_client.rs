//! Downstream accounting server abstraction

use async_trait::async_trait;
use serde_json::Value;

use crate::error::CoreResult;
use crate::types::{AccountPayload, DomainBatchPayload, TeamPayload};

/// Downstream accounting server Trait
///
/// Platform implementation:
/// - Actix-Web: `HttpLedgerClient` (reqwest, bearer token)
///
/// Implementations send exactly one request per call and never retry.
/// Transport failures and non-2xx statuses are errors.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Create or update the team; returns the response body (expected to carry `teamId`).
    async fn upsert_team(&self, payload: &TeamPayload) -> CoreResult<Value>;

    /// Create or update the account; returns the response body (expected to carry `accountId`).
    async fn upsert_account(&self, payload: &AccountPayload) -> CoreResult<Value>;

    /// Insert the domain batch for an account.
    async fn insert_domains(&self, payload: &DomainBatchPayload) -> CoreResult<()>;
}
