//! Registrar Sync web service
//!
//! Actix-Web platform layer for `registrar-sync-core`:
//! configuration, logging, HTTP adapters, bearer auth, routes and the
//! periodic sync loop. `main.rs` only wires these together.

pub mod adapters;
pub mod config;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod routes;
pub mod scheduler;
pub mod state;

use std::sync::Arc;

use registrar_sync_core::ServiceContext;
use registrar_sync_core::services::{DnsHostService, SyncService, TokenVerifier};
use registrar_sync_provider::{create_registrar, create_usage_provider};

use adapters::{HttpLedgerClient, JwksKeyResolver};
use config::AppConfig;
use state::AppState;

/// Build adapters and services from configuration.
pub fn build_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let registrar = create_registrar(config.registrar_credentials())?;
    let usage_provider = create_usage_provider(config.usage_credentials())?;
    let ledger = Arc::new(HttpLedgerClient::new(
        config.server_api_url.clone(),
        config.server_api_token.clone(),
    )?);
    let resolver = Arc::new(JwksKeyResolver::new(config.certs_api_url.clone())?);

    let ctx = Arc::new(ServiceContext::new(registrar, usage_provider, ledger));

    Ok(AppState {
        sync: Arc::new(SyncService::new(Arc::clone(&ctx), config.sync_settings())),
        dns: Arc::new(DnsHostService::new(ctx)),
        verifier: Arc::new(TokenVerifier::new(resolver)),
    })
}
