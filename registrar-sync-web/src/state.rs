//! Shared application state

use std::sync::Arc;

use registrar_sync_core::services::{DnsHostService, SyncService, TokenVerifier};

/// Handed to every worker as `web::Data<AppState>`.
#[derive(Clone)]
pub struct AppState {
    pub sync: Arc<SyncService>,
    pub dns: Arc<DnsHostService>,
    pub verifier: Arc<TokenVerifier>,
}
