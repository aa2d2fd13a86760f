//! 集成测试公共工具
#![allow(dead_code, unused_macros)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, encode};
use registrar_sync_core::services::{DnsHostService, SyncService, TokenVerifier};
use registrar_sync_core::types::{
    AccountPayload, DomainBatchPayload, RunMode, SyncSettings, TeamPayload,
};
use registrar_sync_core::{CoreResult, KeyResolver, LedgerClient, ServiceContext};
use registrar_sync_provider::{
    BalanceSnapshot, DomainPage, DomainRecord, HostRecord, HostRecordInput, RegistrarProvider,
    SetHostsResult, UsageProvider, UsageSnapshot,
};
use registrar_sync_web::config::{AppConfig, FileConfig};
use registrar_sync_web::state::AppState;
use serde_json::{Value, json};

pub const SIGNING_KEY_PEM: &[u8] = include_bytes!("../fixtures/signing_key.pem");

/// JWK components of `fixtures/signing_key.pem`
pub const SIGNING_KEY_N: &str = "ywOQvtDlfzJulYnNQPf8oAWzin-5AF7qxJ0J2C0apALT9DgS-D7yqQYch1O2Uv8PchTbhnzu-zwTVqIH_fLlI6X3UbakI1OO_9H_bqepfIN1HMtddzIKfFBRKpwgsvRTtZrgASA3aWGktAAUfpO4-jrGVb0-jvGPXYexTBPRVJdtWmxHsMI5kxuOF390xnVRSm9jvd7CpwrB7SucfouVPi7z88GRFB_iYzN_8DdB64iFG5uOWvnf3kPE-wooPv1i8-yckl2zstjmYFcZ8-a1aHASOssa2ZY6BeV4j6GDbY3y4PTKVx4N5fKXRjD5dgEj8XpLQrco9Mw69Osto9h75w";
pub const SIGNING_KEY_E: &str = "AQAB";
pub const KID: &str = "key-2024";

/// Build the app under test with the auth middleware and all routes.
macro_rules! test_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($state))
                .wrap(actix_web::middleware::from_fn(
                    registrar_sync_web::middleware::require_bearer,
                ))
                .configure(registrar_sync_web::routes::configure),
        )
        .await
    };
}

pub fn sign_token(kid: &str) -> String {
    let mut header = Header::new(Algorithm::RS256);
    header.kid = Some(kid.to_string());
    let key = match EncodingKey::from_rsa_pem(SIGNING_KEY_PEM) {
        Ok(key) => key,
        Err(e) => panic!("invalid test key: {e}"),
    };
    let claims = json!({
        "sub": "operator",
        "exp": chrono::Utc::now().timestamp() + 600,
    });
    match encode(&header, &claims, &key) {
        Ok(token) => token,
        Err(e) => panic!("failed to sign token: {e}"),
    }
}

pub fn bearer(kid: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", sign_token(kid)))
}

// ============ Stubs ============

pub struct StaticKeyResolver;

#[async_trait]
impl KeyResolver for StaticKeyResolver {
    async fn resolve(&self, kid: &str) -> Option<DecodingKey> {
        (kid == KID)
            .then(|| DecodingKey::from_rsa_components(SIGNING_KEY_N, SIGNING_KEY_E).ok())
            .flatten()
    }
}

/// One-page registrar with a single domain and two host records.
pub struct StubRegistrar;

#[async_trait]
impl RegistrarProvider for StubRegistrar {
    async fn list_domains_page(
        &self,
        page: u32,
        _page_size: u32,
    ) -> registrar_sync_provider::Result<DomainPage> {
        let domains = if page == 1 {
            vec![DomainRecord {
                name: "example.com".to_string(),
                auto_renew: true,
                created_date: None,
                expires_date: None,
                is_expired: false,
                is_locked: false,
                is_managed_dns: true,
                owner_user: "acme".to_string(),
            }]
        } else {
            Vec::new()
        };
        Ok(DomainPage {
            page,
            total_items: Some(1),
            domains,
        })
    }

    async fn get_balances(&self) -> registrar_sync_provider::Result<BalanceSnapshot> {
        Ok(BalanceSnapshot {
            currency: "USD".to_string(),
            available_balance: 12.5,
            account_balance: 12.5,
            earned_amount: 0.0,
            withdrawable_amount: 0.0,
            funds_required_for_auto_renew: 8.88,
        })
    }

    async fn get_hosts(
        &self,
        _sld: &str,
        _tld: &str,
    ) -> registrar_sync_provider::Result<Vec<HostRecord>> {
        Ok(vec![
            HostRecord {
                name: "@".to_string(),
                record_type: "A".to_string(),
                address: "203.0.113.10".to_string(),
                mx_pref: None,
                ttl: Some(1800),
                is_active: true,
            },
            HostRecord {
                name: "www".to_string(),
                record_type: "CNAME".to_string(),
                address: "example.com.".to_string(),
                mx_pref: None,
                ttl: Some(1800),
                is_active: true,
            },
        ])
    }

    async fn set_hosts(
        &self,
        sld: &str,
        tld: &str,
        _records: &[HostRecordInput],
    ) -> registrar_sync_provider::Result<SetHostsResult> {
        Ok(SetHostsResult {
            domain: format!("{sld}.{tld}"),
            success: true,
        })
    }
}

pub struct StubUsage;

#[async_trait]
impl UsageProvider for StubUsage {
    async fn fetch_usage(&self) -> Option<UsageSnapshot> {
        Some(json!({ "bandwidth": [] }))
    }
}

/// Counts ledger calls and answers with fixed IDs.
#[derive(Default)]
pub struct RecordingLedger {
    pub teams: AtomicUsize,
    pub accounts: AtomicUsize,
    pub batches: AtomicUsize,
}

impl RecordingLedger {
    pub fn total(&self) -> usize {
        self.teams.load(Ordering::SeqCst)
            + self.accounts.load(Ordering::SeqCst)
            + self.batches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LedgerClient for RecordingLedger {
    async fn upsert_team(&self, _payload: &TeamPayload) -> CoreResult<Value> {
        self.teams.fetch_add(1, Ordering::SeqCst);
        Ok(json!({ "teamId": 7 }))
    }

    async fn upsert_account(&self, _payload: &AccountPayload) -> CoreResult<Value> {
        self.accounts.fetch_add(1, Ordering::SeqCst);
        Ok(json!({ "accountId": "acc-42" }))
    }

    async fn insert_domains(&self, _payload: &DomainBatchPayload) -> CoreResult<()> {
        self.batches.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

pub fn settings(mode: RunMode) -> SyncSettings {
    SyncSettings {
        team_name: "Ops".to_string(),
        server_name: "web-01".to_string(),
        client_ip: "203.0.113.10".to_string(),
        mode,
    }
}

/// Stub-backed state; the ledger is returned for call assertions.
pub fn state(mode: RunMode) -> (AppState, Arc<RecordingLedger>) {
    let ledger = Arc::new(RecordingLedger::default());
    let ctx = Arc::new(ServiceContext::new(
        Arc::new(StubRegistrar),
        Arc::new(StubUsage),
        ledger.clone(),
    ));
    let state = AppState {
        sync: Arc::new(SyncService::new(Arc::clone(&ctx), settings(mode))),
        dns: Arc::new(DnsHostService::new(ctx)),
        verifier: Arc::new(TokenVerifier::new(Arc::new(StaticKeyResolver))),
    };
    (state, ledger)
}

/// Minimal valid configuration with extra `(key, value)` overrides.
pub fn config(extra: &[(&str, &str)]) -> AppConfig {
    let mut pairs = vec![
        ("NAME", "web-01"),
        ("CLIENT_IP", "203.0.113.10"),
        ("SERVER_API_URL", "https://ledger.example.com"),
        ("SERVER_API_TOKEN", "ledger-token"),
        ("TEAM", "Ops"),
        ("CERTS_API_URL", "https://auth.example.com/certs"),
        ("API_USER", "acme"),
        ("API_KEY", "nc-key"),
        ("WHM_API_KEY", "whm-key"),
    ];
    pairs.extend_from_slice(extra);
    let lookup = |key: &str| {
        pairs
            .iter()
            .rev()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| (*v).to_string())
    };
    match AppConfig::resolve(FileConfig::default(), lookup) {
        Ok(config) => config,
        Err(e) => panic!("invalid test config: {e}"),
    }
}
