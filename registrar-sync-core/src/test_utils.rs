//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use registrar_sync_provider::{
    BalanceSnapshot, DomainPage, DomainRecord, HostRecord, HostRecordInput, ProviderError,
    RegistrarProvider, SetHostsResult, UsageProvider, UsageSnapshot,
};
use serde_json::{json, Value};
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::traits::LedgerClient;
use crate::types::{AccountPayload, DomainBatchPayload, RunMode, SyncSettings, TeamPayload};

pub fn domain(name: &str) -> DomainRecord {
    DomainRecord {
        name: name.to_string(),
        auto_renew: true,
        created_date: chrono::NaiveDate::from_ymd_opt(2024, 3, 4),
        expires_date: chrono::NaiveDate::from_ymd_opt(2026, 3, 4),
        is_expired: false,
        is_locked: false,
        is_managed_dns: true,
        owner_user: "acme".to_string(),
    }
}

pub fn balances() -> BalanceSnapshot {
    BalanceSnapshot {
        currency: "USD".to_string(),
        available_balance: 120.5,
        account_balance: 130.0,
        earned_amount: 0.0,
        withdrawable_amount: 0.0,
        funds_required_for_auto_renew: 18.25,
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

pub fn missing_container(container: &str) -> ProviderError {
    ProviderError::MissingContainer {
        provider: "namecheap".to_string(),
        container: container.to_string(),
    }
}

// ===== MockRegistrar =====

/// 按页返回 `d{n}.com` 的 mock 注册商
pub struct MockRegistrar {
    total_items: Option<u32>,
    /// 覆盖某页的 `TotalItems`
    total_overrides: RwLock<HashMap<u32, Option<u32>>>,
    page_errors: RwLock<HashMap<u32, ProviderError>>,
    balance_error: RwLock<Option<ProviderError>>,
    requested_pages: RwLock<Vec<u32>>,
    hosts: RwLock<Vec<HostRecord>>,
    set_hosts_calls: RwLock<Vec<(String, String, Vec<HostRecordInput>)>>,
}

impl MockRegistrar {
    pub fn new(total_items: Option<u32>) -> Self {
        Self {
            total_items,
            total_overrides: RwLock::new(HashMap::new()),
            page_errors: RwLock::new(HashMap::new()),
            balance_error: RwLock::new(None),
            requested_pages: RwLock::new(Vec::new()),
            hosts: RwLock::new(Vec::new()),
            set_hosts_calls: RwLock::new(Vec::new()),
        }
    }

    pub fn with_total(total_items: u32) -> Self {
        Self::new(Some(total_items))
    }

    pub async fn fail_page(&self, page: u32, err: ProviderError) {
        self.page_errors.write().await.insert(page, err);
    }

    pub async fn override_total(&self, page: u32, total: Option<u32>) {
        self.total_overrides.write().await.insert(page, total);
    }

    pub async fn fail_balance(&self, err: ProviderError) {
        *self.balance_error.write().await = Some(err);
    }

    pub async fn set_hosts_response(&self, hosts: Vec<HostRecord>) {
        *self.hosts.write().await = hosts;
    }

    pub async fn requested_pages(&self) -> Vec<u32> {
        self.requested_pages.read().await.clone()
    }

    pub async fn set_hosts_calls(&self) -> Vec<(String, String, Vec<HostRecordInput>)> {
        self.set_hosts_calls.read().await.clone()
    }
}

#[async_trait]
impl RegistrarProvider for MockRegistrar {
    async fn list_domains_page(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<DomainPage, ProviderError> {
        self.requested_pages.write().await.push(page);
        if let Some(err) = self.page_errors.read().await.get(&page) {
            return Err(err.clone());
        }

        let total = self.total_items.unwrap_or(0);
        let start = (page - 1) * page_size;
        let end = (start + page_size).min(total);
        let domains = (start..end)
            .map(|i| domain(&format!("d{}.com", i + 1)))
            .collect();

        let total_items = match self.total_overrides.read().await.get(&page) {
            Some(overridden) => *overridden,
            None => self.total_items,
        };

        Ok(DomainPage {
            page,
            total_items,
            domains,
        })
    }

    async fn get_balances(&self) -> Result<BalanceSnapshot, ProviderError> {
        match self.balance_error.read().await.as_ref() {
            Some(err) => Err(err.clone()),
            None => Ok(balances()),
        }
    }

    async fn get_hosts(&self, _sld: &str, _tld: &str) -> Result<Vec<HostRecord>, ProviderError> {
        Ok(self.hosts.read().await.clone())
    }

    async fn set_hosts(
        &self,
        sld: &str,
        tld: &str,
        records: &[HostRecordInput],
    ) -> Result<SetHostsResult, ProviderError> {
        self.set_hosts_calls
            .write()
            .await
            .push((sld.to_string(), tld.to_string(), records.to_vec()));
        Ok(SetHostsResult {
            domain: format!("{sld}.{tld}"),
            success: true,
        })
    }
}

// ===== MockUsageProvider =====

pub struct MockUsageProvider {
    snapshot: Option<UsageSnapshot>,
    calls: AtomicUsize,
}

impl MockUsageProvider {
    pub fn new(snapshot: Option<UsageSnapshot>) -> Self {
        Self {
            snapshot,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn available() -> Self {
        Self::new(Some(json!({"data": {"acct": []}})))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UsageProvider for MockUsageProvider {
    async fn fetch_usage(&self) -> Option<UsageSnapshot> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.snapshot.clone()
    }
}

// ===== MockLedgerClient =====

#[derive(Debug, Default)]
pub struct LedgerCalls {
    pub teams: Vec<TeamPayload>,
    pub accounts: Vec<AccountPayload>,
    pub batches: Vec<DomainBatchPayload>,
}

impl LedgerCalls {
    pub fn total(&self) -> usize {
        self.teams.len() + self.accounts.len() + self.batches.len()
    }
}

pub struct MockLedgerClient {
    team_response: RwLock<CoreResult<Value>>,
    account_response: RwLock<CoreResult<Value>>,
    batch_error: RwLock<Option<String>>,
    calls: RwLock<LedgerCalls>,
}

impl MockLedgerClient {
    pub fn new() -> Self {
        Self {
            team_response: RwLock::new(Ok(json!({"teamId": 7}))),
            account_response: RwLock::new(Ok(json!({"accountId": "acc-42"}))),
            batch_error: RwLock::new(None),
            calls: RwLock::new(LedgerCalls::default()),
        }
    }

    pub async fn set_team_response(&self, response: CoreResult<Value>) {
        *self.team_response.write().await = response;
    }

    pub async fn set_account_response(&self, response: CoreResult<Value>) {
        *self.account_response.write().await = response;
    }

    pub async fn fail_batch(&self, message: &str) {
        *self.batch_error.write().await = Some(message.to_string());
    }

    pub async fn calls(&self) -> tokio::sync::RwLockReadGuard<'_, LedgerCalls> {
        self.calls.read().await
    }
}

fn replay(response: &CoreResult<Value>) -> CoreResult<Value> {
    match response {
        Ok(v) => Ok(v.clone()),
        Err(e) => Err(CoreError::NetworkError(e.to_string())),
    }
}

#[async_trait]
impl LedgerClient for MockLedgerClient {
    async fn upsert_team(&self, payload: &TeamPayload) -> CoreResult<Value> {
        self.calls.write().await.teams.push(payload.clone());
        replay(&*self.team_response.read().await)
    }

    async fn upsert_account(&self, payload: &AccountPayload) -> CoreResult<Value> {
        self.calls.write().await.accounts.push(payload.clone());
        replay(&*self.account_response.read().await)
    }

    async fn insert_domains(&self, payload: &DomainBatchPayload) -> CoreResult<()> {
        self.calls.write().await.batches.push(payload.clone());
        match self.batch_error.read().await.as_ref() {
            Some(msg) => Err(CoreError::NetworkError(msg.clone())),
            None => Ok(()),
        }
    }
}

// ===== ServiceContext =====

/// 用 mock 依赖构建服务上下文
pub fn context(
    registrar: Arc<MockRegistrar>,
    usage: Arc<MockUsageProvider>,
    ledger: Arc<MockLedgerClient>,
) -> Arc<ServiceContext> {
    Arc::new(ServiceContext::new(registrar, usage, ledger))
}
