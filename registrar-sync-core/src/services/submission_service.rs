//! 下游提交流水线
//!
//! team → account → domain batch. Each step threads the identifier it gets
//! back into the next one. Steps 1 and 2 short-circuit on failure; a failed
//! batch leaves the team and account in place and yields a partial outcome.

use std::sync::Arc;

use serde_json::Value;

use crate::error::{CoreError, CoreResult, SubmissionStep};
use crate::services::ServiceContext;
use crate::types::{
    AccountPayload, BalanceSnapshot, DomainBatchPayload, DomainRecord, DomainWireRecord, RemoteId,
    SubmissionContext, SubmissionOutcome, SyncSettings, TeamPayload, UsageSnapshot,
};

/// 固定托管价格
const HOSTING_PRICE: f64 = 0.0;

/// 提交服务
pub struct SubmissionService {
    ctx: Arc<ServiceContext>,
    settings: SyncSettings,
}

impl SubmissionService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>, settings: SyncSettings) -> Self {
        Self { ctx, settings }
    }

    /// 执行三步提交
    pub async fn submit(
        &self,
        domains: &[DomainRecord],
        balances: Option<&BalanceSnapshot>,
        usage: Option<UsageSnapshot>,
    ) -> CoreResult<SubmissionOutcome> {
        let submission = self.upsert(balances, usage).await?;
        let SubmissionContext {
            team_id,
            account_id,
        } = submission;

        if domains.is_empty() {
            log::info!("No domains to submit for account {account_id}");
            return Ok(SubmissionOutcome::Completed {
                team_id,
                account_id,
                domains_submitted: 0,
            });
        }

        let payload = DomainBatchPayload {
            account_id: account_id.clone(),
            domains: domains
                .iter()
                .map(|d| DomainWireRecord::from_domain(d, &account_id))
                .collect(),
        };

        match self.ctx.ledger.insert_domains(&payload).await {
            Ok(()) => {
                log::info!(
                    "Submitted {} domains for account {account_id}",
                    domains.len()
                );
                Ok(SubmissionOutcome::Completed {
                    team_id,
                    account_id,
                    domains_submitted: domains.len(),
                })
            }
            Err(e) => {
                log::error!(
                    "Domain batch for account {account_id} failed ({} domains): {e}",
                    domains.len()
                );
                Ok(SubmissionOutcome::Partial {
                    team_id,
                    account_id,
                    domains_attempted: domains.len(),
                    error: e.to_string(),
                })
            }
        }
    }

    /// Steps 1 and 2.
    async fn upsert(
        &self,
        balances: Option<&BalanceSnapshot>,
        usage: Option<UsageSnapshot>,
    ) -> CoreResult<SubmissionContext> {
        let team = TeamPayload {
            name: self.settings.team_name.clone(),
        };
        let body = self
            .ctx
            .ledger
            .upsert_team(&team)
            .await
            .map_err(|e| step_failed(SubmissionStep::UpsertTeam, &e.to_string()))?;
        let team_id = extract_id(&body, "teamId", SubmissionStep::UpsertTeam)?;
        log::debug!("Team '{}' upserted: {team_id}", team.name);

        let account = AccountPayload {
            server_name: self.settings.server_name.clone(),
            hosting_price: HOSTING_PRICE,
            team_id: team_id.clone(),
            available_balance: balances.map_or(0.0, |b| b.available_balance),
            funds_required_for_auto_renew: balances
                .map_or(0.0, |b| b.funds_required_for_auto_renew),
            client_ip: self.settings.client_ip.clone(),
            bandwidth: usage,
        };
        let body = self
            .ctx
            .ledger
            .upsert_account(&account)
            .await
            .map_err(|e| step_failed(SubmissionStep::UpsertAccount, &e.to_string()))?;
        let account_id = extract_id(&body, "accountId", SubmissionStep::UpsertAccount)?;
        log::debug!("Account '{}' upserted: {account_id}", account.server_name);

        Ok(SubmissionContext {
            team_id,
            account_id,
        })
    }
}

fn extract_id(body: &Value, field: &str, step: SubmissionStep) -> CoreResult<RemoteId> {
    RemoteId::from_field(body, field)
        .ok_or_else(|| step_failed(step, &format!("response has no usable {field}")))
}

fn step_failed(step: SubmissionStep, detail: &str) -> CoreError {
    log::error!("Submission failed at {step}: {detail}");
    CoreError::Submission {
        step,
        detail: detail.to_string(),
    }
}
