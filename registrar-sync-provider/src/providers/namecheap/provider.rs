//! Namecheap `RegistrarProvider` trait 实现

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::providers::common::{non_empty, parse_amount, parse_flag};
use crate::traits::{ErrorContext, ProviderErrorMapper, RegistrarProvider};
use crate::types::{
    BalanceSnapshot, DomainPage, DomainRecord, HostRecord, HostRecordInput, SetHostsResult,
};
use crate::utils::datetime::parse_us_date;

use super::{MAX_PAGE_SIZE, NamecheapProvider, RawDomain, RawHost};

impl NamecheapProvider {
    /// 将原始 `<Domain>` 元素转换为 `DomainRecord`
    ///
    /// Total over every attribute except `Name`: a record without a name is
    /// dropped. A missing `User` falls back to the API user.
    pub(crate) fn domain_from_raw(&self, raw: &RawDomain) -> Option<DomainRecord> {
        let Some(name) = non_empty(raw.name.as_deref()) else {
            log::warn!("[namecheap] Skipping domain entry without Name attribute");
            return None;
        };

        Some(DomainRecord {
            name: name.to_string(),
            auto_renew: parse_flag(raw.auto_renew.as_deref()),
            created_date: raw.created.as_deref().and_then(parse_us_date),
            expires_date: raw.expires.as_deref().and_then(parse_us_date),
            is_expired: parse_flag(raw.is_expired.as_deref()),
            is_locked: parse_flag(raw.is_locked.as_deref()),
            is_managed_dns: parse_flag(raw.is_our_dns.as_deref()),
            owner_user: non_empty(raw.user.as_deref())
                .unwrap_or(self.credentials.api_user.as_str())
                .to_string(),
        })
    }

    fn host_from_raw(raw: &RawHost) -> Option<HostRecord> {
        let record_type = non_empty(raw.record_type.as_deref())?;
        Some(HostRecord {
            name: non_empty(raw.name.as_deref()).unwrap_or("@").to_string(),
            record_type: record_type.to_ascii_uppercase(),
            address: raw.address.as_deref().unwrap_or_default().trim().to_string(),
            mx_pref: non_empty(raw.mx_pref.as_deref()).and_then(|v| v.parse().ok()),
            ttl: non_empty(raw.ttl.as_deref()).and_then(|v| v.parse().ok()),
            is_active: parse_flag(raw.is_active.as_deref()),
        })
    }

    fn display_domain(sld: &str, tld: &str) -> String {
        format!("{sld}.{tld}")
    }
}

#[async_trait]
impl RegistrarProvider for NamecheapProvider {
    async fn list_domains_page(&self, page: u32, page_size: u32) -> Result<DomainPage> {
        let page = page.max(1);
        let page_size = page_size.clamp(1, MAX_PAGE_SIZE);

        let response = self
            .request(
                "namecheap.domains.getList",
                &[
                    ("Pagesize", page_size.to_string()),
                    ("Page", page.to_string()),
                ],
                ErrorContext::default(),
            )
            .await?;

        let total_items = match response
            .paging
            .as_ref()
            .and_then(|p| non_empty(p.total_items.as_deref()))
        {
            Some(raw) => Some(raw.parse::<u32>().map_err(|_| {
                self.parse_error(format!("TotalItems is not a number: '{raw}'"))
            })?),
            None => None,
        };

        let domains: Vec<DomainRecord> = response
            .domain_list
            .map(|list| list.domains)
            .unwrap_or_default()
            .iter()
            .filter_map(|raw| self.domain_from_raw(raw))
            .collect();

        log::debug!(
            "[namecheap] Page {page}: {} domains (total {:?})",
            domains.len(),
            total_items
        );

        Ok(DomainPage {
            page,
            total_items,
            domains,
        })
    }

    async fn get_balances(&self) -> Result<BalanceSnapshot> {
        let response = self
            .request("namecheap.users.getBalances", &[], ErrorContext::default())
            .await?;

        let raw = response
            .balances
            .ok_or_else(|| self.missing_container("UserGetBalancesResult"))?;

        Ok(BalanceSnapshot {
            currency: non_empty(raw.currency.as_deref())
                .unwrap_or("USD")
                .to_string(),
            available_balance: parse_amount(raw.available_balance.as_deref()),
            account_balance: parse_amount(raw.account_balance.as_deref()),
            earned_amount: parse_amount(raw.earned_amount.as_deref()),
            withdrawable_amount: parse_amount(raw.withdrawable_amount.as_deref()),
            funds_required_for_auto_renew: parse_amount(
                raw.funds_required_for_auto_renew.as_deref(),
            ),
        })
    }

    async fn get_hosts(&self, sld: &str, tld: &str) -> Result<Vec<HostRecord>> {
        let domain = Self::display_domain(sld, tld);
        let response = match self
            .request(
                "namecheap.domains.dns.getHosts",
                &[("SLD", sld.to_string()), ("TLD", tld.to_string())],
                ErrorContext::for_domain(&domain),
            )
            .await
        {
            Ok(response) => response,
            // 无 CommandResponse 视为无记录
            Err(ProviderError::MissingContainer { .. }) => {
                log::warn!("[namecheap] {domain}: no CommandResponse in getHosts reply");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        let records: Vec<HostRecord> = response
            .hosts
            .map(|h| h.hosts)
            .unwrap_or_default()
            .iter()
            .filter_map(Self::host_from_raw)
            .collect();

        log::debug!("[namecheap] {domain}: {} host records", records.len());
        Ok(records)
    }

    async fn set_hosts(
        &self,
        sld: &str,
        tld: &str,
        records: &[HostRecordInput],
    ) -> Result<SetHostsResult> {
        let domain = Self::display_domain(sld, tld);

        let mut params: Vec<(String, String)> = vec![
            ("SLD".to_string(), sld.to_string()),
            ("TLD".to_string(), tld.to_string()),
        ];
        for (i, record) in records.iter().enumerate() {
            let n = i + 1;
            params.push((format!("HostName{n}"), record.name.clone()));
            params.push((format!("RecordType{n}"), record.record_type.clone()));
            params.push((format!("Address{n}"), record.address.clone()));
            if let Some(pref) = record.mx_pref {
                params.push((format!("MXPref{n}"), pref.to_string()));
            }
            if let Some(ttl) = record.ttl {
                params.push((format!("TTL{n}"), ttl.to_string()));
            }
        }
        let params: Vec<(&str, String)> = params
            .iter()
            .map(|(k, v)| (k.as_str(), v.clone()))
            .collect();

        let response = self
            .request(
                "namecheap.domains.dns.setHosts",
                &params,
                ErrorContext::for_domain(&domain),
            )
            .await?;

        let raw = response
            .set_hosts
            .ok_or_else(|| self.missing_container("DomainDNSSetHostsResult"))?;

        log::info!(
            "[namecheap] Replaced {} host records for {domain}",
            records.len()
        );

        Ok(SetHostsResult {
            domain: non_empty(raw.domain.as_deref())
                .map_or_else(|| domain.clone(), str::to_string),
            success: parse_flag(raw.is_success.as_deref()),
        })
    }
}
