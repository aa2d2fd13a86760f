//! 域名 DNS 主机记录服务

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::{HostRecord, HostRecordInput, SetHostsResult};
use crate::utils::domain::split_domain;

/// DNS 主机记录服务
pub struct DnsHostService {
    ctx: Arc<ServiceContext>,
}

impl DnsHostService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 获取域名的全部主机记录
    pub async fn get_hosts(&self, domain: &str) -> CoreResult<Vec<HostRecord>> {
        let split = split_domain(domain)?;
        let records = self.ctx.registrar.get_hosts(&split.sld, &split.tld).await?;
        log::debug!("{}: {} host records", split.fqdn(), records.len());
        Ok(records)
    }

    /// 整体替换域名的主机记录
    pub async fn set_hosts(
        &self,
        domain: &str,
        records: &[HostRecordInput],
    ) -> CoreResult<SetHostsResult> {
        let split = split_domain(domain)?;
        validate_records(records)?;

        let result = self
            .ctx
            .registrar
            .set_hosts(&split.sld, &split.tld, records)
            .await?;
        if !result.success {
            log::warn!("Registrar reported failure replacing hosts of {}", split.fqdn());
        }
        Ok(result)
    }
}

fn validate_records(records: &[HostRecordInput]) -> CoreResult<()> {
    if records.is_empty() {
        return Err(CoreError::ValidationError(
            "At least one record is required".to_string(),
        ));
    }
    for (i, record) in records.iter().enumerate() {
        let blank = [&record.name, &record.record_type, &record.address]
            .iter()
            .any(|field| field.trim().is_empty());
        if blank {
            return Err(CoreError::ValidationError(format!(
                "Record {} must have a name, type and address",
                i + 1
            )));
        }
    }
    Ok(())
}
