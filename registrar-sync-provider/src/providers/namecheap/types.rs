//! Namecheap XML API type definition
//!
//! Every attribute is read as an optional string; typing happens in the
//! provider's conversion functions so a garbled attribute never fails the
//! whole document.

use serde::Deserialize;

// ============ Envelope ============

/// `<ApiResponse Status="OK|ERROR">` root element.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope {
    #[serde(rename = "@Status", default)]
    pub status: Option<String>,
    #[serde(rename = "Errors", default)]
    pub errors: Option<ApiErrors>,
    #[serde(rename = "CommandResponse", default)]
    pub command_response: Option<CommandResponse>,
}

/// `<Errors>` block of an `ERROR` envelope.
#[derive(Debug, Default, Deserialize)]
pub struct ApiErrors {
    #[serde(rename = "Error", default)]
    pub items: Vec<ApiError>,
}

/// `<Error Number="...">message</Error>`
#[derive(Debug, Deserialize)]
pub struct ApiError {
    #[serde(rename = "@Number", default)]
    pub number: Option<String>,
    #[serde(rename = "$text", default)]
    pub message: Option<String>,
}

/// `<CommandResponse>`; which child is present depends on the command.
#[derive(Debug, Default, Deserialize)]
pub struct CommandResponse {
    #[serde(rename = "DomainGetListResult", default)]
    pub domain_list: Option<DomainListResult>,
    #[serde(rename = "Paging", default)]
    pub paging: Option<Paging>,
    #[serde(rename = "UserGetBalancesResult", default)]
    pub balances: Option<RawBalances>,
    #[serde(rename = "DomainDNSGetHostsResult", default)]
    pub hosts: Option<HostsResult>,
    #[serde(rename = "DomainDNSSetHostsResult", default)]
    pub set_hosts: Option<RawSetHostsResult>,
}

// ============ namecheap.domains.getList ============

#[derive(Debug, Default, Deserialize)]
pub struct DomainListResult {
    #[serde(rename = "Domain", default)]
    pub domains: Vec<RawDomain>,
}

/// `<Domain ID=".." Name=".." User=".." Created="MM/DD/YYYY" .../>`
#[derive(Debug, Default, Deserialize)]
pub struct RawDomain {
    #[serde(rename = "@Name", default)]
    pub name: Option<String>,
    #[serde(rename = "@User", default)]
    pub user: Option<String>,
    #[serde(rename = "@Created", default)]
    pub created: Option<String>,
    #[serde(rename = "@Expires", default)]
    pub expires: Option<String>,
    #[serde(rename = "@IsExpired", default)]
    pub is_expired: Option<String>,
    #[serde(rename = "@IsLocked", default)]
    pub is_locked: Option<String>,
    #[serde(rename = "@AutoRenew", default)]
    pub auto_renew: Option<String>,
    #[serde(rename = "@IsOurDNS", default)]
    pub is_our_dns: Option<String>,
}

/// `<Paging><TotalItems>..</TotalItems>...</Paging>`
///
/// `CurrentPage`/`PageSize` are ignored: the page size is fixed by the caller.
#[derive(Debug, Default, Deserialize)]
pub struct Paging {
    #[serde(rename = "TotalItems", default)]
    pub total_items: Option<String>,
}

// ============ namecheap.users.getBalances ============

#[derive(Debug, Default, Deserialize)]
pub struct RawBalances {
    #[serde(rename = "@Currency", default)]
    pub currency: Option<String>,
    #[serde(rename = "@AvailableBalance", default)]
    pub available_balance: Option<String>,
    #[serde(rename = "@AccountBalance", default)]
    pub account_balance: Option<String>,
    #[serde(rename = "@EarnedAmount", default)]
    pub earned_amount: Option<String>,
    #[serde(rename = "@WithdrawableAmount", default)]
    pub withdrawable_amount: Option<String>,
    #[serde(rename = "@FundsRequiredForAutoRenew", default)]
    pub funds_required_for_auto_renew: Option<String>,
}

// ============ namecheap.domains.dns.getHosts / setHosts ============

#[derive(Debug, Default, Deserialize)]
pub struct HostsResult {
    #[serde(rename = "host", default)]
    pub hosts: Vec<RawHost>,
}

/// `<host HostId=".." Name="@" Type="A" Address=".." MXPref="10" TTL="1800" IsActive="true"/>`
#[derive(Debug, Default, Deserialize)]
pub struct RawHost {
    #[serde(rename = "@Name", default)]
    pub name: Option<String>,
    #[serde(rename = "@Type", default)]
    pub record_type: Option<String>,
    #[serde(rename = "@Address", default)]
    pub address: Option<String>,
    #[serde(rename = "@MXPref", default)]
    pub mx_pref: Option<String>,
    #[serde(rename = "@TTL", default)]
    pub ttl: Option<String>,
    #[serde(rename = "@IsActive", default)]
    pub is_active: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawSetHostsResult {
    #[serde(rename = "@Domain", default)]
    pub domain: Option<String>,
    #[serde(rename = "@IsSuccess", default)]
    pub is_success: Option<String>,
}
