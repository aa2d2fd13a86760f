//! 共享测试工具和辅助函数

#![allow(dead_code)]

use registrar_sync_provider::{
    NamecheapProvider, RegistrarCredentials, UsageCredentials, WhmProvider,
};
use wiremock::MockServer;

pub const API_USER: &str = "acme";
pub const API_KEY: &str = "nc-test-key";
pub const CLIENT_IP: &str = "203.0.113.10";
pub const WHM_TOKEN: &str = "whm-test-token";
pub const XML_PATH: &str = "/xml.response";

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

pub fn registrar_credentials() -> RegistrarCredentials {
    RegistrarCredentials {
        api_user: API_USER.to_string(),
        api_key: API_KEY.to_string(),
        client_ip: CLIENT_IP.to_string(),
    }
}

/// 指向 mock server 的 Namecheap Provider
pub fn namecheap(server: &MockServer) -> NamecheapProvider {
    match NamecheapProvider::builder(registrar_credentials())
        .base_url(format!("{}{XML_PATH}", server.uri()))
        .build()
    {
        Ok(p) => p,
        Err(e) => panic!("failed to build namecheap provider: {e}"),
    }
}

/// 指向 mock server 的 WHM Provider
pub fn whm(server: &MockServer) -> WhmProvider {
    match WhmProvider::builder(UsageCredentials {
        host: "198.51.100.7".to_string(),
        api_key: WHM_TOKEN.to_string(),
    })
    .base_url(server.uri())
    .build()
    {
        Ok(p) => p,
        Err(e) => panic!("failed to build whm provider: {e}"),
    }
}

// ============ Namecheap XML fixtures ============

/// `Status="OK"` 信封
pub fn ok_envelope(command: &str, body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<ApiResponse Status="OK" xmlns="http://api.namecheap.com/xml.response">
  <Errors />
  <Warnings />
  <RequestedCommand>{command}</RequestedCommand>
  <CommandResponse Type="{command}">
{body}
  </CommandResponse>
  <Server>PHX01SBAPIEXT05</Server>
  <GMTTimeDifference>--4:00</GMTTimeDifference>
  <ExecutionTime>0.011</ExecutionTime>
</ApiResponse>"#
    )
}

/// `Status="ERROR"` 信封
pub fn error_envelope(number: &str, message: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<ApiResponse Status="ERROR" xmlns="http://api.namecheap.com/xml.response">
  <Errors>
    <Error Number="{number}">{message}</Error>
  </Errors>
  <Warnings />
  <RequestedCommand />
  <Server>PHX01SBAPIEXT05</Server>
  <ExecutionTime>0.002</ExecutionTime>
</ApiResponse>"#
    )
}

/// 单个 `<Domain>` 元素
pub fn domain_xml(name: &str) -> String {
    format!(
        r#"<Domain ID="1" Name="{name}" User="{API_USER}" Created="03/04/2024" Expires="03/04/2026" IsExpired="false" IsLocked="false" AutoRenew="true" WhoisGuard="ENABLED" IsPremium="false" IsOurDNS="true"/>"#
    )
}

/// `namecheap.domains.getList` 响应体
pub fn domain_list_body(names: &[&str], total_items: Option<u32>, page: u32) -> String {
    let domains: String = names.iter().map(|n| domain_xml(n)).collect();
    let paging = total_items.map_or_else(String::new, |total| {
        format!(
            "<Paging><TotalItems>{total}</TotalItems><CurrentPage>{page}</CurrentPage><PageSize>100</PageSize></Paging>"
        )
    });
    format!("<DomainGetListResult>{domains}</DomainGetListResult>{paging}")
}
