//! Namecheap HTTP 请求方法

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::{ApiEnvelope, CommandResponse, NamecheapProvider};

impl NamecheapProvider {
    /// 构建带认证参数的请求 URL
    ///
    /// The API key travels in the query string, so the URL itself must never be logged.
    pub(crate) fn command_url(&self, command: &str, params: &[(&str, String)]) -> String {
        let creds = &self.credentials;
        let mut url = format!(
            "{}?ApiUser={}&ApiKey={}&UserName={}&Command={}&ClientIp={}",
            self.base_url,
            urlencoding::encode(&creds.api_user),
            urlencoding::encode(&creds.api_key),
            urlencoding::encode(&creds.api_user),
            urlencoding::encode(command),
            urlencoding::encode(&creds.client_ip),
        );
        for (key, value) in params {
            url.push('&');
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url
    }

    /// 执行 Namecheap API 命令，返回 `CommandResponse`
    pub(crate) async fn request(
        &self,
        command: &str,
        params: &[(&str, String)],
        ctx: ErrorContext,
    ) -> Result<CommandResponse> {
        let url = self.command_url(command, params);
        let request = self.client.get(&url);

        let (status, response_text) = HttpUtils::execute_request(
            request,
            self.provider_name(),
            "GET",
            &format!("Command: {command}"),
        )
        .await?;
        HttpUtils::ensure_success(status, &response_text, self.provider_name())?;

        let envelope: ApiEnvelope = HttpUtils::parse_xml(&response_text, self.provider_name())?;

        let is_error = envelope
            .status
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case("ERROR"));
        if is_error {
            let raw = Self::first_api_error(&envelope);
            log::error!(
                "[namecheap] API error: {} - {}",
                raw.code.as_deref().unwrap_or("-"),
                raw.message
            );
            return Err(self.map_error(raw, ctx));
        }

        envelope
            .command_response
            .ok_or_else(|| self.missing_container("CommandResponse"))
    }

    /// 从 `ERROR` 信封中提取错误码和消息（多条错误以 `; ` 连接）
    fn first_api_error(envelope: &ApiEnvelope) -> RawApiError {
        let items = envelope
            .errors
            .as_ref()
            .map(|e| e.items.as_slice())
            .unwrap_or_default();

        let message = items
            .iter()
            .filter_map(|e| e.message.as_deref().map(str::trim))
            .filter(|m| !m.is_empty())
            .collect::<Vec<_>>()
            .join("; ");
        let message = if message.is_empty() {
            "Namecheap API error".to_string()
        } else {
            message
        };

        match items.iter().find_map(|e| e.number.clone()) {
            Some(code) => RawApiError::with_code(code, message),
            None => RawApiError::new(message),
        }
    }
}
