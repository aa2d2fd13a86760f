//! HTTP 错误响应
//!
//! Every failure leaves the server as `{"detail": "<message>"}`.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use registrar_sync_core::CoreError;
use serde_json::json;

/// Route-level error: a core error plus the operation it interrupted.
#[derive(Debug)]
pub struct ApiError {
    inner: CoreError,
    context: Option<&'static str>,
}

impl ApiError {
    /// Prefix server-side failures with `"{context}: "`.
    pub fn with_context(inner: CoreError, context: &'static str) -> Self {
        Self {
            inner,
            context: Some(context),
        }
    }

    fn detail(&self) -> String {
        match &self.inner {
            CoreError::Unauthenticated(reason) => reason.clone(),
            CoreError::ValidationError(reason) => format!("Invalid request: {reason}"),
            other => match self.context {
                Some(context) => format!("{context}: {other}"),
                None => other.to_string(),
            },
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(inner: CoreError) -> Self {
        Self {
            inner,
            context: None,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.detail())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match &self.inner {
            CoreError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            CoreError::ValidationError(_) => StatusCode::BAD_REQUEST,
            CoreError::Submission { .. } => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let detail = self.detail();
        if self.inner.is_expected() {
            tracing::warn!("{detail}");
        } else {
            tracing::error!("{detail}");
        }
        HttpResponse::build(self.status_code()).json(json!({ "detail": detail }))
    }
}
