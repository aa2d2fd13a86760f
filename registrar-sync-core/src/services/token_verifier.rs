//! Bearer token 校验
//!
//! RS256 only. The signing key is looked up by the header's `kid` through
//! the injected `KeyResolver`; `exp` and `nbf` are checked when present,
//! the audience is not.

use std::sync::Arc;

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, decode_header, Algorithm, Validation};
use serde_json::{Map, Value};

use crate::error::{CoreError, CoreResult};
use crate::traits::KeyResolver;

/// Decoded token claims
pub type Claims = Map<String, Value>;

/// Token 校验服务
pub struct TokenVerifier {
    resolver: Arc<dyn KeyResolver>,
    validation: Validation,
}

impl TokenVerifier {
    #[must_use]
    pub fn new(resolver: Arc<dyn KeyResolver>) -> Self {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.validate_aud = false;
        validation.validate_nbf = true;
        validation.leeway = 0;
        validation.required_spec_claims.clear();
        Self {
            resolver,
            validation,
        }
    }

    /// 校验 `Authorization` 请求头
    pub async fn verify_header(&self, authorization: Option<&str>) -> CoreResult<Claims> {
        let header = authorization
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .ok_or_else(|| unauthenticated("Token is missing"))?;
        let token =
            bearer_token(header).ok_or_else(|| unauthenticated("Invalid Authorization header"))?;
        self.verify(token).await
    }

    /// 校验 token 本身
    pub async fn verify(&self, token: &str) -> CoreResult<Claims> {
        let header = decode_header(token).map_err(|e| invalid_token(&e))?;
        let kid = header
            .kid
            .filter(|kid| !kid.is_empty())
            .ok_or_else(|| unauthenticated("Token header missing kid"))?;

        let key = self
            .resolver
            .resolve(&kid)
            .await
            .ok_or_else(|| unauthenticated("Public key for kid not found"))?;

        let data = decode::<Claims>(token, &key, &self.validation).map_err(|e| {
            if matches!(e.kind(), ErrorKind::ExpiredSignature) {
                unauthenticated("Token expired")
            } else {
                invalid_token(&e)
            }
        })?;

        Ok(data.claims)
    }
}

/// `Bearer <token>`, scheme case-insensitive, exactly two space-separated parts.
fn bearer_token(header: &str) -> Option<&str> {
    let mut parts = header.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None)
            if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() =>
        {
            Some(token)
        }
        _ => None,
    }
}

fn unauthenticated(reason: &str) -> CoreError {
    CoreError::Unauthenticated(reason.to_string())
}

fn invalid_token(err: &jsonwebtoken::errors::Error) -> CoreError {
    CoreError::Unauthenticated(format!("Invalid token: {err}"))
}
