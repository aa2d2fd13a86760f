//! Signing key lookup abstraction

use async_trait::async_trait;
use jsonwebtoken::DecodingKey;

/// Resolves a token's key ID to a verification key.
///
/// Platform implementation:
/// - Actix-Web: `JwksKeyResolver` (remote key set, cached per key ID)
///
/// Trust comes only from this resolver; key material embedded in a token
/// header is never used.
#[async_trait]
pub trait KeyResolver: Send + Sync {
    /// Look up the key for `kid`; `None` when it is unknown or cannot be fetched.
    async fn resolve(&self, kid: &str) -> Option<DecodingKey>;
}
