//! Provider factory functions.

use std::sync::Arc;

use crate::error::Result;
#[cfg(feature = "namecheap")]
use crate::providers::NamecheapProvider;
#[cfg(feature = "whm")]
use crate::providers::WhmProvider;
#[cfg(feature = "namecheap")]
use crate::traits::RegistrarProvider;
#[cfg(feature = "whm")]
use crate::traits::UsageProvider;
#[cfg(feature = "namecheap")]
use crate::types::RegistrarCredentials;
#[cfg(feature = "whm")]
use crate::types::UsageCredentials;

/// Creates the registrar client from the given credentials.
///
/// The returned provider is wrapped in `Arc<dyn RegistrarProvider>` for easy
/// sharing across async tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use registrar_sync_provider::{create_registrar, RegistrarCredentials};
///
/// let registrar = create_registrar(RegistrarCredentials {
///     api_user: "acme".to_string(),
///     api_key: "your-key".to_string(),
///     client_ip: "203.0.113.10".to_string(),
/// }).unwrap();
/// ```
#[cfg(feature = "namecheap")]
pub fn create_registrar(credentials: RegistrarCredentials) -> Result<Arc<dyn RegistrarProvider>> {
    Ok(Arc::new(NamecheapProvider::new(credentials)?))
}

/// Creates the bandwidth usage client for a hosting panel.
#[cfg(feature = "whm")]
pub fn create_usage_provider(credentials: UsageCredentials) -> Result<Arc<dyn UsageProvider>> {
    Ok(Arc::new(WhmProvider::new(credentials)?))
}
