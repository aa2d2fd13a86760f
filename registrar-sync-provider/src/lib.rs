//! # registrar-sync-provider
//!
//! Typed clients for the upstream APIs the registrar sync reads from.
//!
//! ## Supported Providers
//!
//! | Provider | Feature Flag | Auth Method |
//! |----------|-------------|-------------|
//! | [Namecheap](https://www.namecheap.com/support/api/) XML API | `namecheap` | API user + key + whitelisted client IP |
//! | [WHM](https://api.docs.cpanel.net/whm/introduction/) JSON API | `whm` | `WHM root:<token>` header |
//!
//! ## Feature Flags
//!
//! ### Provider Selection
//!
//! - **`all-providers`** *(default)*: Enable both providers.
//! - **`namecheap`**: Enable only the registrar client.
//! - **`whm`**: Enable only the bandwidth usage client.
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use registrar_sync_provider::{create_registrar, RegistrarCredentials, RegistrarProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let registrar = create_registrar(RegistrarCredentials {
//!         api_user: "acme".to_string(),
//!         api_key: "your-key".to_string(),
//!         client_ip: "203.0.113.10".to_string(),
//!     })?;
//!
//!     // Pages are 1-indexed; the caller walks the pages.
//!     let page = registrar.list_domains_page(1, 100).await?;
//!     for domain in &page.domains {
//!         println!("{} expires {:?}", domain.name, domain.expires_date);
//!     }
//!
//!     let balances = registrar.get_balances().await?;
//!     println!("{} {}", balances.available_balance, balances.currency);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Registrar operations return [`Result<T, ProviderError>`](ProviderError).
//! An `ERROR` envelope is mapped by its error number:
//!
//! - [`ProviderError::InvalidCredentials`]: bad user/key or client IP not whitelisted
//! - [`ProviderError::DomainNotFound`]: domain is not in the account
//! - [`ProviderError::MissingContainer`]: envelope parsed but the expected result block is absent
//! - [`ProviderError::Unknown`]: any other error number, with the raw code kept
//!
//! Nothing is retried. Usage fetching is best-effort and yields `None` on failure.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory functions
#[cfg(feature = "namecheap")]
pub use factory::create_registrar;
#[cfg(feature = "whm")]
pub use factory::create_usage_provider;

// Re-export public traits only (internal traits are not exported)
pub use traits::{RegistrarProvider, UsageProvider};

// Re-export types
pub use types::{
    BalanceSnapshot, DomainPage, DomainRecord, HostRecord, HostRecordInput, RegistrarCredentials,
    SetHostsResult, UsageCredentials, UsageSnapshot,
};

// Re-export utils module
pub use utils::{datetime, log_sanitizer};

// Re-export concrete providers (behind feature flags)
#[cfg(feature = "namecheap")]
pub use providers::{MAX_PAGE_SIZE, NamecheapProvider, NamecheapProviderBuilder};
#[cfg(feature = "whm")]
pub use providers::{WhmProvider, WhmProviderBuilder};
