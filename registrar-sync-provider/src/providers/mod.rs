//! Upstream provider implementations

/// Shared utilities used by provider implementations.
pub mod common;

#[cfg(feature = "namecheap")]
mod namecheap;
#[cfg(feature = "whm")]
mod whm;

#[cfg(feature = "namecheap")]
pub use namecheap::{MAX_PAGE_SIZE, NamecheapProvider, NamecheapProviderBuilder};
#[cfg(feature = "whm")]
pub use whm::{WhmProvider, WhmProviderBuilder};
