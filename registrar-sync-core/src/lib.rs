//! Registrar Sync Core Library
//!
//! Platform-independent sync logic:
//! - paged domain collection from the registrar (Collector Service)
//! - dependent three-step submission to the accounting server (Submission Service)
//! - run orchestration and mode switches (Sync Service)
//! - bearer token verification against a key resolver (Token Verifier)
//! - DNS host record read/replace (DNS Host Service)
//!
//! Outbound HTTP to the accounting server and key-set lookup are abstracted
//! behind the [`LedgerClient`] and [`KeyResolver`] traits and supplied by the
//! platform layer.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::ServiceContext;
pub use traits::{KeyResolver, LedgerClient};
