//! Capability traits implemented by the platform layer

mod key_resolver;
mod ledger_client;

pub use key_resolver::KeyResolver;
pub use ledger_client::LedgerClient;
