//! Platform adapters
//!
//! Trait implementations that connect the core services to the outside world:
//! - **`HttpLedgerClient`**: `LedgerClient` over the accounting server's JSON API.
//! - **`JwksKeyResolver`**: `KeyResolver` backed by a remote key set, cached per key ID.

mod http_ledger_client;
mod jwks_key_resolver;

pub use http_ledger_client::HttpLedgerClient;
pub use jwks_key_resolver::JwksKeyResolver;

use std::time::Duration;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

fn build_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(REQUEST_TIMEOUT)
        .build()
}
