//! Centralized constants for default endpoints, UA and timeouts.

use std::time::Duration;

/// Identifies the tool to quote services.
pub(crate) const USER_AGENT: &str = concat!("btcget/", env!("CARGO_PKG_VERSION"));

/// CoinMarketCap "latest listings" endpoint.
pub(crate) const DEFAULT_BASE_COINMARKET: &str =
    "https://pro-api.coinmarketcap.com/v1/cryptocurrency/listings/latest";

/// Overall request timeout applied unless the builder overrides it.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Connect timeout applied unless the builder overrides it.
pub(crate) const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
