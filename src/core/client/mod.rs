//! Public client surface + builder.
//! Defaults (UA, endpoints, timeouts) live in `constants`.

mod constants;

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::core::BtcError;
use constants::{DEFAULT_BASE_COINMARKET, DEFAULT_CONNECT_TIMEOUT, DEFAULT_TIMEOUT, USER_AGENT};

/// Thin wrapper that holds a configured HTTP client and provider base URLs.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct BtcClient {
    http: Client,
    base_coinmarket: Url,
}

impl BtcClient {
    /// Create a new builder.
    #[must_use]
    pub fn builder() -> BtcClientBuilder {
        BtcClientBuilder::default()
    }

    pub(crate) const fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) const fn base_coinmarket(&self) -> &Url {
        &self.base_coinmarket
    }
}

/* ----------------------- Builder ----------------------- */

/// Builder for [`BtcClient`]; every setting has a default.
#[derive(Debug, Default)]
pub struct BtcClientBuilder {
    user_agent: Option<String>,
    base_coinmarket: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl BtcClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the CoinMarketCap listings endpoint
    /// (e.g., `https://pro-api.coinmarketcap.com/v1/cryptocurrency/listings/latest`).
    #[must_use]
    pub fn base_coinmarket(mut self, url: Url) -> Self {
        self.base_coinmarket = Some(url);
        self
    }

    /// Set the overall request timeout. Default: 15s.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set the connect timeout. Default: 5s.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if a default URL fails to parse or the TLS backend
    /// cannot be initialized.
    pub fn build(self) -> Result<BtcClient, BtcError> {
        let base_coinmarket = match self.base_coinmarket {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_COINMARKET)?,
        };

        let http = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .connect_timeout(self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT))
            .build()?;

        Ok(BtcClient {
            http,
            base_coinmarket,
        })
    }
}
