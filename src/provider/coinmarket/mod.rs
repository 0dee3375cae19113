//! CoinMarketCap "latest listings" backend.

mod wire;

use rust_decimal::Decimal;

use crate::core::decimal::round_price;
use crate::core::net::{self, PriceRequest};
use crate::core::{BtcClient, BtcError};
use crate::provider::{PriceFuture, PriceProvider};

/// Backend identifier as written in the config file.
pub const BACKEND_ID: &str = "coinmarket";

/// Header carrying the CoinMarketCap API key.
pub const API_KEY_HEADER: &str = "X-CMC_PRO_API_KEY";

/// Price of the top listing (Bitcoin) from CoinMarketCap.
///
/// The request asks for a single listing (`start=1`, `limit=1`) converted
/// into the configured currency; the price is read from
/// `data[0].quote[<currency>].price`.
#[derive(Debug, Clone)]
pub struct CoinMarketApi {
    client: BtcClient,
    currency: String,
    request: PriceRequest,
}

impl CoinMarketApi {
    /// Build the provider. Performs no I/O.
    #[must_use]
    pub fn new(client: &BtcClient, api_key: &str, currency: &str) -> Self {
        let request = PriceRequest::new(client.base_coinmarket().clone())
            .header("Accept", "application/json")
            .header(API_KEY_HEADER, api_key)
            .query("start", "1")
            .query("limit", "1")
            .query("convert", currency);

        Self {
            client: client.clone(),
            currency: currency.to_string(),
            request,
        }
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(backend = BACKEND_ID, currency = %self.currency))
    )]
    async fn fetch(&self) -> Result<Decimal, BtcError> {
        let body = net::get_text(&self.client, &self.request).await?;
        let price =
            wire::extract_price(&body, &self.currency).map_err(|reason| BtcError::Parse {
                backend: BACKEND_ID,
                reason,
            })?;
        Ok(round_price(price))
    }
}

impl PriceProvider for CoinMarketApi {
    fn backend(&self) -> &'static str {
        BACKEND_ID
    }

    fn currency(&self) -> &str {
        &self.currency
    }

    fn request(&self) -> &PriceRequest {
        &self.request
    }

    fn get_price(&self) -> PriceFuture<'_> {
        Box::pin(self.fetch())
    }
}
