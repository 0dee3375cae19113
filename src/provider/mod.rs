//! Price providers and the factory that selects one from configuration.

pub mod coinmarket;

use rust_decimal::Decimal;

use crate::core::net::PriceRequest;
use crate::core::{BtcClient, BtcError};

pub use coinmarket::CoinMarketApi;

/// Future returned by [`PriceProvider::get_price`].
pub type PriceFuture<'a> =
    std::pin::Pin<Box<dyn std::future::Future<Output = Result<Decimal, BtcError>> + Send + 'a>>;

/// A quote service that can report the current price.
///
/// Implementations build their request once in the constructor and only
/// touch the network inside [`get_price`](Self::get_price).
pub trait PriceProvider: Send + Sync {
    /// The backend identifier this provider is registered under.
    fn backend(&self) -> &'static str;

    /// The currency the price is quoted in.
    fn currency(&self) -> &str;

    /// The request sent on every [`get_price`](Self::get_price) call.
    fn request(&self) -> &PriceRequest;

    /// Fetch the price, rounded to two fractional digits.
    ///
    /// # Errors
    ///
    /// - [`BtcError::ApiFetch`] if the service is unreachable or answers with a
    ///   non-success status.
    /// - [`BtcError::Parse`] if the body does not hold a price where expected.
    fn get_price(&self) -> PriceFuture<'_>;
}

/// Constructor stored in the backend registry.
pub type ProviderCtor = fn(&BtcClient, &str, &str) -> Box<dyn PriceProvider>;

fn coinmarket_ctor(client: &BtcClient, key: &str, currency: &str) -> Box<dyn PriceProvider> {
    Box::new(CoinMarketApi::new(client, key, currency))
}

const REGISTRY: &[(&str, ProviderCtor)] = &[(coinmarket::BACKEND_ID, coinmarket_ctor)];

/// Identifiers accepted by [`ProviderFactory::create`].
pub fn supported_backends() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|(id, _)| *id)
}

/// Builds a [`PriceProvider`] for a backend identifier.
#[derive(Debug, Clone)]
pub struct ProviderFactory {
    client: BtcClient,
}

impl ProviderFactory {
    /// Providers created by this factory share `client`.
    #[must_use]
    pub const fn new(client: BtcClient) -> Self {
        Self { client }
    }

    /// Create the provider registered as `backend`.
    ///
    /// Matching is exact: no trimming and no case folding.
    ///
    /// # Errors
    ///
    /// Returns [`BtcError::UnsupportedBackend`] if `backend` is not registered.
    pub fn create(
        &self,
        backend: &str,
        key: &str,
        currency: &str,
    ) -> Result<Box<dyn PriceProvider>, BtcError> {
        REGISTRY
            .iter()
            .find(|(id, _)| *id == backend)
            .map(|(_, ctor)| ctor(&self.client, key, currency))
            .ok_or_else(|| BtcError::UnsupportedBackend {
                backend: backend.to_string(),
            })
    }
}
