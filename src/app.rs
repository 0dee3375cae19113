//! Entry points invoked by the command-line dispatcher.

use std::path::Path;

use crate::config::{self, ConfigRecord, ConfigUpdate};
use crate::core::decimal::format_price;
use crate::core::{BtcClient, BtcError};
use crate::provider::ProviderFactory;

/// Load the config at `path`, fetch the price from the configured backend,
/// and return it formatted for display (`43,210.55`).
///
/// # Errors
///
/// Propagates every error from config loading, provider construction and
/// the fetch itself unchanged.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err))]
pub async fn fetch_price(path: &Path, client: &BtcClient) -> Result<String, BtcError> {
    let record = config::load(path)?;
    let provider =
        ProviderFactory::new(client.clone()).create(&record.backend, &record.key, &record.currency)?;
    let price = provider.get_price().await?;
    Ok(format_price(price))
}

/// Write the default config to `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn init_config(path: &Path) -> Result<ConfigRecord, BtcError> {
    config::init(path)
}

/// Apply the supplied fields to the config at `path`.
///
/// # Errors
///
/// Returns [`BtcError::ConfigNotFound`] if the config was never initialized.
pub fn update_config(path: &Path, changes: &ConfigUpdate) -> Result<ConfigRecord, BtcError> {
    config::update(path, changes)
}
