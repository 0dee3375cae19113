//! btcget: print the current Bitcoin price from a configurable quote provider.
//!
//! The library is split into three parts:
//! - [`provider`]: the [`PriceProvider`] trait, its CoinMarketCap implementation,
//!   and the [`ProviderFactory`] that picks one by backend identifier.
//! - [`config`]: the small TOML record at `~/.btcget` and its
//!   load/init/update cycle.
//! - [`app`]: the entry points the binary dispatches to.
//!
//! ```no_run
//! # async fn run() -> Result<(), btcget::BtcError> {
//! let client = btcget::BtcClient::builder().build()?;
//! let path = btcget::config::default_path()?;
//! println!("{}", btcget::app::fetch_price(&path, &client).await?);
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod provider;

pub use config::{ConfigRecord, ConfigUpdate};
pub use crate::core::decimal::{format_price, round_price};
pub use crate::core::{ApiFetchError, BtcClient, BtcClientBuilder, BtcError, PriceRequest};
pub use provider::{CoinMarketApi, PriceProvider, ProviderFactory, supported_backends};
