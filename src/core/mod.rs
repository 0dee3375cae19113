//! Core components of the `btcget` crate.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The [`BtcClient`] HTTP wrapper and its builder.
//! - The primary [`BtcError`] type.
//! - Request plumbing and price number handling.

/// The HTTP client (`BtcClient`), builder, and defaults.
pub mod client;
/// Price rounding and display formatting.
pub mod decimal;
/// The primary error type (`BtcError`) for the crate.
pub mod error;
/// Request description and the GET round trip.
pub mod net;

pub use client::{BtcClient, BtcClientBuilder};
pub use error::{ApiFetchError, BtcError};
pub use net::PriceRequest;
