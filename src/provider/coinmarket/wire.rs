use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::core::decimal::number_to_decimal;

/* ---------------- Minimal serde for listings/latest ---------------- */

#[derive(Deserialize)]
pub(crate) struct ListingsEnvelope {
    pub(crate) data: Option<Vec<ListingNode>>,
}

#[derive(Deserialize)]
pub(crate) struct ListingNode {
    pub(crate) quote: Option<HashMap<String, QuoteNode>>,
}

#[derive(Deserialize)]
pub(crate) struct QuoteNode {
    pub(crate) price: Option<serde_json::Number>,
}

/// Extract `data[0].quote[<currency>].price` from a listings body.
///
/// The error is a short description of what was missing.
pub(crate) fn extract_price(body: &str, currency: &str) -> Result<Decimal, String> {
    let env: ListingsEnvelope =
        serde_json::from_str(body).map_err(|e| format!("listings json parse: {e}"))?;

    let first = env
        .data
        .and_then(|d| d.into_iter().next())
        .ok_or_else(|| "missing data[0]".to_string())?;

    let mut quotes = first.quote.ok_or_else(|| "missing data[0].quote".to_string())?;

    let node = quotes
        .remove(currency)
        .ok_or_else(|| format!("missing data[0].quote.{currency}"))?;

    let price = node
        .price
        .ok_or_else(|| format!("missing data[0].quote.{currency}.price"))?;

    number_to_decimal(&price).ok_or_else(|| format!("price {price} is not a decimal"))
}
