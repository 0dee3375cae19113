use std::str::FromStr;

use btcget::{CoinMarketApi, PriceProvider};
use rust_decimal::Decimal;

use crate::common::{client_for, listings_body, mock_listings, setup_server};

#[tokio::test]
async fn coinmarket_price_is_rounded_to_cents() {
    let server = setup_server();
    let body = r#"{"data":[{"quote":{"USD":{"price":43210.549}}}]}"#;
    let mock = mock_listings(&server, "abc123", "USD", 200, body);

    let api = CoinMarketApi::new(&client_for(&server), "abc123", "USD");
    let price = api.get_price().await.unwrap();
    mock.assert();

    assert_eq!(price, Decimal::from_str("43210.55").unwrap());
    assert_eq!(btcget::format_price(price), "43,210.55");
}

#[tokio::test]
async fn coinmarket_converts_into_configured_currency() {
    let server = setup_server();
    let body = listings_body("EUR", "39876.125");
    let mock = mock_listings(&server, "k", "EUR", 200, &body);

    let api = CoinMarketApi::new(&client_for(&server), "k", "EUR");
    let price = api.get_price().await.unwrap();
    mock.assert();

    // half-to-even: .125 -> .12
    assert_eq!(price, Decimal::from_str("39876.12").unwrap());
}

#[tokio::test]
async fn missing_quote_is_a_parse_error() {
    let server = setup_server();
    let body = r#"{"data":[{"id":1,"symbol":"BTC"}]}"#;
    let mock = mock_listings(&server, "k", "USD", 200, body);

    let api = CoinMarketApi::new(&client_for(&server), "k", "USD");
    let err = api.get_price().await.unwrap_err();
    mock.assert();

    match err {
        btcget::BtcError::Parse { backend, reason } => {
            assert_eq!(backend, "coinmarket");
            assert!(reason.contains("quote"), "{reason}");
        }
        other => panic!("expected Parse error, got {other:?}"),
    }
}

#[tokio::test]
async fn quote_in_other_currency_is_a_parse_error() {
    let server = setup_server();
    let body = listings_body("USD", "1.0");
    let _mock = mock_listings(&server, "k", "GBP", 200, &body);

    let api = CoinMarketApi::new(&client_for(&server), "k", "GBP");
    let err = api.get_price().await.unwrap_err();

    assert!(
        matches!(err, btcget::BtcError::Parse { .. }),
        "expected Parse error, got {err:?}"
    );
    assert!(err.to_string().contains("unable to parse price data"));
}
