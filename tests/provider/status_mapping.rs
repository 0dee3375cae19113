use btcget::{ApiFetchError, BtcError, CoinMarketApi, PriceProvider};
use url::Url;

use crate::common::{client_for, mock_listings, setup_server};

#[tokio::test]
async fn server_error_maps_to_api_fetch_status() {
    let server = setup_server();
    let mock = mock_listings(&server, "k", "USD", 500, "oops");

    let api = CoinMarketApi::new(&client_for(&server), "k", "USD");
    let err = api.get_price().await.unwrap_err();
    mock.assert();

    match err {
        BtcError::ApiFetch(ApiFetchError::Status { status, url }) => {
            assert_eq!(status, 500);
            assert!(url.contains("/v1/cryptocurrency/listings/latest"));
        }
        other => panic!("expected ApiFetch status error, got {other:?}"),
    }
}

#[tokio::test]
async fn unauthorized_maps_to_api_fetch_status() {
    let server = setup_server();
    let mock = mock_listings(
        &server,
        "bad-key",
        "USD",
        401,
        r#"{"status":{"error_code":1002,"error_message":"API key missing."}}"#,
    );

    let api = CoinMarketApi::new(&client_for(&server), "bad-key", "USD");
    let err = api.get_price().await.unwrap_err();
    mock.assert();

    match &err {
        BtcError::ApiFetch(inner) => assert_eq!(inner.status(), Some(401)),
        other => panic!("expected ApiFetch error, got {other:?}"),
    }
    assert!(err.to_string().contains("401"));
}

#[tokio::test]
async fn refused_connection_maps_to_unreachable() {
    // Nothing listens on port 1.
    let client = btcget::BtcClient::builder()
        .base_coinmarket(Url::parse("http://127.0.0.1:1/v1/cryptocurrency/listings/latest").unwrap())
        .build()
        .unwrap();

    let api = CoinMarketApi::new(&client, "k", "USD");
    let err = api.get_price().await.unwrap_err();

    match err {
        BtcError::ApiFetch(ApiFetchError::Unreachable { url }) => {
            assert_eq!(url, "http://127.0.0.1:1/v1/cryptocurrency/listings/latest");
        }
        other => panic!("expected Unreachable, got {other:?}"),
    }
}

#[tokio::test]
async fn timeout_maps_to_unreachable() {
    let server = setup_server();
    let _mock = server.mock(|when, then| {
        when.any_request();
        then.status(200)
            .delay(std::time::Duration::from_millis(500))
            .body("{}");
    });

    let client = btcget::BtcClient::builder()
        .base_coinmarket(crate::common::listings_url(&server))
        .timeout(std::time::Duration::from_millis(50))
        .build()
        .unwrap();

    let err = CoinMarketApi::new(&client, "k", "USD")
        .get_price()
        .await
        .unwrap_err();

    assert!(
        matches!(err, BtcError::ApiFetch(ApiFetchError::Unreachable { .. })),
        "expected Unreachable, got {err:?}"
    );
}

#[tokio::test]
async fn redirect_loop_maps_to_unreachable() {
    let server = setup_server();
    let target = crate::common::listings_url(&server).to_string();
    let _mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path(crate::common::LISTINGS_PATH);
        then.status(302).header("location", target.as_str());
    });

    let err = CoinMarketApi::new(&client_for(&server), "k", "USD")
        .get_price()
        .await
        .unwrap_err();

    assert!(
        matches!(err, BtcError::ApiFetch(ApiFetchError::Unreachable { .. })),
        "expected Unreachable, got {err:?}"
    );
}

#[tokio::test]
async fn control_character_in_key_is_invalid_request() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.any_request();
        then.status(200).body("{}");
    });

    let err = CoinMarketApi::new(&client_for(&server), "abc\n123", "USD")
        .get_price()
        .await
        .unwrap_err();
    mock.assert_calls(0);

    match err {
        BtcError::ApiFetch(ApiFetchError::InvalidRequest { url }) => {
            assert!(url.contains("/v1/cryptocurrency/listings/latest"));
        }
        other => panic!("expected InvalidRequest, got {other:?}"),
    }
}
