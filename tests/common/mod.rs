#![allow(dead_code)]

use std::path::{Path, PathBuf};

use btcget::ConfigRecord;
use httpmock::{Method::GET, Mock, MockServer};
use url::Url;

pub const LISTINGS_PATH: &str = "/v1/cryptocurrency/listings/latest";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn listings_url(server: &MockServer) -> Url {
    Url::parse(&format!("{}{}", server.base_url(), LISTINGS_PATH)).unwrap()
}

pub fn client_for(server: &MockServer) -> btcget::BtcClient {
    btcget::BtcClient::builder()
        .base_coinmarket(listings_url(server))
        .build()
        .unwrap()
}

pub fn listings_body(currency: &str, price: &str) -> String {
    format!(r#"{{"status":{{"error_code":0}},"data":[{{"id":1,"symbol":"BTC","quote":{{"{currency}":{{"price":{price}}}}}}}]}}"#)
}

/// A listings mock that only matches the exact request the provider should send.
pub fn mock_listings<'a>(
    server: &'a MockServer,
    key: &'a str,
    currency: &'a str,
    status: u16,
    body: &'a str,
) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path(LISTINGS_PATH)
            .query_param("start", "1")
            .query_param("limit", "1")
            .query_param("convert", currency)
            .header("X-CMC_PRO_API_KEY", key);
        then.status(status)
            .header("content-type", "application/json")
            .body(body);
    })
}

pub fn config_path(dir: &Path) -> PathBuf {
    dir.join(".btcget")
}

pub fn write_record(path: &Path, record: &ConfigRecord) {
    btcget::config::save(path, record).unwrap();
}
