use url::Url;

use crate::core::{ApiFetchError, BtcClient, BtcError};

/// A fully specified GET request: endpoint, headers and query parameters.
///
/// Providers build one at construction time; nothing in it changes between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceRequest {
    url: Url,
    headers: Vec<(&'static str, String)>,
    query: Vec<(&'static str, String)>,
}

impl PriceRequest {
    pub(crate) const fn new(url: Url) -> Self {
        Self {
            url,
            headers: Vec::new(),
            query: Vec::new(),
        }
    }

    pub(crate) fn header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    pub(crate) fn query(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.query.push((name, value.into()));
        self
    }

    /// The endpoint without query parameters.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.url
    }

    /// Header name/value pairs, in the order they are sent.
    #[must_use]
    pub fn headers(&self) -> &[(&'static str, String)] {
        &self.headers
    }

    /// Query name/value pairs, in the order they are appended.
    #[must_use]
    pub fn query_pairs(&self) -> &[(&'static str, String)] {
        &self.query
    }

    /// Look up a header value by (case-insensitive) name.
    #[must_use]
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// The endpoint with every query parameter applied.
    #[must_use]
    pub fn url(&self) -> Url {
        let mut url = self.url.clone();
        if !self.query.is_empty() {
            let mut qp = url.query_pairs_mut();
            for (k, v) in &self.query {
                qp.append_pair(k, v);
            }
        }
        url
    }
}

/// Perform the GET described by `req` and return the body of a 2xx response.
///
/// Transport failures are summarized as [`ApiFetchError::Unreachable`]; a
/// request that cannot be built (e.g. a header value with a control
/// character) is [`ApiFetchError::InvalidRequest`] and is never sent. The
/// underlying reqwest error is only logged.
pub(crate) async fn get_text(client: &BtcClient, req: &PriceRequest) -> Result<String, BtcError> {
    let url = req.url();
    let url_s = req.endpoint().to_string();

    let mut builder = client.http().get(url);
    for (name, value) in req.headers() {
        builder = builder.header(*name, value);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(url = %url_s, "sending price request");

    let resp = builder.send().await.map_err(|e| {
        #[cfg(feature = "tracing")]
        tracing::debug!(error = %e, "request failed");
        if e.is_builder() {
            ApiFetchError::InvalidRequest { url: url_s.clone() }
        } else {
            ApiFetchError::Unreachable { url: url_s.clone() }
        }
    })?;

    let status = resp.status();

    #[cfg(feature = "tracing")]
    tracing::debug!(status = status.as_u16(), "price response received");

    if !status.is_success() {
        return Err(ApiFetchError::Status {
            status: status.as_u16(),
            url: url_s,
        }
        .into());
    }

    let body = resp.text().await.map_err(|_e| {
        #[cfg(feature = "tracing")]
        tracing::debug!(error = %_e, "failed to read response body");
        ApiFetchError::Unreachable { url: url_s.clone() }
    })?;

    Ok(body)
}
