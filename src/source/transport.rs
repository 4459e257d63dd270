// splashmark/src/source/transport.rs
use crate::core::Result;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serde_json::Value;

/// Blocking HTTP operations the image source and the batch driver rely on.
pub trait Transport {
    /// GET an authenticated API endpoint and parse the body as JSON. Error
    /// statuses are not treated as failures: the body is returned so callers
    /// can inspect the API's own error payload.
    fn get_json(&self, url: &str, query: &[(&str, String)]) -> Result<Value>;

    /// GET raw bytes, typically a photo on the CDN.
    fn get_bytes(&self, url: &str) -> Result<Vec<u8>>;
}

pub struct HttpTransport {
    client: Client,
    api_headers: HeaderMap,
}

impl HttpTransport {
    pub fn new(access_key: &str) -> Result<Self> {
        let mut api_headers = HeaderMap::new();
        // An unusable key (e.g. containing a newline) is sent without the header
        // and left for the API to reject.
        match HeaderValue::from_str(&format!("Client-ID {}", access_key)) {
            Ok(value) => {
                api_headers.insert(AUTHORIZATION, value);
            }
            Err(e) => log::warn!("Access key is not a valid header value: {}", e),
        }
        api_headers.insert("Accept-Version", HeaderValue::from_static("v1"));
        api_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            api_headers,
        })
    }
}

impl Transport for HttpTransport {
    fn get_json(&self, url: &str, query: &[(&str, String)]) -> Result<Value> {
        log::debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(url)
            .headers(self.api_headers.clone())
            .query(query)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            log::debug!("{} answered with status {}", url, status);
        }

        Ok(response.json::<Value>()?)
    }

    fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        log::debug!("Downloading {}", url);

        let response = self.client.get(url).send()?.error_for_status()?;
        let bytes = response.bytes()?;

        log::debug!("Downloaded {} bytes from {}", bytes.len(), url);
        Ok(bytes.to_vec())
    }
}
