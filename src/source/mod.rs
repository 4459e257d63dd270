// splashmark/src/source/mod.rs
mod response;
mod transport;

pub use transport::{HttpTransport, Transport};

use crate::core::{Config, Orientation, Result};
use response::{Listing, RandomResponse, SearchResponse};

/// Resolves a query (or random mode) to a list of photo URLs on Unsplash.
pub struct UnsplashSource<'a, T: Transport> {
    transport: &'a T,
    api_base_url: String,
    orientation: Option<Orientation>,
}

impl<'a, T: Transport> UnsplashSource<'a, T> {
    pub fn new(transport: &'a T, api_base_url: impl Into<String>) -> Self {
        Self {
            transport,
            api_base_url: api_base_url.into().trim_end_matches('/').to_string(),
            orientation: None,
        }
    }

    pub fn from_config(transport: &'a T, config: &Config) -> Self {
        let source = Self::new(transport, config.api_base_url.as_str());
        if config.match_orientation {
            source.with_orientation(config.orientation())
        } else {
            source
        }
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    /// Returns up to `total` `regular`-size URLs in the order Unsplash lists
    /// them. An error payload from the API yields an empty list.
    pub fn fetch(&self, query: Option<&str>, total: u32) -> Result<Vec<String>> {
        let outcome = match query {
            Some(query) => self.search(query, total)?,
            None => self.random(total)?,
        };

        match outcome {
            Ok(urls) => {
                log::info!("Unsplash returned {} image URL(s)", urls.len());
                Ok(urls)
            }
            Err(errors) => {
                log::warn!("Unsplash reported errors: {:?}", errors);
                Ok(Vec::new())
            }
        }
    }

    fn search(&self, query: &str, total: u32) -> Result<Listing> {
        let url = format!("{}/search/photos", self.api_base_url);
        let mut params = vec![
            ("page", "1".to_string()),
            ("query", query.to_string()),
            ("per_page", total.to_string()),
        ];
        self.push_orientation(&mut params);

        let body = self.transport.get_json(&url, &params)?;
        let response: SearchResponse = serde_json::from_value(body)?;
        Ok(response.into_urls())
    }

    fn random(&self, total: u32) -> Result<Listing> {
        let url = format!("{}/photos/random", self.api_base_url);
        let mut params = vec![("count", total.to_string())];
        self.push_orientation(&mut params);

        let body = self.transport.get_json(&url, &params)?;
        let response: RandomResponse = serde_json::from_value(body)?;
        Ok(response.into_urls())
    }

    fn push_orientation(&self, params: &mut Vec<(&'static str, String)>) {
        if let Some(orientation) = self.orientation {
            params.push(("orientation", orientation.as_str().to_string()));
        }
    }
}
