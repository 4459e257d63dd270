// splashmark/src/source/response.rs
//! Shapes of the Unsplash JSON payloads, reduced to the fields we read.

use serde::Deserialize;

/// Photo URLs on success, the API's error messages otherwise.
pub type Listing = Result<Vec<String>, Vec<String>>;

#[derive(Debug, Deserialize)]
pub struct PhotoUrls {
    pub regular: String,
}

#[derive(Debug, Deserialize)]
pub struct Photo {
    pub urls: PhotoUrls,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrors {
    pub errors: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchPage {
    pub results: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SearchResponse {
    Error(ApiErrors),
    Page(SearchPage),
}

/// `/photos/random` answers with a bare object or a list depending on the
/// request, so both are accepted.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RandomResponse {
    Error(ApiErrors),
    Many(Vec<Photo>),
    One(Photo),
}

impl SearchResponse {
    pub fn into_urls(self) -> Listing {
        match self {
            SearchResponse::Error(e) => Err(e.errors),
            SearchResponse::Page(page) => Ok(page.results.into_iter().map(|p| p.urls.regular).collect()),
        }
    }
}

impl RandomResponse {
    pub fn into_urls(self) -> Listing {
        match self {
            RandomResponse::Error(e) => Err(e.errors),
            RandomResponse::Many(photos) => Ok(photos.into_iter().map(|p| p.urls.regular).collect()),
            RandomResponse::One(photo) => Ok(vec![photo.urls.regular]),
        }
    }
}
