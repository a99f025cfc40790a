//! Catalog loading from the remote listing endpoint
//!
//! The repository issues exactly one GET at startup. The remote API paginates
//! its own results; only the first page is ever requested. Transport and
//! decode failures are distinct so the caller can log them apart, but both
//! degrade the same way: the catalog stays empty and no retry is attempted.

use crate::error::FetchError;
use crate::types::Book;
use serde::Deserialize;
use std::collections::BTreeSet;

/// Default listing endpoint
pub const DEFAULT_ENDPOINT: &str = "https://gutendex.com/books";

/// Envelope of the listing response
#[derive(Debug, Deserialize)]
struct Listing {
    results: Vec<Book>,
}

/// Fetches the book catalog from a listing endpoint
#[derive(Debug, Clone)]
pub struct BookRepository {
    client: reqwest::Client,
    endpoint: String,
}

impl BookRepository {
    /// Create a repository targeting the given endpoint
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Fetch the full catalog once
    pub async fn load(&self) -> Result<Vec<Book>, FetchError> {
        tracing::debug!(endpoint = %self.endpoint, "fetching catalog");
        let body = self
            .client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let catalog = parse_listing(&body)?;
        tracing::info!(books = catalog.len(), "catalog loaded");
        Ok(catalog)
    }
}

impl Default for BookRepository {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

/// Parse a listing payload into the catalog
pub fn parse_listing(body: &str) -> Result<Vec<Book>, serde_json::Error> {
    let listing: Listing = serde_json::from_str(body)?;
    Ok(listing.results)
}

/// Union of every book's genre labels, sorted and deduplicated
pub fn genres_of(catalog: &[Book]) -> Vec<String> {
    let set: BTreeSet<&str> = catalog
        .iter()
        .flat_map(|book| book.bookshelves.iter().map(String::as_str))
        .collect();
    set.into_iter().map(str::to_owned).collect()
}
