//! The Book type - one entry in the remote catalog

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// MIME key under which the listing exposes a cover image URL
const COVER_FORMAT: &str = "image/jpeg";

/// A single book as returned by the Gutendex listing endpoint
///
/// Unknown payload fields are ignored; absent optional fields default so a
/// sparse entry never fails the whole catalog load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    /// Stable identifier, unique within the catalog
    pub id: u64,

    /// Book title
    pub title: String,

    /// Authors, possibly empty
    #[serde(default)]
    pub authors: Vec<Author>,

    /// Genre labels (the listing calls these bookshelves)
    #[serde(default)]
    pub bookshelves: Vec<String>,

    /// Language codes (ISO 639-1)
    #[serde(default)]
    pub languages: Vec<String>,

    /// Lifetime download counter reported by the listing
    #[serde(default)]
    pub download_count: u64,

    /// MIME type to URL map; the cover image lives under "image/jpeg"
    #[serde(default)]
    pub formats: HashMap<String, String>,

    /// Summary text, rarely present
    #[serde(default)]
    pub description: Option<String>,
}

/// An author entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Author {
    pub name: String,
}

impl Book {
    /// Get the primary author (first entry), if any
    pub fn primary_author(&self) -> Option<&str> {
        self.authors.first().map(|a| a.name.as_str())
    }

    /// Get the cover image URL, if the listing provided one
    pub fn cover_url(&self) -> Option<&str> {
        self.formats.get(COVER_FORMAT).map(String::as_str)
    }

    /// Whether this book carries the given genre label
    pub fn has_genre(&self, genre: &str) -> bool {
        self.bookshelves.iter().any(|g| g == genre)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Book {
        Book {
            id: 84,
            title: "Frankenstein".to_string(),
            authors: vec![Author {
                name: "Shelley, Mary".to_string(),
            }],
            bookshelves: vec!["Gothic Fiction".to_string()],
            languages: vec!["en".to_string()],
            download_count: 12345,
            formats: HashMap::from([(
                "image/jpeg".to_string(),
                "https://example.org/84.jpg".to_string(),
            )]),
            description: None,
        }
    }

    #[test]
    fn test_accessors() {
        let book = sample();
        assert_eq!(book.primary_author(), Some("Shelley, Mary"));
        assert_eq!(book.cover_url(), Some("https://example.org/84.jpg"));
        assert!(book.has_genre("Gothic Fiction"));
        assert!(!book.has_genre("Science Fiction"));
    }

    #[test]
    fn test_sparse_entry_deserializes() {
        // Only id and title are required; everything else defaults
        let book: Book = serde_json::from_str(r#"{"id": 1, "title": "Bare"}"#).unwrap();
        assert_eq!(book.id, 1);
        assert!(book.authors.is_empty());
        assert!(book.bookshelves.is_empty());
        assert_eq!(book.download_count, 0);
        assert_eq!(book.primary_author(), None);
        assert_eq!(book.cover_url(), None);
    }

    #[test]
    fn test_serialization_round_trip() {
        let book = sample();
        let json = serde_json::to_string(&book).unwrap();
        let deserialized: Book = serde_json::from_str(&json).unwrap();
        assert_eq!(book, deserialized);
    }
}
