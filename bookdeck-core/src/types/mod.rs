//! Core data types for the Bookdeck catalog

mod book;

pub use book::{Author, Book};
