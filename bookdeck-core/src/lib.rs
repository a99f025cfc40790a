//! Bookdeck Core Library
//!
//! State logic for the Bookdeck catalog viewer: the book data model, the
//! one-shot catalog repository, the filter/paginate engine, the persisted
//! favorites store, and the view router with its intent dispatcher. The
//! render layer lives in `bookdeck-tui` and talks to this crate exclusively
//! through [`Intent`] values and the derived view accessors on [`AppState`].

pub mod debounce;
pub mod engine;
pub mod error;
pub mod favorites;
pub mod repository;
pub mod state;
pub mod types;

pub use debounce::Debouncer;
pub use engine::{Page, PageWindow, DEFAULT_PAGE_SIZE};
pub use error::{BookdeckError, FetchError, Result, StorageError};
pub use favorites::Favorites;
pub use repository::{BookRepository, DEFAULT_ENDPOINT};
pub use state::{AppState, Intent, PageView, View};
pub use types::{Author, Book};
