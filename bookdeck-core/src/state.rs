//! Application state: catalog, filter state, favorites, and the view router
//!
//! User actions arrive as [`Intent`] values and flow through a single
//! dispatcher; the render layer derives everything it draws from
//! [`AppState::page_view`] and [`AppState::favorites_view`], so a mutation is
//! visible on the very next draw without any explicit refresh step.

use crate::engine::{self, PageWindow};
use crate::favorites::Favorites;
use crate::repository::genres_of;
use crate::types::Book;

/// Which of the three views is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Searchable, paginated catalog (initial state)
    #[default]
    Catalog,

    /// Favorites list, unpaginated, in catalog order
    Favorites,

    /// Single-book detail pane
    Detail,
}

/// A discrete user action, produced by the render layer
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Replace the search query (arrives debounced); resets the page
    Search(String),

    /// Replace the genre filter; resets the page
    ChangeGenre(Option<String>),

    /// Jump to a specific page number
    ChangePage(u32),

    /// Advance one page, if the window allows it
    NextPage,

    /// Go back one page, if the window allows it
    PrevPage,

    /// Flip a book's favorite status
    ToggleFavorite(u64),

    /// Open the detail view for a book
    SelectBook(u64),

    /// Return from the detail view to the catalog
    NavigateBack,

    /// Switch between the catalog and favorites views
    Navigate(View),
}

/// What the catalog view renders: the current slice plus its controls
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub books: Vec<Book>,
    pub current_page: u32,
    pub total_pages: u32,
    pub window: PageWindow,
}

/// Central application state
///
/// The catalog is write-once (installed after the startup fetch) and read
/// everywhere; filter and view state are mutated only through
/// [`AppState::dispatch`].
#[derive(Debug)]
pub struct AppState {
    catalog: Vec<Book>,
    genres: Vec<String>,
    favorites: Favorites,
    page_size: usize,

    /// Case-insensitive substring match against titles
    pub query: String,

    /// Exact-match genre label, or no genre filter
    pub genre: Option<String>,

    /// Current page, 1-indexed
    pub page: u32,

    /// Active view
    pub view: View,

    selected: Option<Book>,
}

impl AppState {
    /// Create state with an empty catalog; data views stay empty until
    /// [`AppState::install_catalog`] runs after the startup fetch.
    pub fn new(favorites: Favorites, page_size: usize) -> Self {
        Self {
            catalog: Vec::new(),
            genres: Vec::new(),
            favorites,
            page_size,
            query: String::new(),
            genre: None,
            page: 1,
            view: View::Catalog,
            selected: None,
        }
    }

    /// Install the fetched catalog and derive the genre index. Called once.
    pub fn install_catalog(&mut self, catalog: Vec<Book>) {
        self.genres = genres_of(&catalog);
        self.catalog = catalog;
    }

    /// The full catalog, in fetch order
    pub fn catalog(&self) -> &[Book] {
        &self.catalog
    }

    /// Sorted, deduplicated genre labels across the catalog
    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    /// The book shown by the detail view, if any
    pub fn selected(&self) -> Option<&Book> {
        self.selected.as_ref()
    }

    /// Whether a book is currently a favorite
    pub fn is_favorite(&self, id: u64) -> bool {
        self.favorites.has(id)
    }

    /// Number of favorites
    pub fn favorite_count(&self) -> usize {
        self.favorites.len()
    }

    /// Apply one user action
    pub fn dispatch(&mut self, intent: Intent) {
        match intent {
            Intent::Search(query) => {
                self.query = query;
                self.page = 1;
            }

            Intent::ChangeGenre(genre) => {
                self.genre = genre;
                self.page = 1;
            }

            Intent::ChangePage(page) => {
                if page >= 1 {
                    self.page = page;
                }
            }

            Intent::NextPage => {
                if self.page_view().window.next_enabled {
                    self.page += 1;
                }
            }

            Intent::PrevPage => {
                if self.page > 1 {
                    self.page -= 1;
                }
            }

            Intent::ToggleFavorite(id) => {
                // State stays mutated even if the write fails; the set is
                // reloaded from disk on next startup anyway.
                if let Err(e) = self.favorites.toggle(id) {
                    tracing::warn!("failed to persist favorites: {}", e);
                }
            }

            Intent::SelectBook(id) => {
                if let Some(book) = self.catalog.iter().find(|b| b.id == id) {
                    self.selected = Some(book.clone());
                    self.view = View::Detail;
                }
            }

            Intent::NavigateBack => self.navigate(View::Catalog),

            Intent::Navigate(view) => self.navigate(view),
        }
    }

    /// Switch the visible view. Filter state survives the switch, so
    /// returning from detail lands on the same page and query.
    ///
    /// The detail view needs a selected book, which only `SelectBook` sets;
    /// navigating there without one falls back to the catalog.
    pub fn navigate(&mut self, view: View) {
        if view == View::Detail && self.selected.is_none() {
            self.view = View::Catalog;
            return;
        }
        self.view = view;
        if view != View::Detail {
            self.selected = None;
        }
    }

    /// Derive the catalog view's current page from filter state
    pub fn page_view(&self) -> PageView {
        let filtered = engine::filter(&self.catalog, &self.query, self.genre.as_deref());
        let page = engine::paginate(&filtered, self.page, self.page_size);
        PageView {
            current_page: self.page,
            total_pages: page.total_pages,
            window: engine::page_window(self.page, page.total_pages),
            books: page.items,
        }
    }

    /// Derive the favorites view: favorite books in catalog order
    pub fn favorites_view(&self) -> Vec<Book> {
        self.catalog
            .iter()
            .filter(|book| self.favorites.has(book.id))
            .cloned()
            .collect()
    }
}
