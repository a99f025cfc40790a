//! Frontend application state: search buffer, cursor, key handling
//!
//! `App` wraps the core `AppState` with everything that only the terminal
//! surface cares about: the live search buffer (the core query trails it by
//! the debounce), the highlighted row, the loading flag for the startup
//! fetch, and the key-to-intent mapping.

use bookdeck_core::{AppState, Book, Debouncer, FetchError, Intent, View};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::ListState;
use std::time::Duration;
use tokio::sync::mpsc;

/// Search keystrokes coalesce into one filter recomputation after this pause
const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

pub struct App {
    pub state: AppState,

    /// Live search box contents; `state.query` lags it by the debounce
    pub search_input: String,

    /// Whether typed characters edit the search box
    pub search_mode: bool,

    /// Index into the genre list cycled by the genre keys; None = all genres
    pub genre_cursor: Option<usize>,

    /// Highlighted row in the visible list
    pub list_state: ListState,

    /// True until the startup fetch resolves or fails
    pub loading: bool,

    /// Startup fetch failure, rendered as an empty-state message
    pub load_error: Option<String>,

    pub should_quit: bool,

    debouncer: Debouncer,
    intents: mpsc::UnboundedSender<Intent>,
}

impl App {
    pub fn new(state: AppState, intents: mpsc::UnboundedSender<Intent>) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            state,
            search_input: String::new(),
            search_mode: false,
            genre_cursor: None,
            list_state,
            loading: true,
            load_error: None,
            should_quit: false,
            debouncer: Debouncer::new(SEARCH_DEBOUNCE),
            intents,
        }
    }

    /// Outcome of the one-shot startup fetch
    pub fn catalog_loaded(&mut self, result: Result<Vec<Book>, FetchError>) {
        self.loading = false;
        match result {
            Ok(catalog) => {
                self.state.install_catalog(catalog);
                self.clamp_cursor();
            }
            Err(e) => {
                tracing::error!("failed to load catalog: {}", e);
                self.load_error = Some(e.to_string());
            }
        }
    }

    /// Books the active list view is showing
    pub fn visible_books(&self) -> Vec<Book> {
        match self.state.view {
            View::Catalog => self.state.page_view().books,
            View::Favorites => self.state.favorites_view(),
            View::Detail => Vec::new(),
        }
    }

    fn highlighted_book(&self) -> Option<Book> {
        let books = self.visible_books();
        self.list_state
            .selected()
            .and_then(|i| books.get(i).cloned())
    }

    /// Apply an intent and keep the highlight within the new list bounds
    pub fn dispatch(&mut self, intent: Intent) {
        self.state.dispatch(intent);
        self.clamp_cursor();
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.search_mode {
            self.handle_search_key(key);
            return;
        }

        match self.state.view {
            View::Detail => self.handle_detail_key(key),
            View::Catalog | View::Favorites => self.handle_list_key(key),
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.search_mode = false,
            KeyCode::Char(c) => {
                self.search_input.push(c);
                self.schedule_search();
            }
            KeyCode::Backspace => {
                self.search_input.pop();
                self.schedule_search();
            }
            _ => {}
        }
    }

    /// Arm the debounced Search intent with the current buffer
    fn schedule_search(&mut self) {
        let intents = self.intents.clone();
        let query = self.search_input.clone();
        self.debouncer.schedule(move || {
            let _ = intents.send(Intent::Search(query));
        });
    }

    fn handle_detail_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => {
                self.dispatch(Intent::NavigateBack)
            }
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,

            KeyCode::Char('/') => {
                if self.state.view == View::Catalog {
                    self.search_mode = true;
                }
            }

            KeyCode::Tab => {
                let target = if self.state.view == View::Catalog {
                    View::Favorites
                } else {
                    View::Catalog
                };
                self.dispatch(Intent::Navigate(target));
            }

            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),

            KeyCode::Left | KeyCode::Char('h') => {
                if self.state.view == View::Catalog {
                    self.dispatch(Intent::PrevPage);
                }
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if self.state.view == View::Catalog {
                    self.dispatch(Intent::NextPage);
                }
            }

            KeyCode::Char('g') => self.cycle_genre(1),
            KeyCode::Char('G') => self.cycle_genre(-1),

            KeyCode::Char('f') | KeyCode::Char(' ') => {
                if let Some(book) = self.highlighted_book() {
                    self.dispatch(Intent::ToggleFavorite(book.id));
                }
            }

            KeyCode::Enter => {
                if let Some(book) = self.highlighted_book() {
                    self.dispatch(Intent::SelectBook(book.id));
                }
            }

            // Digits jump to the page buttons the window is showing
            KeyCode::Char(c @ '1'..='9') => {
                if self.state.view == View::Catalog {
                    let page = c.to_digit(10).unwrap_or(1);
                    if self.state.page_view().window.pages.contains(&page) {
                        self.dispatch(Intent::ChangePage(page));
                    }
                }
            }

            _ => {}
        }
    }

    /// Move the highlight, bounds-checked against the visible list
    fn move_cursor(&mut self, delta: i64) {
        let len = self.visible_books().len();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as i64;
        let next = (current + delta).clamp(0, len as i64 - 1) as usize;
        self.list_state.select(Some(next));
    }

    fn clamp_cursor(&mut self) {
        let len = self.visible_books().len();
        if len == 0 {
            self.list_state.select(None);
        } else {
            let selected = self.list_state.selected().unwrap_or(0);
            self.list_state.select(Some(selected.min(len - 1)));
        }
    }

    /// Cycle the genre filter: all genres, then each label in index order
    fn cycle_genre(&mut self, delta: i64) {
        let count = self.state.genres().len();
        if count == 0 {
            return;
        }
        let current = match self.genre_cursor {
            None => 0,
            Some(i) => i as i64 + 1,
        };
        let next = (current + delta).rem_euclid(count as i64 + 1) as usize;
        self.genre_cursor = next.checked_sub(1);
        let label = self.genre_cursor.map(|i| self.state.genres()[i].clone());
        self.dispatch(Intent::ChangeGenre(label));
    }
}
