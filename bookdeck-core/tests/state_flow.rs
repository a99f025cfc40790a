//! End-to-end state flow tests for bookdeck-core
//!
//! These tests drive the dispatcher the way the render layer does and check
//! the derived views, plus property tests over the engine.
//!
//! ## Test Strategy
//!
//! 1. **Flow tests**: search/genre/page/favorite intents applied in sequence
//!    produce consistent derived views
//! 2. **Property tests**: pagination partitions the filtered list exactly;
//!    filtering only returns title matches
//! 3. **Persistence tests**: a favorites set survives a restart of the state

use bookdeck_core::engine::{filter, page_window, paginate};
use bookdeck_core::{AppState, Author, Book, Favorites, Intent, View};
use proptest::prelude::*;
use tempfile::TempDir;

// =============================================================================
// Helpers
// =============================================================================

fn book(id: u64, title: &str, genres: &[&str]) -> Book {
    Book {
        id,
        title: title.to_string(),
        authors: vec![Author {
            name: format!("Author {id}"),
        }],
        bookshelves: genres.iter().map(|g| g.to_string()).collect(),
        languages: vec!["en".to_string()],
        download_count: id * 10,
        formats: Default::default(),
        description: None,
    }
}

fn numbered_catalog(n: u64) -> Vec<Book> {
    (1..=n).map(|i| book(i, &format!("Book {i}"), &[])).collect()
}

// =============================================================================
// Flow tests
// =============================================================================

#[test]
fn test_twenty_five_books_paginate_to_three_pages() {
    let dir = TempDir::new().unwrap();
    let favorites = Favorites::load(dir.path().join("favorites.json"));
    let mut state = AppState::new(favorites, 10);
    state.install_catalog(numbered_catalog(25));

    let view = state.page_view();
    assert_eq!(view.total_pages, 3);
    assert_eq!(view.books.len(), 10);

    // Requesting a page past the end yields an empty slice, not an error
    state.dispatch(Intent::ChangePage(4));
    let view = state.page_view();
    assert!(view.books.is_empty());
    assert_eq!(view.total_pages, 3);
}

#[test]
fn test_search_then_paginate_then_back_from_detail() {
    let dir = TempDir::new().unwrap();
    let favorites = Favorites::load(dir.path().join("favorites.json"));
    let mut state = AppState::new(favorites, 2);
    state.install_catalog(vec![
        book(1, "A Tale of Two Cities", &["Classics"]),
        book(2, "The Tale of Peter Rabbit", &["Children"]),
        book(3, "Dracula", &["Gothic Fiction"]),
        book(4, "Two Tales", &["Classics"]),
        book(5, "Old Tales Retold", &["Classics"]),
    ]);

    state.dispatch(Intent::Search("tale".to_string()));
    let view = state.page_view();
    assert_eq!(view.total_pages, 2);
    assert_eq!(
        view.books.iter().map(|b| b.id).collect::<Vec<_>>(),
        vec![1, 2]
    );

    state.dispatch(Intent::NextPage);
    let view = state.page_view();
    assert_eq!(
        view.books.iter().map(|b| b.id).collect::<Vec<_>>(),
        vec![4, 5]
    );

    // Opening a detail view and coming back keeps query and page
    state.dispatch(Intent::SelectBook(4));
    assert_eq!(state.view, View::Detail);
    state.dispatch(Intent::NavigateBack);
    assert_eq!(state.view, View::Catalog);
    assert_eq!(state.query, "tale");
    assert_eq!(state.page, 2);
}

#[test]
fn test_favorite_toggle_visible_without_reload() {
    let dir = TempDir::new().unwrap();
    let favorites = Favorites::load(dir.path().join("favorites.json"));
    let mut state = AppState::new(favorites, 10);
    state.install_catalog(numbered_catalog(50));

    state.dispatch(Intent::Navigate(View::Favorites));
    state.dispatch(Intent::ToggleFavorite(42));
    assert_eq!(
        state.favorites_view().iter().map(|b| b.id).collect::<Vec<_>>(),
        vec![42]
    );

    state.dispatch(Intent::ToggleFavorite(42));
    assert!(state.favorites_view().is_empty());
}

#[test]
fn test_favorites_survive_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("favorites.json");

    {
        let mut state = AppState::new(Favorites::load(&path), 10);
        state.install_catalog(numbered_catalog(10));
        state.dispatch(Intent::ToggleFavorite(3));
        state.dispatch(Intent::ToggleFavorite(7));
    }

    let mut state = AppState::new(Favorites::load(&path), 10);
    state.install_catalog(numbered_catalog(10));
    assert!(state.is_favorite(3));
    assert!(state.is_favorite(7));
    assert_eq!(state.favorite_count(), 2);

    state.dispatch(Intent::ToggleFavorite(3));
    assert!(!state.is_favorite(3));
}

#[test]
fn test_page_window_shifts_near_boundary() {
    let window = page_window(9, 10);
    assert_eq!(window.pages, vec![6, 7, 8, 9, 10]);
    assert!(window.next_enabled);
    assert!(!page_window(10, 10).next_enabled);
}

// =============================================================================
// Property tests
// =============================================================================

fn arb_catalog() -> impl Strategy<Value = Vec<Book>> {
    prop::collection::vec("[a-zA-Z ]{0,12}", 0..60).prop_map(|titles| {
        titles
            .into_iter()
            .enumerate()
            .map(|(i, title)| book(i as u64 + 1, &title, &[]))
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_pages_partition_the_filtered_list(
        catalog in arb_catalog(),
        query in "[a-zA-Z]{0,3}",
        page_size in 1usize..12,
    ) {
        let filtered = filter(&catalog, &query, None);
        let total = paginate(&filtered, 1, page_size).total_pages;

        let mut reassembled = Vec::new();
        for page in 1..=total {
            reassembled.extend(paginate(&filtered, page, page_size).items);
        }
        prop_assert_eq!(reassembled, filtered);
    }

    #[test]
    fn prop_filter_returns_only_title_matches(
        catalog in arb_catalog(),
        query in "[a-zA-Z]{0,4}",
    ) {
        let hits = filter(&catalog, &query, None);
        let needle = query.to_lowercase();
        for hit in &hits {
            prop_assert!(hit.title.to_lowercase().contains(&needle));
        }
        if query.is_empty() {
            prop_assert_eq!(hits.len(), catalog.len());
        }
    }

    #[test]
    fn prop_window_never_exceeds_five_and_contains_current(
        current in 1u32..200,
        extra in 0u32..200,
    ) {
        let total = current + extra;
        let window = page_window(current, total);
        prop_assert!(window.pages.len() <= 5);
        prop_assert!(window.pages.contains(&current));
        prop_assert_eq!(window.next_enabled, current < total);
        prop_assert_eq!(window.prev_enabled, current > 1);
    }
}
