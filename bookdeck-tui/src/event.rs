//! Event loop: terminal input, debounced intents, and the startup fetch
//!
//! All state mutation happens on this task. Terminal events are read on a
//! dedicated blocking thread and forwarded over a channel; the debouncer
//! feeds Search intents through the same channel the key handler uses, so
//! there is exactly one consumer of user actions.

use crate::app::App;
use crate::ui;
use anyhow::Result;
use bookdeck_core::{AppState, BookRepository, Favorites};
use crossterm::event::{Event, KeyEventKind};
use ratatui::DefaultTerminal;
use tokio::sync::{mpsc, oneshot};

pub async fn run(
    mut terminal: DefaultTerminal,
    repository: BookRepository,
    favorites: Favorites,
    page_size: usize,
) -> Result<()> {
    let (intent_tx, mut intent_rx) = mpsc::unbounded_channel();
    let mut app = App::new(AppState::new(favorites, page_size), intent_tx);

    // Terminal events read on a blocking thread
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        while let Ok(event) = crossterm::event::read() {
            if event_tx.send(event).is_err() {
                break;
            }
        }
    });

    // One-shot startup fetch; the UI shows a loading state until it lands
    let (fetch_tx, mut fetch_rx) = oneshot::channel();
    tokio::spawn(async move {
        let _ = fetch_tx.send(repository.load().await);
    });

    loop {
        terminal.draw(|frame| ui::render(frame, &mut app))?;

        tokio::select! {
            Some(event) = event_rx.recv() => {
                if let Event::Key(key) = event {
                    if key.kind == KeyEventKind::Press {
                        app.handle_key(key);
                    }
                }
            }

            Some(intent) = intent_rx.recv() => app.dispatch(intent),

            result = &mut fetch_rx, if app.loading => {
                match result {
                    Ok(outcome) => app.catalog_loaded(outcome),
                    // Fetch task dropped without sending; treat as done
                    Err(_) => app.loading = false,
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
