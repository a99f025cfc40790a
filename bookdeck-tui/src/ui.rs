//! Rendering for the three views
//!
//! Everything drawn here is derived from `App`/`AppState` on each frame;
//! nothing is cached, so a dispatched intent is visible on the next draw.
//! Missing-field defaults (unknown author, unspecified genre, placeholder
//! description) are applied here, at render time.

use crate::app::App;
use bookdeck_core::{Book, View};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

const UNKNOWN_AUTHOR: &str = "Unknown";
const UNSPECIFIED_GENRE: &str = "Not specified";
const NO_DESCRIPTION: &str = "No description available.";

pub fn render(frame: &mut Frame, app: &mut App) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(2),
    ])
    .areas(frame.area());

    render_header(frame, app, header);
    match app.state.view {
        View::Catalog | View::Favorites => render_list(frame, app, body),
        View::Detail => render_detail(frame, app, body),
    }
    render_footer(frame, app, footer);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let title = match app.state.view {
        View::Catalog => " Catalog ",
        View::Favorites => " Favorites ",
        View::Detail => " Book ",
    };

    let search_style = if app.search_mode {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let genre = app.state.genre.as_deref().unwrap_or("All");

    let line = Line::from(vec![
        Span::raw("Search: "),
        Span::styled(format!("[{}]", app.search_input), search_style),
        Span::raw("   Genre: "),
        Span::styled(format!("[{}]", genre), Style::default().fg(Color::Cyan)),
    ]);

    let header = Paragraph::new(line).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(header, area);
}

fn render_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let books = app.visible_books();

    if books.is_empty() {
        let message = if app.loading {
            "Loading catalog...".to_string()
        } else if let Some(error) = &app.load_error {
            format!("Catalog unavailable: {error}")
        } else if app.state.view == View::Favorites {
            "No favorites yet. Press f on a book to add one.".to_string()
        } else {
            "No books match the current filter.".to_string()
        };
        let empty = Paragraph::new(message)
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = books
        .iter()
        .map(|book| book_row(book, app.state.is_favorite(book.id)))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, area, &mut app.list_state);
}

fn book_row(book: &Book, is_favorite: bool) -> ListItem<'static> {
    let heart = if is_favorite {
        Span::styled("\u{2665} ", Style::default().fg(Color::Red))
    } else {
        Span::raw("  ")
    };
    let author = book.primary_author().unwrap_or(UNKNOWN_AUTHOR).to_string();
    let genre = if book.bookshelves.is_empty() {
        UNSPECIFIED_GENRE.to_string()
    } else {
        book.bookshelves.join(", ")
    };

    ListItem::new(Line::from(vec![
        heart,
        Span::styled(book.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!("  by {author}")),
        Span::styled(format!("  ({genre})"), Style::default().fg(Color::DarkGray)),
    ]))
}

fn render_detail(frame: &mut Frame, app: &App, area: Rect) {
    let Some(book) = app.state.selected() else {
        return;
    };

    let author = book.primary_author().unwrap_or(UNKNOWN_AUTHOR);
    let genre = if book.bookshelves.is_empty() {
        UNSPECIFIED_GENRE.to_string()
    } else {
        book.bookshelves.join(", ")
    };
    let description = book.description.as_deref().unwrap_or(NO_DESCRIPTION);

    let mut lines = vec![
        Line::from(Span::styled(
            book.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(format!("Author:         {author}")),
        Line::from(format!("Genre:          {genre}")),
        Line::from(format!("Language:       {}", book.languages.join(", "))),
        Line::from(format!("Download count: {}", book.download_count)),
        Line::from(format!("ID:             {}", book.id)),
    ];
    if let Some(cover) = book.cover_url() {
        lines.push(Line::from(format!("Cover:          {cover}")));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Description:",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(description.to_string()));

    let detail = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Detail "));
    frame.render_widget(detail, area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();

    if app.state.view == View::Catalog {
        lines.push(pagination_line(app));
    }

    let help = match app.state.view {
        View::Catalog => {
            "/ search  g genre  \u{2190}\u{2192} page  1-9 jump  f favorite  \u{21B5} detail  \u{21B9} favorites  q quit"
        }
        View::Favorites => "f unfavorite  \u{21B5} detail  \u{21B9} catalog  q quit",
        View::Detail => "esc back  q quit",
    };
    lines.push(Line::from(Span::styled(
        help,
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines), area);
}

/// prev / numbered window / next, with disabled controls dimmed
fn pagination_line(app: &App) -> Line<'static> {
    let view = app.state.page_view();
    let enabled = Style::default();
    let disabled = Style::default().fg(Color::DarkGray);
    let active = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let mut spans = vec![Span::styled(
        "prev",
        if view.window.prev_enabled { enabled } else { disabled },
    )];
    for page in &view.window.pages {
        let style = if *page == view.current_page { active } else { enabled };
        spans.push(Span::raw(" "));
        spans.push(Span::styled(page.to_string(), style));
    }
    spans.push(Span::raw(" "));
    spans.push(Span::styled(
        "next",
        if view.window.next_enabled { enabled } else { disabled },
    ));
    spans.push(Span::styled(
        format!("   page {}/{}", view.current_page, view.total_pages),
        disabled,
    ));

    Line::from(spans)
}
