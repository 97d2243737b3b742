//! Terminal UI rendering.
//!
//! All drawing logic lives here, separated from application state ([`App`])
//! and input handling ([`crate::input`]).  Everything shown comes from
//! [`PostCard`] fields, so no formatting decisions are made at draw time.
//!
//! ## For contributors
//!
//! * The layout is a card list on the left, the selected card's details on
//!   the right, and a one-line status bar at the bottom.
//! * Colours and styles are defined inline.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use socialfeed::{MediaKind, PostCard};

use crate::app::App;

/// Draw the complete UI for one frame.
pub fn draw(app: &mut App, frame: &mut Frame) {
    let [main_area, status_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());
    let [list_area, detail_area] =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
            .areas(main_area);

    draw_card_list(app, frame, list_area);
    draw_detail(app, frame, detail_area);
    draw_status_bar(app, frame, status_area);
}

fn media_glyph(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Image => "▣",
        MediaKind::VideoEmbed => "▶",
    }
}

fn card_line(card: &PostCard) -> Line<'_> {
    Line::from(vec![
        Span::styled(
            format!("{:<15}", card.time_label),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(" "),
        Span::styled(media_glyph(card.media_kind), Style::default().fg(Color::Magenta)),
        Span::raw(" "),
        Span::styled(&card.caption_preview, Style::default().fg(Color::White)),
        Span::raw("  "),
        Span::styled(
            format!("♥ {}  ✎ {}", card.likes_label, card.comments_label),
            Style::default().fg(Color::Cyan),
        ),
    ])
}

/// Render the scrollable card list.
fn draw_card_list(app: &mut App, frame: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = app
        .cards
        .iter()
        .map(|card| ListItem::new(card_line(card)))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" @{} ", app.handle))
                .borders(Borders::ALL),
        )
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .bg(Color::DarkGray),
        )
        .highlight_symbol("▸ ");

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

/// Render the selected card's full caption and links.
fn draw_detail(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default().title(" Post ").borders(Borders::ALL);

    let Some(card) = app.selected_card() else {
        frame.render_widget(Paragraph::new("").block(block), area);
        return;
    };

    let label = Style::default().fg(Color::DarkGray);
    let mut lines = vec![
        Line::from(card.caption.clone()),
        Line::raw(""),
        Line::from(vec![Span::styled("posted   ", label), Span::raw(&card.time_label)]),
        Line::from(vec![Span::styled("likes    ", label), Span::raw(&card.likes_label)]),
        Line::from(vec![Span::styled("comments ", label), Span::raw(&card.comments_label)]),
        Line::from(vec![Span::styled("media    ", label), Span::raw(&card.media_url)]),
    ];
    if let Some(link) = &card.permalink {
        lines.push(Line::from(vec![Span::styled("link     ", label), Span::raw(link)]));
    }
    lines.push(Line::from(vec![
        Span::styled("source   ", label),
        Span::raw(card.source_label),
    ]));

    let detail = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(detail, area);
}

/// Render the bottom status bar.
fn draw_status_bar(app: &App, frame: &mut Frame, area: Rect) {
    let status = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(&app.status, Style::default().fg(Color::Yellow)),
        Span::raw("  "),
        Span::styled(
            format!("{} posts", app.cards.len()),
            Style::default().fg(Color::Green),
        ),
        Span::raw("  q: quit  ↑/↓: scroll  Home/End: jump  o: link"),
    ]));
    frame.render_widget(status, area);
}
