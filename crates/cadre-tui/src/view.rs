//! Drawing: set and page tab bars, the slot list, the detail pane, and the
//! help popup.

use cadre_core::{EntityAttributes, EntityDataSource, Page};
use cadre_nav::{RenderRequest, catalog};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap};

use crate::app::CadreApp;

/// Main draw function.
pub fn draw<S: EntityDataSource>(frame: &mut Frame, app: &CadreApp<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Set tab bar
            Constraint::Length(1), // Page tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    if let Some(request) = app.frame() {
        draw_set_bar(frame, request, chunks[0]);
        draw_page_bar(frame, request, chunks[1]);
        draw_content(frame, app, request, chunks[2]);
    } else {
        let closed = Paragraph::new("Roster panel closed.");
        frame.render_widget(closed, chunks[2]);
    }

    let status =
        Paragraph::new(app.status()).style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(status, chunks[3]);

    if app.show_help {
        draw_help_popup(frame);
    }
}

/// Draw the entity-set tab bar.
fn draw_set_bar(frame: &mut Frame, request: &RenderRequest, area: Rect) {
    let mut spans = Vec::new();
    for (i, set) in cadre_core::EntitySet::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
        let style = if *set == request.set {
            Style::default().fg(Color::White).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(set.label(), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the page tab bar for the current set.
fn draw_page_bar(frame: &mut Frame, request: &RenderRequest, area: Rect) {
    let mut spans = Vec::new();
    for (i, page) in catalog::pages_for(request.set).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
        let style = if *page == request.page {
            Style::default().fg(Color::Yellow).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!("[{}]{}", i + 1, page.label()), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the slot list and detail pane side by side.
fn draw_content<S: EntityDataSource>(
    frame: &mut Frame,
    app: &CadreApp<S>,
    request: &RenderRequest,
    area: Rect,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(0)])
        .split(area);

    draw_slot_list(frame, app, request, columns[0]);
    draw_detail(frame, app, request, columns[1]);
}

/// Draw the entity slot list, windowed to the set's visible slot count.
fn draw_slot_list<S: EntityDataSource>(
    frame: &mut Frame,
    app: &CadreApp<S>,
    request: &RenderRequest,
    area: Rect,
) {
    let entities = app.controller().entities();
    let window = catalog::visible_slots(request.set);
    let selected = request.slot.unwrap_or(0);
    let start = if selected < window {
        0
    } else {
        selected + 1 - window
    };

    let items: Vec<ListItem> = entities
        .iter()
        .enumerate()
        .skip(start)
        .take(window)
        .map(|(slot, entity)| {
            let line = format!("{} {} ({})", slot + 1, entity.name, entity.status);
            let style = if request.slot == Some(slot) {
                Style::default().fg(Color::Black).bg(Color::White)
            } else {
                Style::default()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    let title = format!(
        " {} {}/{} ",
        request.set,
        request.slot.map(|s| s + 1).unwrap_or(0),
        entities.len()
    );
    let list = List::new(items).block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(list, area);
}

/// Draw the detail pane for the current page and entity.
fn draw_detail<S: EntityDataSource>(
    frame: &mut Frame,
    app: &CadreApp<S>,
    request: &RenderRequest,
    area: Rect,
) {
    let block = Block::default()
        .title(format!(" {} ", request.page))
        .borders(Borders::ALL);

    let Some(entity) = &request.entity else {
        let empty = Paragraph::new(format!("No entities in {}.", request.set))
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, area);
        return;
    };

    let lines = match app.attributes() {
        Some(attrs) => page_lines(request.page, entity, attrs),
        None => vec![Line::from("No attribute data available.")],
    };

    let detail = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(detail, area);
}

/// Content lines for one page of one entity.
fn page_lines<'a>(
    page: Page,
    entity: &'a cadre_core::Entity,
    attrs: &'a EntityAttributes,
) -> Vec<Line<'a>> {
    match page {
        Page::Main => {
            let mut lines = vec![
                Line::from(Span::styled(
                    entity.name.as_str(),
                    Style::default().bold(),
                )),
                Line::from(format!("Status: {}", entity.status)),
                Line::from(format!("Portrait: #{}", entity.portrait)),
            ];
            if entity.conditions.is_empty() {
                lines.push(Line::from("No active conditions."));
            } else {
                lines.push(Line::from(format!(
                    "Conditions: {}",
                    entity.conditions.join(", ")
                )));
            }
            lines
        }
        Page::Personality => vec![Line::from(attrs.personality.as_str())],
        Page::Contacts => string_lines(&attrs.contacts, "No known contacts."),
        Page::Secrets => string_lines(&attrs.secrets, "No secrets on file."),
        Page::Gear => string_lines(&attrs.gear, "No gear assigned."),
        Page::Investigations => string_lines(&attrs.investigations, "No open investigations."),
        Page::Likes => string_lines(&attrs.likes, "Nothing recorded."),
        Page::History => string_lines(&attrs.history, "No history on file."),
        Page::Stats => {
            if attrs.stats.is_empty() {
                vec![Line::from("No stats recorded.")]
            } else {
                attrs
                    .stats
                    .iter()
                    .map(|(name, value)| Line::from(format!("{name}: {value}")))
                    .collect()
            }
        }
    }
}

/// Bulleted lines from a string list, or a single placeholder.
fn string_lines<'a>(items: &'a [String], empty: &'a str) -> Vec<Line<'a>> {
    if items.is_empty() {
        vec![Line::from(empty)]
    } else {
        items
            .iter()
            .map(|item| Line::from(format!("- {item}")))
            .collect()
    }
}

/// Create a centered rectangle as a percentage of the given area.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Draw the help popup overlay.
fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(60, 60, frame.area());

    let help_text = vec![
        Line::from("Keyboard Shortcuts").style(Style::default().bold()),
        Line::from(""),
        Line::from("  Tab / PgDn     Next set (resumes its last slot)"),
        Line::from("  BackTab / PgUp Previous set"),
        Line::from("  S / P / H / R  Jump to a set (starts at slot 1)"),
        Line::from("  Left / Right   Previous / next page (wraps)"),
        Line::from("  Up / Down      Previous / next entity (wraps)"),
        Line::from("  1-9            Select page by number"),
        Line::from("  Enter          Re-confirm current set"),
        Line::from("  ?              Toggle this help"),
        Line::from("  q / Esc        Close the panel and quit"),
    ];

    let popup = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}
