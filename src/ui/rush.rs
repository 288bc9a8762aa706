use std::time::Instant;

use chrono::NaiveDateTime;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Line as Segment},
        Block, Borders, Paragraph,
    },
    Frame,
};

use super::{blank, image, wrap, ACCENT, GOLD, MUTED};
use crate::app::{App, ROWS_PER_EVENT};
use crate::content::RushEvent;
use crate::timeline::{Orientation, Point};

/// Distance of date labels from their marker, in square units.
const LABEL_GAP: f64 = 3.0;

pub fn draw(frame: &mut Frame, app: &mut App, area: Rect, now: Instant) {
    let schedule_height = (area.height / 3).max(5);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),               // selected event
            Constraint::Min(6),                  // timeline
            Constraint::Length(schedule_height), // schedule
        ])
        .split(area);

    draw_popup(frame, app, chunks[0]);
    draw_timeline(frame, app, chunks[1], now);
    draw_schedule(frame, app, chunks[2]);
}

fn when(event: &RushEvent) -> String {
    event
        .timestamp()
        .map(|t| t.format("%a %b %-d · %-I:%M %p").to_string())
        .unwrap_or_else(|| event.datetime.clone())
}

fn access(event: &RushEvent) -> &'static str {
    if event.open {
        "Open to all"
    } else {
        "Invite only"
    }
}

fn is_past(event: &RushEvent, now: NaiveDateTime) -> bool {
    event.timestamp().is_some_and(|t| t <= now)
}

// ── Selected event ──────────────────────────────────────────────

fn draw_popup(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Event ")
        .border_style(Style::default().fg(MUTED));
    let width = block.inner(area).width as usize;

    let lines = match app.selection.index().and_then(|i| app.content.rush.get(i)) {
        Some(event) => {
            let mut lines = vec![
                Line::from(vec![
                    Span::styled(
                        event.name.clone(),
                        Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!("  {}", access(event)), Style::default().fg(ACCENT)),
                ]),
                Line::from(Span::styled(
                    format!("{}  ·  {}", when(event), event.location),
                    Style::default().fg(Color::Gray),
                )),
            ];
            let description = event.description.as_deref().unwrap_or_default();
            lines.extend(wrap(description, width).into_iter().take(2).map(Line::from));
            lines.resize(4, blank());
            lines.push(image(app, &event.image, None));
            lines
        }
        None => vec![Line::from(Span::styled(
            "No rush events are scheduled.",
            Style::default().fg(MUTED),
        ))],
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

// ── Timeline canvas ─────────────────────────────────────────────

fn draw_timeline(frame: &mut Frame, app: &mut App, area: Rect, now: Instant) {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    let layout = app.timeline_layout(inner, now);
    let viewport = App::timeline_viewport(inner);
    let clock_now = app.now();
    let selected = app.selection.index();
    let events = &app.content.rush;

    let title = format!(" Rush Timeline · {:.0}% ", layout.overall * 100.0);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(MUTED));

    // Canvas y grows upward; layout y grows downward.
    let flip = |p: &Point| (p.x, viewport.height - p.y);

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([0.0, viewport.width])
        .y_bounds([0.0, viewport.height])
        .paint(|ctx| {
            for pair in layout.curve.windows(2) {
                let ((x1, y1), (x2, y2)) = (flip(&pair[0]), flip(&pair[1]));
                ctx.draw(&Segment { x1, y1, x2, y2, color: MUTED });
            }
            ctx.layer();

            for pair in layout.progress.windows(2) {
                let ((x1, y1), (x2, y2)) = (flip(&pair[0]), flip(&pair[1]));
                ctx.draw(&Segment { x1, y1, x2, y2, color: GOLD });
            }
            ctx.layer();

            for (i, (point, event)) in layout.events.iter().zip(events).enumerate() {
                let (x, y) = flip(point);
                let is_selected = selected == Some(i);
                let color = if is_selected {
                    GOLD
                } else if is_past(event, clock_now) {
                    ACCENT
                } else {
                    Color::White
                };
                ctx.draw(&Circle {
                    x,
                    y,
                    radius: if is_selected { 1.6 } else { 0.8 },
                    color,
                });

                // alternate sides so neighbouring labels do not collide
                let side = if i % 2 == 0 { 1.0 } else { -1.0 };
                let (lx, ly) = match layout.orientation {
                    Orientation::Horizontal => (x - 2.0, y + side * LABEL_GAP),
                    Orientation::Vertical => (x + LABEL_GAP, y),
                };
                let label = event
                    .timestamp()
                    .map(|t| t.format("%b %-d").to_string())
                    .unwrap_or_default();
                let style = if is_selected {
                    Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ctx.print(lx, ly, Span::styled(label, style));
            }
        });
    frame.render_widget(canvas, area);
}

// ── Schedule list ───────────────────────────────────────────────

fn draw_schedule(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Schedule ")
        .border_style(Style::default().fg(MUTED));
    let inner = block.inner(area);
    let lines = schedule_lines(app, inner.width as usize, inner.height);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .scroll((app.schedule_scroll, 0)),
        area,
    );
}

/// Half a viewport of padding above and below lets every row reach the
/// centre, so the scroll offset names the centred row directly.
fn schedule_lines(app: &App, width: usize, height: u16) -> Vec<Line<'static>> {
    let pad = (height / 2) as usize;
    let now = app.now();
    let selected = app.selection.index();

    let mut lines = vec![blank(); pad];
    for (i, event) in app.content.rush.iter().enumerate() {
        let is_selected = selected == Some(i);
        let base = if is_selected {
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
        } else if is_past(event, now) {
            Style::default().fg(MUTED)
        } else {
            Style::default()
        };
        let marker = if is_selected { "▶ " } else { "  " };
        let mut rows = vec![
            Line::from(Span::styled(format!("{marker}{}", event.name), base)),
            Line::from(Span::styled(
                truncate(&format!("    {}  ·  {}  ·  {}", when(event), event.location, access(event)), width),
                if is_selected { base } else { Style::default().fg(Color::Gray) },
            )),
        ];
        rows.resize(ROWS_PER_EVENT as usize, blank());
        lines.extend(rows);
    }
    lines.extend(vec![blank(); pad]);
    lines
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}
