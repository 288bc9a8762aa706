use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

use super::{blank, heading, image, paragraph, render_page, subheading, ACCENT, GOLD, MUTED};
use crate::animate::count_up;
use crate::app::App;

pub fn draw(frame: &mut Frame, app: &mut App, area: Rect, now: Instant) {
    let width = area.width as usize;
    let data = &app.content.philanthropy;
    let fraction = app.count_up_fraction(now);
    let mut lines = Vec::new();

    lines.push(blank());
    lines.push(heading(&data.hero.title, width));
    lines.extend(subheading(&data.hero.subtitle, width));
    lines.push(blank());
    let cell = (width / data.hero.stats.len().max(1)).max(1);
    let values: String = data
        .hero
        .stats
        .iter()
        .map(|s| format!("{:^cell$}", count_up(&s.value, fraction)))
        .collect();
    let labels: String = data.hero.stats.iter().map(|s| format!("{:^cell$}", s.label)).collect();
    lines.push(Line::from(Span::styled(values, Style::default().fg(GOLD).add_modifier(Modifier::BOLD))));
    lines.push(Line::from(Span::styled(labels, Style::default().fg(MUTED))));
    lines.push(image(app, &data.hero.video, Some("(video)")));
    lines.push(blank());

    // Cards; remember where the highlighted one sits so it can be kept
    // on screen.
    let mut cursor_span = (0, 0);
    for (i, charity) in data.charities.iter().enumerate() {
        let start = lines.len();
        let selected = i == app.charity_cursor;
        let marker = if selected { "▶ " } else { "  " };
        let name_style = if selected {
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(GOLD)),
            Span::styled(charity.name.clone(), name_style),
            Span::styled(format!("  [{}]", charity.category.label()), Style::default().fg(ACCENT)),
        ]));
        match &charity.image {
            Some(key) => lines.push(image(app, key, None)),
            None => lines.push(Line::from(Span::styled(
                format!("  ▢ {}", charity.image_placeholder),
                Style::default().fg(MUTED),
            ))),
        }
        lines.extend(paragraph(&charity.description, width));
        let stats = &charity.stats;
        lines.push(Line::from(vec![
            Span::styled(
                format!("    {}", count_up(&stats.primary.value, fraction)),
                Style::default().fg(GOLD),
            ),
            Span::styled(format!(" {}", stats.primary.label), Style::default().fg(MUTED)),
            Span::styled(
                format!("    {}", count_up(&stats.secondary.value, fraction)),
                Style::default().fg(GOLD),
            ),
            Span::styled(format!(" {}", stats.secondary.label), Style::default().fg(MUTED)),
        ]));
        if selected {
            lines.push(Line::from(Span::styled(
                "    Enter: Donate Now",
                Style::default().fg(Color::Black).bg(GOLD),
            )));
        }
        lines.push(blank());
        if selected {
            cursor_span = (start, lines.len());
        }
    }

    keep_visible(app, cursor_span, area.height);
    render_page(frame, app, area, lines);
}

/// Scroll just enough to show the highlighted card.
fn keep_visible(app: &mut App, (start, end): (usize, usize), height: u16) {
    let (start, end) = (start as u16, end as u16);
    if start < app.scroll {
        app.scroll = start;
    } else if end > app.scroll + height {
        app.scroll = end.saturating_sub(height).min(start);
    }
}
