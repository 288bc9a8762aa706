use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

use super::{blank, center, heading, image, paragraph, quote, render_page, subheading, GOLD, MUTED};
use crate::animate::count_up;
use crate::app::App;
use crate::content::TextBlock;

pub fn draw(frame: &mut Frame, app: &mut App, area: Rect, now: Instant) {
    let width = area.width as usize;
    let about = &app.content.about;
    let mut lines = Vec::new();

    lines.push(blank());
    lines.push(Line::from(Span::styled(center(&about.hero.est, width), Style::default().fg(MUTED))));
    lines.push(heading(&about.hero.title, width));
    lines.extend(subheading(&about.hero.subtitle, width));
    lines.push(image(app, &about.hero.image, None));
    lines.push(blank());

    text_block(&mut lines, &about.history, width);

    lines.push(heading(&about.stats.title, width));
    lines.extend(subheading(&about.stats.subtitle, width));
    lines.push(blank());
    let fraction = app.count_up_fraction(now);
    let cell = (width / about.stats.items.len().max(1)).max(1);
    let values: String = about
        .stats
        .items
        .iter()
        .map(|s| format!("{:^cell$}", count_up(&s.value, fraction)))
        .collect();
    let labels: String = about
        .stats
        .items
        .iter()
        .map(|s| format!("{:^cell$}", s.label))
        .collect();
    lines.push(Line::from(Span::styled(values, Style::default().fg(GOLD).add_modifier(Modifier::BOLD))));
    lines.push(Line::from(Span::styled(labels, Style::default().fg(MUTED))));
    lines.push(blank());

    lines.extend(quote(&about.quote, width));
    lines.push(blank());

    lines.push(heading(&about.values.title, width));
    lines.extend(subheading(&about.values.subtitle, width));
    lines.push(blank());
    for value in &about.values.items {
        lines.push(Line::from(Span::styled(
            format!("  ◆ {}", value.title),
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
        )));
        for text in &value.content {
            lines.extend(paragraph(text, width));
        }
        lines.push(blank());
    }

    lines.push(heading(&about.gallery.title, width));
    lines.extend(subheading(&about.gallery.subtitle, width));
    lines.push(blank());
    for item in &about.gallery.items {
        lines.push(image(app, &item.src, None));
        lines.push(Line::from(vec![
            Span::styled(format!("    {}", item.title), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(format!("  {}", item.description), Style::default().fg(MUTED)),
        ]));
    }
    lines.push(blank());

    text_block(&mut lines, &about.brotherhood, width);

    lines.push(heading(&about.journey.title, width));
    lines.push(blank());
    for text in &about.journey.paragraphs {
        lines.extend(paragraph(text, width));
        lines.push(blank());
    }
    for key in &about.journey.images {
        lines.push(image(app, key, None));
    }
    lines.push(blank());

    lines.extend(quote(&about.closing_quote, width));
    lines.push(blank());

    text_block(&mut lines, &about.why_join, width);

    render_page(frame, app, area, lines);
}

fn text_block(lines: &mut Vec<Line<'static>>, block: &TextBlock, width: usize) {
    lines.push(heading(&block.title, width));
    lines.push(blank());
    for text in &block.content {
        lines.extend(paragraph(text, width));
        lines.push(blank());
    }
}
