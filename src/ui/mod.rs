mod about;
mod home;
mod philanthropy;
mod rush;

use std::time::Instant;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs},
    Frame,
};

use crate::app::{App, Page};
use crate::assets::Asset;
use crate::content::Quote;

pub const GOLD: Color = Color::Yellow;
pub const ACCENT: Color = Color::Red;
pub const MUTED: Color = Color::DarkGray;

/// Render the full TUI frame.
pub fn draw(frame: &mut Frame, app: &mut App, now: Instant) {
    app.screen_width = frame.area().width;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // navigation
            Constraint::Min(1),    // page
            Constraint::Length(1), // footer
            Constraint::Length(1), // help bar
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0]);
    match app.page {
        Page::Home => home::draw(frame, app, chunks[1], now),
        Page::About => about::draw(frame, app, chunks[1], now),
        Page::Rush => rush::draw(frame, app, chunks[1], now),
        Page::Philanthropy => philanthropy::draw(frame, app, chunks[1], now),
    }
    draw_footer(frame, app, chunks[2]);
    draw_help(frame, app, chunks[3]);

    if let Some(cursor) = app.menu {
        draw_menu(frame, cursor);
    }
}

// ── Chrome ──────────────────────────────────────────────────────

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(6), Constraint::Min(1), Constraint::Length(9)])
        .split(area);
    let bar = Style::default().bg(Color::Black);

    let brand: String = app.content.home.hero.letters.concat();
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!(" {brand}"),
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
        ))
        .style(bar),
        chunks[0],
    );

    let titles: Vec<Line> = Page::ALL
        .iter()
        .enumerate()
        .map(|(i, p)| Line::from(format!("{} {}", i + 1, p.title())))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.page.index())
        .style(bar.fg(Color::Gray))
        .highlight_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
        .divider(Span::styled("|", Style::default().fg(MUTED)));
    frame.render_widget(tabs, chunks[1]);

    frame.render_widget(
        Paragraph::new(Span::styled("m: menu ", Style::default().fg(MUTED)))
            .alignment(Alignment::Right)
            .style(bar),
        chunks[2],
    );
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let site = &app.content.site;
    let socials = site
        .socials
        .iter()
        .map(|l| l.text.as_str())
        .collect::<Vec<_>>()
        .join(" · ");
    let footer = Line::from(vec![
        Span::raw(format!(" {} ", site.copyright)),
        Span::styled("| ", Style::default().fg(MUTED)),
        Span::styled("D: Donate", Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
        Span::styled(" | ", Style::default().fg(MUTED)),
        Span::raw(socials),
    ]);
    frame.render_widget(
        Paragraph::new(footer).style(Style::default().fg(Color::Gray).bg(Color::Black)),
        area,
    );
}

fn draw_help(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(notice) = &app.notice {
        let bar = Paragraph::new(Line::from(Span::styled(
            format!(" {notice}"),
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(bar, area);
        return;
    }
    let help = match app.page {
        Page::Home => " q: quit | 1-4/Tab: pages | j/k: scroll | r/a: hero links | 3: schedule ",
        Page::About => " q: quit | 1-4/Tab: pages | j/k: scroll | g/G: top/bottom | PgUp/PgDn ",
        Page::Rush => " q: quit | 1-4/Tab: pages | ←/→: event | j/k or wheel: schedule | hover/click markers ",
        Page::Philanthropy => " q: quit | 1-4/Tab: pages | j/k: charity | Enter: donate | D: chapter donation ",
    };
    let help_bar = Paragraph::new(Line::from(Span::styled(help, Style::default().fg(MUTED))));
    frame.render_widget(help_bar, area);
}

fn draw_menu(frame: &mut Frame, cursor: usize) {
    let area = centered_rect(28, Page::ALL.len() as u16 + 2, frame.area());
    let items: Vec<ListItem> = Page::ALL
        .iter()
        .map(|p| ListItem::new(format!(" {:<14}{}", p.title(), p.route())))
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Menu ")
                .border_style(Style::default().fg(GOLD)),
        )
        .highlight_style(Style::default().fg(Color::Black).bg(GOLD));
    let mut state = ListState::default().with_selected(Some(cursor));
    frame.render_widget(Clear, area);
    frame.render_stateful_widget(list, area, &mut state);
}

// ── Shared page helpers ─────────────────────────────────────────

/// A `width` × `height` rect centred in `area`, shrunk to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Record the page geometry for scrolling and clamp the offset if the
/// content shrank (resize, reload).
pub fn fit_scroll(app: &mut App, line_count: usize, area: Rect) {
    app.page_line_count = line_count.min(u16::MAX as usize) as u16;
    app.viewport_height = area.height;
    let max_scroll = app.page_line_count.saturating_sub(app.viewport_height);
    if app.scroll > max_scroll {
        app.scroll = max_scroll;
    }
}

/// Render pre-wrapped page lines at the current scroll offset.
pub fn render_page(frame: &mut Frame, app: &mut App, area: Rect, lines: Vec<Line<'static>>) {
    fit_scroll(app, lines.len(), area);
    frame.render_widget(Paragraph::new(lines).scroll((app.scroll, 0)), area);
}

/// Display width of `text` in terminal cells.
pub fn text_width(text: &str) -> usize {
    Span::raw(text).width()
}

/// Greedy word wrap to `width` cells. Words longer than a line are kept
/// whole and overflow.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if text_width(&current) + 1 + text_width(word) <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Pad `text` on the left so it sits centred in `width` cells.
pub fn center(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text_width(text)) / 2;
    format!("{}{text}", " ".repeat(pad))
}

pub fn blank() -> Line<'static> {
    Line::default()
}

pub fn heading(title: &str, width: usize) -> Line<'static> {
    Line::from(Span::styled(
        center(title, width),
        Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
    ))
}

pub fn subheading(text: &str, width: usize) -> Vec<Line<'static>> {
    wrap(text, width.saturating_sub(4))
        .into_iter()
        .map(|l| Line::from(Span::styled(center(&l, width), Style::default().fg(Color::Gray))))
        .collect()
}

/// Wrapped body paragraph with a two-cell margin.
pub fn paragraph(text: &str, width: usize) -> Vec<Line<'static>> {
    wrap(text, width.saturating_sub(4))
        .into_iter()
        .map(|l| Line::from(format!("  {l}")))
        .collect()
}

pub fn quote(q: &Quote, width: usize) -> Vec<Line<'static>> {
    let italic = Style::default().add_modifier(Modifier::ITALIC);
    let mut lines: Vec<Line> = wrap(&q.text, width.saturating_sub(8))
        .into_iter()
        .map(|l| Line::from(Span::styled(center(&l, width), italic)))
        .collect();
    lines.push(Line::from(Span::styled(
        center(&q.author, width),
        Style::default().fg(GOLD),
    )));
    lines
}

/// One-line stand-in for an image.
pub fn image(app: &App, key: &str, caption: Option<&str>) -> Line<'static> {
    let mut spans = match app.assets.resolve(key) {
        Asset::Url(url) => vec![
            Span::styled("  ▣ ", Style::default().fg(GOLD)),
            Span::styled(url, Style::default().fg(Color::Cyan)),
        ],
        Asset::Placeholder => vec![
            Span::styled("  ▢ ", Style::default().fg(MUTED)),
            Span::styled(crate::assets::PLACEHOLDER, Style::default().fg(MUTED)),
        ],
    };
    if let Some(caption) = caption {
        spans.push(Span::styled(format!("  {caption}"), Style::default().fg(Color::Gray)));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_breaks_on_words() {
        assert_eq!(
            wrap("Poker. Cigars. Drinks. A true gentlemen's night.", 16),
            vec!["Poker. Cigars.", "Drinks. A true", "gentlemen's", "night."]
        );
    }

    #[test]
    fn wrap_keeps_long_words() {
        assert_eq!(wrap("supercalifragilistic ok", 5), vec!["supercalifragilistic", "ok"]);
    }

    #[test]
    fn wrap_empty_text() {
        assert!(wrap("   ", 10).is_empty());
    }

    #[test]
    fn center_pads_left() {
        assert_eq!(center("ΔKE", 9), "   ΔKE");
        assert_eq!(center("too wide", 4), "too wide");
    }

    #[test]
    fn centered_rect_fits_area() {
        let area = Rect::new(0, 0, 20, 6);
        assert_eq!(centered_rect(10, 4, area), Rect::new(5, 1, 10, 4));
        assert_eq!(centered_rect(40, 40, area), area);
    }
}
