use std::time::{Duration, Instant};

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

use super::{blank, center, fit_scroll, quote, subheading, text_width, GOLD, MUTED};
use crate::animate::count_up;
use crate::app::{App, GRID_COLUMNS, GRID_MAX_MOVE, GRID_ROWS, PANEL_ROWS};
use crate::motion;

/// How long each rotating caption word stays up.
const WORD_INTERVAL: Duration = Duration::from_secs(2);
const TILE_WIDTH: usize = 16;

pub fn draw(frame: &mut Frame, app: &mut App, area: Rect, now: Instant) {
    let width = area.width as usize;
    let mut lines = Vec::new();

    // ── Hero ────────────────────────────────────────────────────
    let hero = &app.content.home.hero;
    lines.push(blank());
    lines.push(Line::from(Span::styled(
        center(&hero.letters.join("   "), width),
        Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        center(&hero.title, width),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        center(&app.content.site.chapter, width),
        Style::default().fg(MUTED),
    )));
    if !hero.subtitle.is_empty() {
        lines.extend(subheading(&hero.subtitle, width));
    }
    let buttons = hero
        .buttons
        .iter()
        .map(|b| format!("[{}] {} →", hotkey(&b.text), b.text))
        .collect::<Vec<_>>()
        .join("     ");
    lines.push(Line::from(Span::styled(center(&buttons, width), Style::default().fg(GOLD))));
    lines.push(blank());
    lines.push(carousel_strip(app, width, now));
    lines.push(carousel_dots(app, width));
    lines.push(blank());

    // ── Countdown ───────────────────────────────────────────────
    let site = &app.content.site;
    lines.push(Line::from(center(&site.countdown_label, width)));
    let left = app.countdown.left();
    let clock_style = if left.is_zero() {
        Style::default().fg(MUTED)
    } else {
        Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
    };
    lines.push(Line::from(Span::styled(center(&left.to_string(), width), clock_style)));
    lines.push(Line::from(Span::styled(
        center("DAYS   HRS   MIN   SEC", width),
        Style::default().fg(MUTED),
    )));
    lines.push(Line::from(Span::styled(
        center("[3] See Our Schedule!", width),
        Style::default().fg(GOLD),
    )));
    lines.push(blank());

    // ── Quote ───────────────────────────────────────────────────
    lines.extend(quote(&app.content.home.quote, width));
    lines.push(blank());

    // ── Photo wall ──────────────────────────────────────────────
    lines.extend(photo_wall(app, width));
    lines.push(blank());

    // ── Triptych ────────────────────────────────────────────────
    let panels = app.content.home.panels.len();
    let section_top = lines.len();
    let section_height = panels * PANEL_ROWS as usize;
    fit_scroll(app, section_top + section_height + 1, area);

    let active = motion::active_panel(
        section_top as f64 - app.scroll as f64,
        section_height as f64,
        area.height as f64,
    );
    let fraction = app.count_up_fraction(now);
    let elapsed = now.saturating_duration_since(app.page_shown_at);
    for (i, panel) in app.content.home.panels.iter().enumerate() {
        let lit = active == Some(i);
        let title_style = if lit {
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED).add_modifier(Modifier::BOLD)
        };
        let mut block = vec![
            Line::from(Span::styled(format!("  {}", panel.title.to_uppercase()), title_style)),
            super::image(app, &panel.image, None),
        ];
        for caption in &panel.lines {
            block.push(Line::from(format!("    {}", count_up(caption, fraction))));
        }
        if !panel.rotating.is_empty() {
            let word = &panel.rotating[motion::rotation_index(elapsed, WORD_INTERVAL, panel.rotating.len())];
            block.push(Line::from(vec![
                Span::raw("    Brothers at "),
                Span::styled(word.clone(), Style::default().fg(GOLD)),
            ]));
        }
        block.resize(PANEL_ROWS as usize, blank());
        lines.extend(block);
    }
    lines.push(blank());

    frame.render_widget(
        ratatui::widgets::Paragraph::new(lines).scroll((app.scroll, 0)),
        area,
    );
}

/// First letter of a button label, used as its key.
fn hotkey(text: &str) -> char {
    text.chars().next().map_or(' ', |c| c.to_ascii_lowercase())
}

/// The current and upcoming hero images side by side, shifted left by the
/// slide offset.
fn carousel_strip(app: &App, width: usize, now: Instant) -> Line<'static> {
    let Some(current) = app.carousel.current() else {
        return Line::from(Span::styled(center(crate::assets::PLACEHOLDER, width), Style::default().fg(MUTED)));
    };
    let label = |key: &str| center(app.assets.resolve(key).label(), width);
    let mut strip = pad_to(&label(current), width);
    if let Some(next) = app.carousel.upcoming() {
        strip.push_str(&pad_to(&label(next), width));
    }
    let shift = (app.carousel.offset(now) * width as f64).round() as usize;
    let visible: String = strip.chars().skip(shift).take(width).collect();
    Line::from(Span::styled(visible, Style::default().fg(ratatui::style::Color::Cyan)))
}

fn carousel_dots(app: &App, width: usize) -> Line<'static> {
    if app.carousel.is_empty() {
        return blank();
    }
    let dots = (0..app.carousel.len())
        .map(|i| if i == app.carousel.index() { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ");
    Line::from(Span::styled(center(&dots, width), Style::default().fg(MUTED)))
}

fn pad_to(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text_width(text));
    format!("{text}{}", " ".repeat(fill))
}

/// Four rows of tiles, each row drifting sideways by its settled offset.
fn photo_wall(app: &App, width: usize) -> Vec<Line<'static>> {
    let grid = &app.content.home.grid;
    if grid.is_empty() {
        return Vec::new();
    }
    (0..GRID_ROWS)
        .map(|row| {
            let tiles: String = (0..GRID_COLUMNS)
                .filter_map(|col| grid.get(row * GRID_COLUMNS + col))
                .map(|key| format!("[{:^w$}]", tile_name(key), w = TILE_WIDTH - 2))
                .collect();
            let offset = app.grid_offsets.get(row).copied().unwrap_or(0.0);
            let indent = (GRID_MAX_MOVE / 2.0 + offset).round().max(0.0) as usize;
            let line: String = " ".repeat(indent).chars().chain(tiles.chars()).take(width).collect();
            Line::from(Span::styled(line, Style::default().fg(MUTED)))
        })
        .collect()
}

/// `images/allGrads.jpg` → `allGrads`, trimmed to fit a tile.
fn tile_name(key: &str) -> String {
    let file = key.rsplit('/').next().unwrap_or(key);
    let stem = file.rsplit_once('.').map_or(file, |(stem, _)| stem);
    stem.chars().take(TILE_WIDTH - 2).collect()
}
