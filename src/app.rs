use std::time::{Duration, Instant};

use chrono::NaiveDateTime;
use clap::ValueEnum;
use ratatui::layout::Rect;
use tracing::{debug, info};

use crate::animate::Tween;
use crate::assets::AssetResolver;
use crate::carousel::Carousel;
use crate::content::{parse_datetime, Content};
use crate::countdown::{Clock, Countdown};
use crate::motion;
use crate::timeline::selection::{self, Selection};
use crate::timeline::{spacing, Point, TimelineLayout, Viewport};

/// Terminal cells are roughly twice as tall as they are wide; geometry is
/// done in square units, so rows count double.
pub const CELL_ASPECT: f64 = 2.0;
/// Rows each event occupies in the rush schedule list.
pub const ROWS_PER_EVENT: u16 = 3;
/// Rows each home page triptych panel occupies.
pub const PANEL_ROWS: u16 = 6;
/// Photo wall drift range, in cells.
pub const GRID_MAX_MOVE: f64 = 12.0;
pub const GRID_ROWS: usize = 4;
pub const GRID_COLUMNS: usize = 7;

const COUNT_UP_DURATION: Duration = Duration::from_millis(1500);
const COUNT_UP_DELAY: Duration = Duration::from_millis(250);
/// How close (in square units) the pointer must be to pick an event.
const HIT_RADIUS: f64 = 3.0;

/// The site's routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Page {
    Home,
    About,
    Rush,
    Philanthropy,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::About, Page::Rush, Page::Philanthropy];

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Rush => "Rush",
            Page::Philanthropy => "Philanthropy",
        }
    }

    pub fn route(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about",
            Page::Rush => "/rush",
            Page::Philanthropy => "/philanthropy",
        }
    }

    pub fn from_route(route: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|p| p.route() == route)
    }

    pub fn index(self) -> usize {
        Page::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    pub fn next(self) -> Page {
        Page::ALL[(self.index() + 1) % Page::ALL.len()]
    }

    pub fn prev(self) -> Page {
        Page::ALL[(self.index() + Page::ALL.len() - 1) % Page::ALL.len()]
    }
}

/// Central application state, owned by the main thread.
pub struct App {
    /// Whether the app should exit on the next loop iteration.
    pub should_quit: bool,
    pub page: Page,
    pub content: Content,
    pub assets: AssetResolver,
    pub clock: Clock,
    /// Navigation menu cursor while the menu is open.
    pub menu: Option<usize>,
    /// Vertical scroll offset (in lines) into the current page.
    pub scroll: u16,
    /// Total number of rendered page lines (set each render).
    pub page_line_count: u16,
    /// Height of the page viewport in terminal rows (set each render).
    pub viewport_height: u16,
    /// Terminal width (set each render).
    pub screen_width: u16,
    /// When the current page was shown; count-up numbers start here.
    pub page_shown_at: Instant,
    /// One-line message for the help bar.
    pub notice: Option<String>,
    /// URL the main loop should hand to the external browser.
    pub open_request: Option<String>,

    // ── Rush ────────────────────────────────────────────────────
    pub selection: Selection,
    /// First-visit progress reveal; never restarted.
    pub reveal: Option<Tween>,
    /// Schedule row sitting at the centre of the list viewport.
    pub schedule_scroll: u16,
    /// Inner area of the timeline canvas (set each render).
    pub timeline_area: Rect,
    /// Event markers from the last drawn layout, in square units.
    pub event_points: Vec<Point>,

    // ── Home ────────────────────────────────────────────────────
    pub carousel: Carousel,
    pub countdown: Countdown,
    /// Last pointer column as a fraction of the terminal width.
    pub pointer_ratio: f64,
    pub grid_offsets: Vec<f64>,

    // ── Philanthropy ────────────────────────────────────────────
    pub charity_cursor: usize,
}

impl App {
    pub fn new(content: Content, assets: AssetResolver, clock: Clock, page: Page, now: Instant) -> Self {
        let default = spacing::default_selection(&content.rush, clock.now());
        let transition = Duration::from_millis(content.timeline.selection_transition_ms);
        let mut countdown = Countdown::new(parse_datetime(&content.site.countdown_target));
        countdown.tick(clock.now());

        let mut app = Self {
            should_quit: false,
            page,
            carousel: Carousel::new(content.home.hero.images.clone()),
            content,
            assets,
            clock,
            menu: None,
            scroll: 0,
            page_line_count: 0,
            viewport_height: 0,
            screen_width: 0,
            page_shown_at: now,
            notice: None,
            open_request: None,
            selection: Selection::new(default, now, transition),
            reveal: None,
            schedule_scroll: 0,
            timeline_area: Rect::default(),
            event_points: Vec::new(),
            countdown,
            pointer_ratio: 0.5,
            grid_offsets: vec![0.0; GRID_ROWS],
            charity_cursor: 0,
        };
        if page == Page::Rush {
            app.mount_timeline(now);
        }
        app
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    // ── Navigation ──────────────────────────────────────────────

    /// Switch pages, resetting per-page view state.
    pub fn show(&mut self, page: Page, now: Instant) {
        self.menu = None;
        self.notice = None;
        if self.page == page {
            return;
        }
        debug!(route = page.route(), "navigate");
        self.page = page;
        self.scroll = 0;
        self.page_shown_at = now;
        if page == Page::Rush {
            self.mount_timeline(now);
        }
    }

    /// The timeline's entrance animations run on its first appearance only.
    fn mount_timeline(&mut self, now: Instant) {
        if self.reveal.is_some() {
            return;
        }
        let config = self.content.timeline;
        self.reveal = Some(
            Tween::new(0.0, 1.0, now, Duration::from_millis(config.reveal_duration_ms))
                .delayed(Duration::from_millis(config.reveal_delay_ms)),
        );
        let default = spacing::default_selection(&self.content.rush, self.now());
        self.selection = Selection::new(
            default,
            now,
            Duration::from_millis(config.selection_transition_ms),
        );
        if let Some(index) = default {
            self.center_schedule_on(index);
        }
    }

    pub fn next_page(&mut self, now: Instant) {
        self.show(self.page.next(), now);
    }

    pub fn prev_page(&mut self, now: Instant) {
        self.show(self.page.prev(), now);
    }

    /// Follow an in-site link such as a hero button's `/rush`.
    pub fn follow(&mut self, href: &str, now: Instant) -> bool {
        match Page::from_route(href) {
            Some(page) => {
                self.show(page, now);
                true
            }
            None => {
                self.open_request = Some(href.to_string());
                false
            }
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu = match self.menu {
            Some(_) => None,
            None => Some(self.page.index()),
        };
    }

    pub fn menu_down(&mut self) {
        if let Some(cursor) = self.menu.as_mut() {
            *cursor = (*cursor + 1) % Page::ALL.len();
        }
    }

    pub fn menu_up(&mut self) {
        if let Some(cursor) = self.menu.as_mut() {
            *cursor = (*cursor + Page::ALL.len() - 1) % Page::ALL.len();
        }
    }

    pub fn menu_confirm(&mut self, now: Instant) {
        if let Some(cursor) = self.menu.take() {
            self.show(Page::ALL[cursor], now);
        }
    }

    // ── Page scrolling ──────────────────────────────────────────

    /// Scroll down by `n` lines, clamped to content bounds.
    pub fn scroll_down(&mut self, n: u16) {
        let max = self.max_scroll();
        self.scroll = self.scroll.saturating_add(n).min(max);
    }

    /// Scroll up by `n` lines, clamped to 0.
    pub fn scroll_up(&mut self, n: u16) {
        self.scroll = self.scroll.saturating_sub(n);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = self.max_scroll();
    }

    fn max_scroll(&self) -> u16 {
        self.page_line_count.saturating_sub(self.viewport_height)
    }

    /// Page scroll as a fraction of two screen heights, for scroll-linked
    /// effects.
    pub fn scroll_progress(&self) -> f64 {
        if self.viewport_height == 0 {
            return 0.0;
        }
        (self.scroll as f64 / (self.viewport_height as f64 * 2.0)).min(1.0)
    }

    // ── Clock and animation ─────────────────────────────────────

    /// Once-a-second refresh.
    pub fn tick_clock(&mut self) {
        self.countdown.tick(self.clock.now());
    }

    /// Advance frame-driven state.
    pub fn frame(&mut self, now: Instant) {
        self.carousel.poll(now);
        let targets = self.grid_targets();
        for (row, (offset, target)) in self.grid_offsets.iter_mut().zip(targets).enumerate() {
            *offset = motion::settle(*offset, target, row);
        }
    }

    fn grid_targets(&self) -> Vec<f64> {
        motion::grid_row_offsets(GRID_ROWS, self.pointer_ratio, self.scroll_progress(), GRID_MAX_MOVE)
    }

    /// Eased 0→1 for count-up numbers on the current page.
    pub fn count_up_fraction(&self, now: Instant) -> f64 {
        Tween::new(0.0, 1.0, self.page_shown_at, COUNT_UP_DURATION)
            .delayed(COUNT_UP_DELAY)
            .value(now)
    }

    fn count_up_running(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.page_shown_at) < COUNT_UP_DELAY + COUNT_UP_DURATION
    }

    /// Whether the current page needs animation frames right now.
    pub fn is_animating(&self, now: Instant) -> bool {
        match self.page {
            Page::Rush => {
                self.selection.is_animating(now)
                    || self.reveal.is_some_and(|r| !r.is_finished(now))
            }
            Page::Home => {
                self.carousel.offset(now) > 0.0
                    || self.count_up_running(now)
                    || self
                        .grid_offsets
                        .iter()
                        .zip(self.grid_targets())
                        .any(|(o, t)| (o - t).abs() > 0.05)
            }
            Page::About | Page::Philanthropy => self.count_up_running(now),
        }
    }

    /// Reveal value for the timeline's progress line.
    pub fn reveal_value(&self, now: Instant) -> f64 {
        self.reveal.map_or(0.0, |r| r.value(now))
    }

    // ── Rush selection ──────────────────────────────────────────

    pub fn select_event(&mut self, index: usize, now: Instant) {
        if index >= self.content.rush.len() {
            return;
        }
        if self.selection.select(index, now) {
            debug!(index, event = %self.content.rush[index].name, "selected event");
        }
    }

    /// Keyboard stepping behaves like a click: select and bring into view.
    pub fn select_next(&mut self, now: Instant) {
        let n = self.content.rush.len();
        if n == 0 {
            return;
        }
        let next = self.selection.index().map_or(0, |i| (i + 1).min(n - 1));
        self.select_event(next, now);
        self.center_schedule_on(next);
    }

    pub fn select_prev(&mut self, now: Instant) {
        if self.content.rush.is_empty() {
            return;
        }
        let prev = self.selection.index().map_or(0, |i| i.saturating_sub(1));
        self.select_event(prev, now);
        self.center_schedule_on(prev);
    }

    /// Scroll the schedule list and select whichever event's row is now
    /// nearest the centre of the list.
    pub fn scroll_schedule(&mut self, delta: i32, now: Instant) {
        let max = self.max_schedule_scroll() as i32;
        self.schedule_scroll = (self.schedule_scroll as i32 + delta).clamp(0, max) as u16;
        let centers: Vec<f64> = (0..self.content.rush.len())
            .map(|i| schedule_center(i) as f64)
            .collect();
        if let Some(index) = selection::nearest_to_center(&centers, self.schedule_scroll as f64) {
            self.select_event(index, now);
        }
    }

    pub fn center_schedule_on(&mut self, index: usize) {
        self.schedule_scroll = schedule_center(index).min(self.max_schedule_scroll());
    }

    fn max_schedule_scroll(&self) -> u16 {
        match self.content.rush.len() {
            0 => 0,
            n => schedule_center(n - 1),
        }
    }

    /// Viewport for the timeline canvas area.
    pub fn timeline_viewport(area: Rect) -> Viewport {
        Viewport {
            width: area.width as f64,
            height: area.height as f64 * CELL_ASPECT,
        }
    }

    /// Lay out the timeline for a canvas area and remember it for pointer
    /// hit testing.
    pub fn timeline_layout(&mut self, area: Rect, now: Instant) -> TimelineLayout {
        let layout = crate::timeline::layout(
            &self.content.rush,
            self.clock.now(),
            Self::timeline_viewport(area),
            self.selection.index(),
            self.selection.transition(now),
            self.reveal_value(now),
            &self.content.timeline,
        );
        self.timeline_area = area;
        self.event_points = layout.events.clone();
        layout
    }

    fn marker_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.timeline_area;
        if !area.contains(ratatui::layout::Position::new(column, row)) {
            return None;
        }
        let pointer = Point {
            x: (column - area.x) as f64 + 0.5,
            y: ((row - area.y) as f64 + 0.5) * CELL_ASPECT,
        };
        selection::hit_test(&self.event_points, pointer, HIT_RADIUS)
    }

    /// Pointer moved: hovering a marker selects it.
    pub fn hover(&mut self, column: u16, row: u16, now: Instant) {
        if self.screen_width > 0 {
            self.pointer_ratio = column as f64 / self.screen_width as f64;
        }
        if self.page == Page::Rush {
            if let Some(index) = self.marker_at(column, row) {
                self.select_event(index, now);
            }
        }
    }

    /// Pointer clicked: select the marker and bring its row into view.
    pub fn click(&mut self, column: u16, row: u16, now: Instant) {
        if self.page != Page::Rush {
            return;
        }
        if let Some(index) = self.marker_at(column, row) {
            self.select_event(index, now);
            self.center_schedule_on(index);
        }
    }

    // ── Philanthropy ────────────────────────────────────────────

    pub fn charity_down(&mut self) {
        let n = self.content.philanthropy.charities.len();
        if n > 0 {
            self.charity_cursor = (self.charity_cursor + 1).min(n - 1);
        }
    }

    pub fn charity_up(&mut self) {
        self.charity_cursor = self.charity_cursor.saturating_sub(1);
    }

    /// Donate to the highlighted charity: open its page, or acknowledge
    /// when it has none.
    pub fn donate(&mut self) {
        let Some(charity) = self.content.philanthropy.charities.get(self.charity_cursor) else {
            return;
        };
        info!(charity = %charity.id, has_url = charity.donation_url.is_some(), "donate");
        match &charity.donation_url {
            Some(url) => {
                self.notice = Some(format!("Opening the donation page for {}…", charity.name));
                self.open_request = Some(url.clone());
            }
            None => {
                self.notice = Some(format!(
                    "Thank you for your interest in donating to {}!",
                    charity.name
                ));
            }
        }
    }

    /// The footer's chapter-wide donation link.
    pub fn donate_to_chapter(&mut self) {
        self.open_request = Some(self.content.site.donate_url.clone());
    }

    // ── Content reload ──────────────────────────────────────────

    /// Swap in freshly loaded content, keeping view state where it still
    /// makes sense. The reveal animation is not replayed.
    pub fn replace_content(&mut self, content: Content) {
        let n = content.rush.len();
        if self.selection.index().is_some_and(|i| i >= n) {
            match spacing::default_selection(&content.rush, self.clock.now()) {
                Some(index) => {
                    self.selection.select(index, Instant::now());
                }
                None => self.selection.clear(),
            }
        }
        self.carousel = Carousel::new(content.home.hero.images.clone());
        self.countdown = Countdown::new(parse_datetime(&content.site.countdown_target));
        self.countdown.tick(self.clock.now());
        let charities = content.philanthropy.charities.len();
        self.charity_cursor = self.charity_cursor.min(charities.saturating_sub(1));
        self.content = content;
        self.schedule_scroll = self.schedule_scroll.min(self.max_schedule_scroll());
    }
}

/// Row of event `index`'s centre within the schedule list.
pub fn schedule_center(index: usize) -> u16 {
    (index as u16).saturating_mul(ROWS_PER_EVENT) + ROWS_PER_EVENT / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_at(now: &str, page: Page) -> (App, Instant) {
        let t0 = Instant::now();
        let clock = Clock::starting_at(parse_datetime(now).unwrap());
        let app = App::new(Content::builtin(), AssetResolver::default(), clock, page, t0);
        (app, t0)
    }

    #[test]
    fn routes_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_route(page.route()), Some(page));
        }
        assert_eq!(Page::from_route("/missing"), None);
        assert_eq!(Page::Philanthropy.next(), Page::Home);
        assert_eq!(Page::Home.prev(), Page::Philanthropy);
    }

    #[test]
    fn rush_mount_selects_next_upcoming_event() {
        // between Poker Night (Jan 14) and Wing Night (Jan 15)
        let (app, _) = app_at("2026-01-14T20:00:00", Page::Rush);
        assert_eq!(app.selection.index(), Some(3));
        assert_eq!(app.schedule_scroll, schedule_center(3));
        assert!(app.reveal.is_some());
    }

    #[test]
    fn reveal_starts_on_first_rush_visit_only() {
        let (mut app, t0) = app_at("2026-01-14T20:00:00", Page::Home);
        assert!(app.reveal.is_none());
        let later = t0 + Duration::from_secs(10);
        app.show(Page::Rush, later);
        let first = app.reveal;
        app.show(Page::Home, later + Duration::from_secs(1));
        app.show(Page::Rush, later + Duration::from_secs(2));
        assert_eq!(app.reveal, first);
    }

    #[test]
    fn scrolling_schedule_selects_nearest_row() {
        let (mut app, t0) = app_at("2026-01-01T00:00:00", Page::Rush);
        assert_eq!(app.selection.index(), Some(0));
        app.scroll_schedule(ROWS_PER_EVENT as i32 * 2, t0);
        assert_eq!(app.selection.index(), Some(2));
        app.scroll_schedule(10_000, t0);
        assert_eq!(app.selection.index(), Some(app.content.rush.len() - 1));
        app.scroll_schedule(-10_000, t0);
        assert_eq!(app.selection.index(), Some(0));
    }

    #[test]
    fn keyboard_stepping_clamps_at_ends() {
        let (mut app, t0) = app_at("2027-01-01T00:00:00", Page::Rush);
        let last = app.content.rush.len() - 1;
        assert_eq!(app.selection.index(), Some(last));
        app.select_next(t0);
        assert_eq!(app.selection.index(), Some(last));
        app.select_prev(t0);
        assert_eq!(app.selection.index(), Some(last - 1));
    }

    #[test]
    fn hover_over_marker_selects_it() {
        let (mut app, t0) = app_at("2026-01-01T00:00:00", Page::Rush);
        let area = Rect::new(0, 5, 120, 20);
        app.timeline_layout(area, t0);
        let target = app.event_points[4];
        let column = target.x as u16;
        let row = area.y + (target.y / CELL_ASPECT) as u16;
        app.hover(column, row, t0);
        assert_eq!(app.selection.index(), Some(4));
    }

    #[test]
    fn pointer_outside_timeline_changes_nothing() {
        let (mut app, t0) = app_at("2026-01-01T00:00:00", Page::Rush);
        app.timeline_layout(Rect::new(0, 5, 120, 20), t0);
        app.click(10, 0, t0);
        assert_eq!(app.selection.index(), Some(0));
    }

    #[test]
    fn donate_without_url_acknowledges() {
        let (mut app, _) = app_at("2026-01-01T00:00:00", Page::Philanthropy);
        app.charity_down(); // Make-A-Wish has no link
        app.donate();
        assert!(app.open_request.is_none());
        assert_eq!(
            app.notice.as_deref(),
            Some("Thank you for your interest in donating to Make-A-Wish Foundation!")
        );
    }

    #[test]
    fn donate_with_url_requests_browser() {
        let (mut app, _) = app_at("2026-01-01T00:00:00", Page::Philanthropy);
        app.donate();
        assert_eq!(app.open_request.as_deref(), Some("example.com"));
    }

    #[test]
    fn menu_navigates() {
        let (mut app, t0) = app_at("2026-01-01T00:00:00", Page::Home);
        app.toggle_menu();
        app.menu_down();
        app.menu_down();
        app.menu_confirm(t0);
        assert_eq!(app.page, Page::Rush);
        assert!(app.menu.is_none());
    }

    #[test]
    fn hero_links_follow_internal_routes() {
        let (mut app, t0) = app_at("2026-01-01T00:00:00", Page::Home);
        assert!(app.follow("/about", t0));
        assert_eq!(app.page, Page::About);
        assert!(!app.follow("https://www.instagram.com", t0));
        assert_eq!(app.open_request.as_deref(), Some("https://www.instagram.com"));
    }

    #[test]
    fn shrinking_schedule_resets_selection() {
        let (mut app, _) = app_at("2027-01-01T00:00:00", Page::Rush);
        let mut content = Content::builtin();
        content.rush.truncate(2);
        app.replace_content(content);
        assert_eq!(app.selection.index(), Some(1));

        let mut empty = Content::builtin();
        empty.rush.clear();
        app.replace_content(empty);
        assert_eq!(app.selection.index(), None);
        assert_eq!(app.schedule_scroll, 0);
    }

    #[test]
    fn countdown_reflects_clock() {
        let (app, _) = app_at("2026-01-22T21:29:00", Page::Home);
        assert_eq!(app.countdown.left().days, 1);
    }
}
