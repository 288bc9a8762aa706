mod animate;
mod app;
mod assets;
mod carousel;
mod content;
mod countdown;
mod error;
mod event;
mod motion;
mod opener;
mod schedule;
mod timeline;
mod ui;
mod watcher;

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Sender};
use std::sync::Mutex;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use clap::Parser;
use crossterm::{
    event::{
        self as ct_event, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent,
        KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::app::{App, Page};
use crate::assets::AssetResolver;
use crate::carousel::{MAX_INTERVAL, MIN_INTERVAL};
use crate::content::Content;
use crate::countdown::Clock;
use crate::event::AppEvent;
use crate::schedule::Repeating;

/// ~30 fps while something is moving.
const FRAME_INTERVAL: Duration = Duration::from_millis(33);
const CLOCK_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Parser)]
#[command(name = "chapter-site", about = "Chapter website in the terminal")]
struct Cli {
    /// JSON content file; sections it omits use the built-in content
    #[arg(long)]
    content: Option<PathBuf>,

    /// Reload the content file when it changes on disk
    #[arg(long, requires = "content")]
    watch: bool,

    /// Debounce interval in milliseconds for filesystem events
    #[arg(long, default_value_t = 200)]
    debounce_ms: u64,

    /// Run the clock from this local time instead of now (YYYY-MM-DDTHH:MM[:SS])
    #[arg(long, value_parser = parse_now)]
    now: Option<NaiveDateTime>,

    /// Prefix for image and video keys (local path or CDN URL)
    #[arg(long, default_value = assets::DEFAULT_BASE)]
    asset_base: String,

    /// Local media directory; keys missing under it show a placeholder
    #[arg(long)]
    asset_root: Option<PathBuf>,

    /// Write logs here (RUST_LOG filters, default info)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Page to open on
    #[arg(long, value_enum, default_value_t = Page::Home)]
    page: Page,
}

fn parse_now(raw: &str) -> std::result::Result<NaiveDateTime, String> {
    content::parse_datetime(raw).ok_or_else(|| format!("expected YYYY-MM-DDTHH:MM[:SS], got {raw:?}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let content = match &cli.content {
        Some(path) => Content::load(path)?,
        None => Content::builtin(),
    };
    let clock = cli.now.map_or(Clock::Wall, Clock::starting_at);
    let assets = AssetResolver::new(&cli.asset_base, cli.asset_root.clone());
    info!(page = cli.page.route(), fixed_clock = cli.now.is_some(), "starting");

    // ── Terminal setup ──────────────────────────────────────────
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Panic hook: restore terminal before printing the panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        original_hook(info);
    }));

    // ── Run ─────────────────────────────────────────────────────
    let app = App::new(content, assets, clock, cli.page, Instant::now());
    let result = run(&mut terminal, app, &cli);

    // ── Terminal teardown ───────────────────────────────────────
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;

    if let Err(err) = &result {
        warn!(error = %err, "exited with error");
    }
    result
}

/// Install a file logger. The terminal belongs to the UI, so without a log
/// file nothing is logged.
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
    cli: &Cli,
) -> Result<()> {
    let (tx, rx) = mpsc::channel::<AppEvent>();

    // ── Keyboard + mouse + resize thread ────────────────────────
    let input_tx = tx.clone();
    thread::spawn(move || loop {
        let event = match ct_event::read() {
            Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => AppEvent::Key(key),
            Ok(Event::Mouse(mouse)) => AppEvent::Mouse(mouse),
            Ok(Event::Resize(_, _)) => AppEvent::Resize,
            Ok(_) => continue,
            Err(_) => break,
        };
        if input_tx.send(event).is_err() {
            break;
        }
    });

    // ── Timers ──────────────────────────────────────────────────
    let clock_tx = tx.clone();
    let _clock = Repeating::every("clock", CLOCK_INTERVAL, move || {
        clock_tx.send(AppEvent::Tick).is_ok()
    });
    let mut tasks = Tasks::default();

    // ── Content watcher thread ──────────────────────────────────
    let _watcher = match (&cli.content, cli.watch) {
        (Some(path), true) => Some(watcher::spawn(path, cli.debounce_ms, tx.clone())?),
        _ => None,
    };

    let opener_cmd = opener::detect_opener();

    // ── Main event loop ─────────────────────────────────────────
    let now = Instant::now();
    tasks.sync(&app, now, &tx);
    terminal.draw(|frame| ui::draw(frame, &mut app, now))?;

    while let Ok(event) = rx.recv() {
        dispatch(&mut app, event, cli);
        // Handle everything already queued before drawing once
        while let Ok(event) = rx.try_recv() {
            dispatch(&mut app, event, cli);
        }

        if let Some(url) = app.open_request.take() {
            info!(%url, "opening link");
            if let Err(err) = opener::open_url(&url, &opener_cmd) {
                warn!(error = %err, %url, "could not open link");
                app.notice = Some(format!("Could not open {url}: {err}"));
            }
        }

        if app.should_quit {
            break;
        }

        let now = Instant::now();
        tasks.sync(&app, now, &tx);
        terminal.draw(|frame| ui::draw(frame, &mut app, now))?;
    }

    Ok(())
}

/// Timers whose lifetime follows the app state: the hero carousel runs only
/// while the home page shows more than one image, animation frames only
/// while something moves.
#[derive(Default)]
struct Tasks {
    carousel: Option<Repeating>,
    frames: Option<Repeating>,
}

impl Tasks {
    fn sync(&mut self, app: &App, now: Instant, tx: &Sender<AppEvent>) {
        let want_carousel = app.page == Page::Home && app.carousel.rotates();
        toggle(&mut self.carousel, want_carousel, || {
            let tx = tx.clone();
            Repeating::with_delay(
                "carousel",
                || schedule::random_interval(MIN_INTERVAL, MAX_INTERVAL),
                move || tx.send(AppEvent::CarouselAdvance).is_ok(),
            )
        });

        toggle(&mut self.frames, app.is_animating(now), || {
            let tx = tx.clone();
            Repeating::every("frames", FRAME_INTERVAL, move || {
                tx.send(AppEvent::Frame).is_ok()
            })
        });
    }
}

/// Start or cancel a task so that it runs exactly when `wanted`.
fn toggle(slot: &mut Option<Repeating>, wanted: bool, start: impl FnOnce() -> Repeating) {
    let running = slot.as_ref().is_some_and(Repeating::is_running);
    if wanted && !running {
        *slot = Some(start());
    } else if !wanted {
        // dropping cancels
        slot.take();
    }
}

fn dispatch(app: &mut App, event: AppEvent, cli: &Cli) {
    let now = Instant::now();
    match event {
        AppEvent::Key(key) => handle_key(app, key, now),
        AppEvent::Mouse(mouse) => handle_mouse(app, mouse, now),
        AppEvent::Resize => {}
        AppEvent::Tick => app.tick_clock(),
        AppEvent::Frame => app.frame(now),
        AppEvent::CarouselAdvance => app.carousel.advance(now),
        AppEvent::ContentChanged => reload(app, cli),
    }
}

/// Swap in the edited content file; a broken edit keeps what is on screen.
fn reload(app: &mut App, cli: &Cli) {
    let Some(path) = &cli.content else {
        return;
    };
    match Content::load(path) {
        Ok(content) => {
            app.replace_content(content);
            app.notice = Some(format!("Reloaded {}", path.display()));
        }
        Err(err) => {
            warn!(error = %err, "content reload failed; keeping previous content");
            app.notice = Some(format!("Reload failed: {err}"));
        }
    }
}

/// Dispatch a single key event based on the menu and current page.
fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }
    if app.menu.is_some() {
        handle_menu_key(app, key, now);
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Esc => app.notice = None,
        KeyCode::Char('m') => app.toggle_menu(),
        KeyCode::Tab => app.next_page(now),
        KeyCode::BackTab => app.prev_page(now),
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            app.show(Page::ALL[index], now);
        }
        KeyCode::Char('D') => app.donate_to_chapter(),
        _ => match app.page {
            Page::Home => handle_home_key(app, key, now),
            Page::About => handle_scroll_key(app, key),
            Page::Rush => handle_rush_key(app, key, now),
            Page::Philanthropy => handle_philanthropy_key(app, key),
        },
    }
}

// ── Navigation menu ─────────────────────────────────────────────

fn handle_menu_key(app: &mut App, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Esc | KeyCode::Char('m') => app.toggle_menu(),
        KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => app.menu_down(),
        KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => app.menu_up(),
        KeyCode::Enter => app.menu_confirm(now),
        _ => {}
    }
}

// ── Scrolling pages ─────────────────────────────────────────────

fn handle_scroll_key(app: &mut App, key: KeyEvent) {
    match (key.code, key.modifiers) {
        (KeyCode::Char('j') | KeyCode::Down, _) => app.scroll_down(1),
        (KeyCode::Char('k') | KeyCode::Up, _) => app.scroll_up(1),
        (KeyCode::Char('g') | KeyCode::Home, _) => app.scroll_to_top(),
        (KeyCode::Char('G') | KeyCode::End, _) => app.scroll_to_bottom(),
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => app.scroll_down(app.viewport_height / 2),
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => app.scroll_up(app.viewport_height / 2),
        (KeyCode::Char('f'), KeyModifiers::CONTROL) | (KeyCode::PageDown, _) => {
            app.scroll_down(app.viewport_height)
        }
        (KeyCode::Char('b'), KeyModifiers::CONTROL) | (KeyCode::PageUp, _) => {
            app.scroll_up(app.viewport_height)
        }
        _ => {}
    }
}

fn handle_home_key(app: &mut App, key: KeyEvent, now: Instant) {
    if let KeyCode::Char(c) = key.code {
        let href = app
            .content
            .home
            .hero
            .buttons
            .iter()
            .find(|b| b.text.chars().next().is_some_and(|first| first.eq_ignore_ascii_case(&c)))
            .map(|b| b.href.clone());
        if let Some(href) = href {
            app.follow(&href, now);
            return;
        }
    }
    handle_scroll_key(app, key);
}

// ── Rush ────────────────────────────────────────────────────────

fn handle_rush_key(app: &mut App, key: KeyEvent, now: Instant) {
    let page = app::ROWS_PER_EVENT as i32;
    match key.code {
        KeyCode::Right | KeyCode::Char('l') => app.select_next(now),
        KeyCode::Left | KeyCode::Char('h') => app.select_prev(now),
        KeyCode::Char('j') | KeyCode::Down => app.scroll_schedule(1, now),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_schedule(-1, now),
        KeyCode::PageDown => app.scroll_schedule(page, now),
        KeyCode::PageUp => app.scroll_schedule(-page, now),
        KeyCode::Char('g') | KeyCode::Home => app.scroll_schedule(i32::MIN / 2, now),
        KeyCode::Char('G') | KeyCode::End => app.scroll_schedule(i32::MAX / 2, now),
        _ => {}
    }
}

// ── Philanthropy ────────────────────────────────────────────────

fn handle_philanthropy_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.charity_down(),
        KeyCode::Char('k') | KeyCode::Up => app.charity_up(),
        KeyCode::Char('g') | KeyCode::Home => app.charity_cursor = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.charity_cursor = app.content.philanthropy.charities.len().saturating_sub(1)
        }
        KeyCode::Enter | KeyCode::Char('d') => app.donate(),
        _ => {}
    }
}

// ── Mouse ───────────────────────────────────────────────────────

fn handle_mouse(app: &mut App, mouse: MouseEvent, now: Instant) {
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            app.hover(mouse.column, mouse.row, now)
        }
        MouseEventKind::Down(MouseButton::Left) => app.click(mouse.column, mouse.row, now),
        MouseEventKind::ScrollDown => match app.page {
            Page::Rush => app.scroll_schedule(1, now),
            Page::Philanthropy => app.charity_down(),
            Page::Home | Page::About => app.scroll_down(3),
        },
        MouseEventKind::ScrollUp => match app.page {
            Page::Rush => app.scroll_schedule(-1, now),
            Page::Philanthropy => app.charity_up(),
            Page::Home | Page::About => app.scroll_up(3),
        },
        _ => {}
    }
}
