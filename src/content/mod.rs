mod builtin;

use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::ContentError;
use crate::timeline::TimelineConfig;

/// Accepted timestamp layouts, tried in order. Event times are local.
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Parse a local ISO-like timestamp (`2026-01-09T18:30:00`).
///
/// Returns `None` for anything unparseable; callers treat that as "no date"
/// rather than failing.
pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// One scheduled rush event, plotted on the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RushEvent {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub datetime: String,
    pub location: String,
    pub image: String,
    /// Display-only ("open to all" vs invite only). Never affects layout.
    #[serde(default)]
    pub open: bool,
}

impl RushEvent {
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        parse_datetime(&self.datetime)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub text: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

/// A headline number with its caption, e.g. `"$50K+"` / `"Raised This Year"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    pub title: String,
    pub content: Vec<String>,
}

// ── Site-wide ───────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteInfo {
    pub chapter: String,
    pub copyright: String,
    /// Footer "Donate" button target.
    pub donate_url: String,
    pub socials: Vec<Link>,
    /// When rush ends; drives the home page countdown.
    pub countdown_target: String,
    pub countdown_label: String,
}

// ── Home ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeHero {
    pub letters: Vec<String>,
    pub title: String,
    pub subtitle: String,
    pub buttons: Vec<Link>,
    /// Rotated by the hero carousel.
    pub images: Vec<String>,
}

/// One column of the "Gentlemen / Scholars / Jolly Good Fellows" triptych.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub title: String,
    pub image: String,
    /// Caption lines; the first number in each line counts up on display.
    pub lines: Vec<String>,
    /// Optional words cycled under the captions.
    #[serde(default)]
    pub rotating: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeData {
    pub hero: HomeHero,
    pub quote: Quote,
    /// Photo wall, laid out four rows by seven columns.
    pub grid: Vec<String>,
    pub panels: Vec<Panel>,
}

// ── About ───────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutHero {
    pub est: String,
    pub title: String,
    pub subtitle: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section<T> {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub src: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Journey {
    pub title: String,
    pub paragraphs: Vec<String>,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutData {
    pub hero: AboutHero,
    pub history: TextBlock,
    pub stats: Section<Stat>,
    pub quote: Quote,
    pub values: Section<TextBlock>,
    pub gallery: Section<GalleryItem>,
    pub brotherhood: TextBlock,
    pub journey: Journey,
    pub closing_quote: Quote,
    pub why_join: TextBlock,
}

// ── Philanthropy ────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Health,
    Education,
    Community,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Health => "Health",
            Category::Education => "Education",
            Category::Community => "Community",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharityStats {
    pub primary: Stat,
    pub secondary: Stat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Charity {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    /// Shown in place of the image when none is configured.
    pub image_placeholder: String,
    pub stats: CharityStats,
    /// External donation page. `None` shows an acknowledgement instead.
    #[serde(default)]
    pub donation_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhilanthropyHero {
    pub title: String,
    pub subtitle: String,
    pub stats: Vec<Stat>,
    pub video: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhilanthropyData {
    pub hero: PhilanthropyHero,
    pub charities: Vec<Charity>,
}

// ── The whole table ─────────────────────────────────────────────

/// Every page's data plus the timeline tuning.
///
/// Loaded once at startup and never mutated; a reload swaps the whole value.
/// Any section missing from a content file falls back to the built-in one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Content {
    pub site: SiteInfo,
    pub home: HomeData,
    pub about: AboutData,
    pub rush: Vec<RushEvent>,
    pub philanthropy: PhilanthropyData,
    pub timeline: TimelineConfig,
}

impl Default for Content {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Content {
    /// The canonical content shipped with the binary.
    pub fn builtin() -> Self {
        Self {
            site: builtin::site(),
            home: builtin::home(),
            about: builtin::about(),
            rush: builtin::rush(),
            philanthropy: builtin::philanthropy(),
            timeline: TimelineConfig::default(),
        }
    }

    /// Read a JSON content document from disk.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let raw = fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let content = Self::parse(&raw).map_err(|source| ContentError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), events = content.rush.len(), "loaded content");
        content.report_schedule_problems();
        Ok(content)
    }

    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Log (but do not reject) schedules the timeline cannot lay out cleanly.
    fn report_schedule_problems(&self) {
        if self.rush.is_empty() {
            warn!("rush schedule is empty");
        }
        let mut previous: Option<NaiveDateTime> = None;
        for event in &self.rush {
            match event.timestamp() {
                None => warn!(event = %event.name, datetime = %event.datetime, "unparseable event datetime"),
                Some(ts) => {
                    if previous.is_some_and(|p| ts < p) {
                        warn!(event = %event.name, "rush schedule is not sorted by datetime");
                    }
                    previous = Some(ts);
                }
            }
        }
    }
}
