//! Rush timeline layout: events plotted along a sine curve, a time-driven
//! progress line, and selection-dependent spacing.
//!
//! Everything here is a pure function of its inputs. Callers own the view
//! state (selected index, animation values) and recompute a
//! [`TimelineLayout`] on every frame.

pub mod path;
pub mod progress;
pub mod selection;
pub mod spacing;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::content::RushEvent;

pub use path::{Curve, Orientation, Point, Viewport};

/// Tuning knobs for the timeline, overridable from the content file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Wave amplitude as a percentage of the secondary extent.
    pub amplitude_percent: f64,
    /// Number of full sine periods across the timeline.
    pub period_multiplier: f64,
    /// Padding at each end of the primary axis, as a percentage.
    pub padding_percent: f64,
    /// How far the selected event's neighbours are pushed away.
    pub spacing_multiplier: f64,
    pub selection_transition_ms: u64,
    pub reveal_duration_ms: u64,
    pub reveal_delay_ms: u64,
    /// Gap kept between the progress line's tip and an event marker, as a
    /// percentage of the curve length.
    pub buffer_percent: f64,
    /// Minimum fractional distance between adjacent events.
    pub min_gap: f64,
    /// Polyline resolution of the full curve.
    pub segments: usize,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            amplitude_percent: 17.0,
            period_multiplier: 1.0,
            padding_percent: 10.0,
            spacing_multiplier: 1.2,
            selection_transition_ms: 600,
            reveal_duration_ms: 2000,
            reveal_delay_ms: 300,
            buffer_percent: 8.0,
            min_gap: 0.02,
            segments: 100,
        }
    }
}

/// Everything needed to draw one frame of the timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineLayout {
    pub orientation: Orientation,
    /// The full spine.
    pub curve: Vec<Point>,
    /// One coordinate per event, spacing-adjusted around the selection.
    pub events: Vec<Point>,
    /// Revealed part of the curve. Empty when nothing is revealed yet.
    pub progress: Vec<Point>,
    /// Temporal progress through the schedule, in `[0, 1]`.
    pub overall: f64,
}

/// Lay out `events` for one frame.
///
/// `transition` is the current spacing-transition value and `reveal` the
/// eased first-load reveal, both in `[0, 1]`.
pub fn layout(
    events: &[RushEvent],
    now: NaiveDateTime,
    viewport: Viewport,
    selected: Option<usize>,
    transition: f64,
    reveal: f64,
    config: &TimelineConfig,
) -> TimelineLayout {
    let curve = Curve::new(viewport, config);
    let positions = spacing::event_positions(events.len(), selected, transition, config);

    let overall = progress::overall_progress(events, now);
    let displayed = overall * reveal.clamp(0.0, 1.0);
    let tip = progress::marker_position(displayed, events.len(), config.buffer_percent / 100.0);

    TimelineLayout {
        orientation: curve.orientation(),
        curve: curve.samples(config.segments),
        events: curve.place(&positions),
        progress: tip.map(|t| curve.sub_path(t)).unwrap_or_default(),
        overall,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::parse_datetime;

    fn event(name: &str, datetime: &str) -> RushEvent {
        RushEvent {
            name: name.into(),
            description: None,
            datetime: datetime.into(),
            location: "Quad".into(),
            image: "images/x.jpg".into(),
            open: true,
        }
    }

    fn schedule() -> Vec<RushEvent> {
        vec![
            event("a", "2026-01-09T18:00:00"),
            event("b", "2026-01-10T18:00:00"),
            event("c", "2026-01-11T18:00:00"),
        ]
    }

    const WIDE: Viewport = Viewport {
        width: 200.0,
        height: 50.0,
    };

    #[test]
    fn before_reveal_there_is_no_progress_line() {
        let now = parse_datetime("2026-01-10T06:00:00").unwrap();
        let layout = layout(&schedule(), now, WIDE, Some(2), 0.0, 0.0, &TimelineConfig::default());
        assert!(layout.progress.is_empty());
        assert_eq!(layout.overall, 0.25);
        assert_eq!(layout.events.len(), 3);
        assert_eq!(layout.curve.len(), 101);
    }

    #[test]
    fn revealed_progress_stops_inside_first_segment() {
        let now = parse_datetime("2026-01-10T06:00:00").unwrap();
        let config = TimelineConfig::default();
        let layout = layout(&schedule(), now, WIDE, Some(2), 1.0, 1.0, &config);
        let tip = layout.progress.last().unwrap();
        assert!(tip.x > layout.events[0].x);
        assert!(tip.x < layout.events[1].x);
    }

    #[test]
    fn progress_line_ignores_selection_spacing() {
        let now = parse_datetime("2026-01-10T06:00:00").unwrap();
        let config = TimelineConfig::default();
        let calm = layout(&schedule(), now, WIDE, None, 0.0, 1.0, &config);
        let busy = layout(&schedule(), now, WIDE, Some(2), 1.0, 1.0, &config);
        assert_eq!(calm.progress, busy.progress);
        assert_ne!(calm.events, busy.events);
    }

    #[test]
    fn empty_schedule_lays_out_only_the_curve() {
        let now = parse_datetime("2026-01-10T06:00:00").unwrap();
        let layout = layout(&[], now, WIDE, None, 1.0, 1.0, &TimelineConfig::default());
        assert!(layout.events.is_empty());
        assert!(layout.progress.is_empty());
        assert_eq!(layout.curve.len(), 101);
    }
}
