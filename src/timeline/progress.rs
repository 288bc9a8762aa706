use chrono::NaiveDateTime;

use crate::content::RushEvent;

/// Width of the compressed interpolation window inside a segment.
const SEGMENT_WINDOW: f64 = 0.8;
/// Offset of that window from the segment start.
const SEGMENT_LEAD: f64 = 0.1;
/// Shortest usable segment once both buffers are carved out.
const MIN_SEGMENT: f64 = 0.01;

/// Where `now` falls relative to the schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bracket {
    Before,
    /// Between events `segment` and `segment + 1`; `fraction` is linear in
    /// time across that pair.
    Within { segment: usize, fraction: f64 },
    After,
}

/// Locate `now` among the event timestamps.
///
/// Bounds are inclusive: at the first event's time the bracket is the first
/// segment at fraction 0, at the last event's time the last segment at 1.
/// A zero-length segment counts as fully elapsed. Events with unparseable
/// dates never bracket anything; past the last parseable event is `After`.
pub fn bracket(events: &[RushEvent], now: NaiveDateTime) -> Bracket {
    let stamps: Vec<Option<NaiveDateTime>> = events.iter().map(RushEvent::timestamp).collect();

    if stamps.first().copied().flatten().is_some_and(|first| now < first) {
        return Bracket::Before;
    }

    for (segment, pair) in stamps.windows(2).enumerate() {
        let (Some(start), Some(end)) = (pair[0], pair[1]) else {
            continue;
        };
        if now >= start && now <= end {
            let span = (end - start).num_milliseconds();
            let fraction = if span > 0 {
                (now - start).num_milliseconds() as f64 / span as f64
            } else {
                1.0
            };
            return Bracket::Within { segment, fraction };
        }
    }

    // a trailing unparseable event must not pull progress back to zero
    match stamps.iter().rev().flatten().next() {
        Some(&last) if now > last => Bracket::After,
        _ => Bracket::Before,
    }
}

/// Temporal progress through the schedule, in `[0, 1]`.
///
/// `(segment + fraction) / (n - 1)` inside the schedule, 0 before it and 1
/// after it. A single event is 0 until it starts and 1 afterwards.
pub fn overall_progress(events: &[RushEvent], now: NaiveDateTime) -> f64 {
    match events {
        [] => 0.0,
        [only] => match only.timestamp() {
            Some(ts) if now > ts => 1.0,
            _ => 0.0,
        },
        _ => {
            let last = (events.len() - 1) as f64;
            let raw = match bracket(events, now) {
                Bracket::Before => 0.0,
                Bracket::Within { segment, fraction } => (segment as f64 + fraction) / last,
                Bracket::After => 1.0,
            };
            raw.clamp(0.0, 1.0)
        }
    }
}

/// Fraction of the curve the progress line reaches for a displayed progress
/// value, or `None` when nothing should be drawn.
///
/// Positions use uniform spacing. Inside a segment the tip is kept
/// `buffer` away from both events so it never ends under a marker; full
/// progress reaches the end of the curve.
pub fn marker_position(displayed: f64, n: usize, buffer: f64) -> Option<f64> {
    if displayed.is_nan() || displayed <= 0.0 {
        return None;
    }
    if n <= 1 {
        return Some(displayed.min(1.0));
    }
    if displayed >= 1.0 {
        return Some(1.0);
    }

    let segments = (n - 1) as f64;
    let scaled = displayed * segments;
    let segment = scaled.floor();
    let fraction = scaled - segment;

    let start = segment / segments;
    let end = (segment + 1.0) / segments;

    if fraction == 0.0 {
        return Some(start + buffer);
    }

    let usable = (end - start - 2.0 * buffer).max(MIN_SEGMENT);
    let compressed = ((fraction - SEGMENT_LEAD) / SEGMENT_WINDOW).clamp(0.0, 1.0);
    Some(start + buffer + usable * compressed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::parse_datetime;
    use chrono::Duration;

    fn at(hours: i64) -> NaiveDateTime {
        parse_datetime("2026-01-01T00:00:00").unwrap() + Duration::hours(hours)
    }

    fn events_at(hours: &[i64]) -> Vec<RushEvent> {
        hours
            .iter()
            .map(|h| RushEvent {
                name: format!("t={h}"),
                description: None,
                datetime: at(*h).format("%Y-%m-%dT%H:%M:%S").to_string(),
                location: String::new(),
                image: String::new(),
                open: true,
            })
            .collect()
    }

    #[test]
    fn midway_through_first_segment() {
        let events = events_at(&[0, 10, 20]);
        assert_eq!(
            bracket(&events, at(5)),
            Bracket::Within {
                segment: 0,
                fraction: 0.5
            }
        );
        assert_eq!(overall_progress(&events, at(5)), 0.25);
    }

    #[test]
    fn last_event_time_is_complete() {
        let events = events_at(&[0, 10, 20]);
        assert_eq!(overall_progress(&events, at(20)), 1.0);
        assert_eq!(overall_progress(&events, at(400)), 1.0);
        assert_eq!(bracket(&events, at(21)), Bracket::After);
    }

    #[test]
    fn nothing_before_first_event() {
        let events = events_at(&[0, 10, 20]);
        assert_eq!(overall_progress(&events, at(0)), 0.0);
        assert_eq!(overall_progress(&events, at(-3)), 0.0);
        assert_eq!(bracket(&events, at(-3)), Bracket::Before);
    }

    #[test]
    fn progress_never_decreases_with_time() {
        let events = events_at(&[0, 3, 4, 10, 30, 31]);
        let mut previous = 0.0;
        for hour in -5..40 {
            let p = overall_progress(&events, at(hour));
            assert!(p >= previous, "hour {hour}: {p} < {previous}");
            previous = p;
        }
    }

    #[test]
    fn single_event_progress_is_binary() {
        let events = events_at(&[10]);
        assert_eq!(overall_progress(&events, at(10)), 0.0);
        assert_eq!(overall_progress(&events, at(11)), 1.0);
    }

    #[test]
    fn simultaneous_events_do_not_divide_by_zero() {
        let events = events_at(&[0, 10, 10, 20]);
        let p = overall_progress(&events, at(10));
        assert!(p.is_finite());
        assert!((0.0..=1.0).contains(&p));
    }

    #[test]
    fn unparseable_dates_degrade_quietly() {
        let mut events = events_at(&[0, 10]);
        events[0].datetime = "soon".into();
        assert_eq!(overall_progress(&events, at(5)), 0.0);
        assert_eq!(overall_progress(&[], at(5)), 0.0);
    }

    #[test]
    fn trailing_unparseable_event_keeps_progress_monotonic() {
        let mut events = events_at(&[0, 10, 20]);
        events[2].datetime = "TBD".into();
        assert_eq!(overall_progress(&events, at(5)), 0.25);
        assert_eq!(bracket(&events, at(15)), Bracket::After);
        let mut previous = 0.0;
        for hour in -5..30 {
            let p = overall_progress(&events, at(hour));
            assert!(p >= previous, "hour {hour}: {p} < {previous}");
            previous = p;
        }
    }

    #[test]
    fn marker_hidden_without_progress() {
        assert_eq!(marker_position(0.0, 3, 0.08), None);
        assert_eq!(marker_position(f64::NAN, 3, 0.08), None);
    }

    #[test]
    fn marker_reaches_end_when_complete() {
        assert_eq!(marker_position(1.0, 3, 0.08), Some(1.0));
    }

    #[test]
    fn marker_clears_event_just_passed() {
        // exactly at the middle event of three
        let tip = marker_position(0.5, 3, 0.08).unwrap();
        assert!((tip - 0.58).abs() < 1e-12);
    }

    #[test]
    fn marker_stays_inside_buffered_segment() {
        for step in 1..100 {
            let displayed = step as f64 / 200.0; // within the first of two segments
            let tip = marker_position(displayed, 3, 0.08).unwrap();
            assert!(tip >= 0.08 - 1e-12, "{tip}");
            assert!(tip <= 0.42 + 1e-12, "{tip}");
        }
    }

    #[test]
    fn single_event_marker_tracks_progress() {
        assert_eq!(marker_position(0.4, 1, 0.08), Some(0.4));
    }
}
