use chrono::NaiveDateTime;

use super::TimelineConfig;
use crate::content::RushEvent;

/// Scales the spacing multiplier down to a fractional displacement.
const SPACING_SCALE: f64 = 0.1;

/// Evenly spaced fractional positions, before any selection adjustment.
///
/// A lone event sits at the curve midpoint.
pub fn uniform_positions(n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![0.5],
        _ => (0..n).map(|i| i as f64 / (n - 1) as f64).collect(),
    }
}

/// Fractional positions with the selected event's neighbours pushed apart.
///
/// Only indices adjacent to `selected` move, by an amount that grows with
/// `transition`. The first and last events stay pinned at 0 and 1 and the
/// result is strictly increasing.
pub fn event_positions(
    n: usize,
    selected: Option<usize>,
    transition: f64,
    config: &TimelineConfig,
) -> Vec<f64> {
    let mut positions = uniform_positions(n);
    if n <= 2 {
        return positions;
    }
    let Some(selected) = selected else {
        return positions;
    };

    let step = 1.0 / (n - 1) as f64;
    // Only schedules denser than the configured gap fall back to half a step.
    let gap = if step >= config.min_gap {
        config.min_gap
    } else {
        step / 2.0
    };
    let reach = step - gap;
    let extra = ((config.spacing_multiplier - 1.0) * transition * SPACING_SCALE).clamp(-reach, reach);

    for (i, position) in positions.iter_mut().enumerate().take(n - 1).skip(1) {
        if i + 1 == selected {
            *position -= extra;
        } else if i == selected + 1 {
            *position += extra;
        }
    }

    positions[0] = 0.0;
    positions[n - 1] = 1.0;

    for i in 1..n - 1 {
        positions[i] = positions[i]
            .min(positions[i + 1] - gap)
            .max(positions[i - 1] + gap);
    }

    positions
}

/// The first event strictly after `now`, or the last event once all have
/// passed. Events without a parseable date never count as upcoming.
pub fn default_selection(events: &[RushEvent], now: NaiveDateTime) -> Option<usize> {
    if events.is_empty() {
        return None;
    }
    let upcoming = events
        .iter()
        .position(|e| e.timestamp().is_some_and(|ts| ts > now));
    Some(upcoming.unwrap_or(events.len() - 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::parse_datetime;

    fn config() -> TimelineConfig {
        TimelineConfig::default()
    }

    fn strictly_increasing(p: &[f64]) -> bool {
        p.windows(2).all(|w| w[0] < w[1])
    }

    #[test]
    fn unselected_positions_are_uniform() {
        for n in 3..12 {
            let positions = event_positions(n, None, 1.0, &config());
            for (i, p) in positions.iter().enumerate() {
                assert_eq!(*p, i as f64 / (n - 1) as f64);
            }
        }
    }

    #[test]
    fn single_event_sits_in_the_middle() {
        assert_eq!(event_positions(1, Some(0), 1.0, &config()), vec![0.5]);
    }

    #[test]
    fn two_events_are_pinned_to_the_ends() {
        for selected in [None, Some(0), Some(1)] {
            for transition in [0.0, 0.5, 1.0] {
                assert_eq!(event_positions(2, selected, transition, &config()), vec![0.0, 1.0]);
            }
        }
    }

    #[test]
    fn neighbours_move_away_from_selection() {
        let positions = event_positions(5, Some(2), 1.0, &config());
        let extra = 0.2 * 0.1;
        assert!((positions[1] - (0.25 - extra)).abs() < 1e-12);
        assert!((positions[3] - (0.75 + extra)).abs() < 1e-12);
        assert_eq!(positions[2], 0.5);
    }

    #[test]
    fn no_displacement_before_transition_starts() {
        let positions = event_positions(5, Some(2), 0.0, &config());
        assert_eq!(positions, uniform_positions(5));
    }

    #[test]
    fn ends_pinned_and_order_kept_for_any_selection() {
        for n in 2..70 {
            for selected in 0..n {
                for transition in [0.0, 0.3, 1.0] {
                    let p = event_positions(n, Some(selected), transition, &config());
                    assert_eq!(p[0], 0.0);
                    assert_eq!(p[n - 1], 1.0);
                    assert!(strictly_increasing(&p), "n={n} selected={selected}");
                }
            }
        }
    }

    #[test]
    fn min_gap_kept_whenever_uniform_spacing_allows_it() {
        let min_gap = config().min_gap;
        for n in 3..=51 {
            for selected in 0..n {
                for transition in [0.3, 1.0] {
                    let p = event_positions(n, Some(selected), transition, &config());
                    let narrowest = p.windows(2).map(|w| w[1] - w[0]).fold(f64::INFINITY, f64::min);
                    assert!(
                        narrowest >= min_gap - 1e-12,
                        "n={n} selected={selected} narrowest={narrowest}"
                    );
                }
            }
        }
    }

    #[test]
    fn dense_schedule_keeps_half_step_gap() {
        let n = 80;
        let step = 1.0 / (n - 1) as f64;
        let p = event_positions(n, Some(40), 1.0, &config());
        let narrowest = p.windows(2).map(|w| w[1] - w[0]).fold(f64::INFINITY, f64::min);
        assert!(narrowest >= step / 2.0 - 1e-12, "{narrowest}");
    }

    #[test]
    fn extreme_multiplier_still_keeps_order() {
        let wild = TimelineConfig {
            spacing_multiplier: 40.0,
            ..config()
        };
        for selected in 0..6 {
            let p = event_positions(6, Some(selected), 1.0, &wild);
            assert!(strictly_increasing(&p));
        }
    }

    #[test]
    fn out_of_range_selection_changes_nothing() {
        assert_eq!(event_positions(4, Some(10), 1.0, &config()), uniform_positions(4));
    }

    fn event(datetime: &str) -> RushEvent {
        RushEvent {
            name: "e".into(),
            description: None,
            datetime: datetime.into(),
            location: String::new(),
            image: String::new(),
            open: false,
        }
    }

    #[test]
    fn default_selection_picks_next_upcoming_event() {
        let events = vec![
            event("2026-01-09T18:00:00"),
            event("2026-01-10T18:00:00"),
            event("2026-01-11T18:00:00"),
        ];
        let now = parse_datetime("2026-01-10T12:00:00").unwrap();
        assert_eq!(default_selection(&events, now), Some(1));

        // strictly in the future: an event starting right now is not upcoming
        let now = parse_datetime("2026-01-10T18:00:00").unwrap();
        assert_eq!(default_selection(&events, now), Some(2));
    }

    #[test]
    fn default_selection_falls_back_to_last_event() {
        let events = vec![event("2026-01-09T18:00:00"), event("not a date")];
        let now = parse_datetime("2027-01-01T00:00:00").unwrap();
        assert_eq!(default_selection(&events, now), Some(1));
        assert_eq!(default_selection(&[], now), None);
    }
}
