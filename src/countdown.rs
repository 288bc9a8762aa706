use std::fmt;
use std::time::Instant;

use chrono::{Local, NaiveDateTime, TimeDelta};

/// Source of "now" for everything date-driven.
///
/// `Fixed` starts from a given moment and advances in real time, so a
/// pinned reference date still ticks.
#[derive(Debug, Clone, Copy)]
pub enum Clock {
    Wall,
    Fixed {
        origin: NaiveDateTime,
        started: Instant,
    },
}

impl Clock {
    pub fn starting_at(origin: NaiveDateTime) -> Self {
        Clock::Fixed {
            origin,
            started: Instant::now(),
        }
    }

    pub fn now(&self) -> NaiveDateTime {
        match self {
            Clock::Wall => Local::now().naive_local(),
            Clock::Fixed { origin, started } => {
                let elapsed = TimeDelta::from_std(started.elapsed()).unwrap_or(TimeDelta::zero());
                *origin + elapsed
            }
        }
    }
}

/// Whole days, hours, minutes and seconds remaining.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeLeft {
    /// Time from `now` until `target`; all zero once the target has passed.
    pub fn until(target: NaiveDateTime, now: NaiveDateTime) -> Self {
        let millis = (target - now).num_milliseconds();
        if millis <= 0 {
            return Self::default();
        }
        let secs = millis / 1000;
        Self {
            days: secs / 86_400,
            hours: (secs / 3_600) % 24,
            minutes: (secs / 60) % 60,
            seconds: secs % 60,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

impl fmt::Display for TimeLeft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02} : {:02} : {:02} : {:02}",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// The home page's "rush ends in" clock, refreshed once per second.
#[derive(Debug, Clone, Copy)]
pub struct Countdown {
    target: Option<NaiveDateTime>,
    left: TimeLeft,
}

impl Countdown {
    /// An unparseable target shows all zeros.
    pub fn new(target: Option<NaiveDateTime>) -> Self {
        Self {
            target,
            left: TimeLeft::default(),
        }
    }

    pub fn tick(&mut self, now: NaiveDateTime) {
        self.left = match self.target {
            Some(target) => TimeLeft::until(target, now),
            None => TimeLeft::default(),
        };
    }

    pub fn left(&self) -> TimeLeft {
        self.left
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::parse_datetime;

    fn dt(raw: &str) -> NaiveDateTime {
        parse_datetime(raw).unwrap()
    }

    #[test]
    fn exactly_one_day_left() {
        let left = TimeLeft::until(dt("2026-01-23T21:30:00"), dt("2026-01-22T21:30:00"));
        assert_eq!(
            left,
            TimeLeft {
                days: 1,
                hours: 0,
                minutes: 0,
                seconds: 0
            }
        );
    }

    #[test]
    fn mixed_components() {
        let left = TimeLeft::until(dt("2026-01-23T21:30:00"), dt("2026-01-20T19:58:15"));
        assert_eq!(
            left,
            TimeLeft {
                days: 3,
                hours: 1,
                minutes: 31,
                seconds: 45
            }
        );
        assert_eq!(left.to_string(), "03 : 01 : 31 : 45");
    }

    #[test]
    fn never_negative_after_target() {
        let target = dt("2026-01-23T21:30:00");
        assert!(TimeLeft::until(target, target).is_zero());
        assert!(TimeLeft::until(target, dt("2026-02-01T00:00:00")).is_zero());
    }

    #[test]
    fn countdown_without_target_stays_zero() {
        let mut countdown = Countdown::new(None);
        countdown.tick(dt("2026-01-01T00:00:00"));
        assert!(countdown.left().is_zero());
    }

    #[test]
    fn countdown_tick_refreshes() {
        let mut countdown = Countdown::new(Some(dt("2026-01-01T00:01:00")));
        countdown.tick(dt("2026-01-01T00:00:00"));
        assert_eq!(countdown.left().minutes, 1);
        countdown.tick(dt("2026-01-01T00:00:30"));
        assert_eq!(countdown.left().seconds, 30);
        assert_eq!(countdown.left().minutes, 0);
    }

    #[test]
    fn fixed_clock_starts_at_origin() {
        let origin = dt("2025-09-16T18:00:00");
        let clock = Clock::starting_at(origin);
        let now = clock.now();
        assert!(now >= origin);
        assert!(now - origin < TimeDelta::seconds(5));
    }
}
