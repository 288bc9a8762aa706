//! Time-driven animation values.
//!
//! Every value is evaluated against an explicit `Instant`, so animations are
//! pure functions of time and the render loop only decides how often to ask.

use std::time::{Duration, Instant};

/// `1 - (1 - t)^3` with `t` clamped to `[0, 1]`.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// An eased interpolation from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    start: Instant,
    delay: Duration,
    duration: Duration,
}

impl Tween {
    pub fn new(from: f64, to: f64, start: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            start,
            delay: Duration::ZERO,
            duration,
        }
    }

    /// Hold at `from` for `delay` before moving.
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Linear time fraction in `[0, 1]`.
    pub fn elapsed_fraction(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.start + self.delay);
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    pub fn value(&self, now: Instant) -> f64 {
        self.from + (self.to - self.from) * ease_out_cubic(self.elapsed_fraction(now))
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.elapsed_fraction(now) >= 1.0
    }
}

/// A number embedded in display text, counted up from zero.
///
/// `"$12,500"` renders as `"$0"` → `"$6,250"` → `"$12,500"`; prefix, suffix,
/// decimal places and thousands separators are preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct CountUp {
    prefix: String,
    value: f64,
    decimals: usize,
    grouped: bool,
    suffix: String,
}

impl CountUp {
    /// Split `text` around its first number. `None` if it has no digits.
    pub fn parse(text: &str) -> Option<Self> {
        let start = text.find(|c: char| c.is_ascii_digit())?;
        let bytes = text.as_bytes();

        let mut end = start;
        let mut seen_dot = false;
        while end < bytes.len() {
            let c = bytes[end];
            let next_is_digit = bytes.get(end + 1).is_some_and(u8::is_ascii_digit);
            match c {
                b'0'..=b'9' => end += 1,
                b',' if next_is_digit => end += 1,
                b'.' if next_is_digit && !seen_dot => {
                    seen_dot = true;
                    end += 1;
                }
                _ => break,
            }
        }

        let number = &text[start..end];
        let digits: String = number.chars().filter(|c| *c != ',').collect();
        let value = digits.parse::<f64>().ok()?;
        let decimals = digits.split_once('.').map_or(0, |(_, frac)| frac.len());

        Some(Self {
            prefix: text[..start].to_string(),
            value,
            decimals,
            grouped: number.contains(','),
            suffix: text[end..].to_string(),
        })
    }

    /// Text with the number scaled by `fraction` (already eased).
    pub fn render(&self, fraction: f64) -> String {
        let current = self.value * fraction.clamp(0.0, 1.0);
        let formatted = format!("{current:.*}", self.decimals);
        let number = if self.grouped {
            group_thousands(&formatted)
        } else {
            formatted
        };
        format!("{}{}{}", self.prefix, number, self.suffix)
    }
}

/// Render `text` with its first number counted up to `fraction`; text
/// without a number comes back unchanged.
pub fn count_up(text: &str, fraction: f64) -> String {
    match CountUp::parse(text) {
        Some(counter) => counter.render(fraction),
        None => text.to_string(),
    }
}

fn group_thousands(formatted: &str) -> String {
    let (int, frac) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted, None),
    };
    let mut out = String::with_capacity(formatted.len() + int.len() / 3);
    for (i, c) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if let Some(frac) = frac {
        out.push('.');
        out.push_str(frac);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_out_cubic_endpoints_and_clamping() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(0.5), 0.875);
        assert_eq!(ease_out_cubic(-1.0), 0.0);
        assert_eq!(ease_out_cubic(3.0), 1.0);
    }

    #[test]
    fn tween_holds_during_delay() {
        let t0 = Instant::now();
        let tween = Tween::new(0.0, 1.0, t0, Duration::from_millis(2000))
            .delayed(Duration::from_millis(300));
        assert_eq!(tween.value(t0 + Duration::from_millis(299)), 0.0);
        assert_eq!(tween.value(t0 + Duration::from_millis(1300)), 0.875);
        assert_eq!(tween.value(t0 + Duration::from_secs(60)), 1.0);
        assert!(tween.is_finished(t0 + Duration::from_millis(2300)));
        assert!(!tween.is_finished(t0 + Duration::from_millis(2299)));
    }

    #[test]
    fn tween_from_partial_value() {
        let t0 = Instant::now();
        let tween = Tween::new(0.5, 1.0, t0, Duration::from_millis(600));
        assert_eq!(tween.value(t0), 0.5);
        assert_eq!(tween.value(t0 + Duration::from_millis(300)), 0.9375);
    }

    #[test]
    fn zero_duration_is_immediately_done() {
        let t0 = Instant::now();
        let tween = Tween::new(0.0, 1.0, t0, Duration::ZERO);
        assert_eq!(tween.value(t0), 1.0);
    }

    #[test]
    fn counts_grouped_currency() {
        let counter = CountUp::parse("$12,500").unwrap();
        assert_eq!(counter.render(0.0), "$0");
        assert_eq!(counter.render(0.5), "$6,250");
        assert_eq!(counter.render(1.0), "$12,500");
    }

    #[test]
    fn keeps_decimals_and_surrounding_text() {
        assert_eq!(count_up("Average GPA: 3.57", 1.0), "Average GPA: 3.57");
        assert_eq!(count_up("Average GPA: 3.57", 0.0), "Average GPA: 0.00");
        assert_eq!(count_up("$50K+", 1.0), "$50K+");
        assert_eq!(count_up("10,000 lbs", 0.1), "1,000 lbs");
        assert_eq!(count_up("$45,000+ raised for charity", 1.0), "$45,000+ raised for charity");
    }

    #[test]
    fn ungrouped_years_stay_ungrouped() {
        assert_eq!(count_up("1844", 1.0), "1844");
    }

    #[test]
    fn text_without_numbers_is_unchanged() {
        assert_eq!(CountUp::parse("Invite Only"), None);
        assert_eq!(count_up("Invite Only", 0.3), "Invite Only");
    }

    #[test]
    fn trailing_period_is_not_a_decimal_point() {
        assert_eq!(count_up("We built 2.", 1.0), "We built 2.");
    }
}
