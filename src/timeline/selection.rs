use std::time::{Duration, Instant};

use super::Point;
use crate::animate::Tween;

/// Which event is emphasised, plus the spacing animation tied to it.
///
/// Hover, click, keyboard and scroll proximity all funnel into
/// [`Selection::select`]; whichever input is processed last wins.
#[derive(Debug, Clone, Copy)]
pub struct Selection {
    index: Option<usize>,
    transition: Tween,
    duration: Duration,
}

impl Selection {
    /// Start with `index` selected and the spacing transition animating up
    /// from zero.
    pub fn new(index: Option<usize>, now: Instant, duration: Duration) -> Self {
        Self {
            index,
            transition: Tween::new(0.0, 1.0, now, duration),
            duration,
        }
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Select `index`. Returns whether the selection changed; a change
    /// restarts the spacing transition from wherever it currently is.
    pub fn select(&mut self, index: usize, now: Instant) -> bool {
        if self.index == Some(index) {
            return false;
        }
        let current = self.transition.value(now);
        self.index = Some(index);
        self.transition = Tween::new(current, 1.0, now, self.duration);
        true
    }

    /// Forget the selection, e.g. after the schedule shrank beneath it.
    pub fn clear(&mut self) {
        self.index = None;
    }

    pub fn transition(&self, now: Instant) -> f64 {
        self.transition.value(now)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        !self.transition.is_finished(now)
    }
}

/// Index of the centre closest to `center`, first one winning ties.
pub fn nearest_to_center(centers: &[f64], center: f64) -> Option<usize> {
    centers
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_finite())
        .min_by(|(_, a), (_, b)| (*a - center).abs().total_cmp(&(*b - center).abs()))
        .map(|(i, _)| i)
}

/// Index of the event marker within `radius` of `pointer`, nearest first.
pub fn hit_test(markers: &[Point], pointer: Point, radius: f64) -> Option<usize> {
    markers
        .iter()
        .enumerate()
        .map(|(i, m)| (i, m.distance(pointer)))
        .filter(|(_, d)| *d <= radius)
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(i, _)| i)
}
