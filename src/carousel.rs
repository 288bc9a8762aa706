use std::time::{Duration, Instant};

use crate::animate::ease_out_cubic;

/// How long one slide takes.
pub const SLIDE_DURATION: Duration = Duration::from_millis(500);
pub const MIN_INTERVAL: Duration = Duration::from_millis(2000);
pub const MAX_INTERVAL: Duration = Duration::from_millis(5000);

/// Hero image rotation: the current image slides out while the next one
/// slides in, then the index wraps forward.
#[derive(Debug, Clone)]
pub struct Carousel {
    images: Vec<String>,
    index: usize,
    sliding_since: Option<Instant>,
}

impl Carousel {
    pub fn new(images: Vec<String>) -> Self {
        Self {
            images,
            index: 0,
            sliding_since: None,
        }
    }

    /// Rotation only makes sense with something to rotate to.
    pub fn rotates(&self) -> bool {
        self.images.len() > 1
    }

    pub fn current(&self) -> Option<&str> {
        self.images.get(self.index).map(String::as_str)
    }

    pub fn upcoming(&self) -> Option<&str> {
        if self.images.is_empty() {
            return None;
        }
        self.images
            .get((self.index + 1) % self.images.len())
            .map(String::as_str)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Begin sliding to the next image. Ignored mid-slide.
    pub fn advance(&mut self, now: Instant) {
        if self.rotates() && self.sliding_since.is_none() {
            self.sliding_since = Some(now);
        }
    }

    /// Commit a finished slide. Returns true while a slide is in flight.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(since) = self.sliding_since else {
            return false;
        };
        if now.saturating_duration_since(since) >= SLIDE_DURATION {
            self.index = (self.index + 1) % self.images.len();
            self.sliding_since = None;
            return false;
        }
        true
    }

    /// How far the current image has slid out, in `[0, 1]`.
    pub fn offset(&self, now: Instant) -> f64 {
        match self.sliding_since {
            Some(since) => ease_out_cubic(
                now.saturating_duration_since(since).as_secs_f64() / SLIDE_DURATION.as_secs_f64(),
            ),
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(n: usize) -> Carousel {
        Carousel::new((0..n).map(|i| format!("images/{i}.jpg")).collect())
    }

    #[test]
    fn slide_commits_after_duration_and_wraps() {
        let t0 = Instant::now();
        let mut c = carousel(2);
        c.advance(t0);
        assert!(c.poll(t0 + Duration::from_millis(100)));
        assert_eq!(c.index(), 0);
        assert!(!c.poll(t0 + SLIDE_DURATION));
        assert_eq!(c.index(), 1);

        c.advance(t0 + Duration::from_secs(3));
        c.poll(t0 + Duration::from_secs(4));
        assert_eq!(c.index(), 0);
        assert_eq!(c.current(), Some("images/0.jpg"));
    }

    #[test]
    fn single_image_never_rotates() {
        let t0 = Instant::now();
        let mut c = carousel(1);
        assert!(!c.rotates());
        c.advance(t0);
        assert!(!c.poll(t0 + Duration::from_secs(1)));
        assert_eq!(c.index(), 0);
        assert_eq!(c.upcoming(), Some("images/0.jpg"));
    }

    #[test]
    fn empty_carousel_has_nothing_to_show() {
        let c = carousel(0);
        assert_eq!(c.current(), None);
        assert_eq!(c.upcoming(), None);
    }

    #[test]
    fn advance_mid_slide_is_ignored() {
        let t0 = Instant::now();
        let mut c = carousel(3);
        c.advance(t0);
        c.advance(t0 + Duration::from_millis(400));
        assert!(!c.poll(t0 + SLIDE_DURATION));
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn offset_eases_out() {
        let t0 = Instant::now();
        let mut c = carousel(3);
        assert_eq!(c.offset(t0), 0.0);
        c.advance(t0);
        assert_eq!(c.offset(t0 + Duration::from_millis(250)), 0.875);
    }
}
