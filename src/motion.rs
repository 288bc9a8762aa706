//! Pointer- and scroll-driven effects for the home page.

use std::time::Duration;

/// Per-row lag of the photo wall, cycled by row index.
pub const ROW_INERTIA: [f64; 4] = [0.6, 0.4, 0.3, 0.2];

/// Horizontal drift of each photo-wall row.
///
/// The pointer position (as a fraction of the width) and the scroll
/// progress each contribute up to `max_move / 2` either way; scroll is
/// damped by half. Even rows drift with the pointer, odd rows against it.
pub fn grid_row_offsets(rows: usize, pointer_ratio: f64, scroll_progress: f64, max_move: f64) -> Vec<f64> {
    let pointer = pointer_ratio.clamp(0.0, 1.0) * max_move - max_move / 2.0;
    let scroll = (scroll_progress.clamp(0.0, 1.0) * max_move - max_move / 2.0) * 0.5;
    let combined = pointer + scroll;
    (0..rows)
        .map(|row| if row % 2 == 0 { combined } else { -combined })
        .collect()
}

/// Move `current` a step toward `target`, heavier rows lagging more.
pub fn settle(current: f64, target: f64, row: usize) -> f64 {
    let inertia = ROW_INERTIA[row % ROW_INERTIA.len()];
    current + (target - current) * (1.0 - inertia)
}

/// Which of three stacked panels is highlighted by scrolling: the last one
/// whose centre has crossed the middle of the viewport. `None` until the
/// first panel's centre gets there.
pub fn active_panel(section_top: f64, section_height: f64, viewport_height: f64) -> Option<usize> {
    let panel = section_height / 3.0;
    let middle = viewport_height / 2.0;
    (0..3)
        .rev()
        .find(|&i| section_top + panel * i as f64 + panel / 2.0 <= middle)
}

/// Index of the word shown by a rotating caption after `elapsed`.
pub fn rotation_index(elapsed: Duration, interval: Duration, len: usize) -> usize {
    if len == 0 || interval.is_zero() {
        return 0;
    }
    (elapsed.as_millis() / interval.as_millis()) as usize % len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_pointer_and_half_scroll_is_still() {
        let offsets = grid_row_offsets(4, 0.5, 0.5, 300.0);
        assert_eq!(offsets, vec![0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn rows_alternate_direction() {
        let offsets = grid_row_offsets(4, 1.0, 0.5, 300.0);
        assert_eq!(offsets, vec![150.0, -150.0, 150.0, -150.0]);
    }

    #[test]
    fn scroll_contributes_half() {
        let offsets = grid_row_offsets(2, 0.5, 1.0, 300.0);
        assert_eq!(offsets, vec![75.0, -75.0]);
    }

    #[test]
    fn settle_moves_partway() {
        assert!((settle(0.0, 10.0, 0) - 4.0).abs() < 1e-12);
        assert!((settle(0.0, 10.0, 3) - 8.0).abs() < 1e-12);
    }

    #[test]
    fn active_panel_follows_scroll() {
        // three 10-row panels, 20-row viewport (middle at 10)
        assert_eq!(active_panel(20.0, 30.0, 20.0), None);
        assert_eq!(active_panel(5.0, 30.0, 20.0), Some(0));
        assert_eq!(active_panel(-5.0, 30.0, 20.0), Some(1));
        assert_eq!(active_panel(-15.0, 30.0, 20.0), Some(2));
        assert_eq!(active_panel(-100.0, 30.0, 20.0), Some(2));
    }

    #[test]
    fn rotation_cycles() {
        let step = Duration::from_millis(2000);
        assert_eq!(rotation_index(Duration::from_millis(1999), step, 3), 0);
        assert_eq!(rotation_index(Duration::from_millis(4000), step, 3), 2);
        assert_eq!(rotation_index(Duration::from_millis(6000), step, 3), 0);
        assert_eq!(rotation_index(Duration::from_secs(9), step, 0), 0);
    }
}
