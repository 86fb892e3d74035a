//! Carousel navigation: an index into a fixed list, moved by buttons or swipes.
//!
//! The carousel owns its items and a cursor. The cursor only moves through
//! [`Carousel::go_to_previous`], [`Carousel::go_to_next`] and the gesture
//! sequence `begin_gesture` → `update_gesture`* → `end_gesture`. Moves past
//! either end are silently ignored, so the cursor can never leave `0..len`.
//!
//! ```rust
//! use solae_core::carousel::{Carousel, Swipe};
//!
//! let mut carousel = Carousel::new(vec!["a", "b", "c"]).unwrap();
//! carousel.begin_gesture(800.0);
//! carousel.update_gesture(600.0);
//! assert_eq!(carousel.end_gesture(1000.0), Some(Swipe::Forward));
//! assert_eq!(*carousel.current(), "b");
//! ```

use crate::error::CarouselError;

/// Fraction of the viewport width a drag must exceed to count as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 0.15;

/// Direction of an applied swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Pointer moved left, content advances to the next item
    Forward,
    /// Pointer moved right, content goes back to the previous item
    Backward,
}

/// Horizontal coordinates of an in-flight gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Drag {
    origin: f64,
    current: f64,
}

/// Cursor over a non-empty, fixed list of items.
#[derive(Debug, Clone)]
pub struct Carousel<T> {
    items: Vec<T>,
    index: usize,
    drag: Option<Drag>,
    threshold_ratio: f64,
}

/// Check a swipe threshold ratio: finite and within `(0, 1]`.
pub fn validate_threshold(ratio: f64) -> Result<f64, CarouselError> {
    if ratio.is_finite() && ratio > 0.0 && ratio <= 1.0 {
        Ok(ratio)
    } else {
        Err(CarouselError::InvalidThreshold(ratio))
    }
}

impl<T> Carousel<T> {
    /// Build a carousel positioned at the first item.
    pub fn new(items: Vec<T>) -> Result<Self, CarouselError> {
        if items.is_empty() {
            return Err(CarouselError::Empty);
        }
        Ok(Self {
            items,
            index: 0,
            drag: None,
            threshold_ratio: DEFAULT_SWIPE_THRESHOLD,
        })
    }

    /// Replace the swipe threshold ratio (default [`DEFAULT_SWIPE_THRESHOLD`]).
    pub fn with_threshold_ratio(mut self, ratio: f64) -> Result<Self, CarouselError> {
        self.threshold_ratio = validate_threshold(ratio)?;
        Ok(self)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`; construction rejects empty lists.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    /// The item under the cursor.
    pub fn current(&self) -> &T {
        &self.items[self.index]
    }

    pub fn at_start(&self) -> bool {
        self.index == 0
    }

    pub fn at_end(&self) -> bool {
        self.index + 1 == self.items.len()
    }

    pub fn threshold_ratio(&self) -> f64 {
        self.threshold_ratio
    }

    /// Step back one item. Returns `false` when already at the start.
    pub fn go_to_previous(&mut self) -> bool {
        if self.at_start() {
            return false;
        }
        self.index -= 1;
        tracing::debug!(index = self.index, "carousel moved to previous item");
        true
    }

    /// Step forward one item. Returns `false` when already at the end.
    pub fn go_to_next(&mut self) -> bool {
        if self.at_end() {
            return false;
        }
        self.index += 1;
        tracing::debug!(index = self.index, "carousel moved to next item");
        true
    }

    /// Whether a gesture is between `begin_gesture` and `end_gesture`.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn drag_origin(&self) -> Option<f64> {
        self.drag.map(|d| d.origin)
    }

    pub fn drag_current(&self) -> Option<f64> {
        self.drag.map(|d| d.current)
    }

    /// Start a gesture at `x`. An unfinished gesture is discarded.
    ///
    /// Non-finite coordinates are ignored.
    pub fn begin_gesture(&mut self, x: f64) {
        if !x.is_finite() {
            return;
        }
        self.drag = Some(Drag {
            origin: x,
            current: x,
        });
    }

    /// Track the pointer while a gesture is active; no-op otherwise.
    pub fn update_gesture(&mut self, x: f64) {
        if !x.is_finite() {
            return;
        }
        if let Some(drag) = self.drag.as_mut() {
            drag.current = x;
        }
    }

    /// Minimum displacement, in pixels, for a swipe on a viewport this wide.
    ///
    /// Degenerate widths (zero, negative, NaN) give a zero threshold.
    pub fn swipe_threshold(&self, viewport_width: f64) -> f64 {
        if viewport_width.is_finite() && viewport_width > 0.0 {
            viewport_width * self.threshold_ratio
        } else {
            0.0
        }
    }

    /// Finish the active gesture and apply it if it cleared the threshold.
    ///
    /// Returns the swipe that moved the cursor. `None` covers every case
    /// where the cursor stayed put: no active gesture, a drag too short to
    /// count, or a swipe against a boundary.
    pub fn end_gesture(&mut self, viewport_width: f64) -> Option<Swipe> {
        let drag = self.drag.take()?;
        let distance = drag.origin - drag.current;
        let threshold = self.swipe_threshold(viewport_width);

        if distance.abs() <= threshold {
            tracing::trace!(distance, threshold, "gesture below swipe threshold");
            return None;
        }

        if distance > 0.0 {
            self.go_to_next().then_some(Swipe::Forward)
        } else {
            self.go_to_previous().then_some(Swipe::Backward)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn three() -> Carousel<&'static str> {
        Carousel::new(vec!["growth", "automation", "presence"]).expect("non-empty")
    }

    fn swipe(carousel: &mut Carousel<&'static str>, from: f64, to: f64, width: f64) -> Option<Swipe> {
        carousel.begin_gesture(from);
        carousel.update_gesture(to);
        carousel.end_gesture(width)
    }

    #[test]
    fn starts_at_first_item() {
        let carousel = three();
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(*carousel.current(), "growth");
        assert!(carousel.at_start());
        assert!(!carousel.at_end());
        assert!(!carousel.is_dragging());
    }

    #[test]
    fn rejects_empty_items() {
        let err = Carousel::<u8>::new(vec![]).unwrap_err();
        assert_eq!(err, CarouselError::Empty);
    }

    #[test]
    fn rejects_bad_threshold() {
        for ratio in [0.0, -0.1, 1.5, f64::NAN, f64::INFINITY] {
            assert!(three().with_threshold_ratio(ratio).is_err(), "{ratio}");
        }
        let carousel = three().with_threshold_ratio(1.0).expect("1.0 is allowed");
        assert_eq!(carousel.threshold_ratio(), 1.0);
    }

    #[test]
    fn previous_at_start_is_noop() {
        let mut carousel = three();
        assert!(!carousel.go_to_previous());
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn next_at_end_is_noop() {
        let mut carousel = three();
        assert!(carousel.go_to_next());
        assert!(carousel.go_to_next());
        assert!(carousel.at_end());
        assert!(!carousel.go_to_next());
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn single_item_is_both_start_and_end() {
        let mut carousel = Carousel::new(vec!["only"]).expect("non-empty");
        assert!(carousel.at_start());
        assert!(carousel.at_end());
        assert!(!carousel.go_to_next());
        assert!(!carousel.go_to_previous());
        assert_eq!(swipe_single(&mut carousel, 900.0, 0.0), None);
        assert_eq!(carousel.current_index(), 0);
    }

    fn swipe_single(carousel: &mut Carousel<&'static str>, from: f64, to: f64) -> Option<Swipe> {
        carousel.begin_gesture(from);
        carousel.update_gesture(to);
        carousel.end_gesture(1000.0)
    }

    #[test]
    fn forward_swipes_walk_to_the_end() {
        let mut carousel = three();
        assert_eq!(swipe(&mut carousel, 800.0, 600.0, 1000.0), Some(Swipe::Forward));
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(swipe(&mut carousel, 800.0, 600.0, 1000.0), Some(Swipe::Forward));
        assert_eq!(carousel.current_index(), 2);
        assert_eq!(swipe(&mut carousel, 800.0, 600.0, 1000.0), None);
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn backward_swipe_goes_back_one() {
        let mut carousel = three();
        carousel.go_to_next();
        carousel.go_to_next();
        assert_eq!(swipe(&mut carousel, 200.0, 400.0, 1000.0), Some(Swipe::Backward));
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn short_drags_are_inert() {
        let mut carousel = three();
        // exactly on the threshold does not count
        assert_eq!(swipe(&mut carousel, 800.0, 650.0, 1000.0), None);
        assert_eq!(swipe(&mut carousel, 650.0, 800.0, 1000.0), None);
        assert_eq!(carousel.current_index(), 0);
        assert!(!carousel.is_dragging());
    }

    #[test]
    fn tap_without_move_is_inert() {
        let mut carousel = three();
        carousel.begin_gesture(500.0);
        assert_eq!(carousel.end_gesture(1000.0), None);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn update_and_end_without_begin_are_noops() {
        let mut carousel = three();
        carousel.update_gesture(10.0);
        assert!(!carousel.is_dragging());
        assert_eq!(carousel.drag_current(), None);
        assert_eq!(carousel.end_gesture(1000.0), None);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn begin_overwrites_unfinished_gesture() {
        let mut carousel = three();
        carousel.begin_gesture(900.0);
        carousel.update_gesture(100.0);
        carousel.begin_gesture(500.0);
        assert_eq!(carousel.drag_origin(), Some(500.0));
        assert_eq!(carousel.drag_current(), Some(500.0));
        assert_eq!(carousel.end_gesture(1000.0), None);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn end_clears_drag_coordinates() {
        let mut carousel = three();
        carousel.begin_gesture(800.0);
        carousel.update_gesture(100.0);
        carousel.end_gesture(1000.0);
        assert_eq!(carousel.drag_origin(), None);
        assert_eq!(carousel.drag_current(), None);
    }

    #[test]
    fn non_finite_coordinates_are_ignored() {
        let mut carousel = three();
        carousel.begin_gesture(f64::NAN);
        assert!(!carousel.is_dragging());
        carousel.begin_gesture(300.0);
        carousel.update_gesture(f64::INFINITY);
        assert_eq!(carousel.drag_current(), Some(300.0));
    }

    #[test]
    fn degenerate_viewport_counts_any_movement() {
        let carousel = three();
        assert_eq!(carousel.swipe_threshold(0.0), 0.0);
        assert_eq!(carousel.swipe_threshold(f64::NAN), 0.0);

        let mut carousel = three();
        assert_eq!(swipe(&mut carousel, 10.0, 9.0, 0.0), Some(Swipe::Forward));
    }

    #[test]
    fn custom_threshold_changes_sensitivity() {
        let mut carousel = three().with_threshold_ratio(0.5).expect("valid ratio");
        assert_eq!(swipe(&mut carousel, 800.0, 600.0, 1000.0), None);
        assert_eq!(swipe(&mut carousel, 800.0, 200.0, 1000.0), Some(Swipe::Forward));
    }

    #[test]
    fn index_stays_in_bounds_for_every_button_sequence() {
        // every next/previous sequence up to 8 steps, for lists of 1..=5 items
        for len in 1..=5usize {
            for steps in 0..=8u32 {
                for mask in 0..(1u32 << steps) {
                    let mut carousel = Carousel::new((0..len).collect::<Vec<_>>()).expect("non-empty");
                    let mut expected = 0usize;
                    for bit in 0..steps {
                        if mask & (1 << bit) != 0 {
                            carousel.go_to_next();
                            expected = (expected + 1).min(len - 1);
                        } else {
                            carousel.go_to_previous();
                            expected = expected.saturating_sub(1);
                        }
                        assert!(carousel.current_index() < len);
                        assert_eq!(carousel.current_index(), expected);
                        assert_eq!(*carousel.current(), expected);
                    }
                }
            }
        }
    }
}
