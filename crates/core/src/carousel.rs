//! Carousel index controller.
//!
//! A carousel tracks the active item within a collection of `len` items.
//! Navigation wraps in both directions, so for any non-empty collection the
//! index always satisfies `0 <= index < len`. An empty carousel pins the index
//! at zero and ignores navigation.

use crate::gesture::Direction;

/// Active-index state for one carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    /// Create a carousel over `len` items, starting at the first.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Create a carousel positioned at `raw`, wrapped into range.
    ///
    /// Negative positions count back from the end, so `at(3, -1)` is the last
    /// item.
    #[must_use]
    pub fn at(len: usize, raw: i64) -> Self {
        let Ok(n) = i64::try_from(len) else {
            return Self::new(len);
        };
        if n == 0 {
            return Self::new(0);
        }
        // rem_euclid result is in 0..n, so it fits back into usize.
        let index = usize::try_from(raw.rem_euclid(n)).unwrap_or(0);
        Self { index, len }
    }

    /// Index of the active item.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Number of items.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the carousel has no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// One-based position for "i / N" counters.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.index + 1
    }

    /// Advance to the next item, wrapping to the first.
    pub const fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Go back to the previous item, wrapping to the last.
    pub const fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jump directly to `index`, wrapped into range.
    pub const fn go_to(&mut self, index: usize) {
        if self.len > 0 {
            self.index = index % self.len;
        }
    }

    /// Move one step in `direction`.
    pub const fn step(&mut self, direction: Direction) {
        match direction {
            Direction::Prev => self.prev(),
            Direction::Next => self.next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps_after_len_steps() {
        let mut carousel = Carousel::new(3);
        carousel.next();
        carousel.next();
        carousel.next();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_prev_from_first_wraps_to_last() {
        let mut carousel = Carousel::new(8);
        carousel.prev();
        assert_eq!(carousel.index(), 7);
        assert_eq!(carousel.position(), 8);
    }

    #[test]
    fn test_index_stays_in_range_for_mixed_sequences() {
        for len in 1..=9 {
            let mut carousel = Carousel::new(len);
            // Deterministic mix of steps: next on multiples of 3 or 5, prev otherwise.
            for step in 0..200_usize {
                if step % 3 == 0 || step % 5 == 0 {
                    carousel.next();
                } else {
                    carousel.prev();
                }
                assert!(carousel.index() < len, "len {len} step {step}");
            }
        }
    }

    #[test]
    fn test_next_then_prev_is_identity() {
        let mut carousel = Carousel::at(5, 2);
        carousel.next();
        carousel.prev();
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn test_go_to_wraps_out_of_range_index() {
        let mut carousel = Carousel::new(4);
        carousel.go_to(2);
        assert_eq!(carousel.index(), 2);
        carousel.go_to(9);
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn test_at_normalizes_negative_and_large_values() {
        assert_eq!(Carousel::at(3, -1).index(), 2);
        assert_eq!(Carousel::at(3, -3).index(), 0);
        assert_eq!(Carousel::at(3, 10).index(), 1);
        assert_eq!(Carousel::at(8, i64::MIN).index(), 0);
    }

    #[test]
    fn test_empty_carousel_ignores_navigation() {
        let mut carousel = Carousel::new(0);
        carousel.next();
        carousel.prev();
        carousel.go_to(5);
        assert!(carousel.is_empty());
        assert_eq!(carousel.index(), 0);
        assert_eq!(Carousel::at(0, 42).index(), 0);
    }

    #[test]
    fn test_step_follows_direction() {
        let mut carousel = Carousel::new(3);
        carousel.step(Direction::Next);
        assert_eq!(carousel.index(), 1);
        carousel.step(Direction::Prev);
        carousel.step(Direction::Prev);
        assert_eq!(carousel.index(), 2);
    }
}
