//! Hero carousel index state.
//!
//! The deck of slides is fixed at compile time; the only mutable state is
//! which slide is front. All transitions wrap, so the index can never leave
//! `[0, len)`.

/// Cyclic cursor over a non-empty slide deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rotator {
    current: usize,
    len: usize,
}

impl Rotator {
    /// `len` must be at least 1 — the hero deck is a non-empty constant.
    pub fn new(len: usize) -> Self {
        debug_assert!(len >= 1, "carousel needs at least one slide");
        Self { current: 0, len }
    }

    /// Index of the slide currently front.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Step forward, wrapping past the last slide.
    pub fn advance(&mut self) {
        self.current = (self.current + 1) % self.len;
    }

    /// Step backward, wrapping past the first slide.
    pub fn retreat(&mut self) {
        self.current = (self.current + self.len - 1) % self.len;
    }

    /// Go straight to `index`. Indicator dots only ever hand us in-range
    /// indices.
    pub fn jump_to(&mut self, index: usize) {
        debug_assert!(index < self.len);
        self.current = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn advance_wraps_at_end() {
        let mut rotator = Rotator::new(3);
        rotator.advance();
        rotator.advance();
        assert_eq!(rotator.current(), 2);
        rotator.advance();
        assert_eq!(rotator.current(), 0);
    }

    #[test]
    fn advance_n_times_is_identity() {
        for len in 1..=9 {
            for start in 0..len {
                let mut rotator = Rotator::new(len);
                rotator.jump_to(start);
                for _ in 0..len {
                    rotator.advance();
                }
                assert_eq!(rotator.current(), start, "len={len} start={start}");
            }
        }
    }

    #[test]
    fn retreat_is_inverse_of_advance() {
        for len in 1..=9 {
            for start in 0..len {
                let mut rotator = Rotator::new(len);
                rotator.jump_to(start);
                rotator.advance();
                rotator.retreat();
                assert_eq!(rotator.current(), start, "len={len} start={start}");
            }
        }
    }

    #[test]
    fn retreat_wraps_at_start() {
        let mut rotator = Rotator::new(5);
        rotator.retreat();
        assert_eq!(rotator.current(), 4);
    }

    #[test]
    fn jump_to_reads_back() {
        let mut rotator = Rotator::new(7);
        for index in 0..7 {
            rotator.jump_to(index);
            assert_eq!(rotator.current(), index);
        }
    }

    #[test]
    fn single_slide_deck_stays_put() {
        let mut rotator = Rotator::new(1);
        rotator.advance();
        assert_eq!(rotator.current(), 0);
        rotator.retreat();
        assert_eq!(rotator.current(), 0);
    }
}
