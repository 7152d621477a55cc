//! Quantization of fine-grained scroll deltas into discrete wheel steps.
//!
//! Touch scrolling produces many small deltas.  Backends that can only emit
//! whole wheel clicks accumulate the remainder per axis until it adds up to a
//! full step.  When the client signals the end of a gesture (`finish`), the
//! remainder is discarded so it cannot leak into the next gesture.

/// Delta units per emitted wheel step.
pub const SCROLL_STEP_DIVISOR: i32 = 20;

/// Per-axis scroll remainder.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScrollAccumulator {
    horizontal: i32,
    vertical: i32,
}

impl ScrollAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a delta and returns the whole `(horizontal, vertical)` steps to emit.
    ///
    /// Division truncates toward zero, so a negative remainder is kept for
    /// negative scrolling.  With `finish` the remainders are reset to zero.
    pub fn accumulate(&mut self, delta_h: i32, delta_v: i32, finish: bool) -> (i32, i32) {
        let total_h = self.horizontal.saturating_add(delta_h);
        let total_v = self.vertical.saturating_add(delta_v);
        let steps = (total_h / SCROLL_STEP_DIVISOR, total_v / SCROLL_STEP_DIVISOR);
        if finish {
            self.horizontal = 0;
            self.vertical = 0;
        } else {
            self.horizontal = total_h % SCROLL_STEP_DIVISOR;
            self.vertical = total_v % SCROLL_STEP_DIVISOR;
        }
        steps
    }

    /// Current `(horizontal, vertical)` remainder.
    pub fn remainder(&self) -> (i32, i32) {
        (self.horizontal, self.vertical)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_deltas_accumulate_into_one_step() {
        // Arrange
        let mut acc = ScrollAccumulator::new();

        // Act
        let first = acc.accumulate(0, 15, false);
        let second = acc.accumulate(0, 10, false);

        // Assert
        assert_eq!(first, (0, 0));
        assert_eq!(second, (0, 1));
        assert_eq!(acc.remainder(), (0, 5));
    }

    #[test]
    fn test_negative_remainder_truncates_toward_zero() {
        let mut acc = ScrollAccumulator::new();
        assert_eq!(acc.accumulate(-45, 0, false), (-2, 0));
        assert_eq!(acc.remainder(), (-5, 0));
    }

    #[test]
    fn test_finish_emits_whole_steps_and_resets_remainder() {
        let mut acc = ScrollAccumulator::new();
        acc.accumulate(19, 19, false);

        let steps = acc.accumulate(2, 0, true);

        assert_eq!(steps, (1, 0));
        assert_eq!(acc.remainder(), (0, 0));
    }

    #[test]
    fn test_finish_only_drops_partial_step() {
        let mut acc = ScrollAccumulator::new();
        acc.accumulate(0, 12, false);
        assert_eq!(acc.accumulate(0, 0, true), (0, 0));
        assert_eq!(acc.accumulate(0, 12, false), (0, 0));
        assert_eq!(acc.remainder(), (0, 12));
    }
}
