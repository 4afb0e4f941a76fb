//! Scripted random source

use super::RandomSource;

/// A [`RandomSource`] that replays a fixed sequence of values
///
/// Each pick takes the next value, wrapping around at the end, reduced
/// modulo the requested bound. Useful for tests and replays.
///
/// # Example
///
/// ```
/// use flagquiz_domain::random::{RandomSource, SequenceRandom};
///
/// let mut rng = SequenceRandom::new(vec![1, 5]);
/// assert_eq!(rng.pick(3), 1);
/// assert_eq!(rng.pick(3), 2); // 5 % 3
/// assert_eq!(rng.pick(3), 1); // wraps around
/// ```
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<usize>,
    cursor: usize,
}

impl SequenceRandom {
    /// Create a source from a list of values
    ///
    /// An empty list behaves like a list containing only `0`.
    pub fn new(values: Vec<usize>) -> Self {
        Self { values, cursor: 0 }
    }

    /// A source that always picks `0`
    pub fn zeros() -> Self {
        Self::new(vec![0])
    }

    /// Number of picks served so far
    pub fn picks(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceRandom {
    fn pick(&mut self, upper: usize) -> usize {
        let value = if self.values.is_empty() {
            0
        } else {
            self.values[self.cursor % self.values.len()]
        };
        self.cursor += 1;
        value % upper.max(1)
    }
}
