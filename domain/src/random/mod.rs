//! Randomness abstraction
//!
//! The engine never reaches for a global generator. Everything random
//! (pool shuffles, picking the correct position) goes through a
//! [`RandomSource`], so games can be replayed deterministically.
//! Implementations backed by a real generator live in the infrastructure layer.

mod sequence;

pub use sequence::SequenceRandom;

/// Source of random indices for the quiz engine
pub trait RandomSource {
    /// Pick an index uniformly from `0..upper`
    ///
    /// Callers never pass `upper == 0`.
    fn pick(&mut self, upper: usize) -> usize;

    /// Shuffle `items` in place
    ///
    /// The default is a Fisher-Yates shuffle driven by [`RandomSource::pick`].
    fn shuffle<T>(&mut self, items: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..items.len()).rev() {
            let j = self.pick(i + 1);
            items.swap(i, j);
        }
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn pick(&mut self, upper: usize) -> usize {
        (**self).pick(upper)
    }
}
