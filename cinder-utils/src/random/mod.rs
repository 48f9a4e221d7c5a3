//! Seedable randomness for the simulation.
//!
//! Physics rolls never touch a global generator. Every world owns a
//! [`Random`] implementation so outcomes can be replayed from a seed, and
//! tests can swap in a scripted source.

mod xoroshiro;

pub use xoroshiro::Xoroshiro;

/// A source of pseudo-random numbers.
pub trait Random {
    /// Returns a uniformly distributed `i32`.
    fn next_i32(&mut self) -> i32;

    /// Returns a uniformly distributed value in `0..bound`.
    ///
    /// `bound` must be positive.
    fn next_i32_bounded(&mut self, bound: i32) -> i32;

    /// Rolls a `numerator`-in-`denominator` chance.
    ///
    /// A numerator at or above the denominator always succeeds without
    /// consuming a roll; a numerator of zero or less never does.
    fn chance(&mut self, numerator: i32, denominator: i32) -> bool {
        if numerator >= denominator {
            return true;
        }
        if numerator <= 0 {
            return false;
        }
        self.next_i32_bounded(denominator) < numerator
    }
}
