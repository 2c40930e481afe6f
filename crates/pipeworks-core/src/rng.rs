//! The injectable random source.
//!
//! Every random decision the growth engine makes goes through
//! [`StepRng`], so tests can script the draws and production code can
//! plug in a seeded generator. There is no global RNG.

/// A source of uniformly distributed bounded integers.
pub trait StepRng {
    /// Return a uniformly distributed value in `[0, bound)`.
    ///
    /// Callers never pass `bound == 0`.
    fn below(&mut self, bound: u32) -> u32;
}

impl<R: StepRng + ?Sized> StepRng for &mut R {
    fn below(&mut self, bound: u32) -> u32 {
        (**self).below(bound)
    }
}

impl<R: StepRng + ?Sized> StepRng for Box<R> {
    fn below(&mut self, bound: u32) -> u32 {
        (**self).below(bound)
    }
}
