// src/progress.rs
use crate::error::Result;

/// Progress reporting for a scan.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of subjects to visit.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Fraction of the scan done, in [0, 1], never decreasing.
    /// An error aborts the scan and nothing is cached.
    fn advance(&mut self, _fraction: f64) -> Result<()> { Ok(()) }

    /// Called once after the last subject.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Plain callbacks receive the fraction only.
impl<F> Progress for F
where
    F: FnMut(f64) -> Result<()>,
{
    fn advance(&mut self, fraction: f64) -> Result<()> {
        self(fraction)
    }
}
