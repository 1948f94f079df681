//! Progress observer for long scans
//!
//! Purely observational: nothing reported here feeds back into guess selection.

/// Receives the completed fraction (0.0 to 1.0) of a running scan
pub trait Progress: Sync {
    fn report(&self, fraction: f64);
}

/// Observer that ignores every report
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Progress for Silent {
    fn report(&self, _fraction: f64) {}
}

impl<F: Fn(f64) + Sync> Progress for F {
    fn report(&self, fraction: f64) {
        self(fraction);
    }
}
