//! Quadratic penalty for evaluations outside the region of interest.
//!
//! # Algorithm
//!
//! For an input `x`, each dimension contributes the squared distance from
//! `x[i]` to the nearest violated bound:
//!
//! ```text
//!   penalty = Σ (x[i] - upper[i])²   if x[i] > upper[i]
//!           + Σ (lower[i] - x[i])²   if x[i] < lower[i]
//! ```
//!
//! The wrapped problem is always evaluated at `x` as given, and
//! `factor * penalty` is added to every objective value. Points on a bound
//! contribute nothing. The same scalar is added to all objectives.
//!
//! # Composition
//!
//! Wrapping a [`BoundaryPenalty`] in another [`BoundaryPenalty`] adds both
//! penalties, each scaled by its own factor. Nesting is not idempotent.
//!
//! # Panics
//!
//! Evaluation re-checks the wrapped problem's bounds on every call and
//! panics with [`RegionError::Malformed`] if any lower bound is not strictly
//! below its upper bound. A malformed region is a configuration mistake, not
//! a condition the caller can recover from.
//!
//! [`RegionError::Malformed`]: bbob_core::RegionError::Malformed

mod factor;
mod penalty;


pub use factor::{FactorError, PenaltyFactor};
pub use penalty::quadratic_penalty;

use bbob_core::Evaluable;
use tracing::{debug, trace};

/// A transform that penalizes evaluations outside the region of interest.
///
/// Borrows the wrapped problem for `'a` and exposes its dimension, objective
/// count, and bounds unchanged.
#[derive(Debug)]
pub struct BoundaryPenalty<'a, E: ?Sized> {
    inner: &'a E,
    factor: PenaltyFactor,
}

impl<'a, E: Evaluable + ?Sized> BoundaryPenalty<'a, E> {
    /// Wraps `inner` with the given penalty factor.
    pub fn new(inner: &'a E, factor: PenaltyFactor) -> Self {
        debug!(
            dimension = inner.dimension(),
            objectives = inner.objective_count(),
            factor = factor.get(),
            "wrapping evaluable with boundary penalty"
        );
        Self { inner, factor }
    }

    /// Wraps `inner` with a raw `f64` factor.
    ///
    /// # Panics
    ///
    /// Panics if `factor` is negative or not finite.
    pub fn with_factor(inner: &'a E, factor: f64) -> Self {
        match PenaltyFactor::new(factor) {
            Ok(factor) => Self::new(inner, factor),
            Err(err) => panic!("invalid boundary penalty factor {factor}: {err}"),
        }
    }

    /// Returns the wrapped problem.
    #[must_use]
    pub fn inner(&self) -> &'a E {
        self.inner
    }

    #[must_use]
    pub fn factor(&self) -> PenaltyFactor {
        self.factor
    }
}

impl<E: Evaluable + ?Sized> Evaluable for BoundaryPenalty<'_, E> {
    fn dimension(&self) -> usize {
        self.inner.dimension()
    }

    fn objective_count(&self) -> usize {
        self.inner.objective_count()
    }

    fn lower_bounds(&self) -> &[f64] {
        self.inner.lower_bounds()
    }

    fn upper_bounds(&self) -> &[f64] {
        self.inner.upper_bounds()
    }

    fn evaluate_into(&self, x: &[f64], y: &mut [f64]) {
        debug_assert_eq!(x.len(), self.dimension(), "input length must match dimension");
        debug_assert_eq!(
            y.len(),
            self.objective_count(),
            "output length must match objective count"
        );

        let penalty = quadratic_penalty(self.lower_bounds(), self.upper_bounds(), x);

        self.inner.evaluate_into(x, y);

        // A zero term leaves the inner output untouched, even when `x` is
        // infinite and `0 * penalty` would be NaN.
        if penalty > 0.0 && !self.factor.is_zero() {
            trace!(penalty, "evaluation outside region of interest");
            let shift = self.factor.get() * penalty;
            for value in y.iter_mut() {
                *value += shift;
            }
        }
    }
}
