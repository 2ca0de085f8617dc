use bbob_core::Evaluable;

use crate::{BoundaryPenalty, PenaltyFactor};

/// Combinators for wrapping any [`Evaluable`] in a transform.
///
/// Implemented for every `Evaluable`, including `dyn Evaluable`.
pub trait EvaluableExt: Evaluable {
    /// Penalizes evaluations outside this problem's region of interest.
    ///
    /// The returned transform borrows `self`.
    ///
    /// # Example
    ///
    /// ```
    /// use bbob_core::{Evaluable, RegionOfInterest};
    /// use bbob_transforms::{EvaluableExt, PenaltyFactor};
    ///
    /// struct Zero(RegionOfInterest);
    ///
    /// impl Evaluable for Zero {
    ///     fn dimension(&self) -> usize {
    ///         self.0.dimension()
    ///     }
    ///     fn objective_count(&self) -> usize {
    ///         1
    ///     }
    ///     fn lower_bounds(&self) -> &[f64] {
    ///         self.0.lower_bounds()
    ///     }
    ///     fn upper_bounds(&self) -> &[f64] {
    ///         self.0.upper_bounds()
    ///     }
    ///     fn evaluate_into(&self, _x: &[f64], y: &mut [f64]) {
    ///         y[0] = 0.0;
    ///     }
    /// }
    ///
    /// let problem = Zero(RegionOfInterest::uniform(2, -5.0, 5.0).unwrap());
    /// let penalized = problem.penalize_out_of_bounds(PenaltyFactor::new(1.0).unwrap());
    ///
    /// assert_eq!(penalized.evaluate(&[7.0, -8.0]), vec![13.0]);
    /// ```
    fn penalize_out_of_bounds(&self, factor: PenaltyFactor) -> BoundaryPenalty<'_, Self> {
        BoundaryPenalty::new(self, factor)
    }
}

impl<E: Evaluable + ?Sized> EvaluableExt for E {}
