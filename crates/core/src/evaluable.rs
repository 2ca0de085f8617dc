use std::sync::Arc;

use crate::region;

/// An objective function over a box-shaped region of interest.
///
/// An `Evaluable` maps `dimension()` input variables to `objective_count()`
/// objective values. It also declares a region of interest: the box
/// `[lower_bounds()[i], upper_bounds()[i]]` in each dimension within which
/// evaluations are considered meaningful. Evaluating outside the region is
/// allowed; what the function returns there is its own business.
///
/// Implementations must keep the dimension, objective count, and bounds
/// fixed for their whole lifetime, with `lower_bounds()[i] < upper_bounds()[i]`
/// in every dimension.
///
/// ## Wrapping
///
/// Problem transforms are themselves `Evaluable`s that hold another
/// `Evaluable` and adjust its inputs or outputs around the inner call.
/// References, `Box`, and `Arc` handles to an evaluable are also evaluable,
/// so transforms can hold any of them, including `dyn Evaluable`.
///
/// # Example
///
/// ```
/// use bbob_core::{Evaluable, RegionOfInterest};
///
/// struct Sphere {
///     region: RegionOfInterest,
/// }
///
/// impl Evaluable for Sphere {
///     fn dimension(&self) -> usize {
///         self.region.dimension()
///     }
///
///     fn objective_count(&self) -> usize {
///         1
///     }
///
///     fn lower_bounds(&self) -> &[f64] {
///         self.region.lower_bounds()
///     }
///
///     fn upper_bounds(&self) -> &[f64] {
///         self.region.upper_bounds()
///     }
///
///     fn evaluate_into(&self, x: &[f64], y: &mut [f64]) {
///         y[0] = x.iter().map(|xi| xi * xi).sum();
///     }
/// }
///
/// let sphere = Sphere {
///     region: RegionOfInterest::uniform(2, -5.0, 5.0).unwrap(),
/// };
///
/// assert_eq!(sphere.evaluate(&[1.0, 2.0]), vec![5.0]);
/// ```
pub trait Evaluable {
    /// Returns the number of input variables.
    fn dimension(&self) -> usize;

    /// Returns the number of objective values produced per evaluation.
    fn objective_count(&self) -> usize;

    /// Returns the lower bound of the region of interest in each dimension.
    fn lower_bounds(&self) -> &[f64];

    /// Returns the upper bound of the region of interest in each dimension.
    fn upper_bounds(&self) -> &[f64];

    /// Evaluates the function at `x`, writing the objective values into `y`.
    ///
    /// Callers pass `x` with `dimension()` entries and `y` with
    /// `objective_count()` entries. Implementations overwrite every entry of `y`.
    fn evaluate_into(&self, x: &[f64], y: &mut [f64]);

    /// Evaluates the function at `x` and returns the objective values.
    fn evaluate(&self, x: &[f64]) -> Vec<f64> {
        let mut y = vec![0.0; self.objective_count()];
        self.evaluate_into(x, &mut y);
        y
    }

    /// Returns `true` if `x` lies inside the closed region of interest.
    fn region_contains(&self, x: &[f64]) -> bool {
        region::contains(self.lower_bounds(), self.upper_bounds(), x)
    }
}

impl<E: Evaluable + ?Sized> Evaluable for &E {
    fn dimension(&self) -> usize {
        (**self).dimension()
    }

    fn objective_count(&self) -> usize {
        (**self).objective_count()
    }

    fn lower_bounds(&self) -> &[f64] {
        (**self).lower_bounds()
    }

    fn upper_bounds(&self) -> &[f64] {
        (**self).upper_bounds()
    }

    fn evaluate_into(&self, x: &[f64], y: &mut [f64]) {
        (**self).evaluate_into(x, y);
    }

    fn evaluate(&self, x: &[f64]) -> Vec<f64> {
        (**self).evaluate(x)
    }
}

impl<E: Evaluable + ?Sized> Evaluable for Box<E> {
    fn dimension(&self) -> usize {
        (**self).dimension()
    }

    fn objective_count(&self) -> usize {
        (**self).objective_count()
    }

    fn lower_bounds(&self) -> &[f64] {
        (**self).lower_bounds()
    }

    fn upper_bounds(&self) -> &[f64] {
        (**self).upper_bounds()
    }

    fn evaluate_into(&self, x: &[f64], y: &mut [f64]) {
        (**self).evaluate_into(x, y);
    }

    fn evaluate(&self, x: &[f64]) -> Vec<f64> {
        (**self).evaluate(x)
    }
}

impl<E: Evaluable + ?Sized> Evaluable for Arc<E> {
    fn dimension(&self) -> usize {
        (**self).dimension()
    }

    fn objective_count(&self) -> usize {
        (**self).objective_count()
    }

    fn lower_bounds(&self) -> &[f64] {
        (**self).lower_bounds()
    }

    fn upper_bounds(&self) -> &[f64] {
        (**self).upper_bounds()
    }

    fn evaluate_into(&self, x: &[f64], y: &mut [f64]) {
        (**self).evaluate_into(x, y);
    }

    fn evaluate(&self, x: &[f64]) -> Vec<f64> {
        (**self).evaluate(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::RegionOfInterest;

    /// f(x) = [sum(x), product(x)]
    struct SumAndProduct {
        region: RegionOfInterest,
    }

    impl SumAndProduct {
        fn new(dimension: usize) -> Self {
            Self {
                region: RegionOfInterest::uniform(dimension, -1.0, 1.0).unwrap(),
            }
        }
    }

    impl Evaluable for SumAndProduct {
        fn dimension(&self) -> usize {
            self.region.dimension()
        }

        fn objective_count(&self) -> usize {
            2
        }

        fn lower_bounds(&self) -> &[f64] {
            self.region.lower_bounds()
        }

        fn upper_bounds(&self) -> &[f64] {
            self.region.upper_bounds()
        }

        fn evaluate_into(&self, x: &[f64], y: &mut [f64]) {
            y[0] = x.iter().sum();
            y[1] = x.iter().product();
        }
    }

    #[test]
    fn evaluate_allocates_one_value_per_objective() {
        let f = SumAndProduct::new(3);

        let y = f.evaluate(&[0.5, -0.5, 0.25]);

        assert_eq!(y.len(), 2);
        assert_relative_eq!(y[0], 0.25);
        assert_relative_eq!(y[1], -0.0625);
    }

    #[test]
    fn evaluate_into_overwrites_buffer() {
        let f = SumAndProduct::new(2);
        let mut y = [f64::NAN, f64::NAN];

        f.evaluate_into(&[0.5, 0.5], &mut y);

        assert_relative_eq!(y[0], 1.0);
        assert_relative_eq!(y[1], 0.25);
    }

    #[test]
    fn region_contains_uses_declared_bounds() {
        let f = SumAndProduct::new(2);

        assert!(f.region_contains(&[1.0, -1.0]));
        assert!(!f.region_contains(&[1.5, 0.0]));
    }

    #[test]
    fn handles_are_evaluable() {
        let f = SumAndProduct::new(2);
        let x = [0.25, 0.5];
        let expected = f.evaluate(&x);

        let by_ref: &dyn Evaluable = &f;
        assert_eq!(by_ref.evaluate(&x), expected);
        assert_eq!(by_ref.dimension(), 2);

        let boxed: Box<dyn Evaluable> = Box::new(SumAndProduct::new(2));
        assert_eq!(boxed.evaluate(&x), expected);
        assert_eq!(boxed.objective_count(), 2);

        let shared: Arc<dyn Evaluable + Send + Sync> = Arc::new(SumAndProduct::new(2));
        assert_eq!(shared.evaluate(&x), expected);
        assert_eq!(shared.upper_bounds(), &[1.0, 1.0]);
    }
}
