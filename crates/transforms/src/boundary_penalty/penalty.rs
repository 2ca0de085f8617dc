use bbob_core::RegionError;

/// Computes the quadratic out-of-bounds penalty of `x`.
///
/// Returns the sum over all dimensions of the squared distance from `x[i]`
/// to the bound it violates, or zero for dimensions where `x[i]` lies in the
/// closed interval `[lower[i], upper[i]]`. An empty input has zero penalty.
///
/// # Panics
///
/// Panics with [`RegionError::Malformed`] if any `lower[i]` is not strictly
/// below `upper[i]`.
#[must_use]
pub fn quadratic_penalty(lower: &[f64], upper: &[f64], x: &[f64]) -> f64 {
    debug_assert_eq!(lower.len(), upper.len(), "bound lengths must match");
    debug_assert_eq!(lower.len(), x.len(), "input length must match bounds");

    lower
        .iter()
        .zip(upper)
        .zip(x)
        .enumerate()
        .fold(0.0, |penalty, (index, ((&lo, &hi), &xi))| {
            let above = xi - hi;
            let below = lo - xi;
            assert!(
                lo < hi,
                "{}",
                RegionError::Malformed {
                    index,
                    lower: lo,
                    upper: hi,
                }
            );

            if above > 0.0 {
                penalty + above * above
            } else if below > 0.0 {
                penalty + below * below
            } else {
                penalty
            }
        })
}
