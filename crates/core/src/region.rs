use thiserror::Error;

/// Errors describing a misconfigured region of interest.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum RegionError {
    /// A lower bound is not strictly below its upper bound.
    ///
    /// Also reported when either bound is NaN.
    #[error(
        "malformed region of interest: lower bound {lower} is not below upper bound {upper} in dimension {index}"
    )]
    Malformed { index: usize, lower: f64, upper: f64 },

    #[error("bound lengths differ: {lower} lower bounds but {upper} upper bounds")]
    LengthMismatch { lower: usize, upper: usize },
}

/// Checks that `lower` and `upper` describe a well-formed box.
///
/// # Errors
///
/// Returns [`RegionError::LengthMismatch`] if the slices differ in length,
/// or [`RegionError::Malformed`] for the first dimension whose lower bound
/// is not strictly below its upper bound.
pub fn check_bounds(lower: &[f64], upper: &[f64]) -> Result<(), RegionError> {
    if lower.len() != upper.len() {
        return Err(RegionError::LengthMismatch {
            lower: lower.len(),
            upper: upper.len(),
        });
    }

    for (index, (&lo, &hi)) in lower.iter().zip(upper).enumerate() {
        if lo < hi {
            continue;
        }
        return Err(RegionError::Malformed {
            index,
            lower: lo,
            upper: hi,
        });
    }

    Ok(())
}

/// An axis-aligned box of per-dimension bounds.
///
/// The bounds are validated once at construction: both vectors have the
/// same length and every lower bound is strictly below its upper bound.
///
/// # Example
///
/// ```
/// use bbob_core::RegionOfInterest;
///
/// let region = RegionOfInterest::uniform(2, -5.0, 5.0).unwrap();
/// assert!(region.contains(&[5.0, -1.0]));
/// assert!(!region.contains(&[5.5, -1.0]));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RegionOfInterest {
    lower: Vec<f64>,
    upper: Vec<f64>,
}

impl RegionOfInterest {
    /// Creates a region from explicit lower and upper bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if the bounds differ in length or are not strictly
    /// ordered in every dimension.
    pub fn new(lower: Vec<f64>, upper: Vec<f64>) -> Result<Self, RegionError> {
        check_bounds(&lower, &upper)?;
        Ok(Self { lower, upper })
    }

    /// Creates a region with the same bounds in every dimension.
    ///
    /// # Errors
    ///
    /// Returns an error if `dimension > 0` and `lower` is not strictly below `upper`.
    pub fn uniform(dimension: usize, lower: f64, upper: f64) -> Result<Self, RegionError> {
        Self::new(vec![lower; dimension], vec![upper; dimension])
    }

    #[must_use]
    pub fn dimension(&self) -> usize {
        self.lower.len()
    }

    #[must_use]
    pub fn lower_bounds(&self) -> &[f64] {
        &self.lower
    }

    #[must_use]
    pub fn upper_bounds(&self) -> &[f64] {
        &self.upper
    }

    /// Returns `true` if `x` lies inside the closed box.
    ///
    /// Points with the wrong number of coordinates are never contained.
    #[must_use]
    pub fn contains(&self, x: &[f64]) -> bool {
        contains(&self.lower, &self.upper, x)
    }
}

/// Closed-box membership shared by [`RegionOfInterest`] and [`crate::Evaluable`].
pub(crate) fn contains(lower: &[f64], upper: &[f64], x: &[f64]) -> bool {
    x.len() == lower.len()
        && lower
            .iter()
            .zip(upper)
            .zip(x)
            .all(|((lo, hi), xi)| lo <= xi && xi <= hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_strictly_ordered_bounds() {
        let region = RegionOfInterest::new(vec![-5.0, 0.0], vec![5.0, 1.0]).unwrap();

        assert_eq!(region.dimension(), 2);
        assert_eq!(region.lower_bounds(), &[-5.0, 0.0]);
        assert_eq!(region.upper_bounds(), &[5.0, 1.0]);
    }

    #[test]
    fn rejects_equal_bounds() {
        let err = RegionOfInterest::new(vec![-5.0, 2.0], vec![5.0, 2.0]).unwrap_err();

        assert_eq!(
            err,
            RegionError::Malformed {
                index: 1,
                lower: 2.0,
                upper: 2.0
            }
        );
    }

    #[test]
    fn rejects_inverted_bounds() {
        let err = RegionOfInterest::uniform(3, 1.0, -1.0).unwrap_err();

        assert!(matches!(err, RegionError::Malformed { index: 0, .. }));
    }

    #[test]
    fn rejects_nan_bounds() {
        assert!(RegionOfInterest::new(vec![f64::NAN], vec![1.0]).is_err());
        assert!(RegionOfInterest::new(vec![0.0], vec![f64::NAN]).is_err());
    }

    #[test]
    fn rejects_length_mismatch() {
        let err = check_bounds(&[0.0, 0.0], &[1.0]).unwrap_err();

        assert_eq!(err, RegionError::LengthMismatch { lower: 2, upper: 1 });
    }

    #[test]
    fn empty_region_is_valid() {
        let region = RegionOfInterest::uniform(0, 1.0, -1.0).unwrap();

        assert_eq!(region.dimension(), 0);
        assert!(region.contains(&[]));
    }

    #[test]
    fn contains_is_closed() {
        let region = RegionOfInterest::uniform(2, -5.0, 5.0).unwrap();

        assert!(region.contains(&[-5.0, 5.0]));
        assert!(region.contains(&[0.0, 0.0]));
        assert!(!region.contains(&[-5.1, 0.0]));
        assert!(!region.contains(&[0.0, 5.1]));
        assert!(!region.contains(&[0.0]), "Wrong length is never contained");
    }

    #[test]
    fn malformed_message_names_the_dimension() {
        let err = RegionError::Malformed {
            index: 3,
            lower: 1.0,
            upper: 0.5,
        };

        assert_eq!(
            err.to_string(),
            "malformed region of interest: lower bound 1 is not below upper bound 0.5 in dimension 3"
        );
    }
}
