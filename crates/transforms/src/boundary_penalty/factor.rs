use thiserror::Error;

/// A finite, non-negative scaling factor for the boundary penalty.
///
/// A negative factor would reward leaving the region of interest, so it is
/// rejected at construction along with NaN and infinities.
///
/// # Example
///
/// ```
/// use bbob_transforms::{FactorError, PenaltyFactor};
///
/// assert_eq!(PenaltyFactor::new(2.5).unwrap().get(), 2.5);
/// assert_eq!(PenaltyFactor::new(-1.0), Err(FactorError::Negative));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct PenaltyFactor(f64);

/// Errors that can occur when validating a penalty factor.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FactorError {
    #[error("penalty factor must be finite")]
    NotFinite,

    #[error("penalty factor must not be negative")]
    Negative,
}

impl PenaltyFactor {
    /// Creates a validated penalty factor.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is NaN, infinite, or negative.
    pub fn new(value: f64) -> Result<Self, FactorError> {
        if !value.is_finite() {
            return Err(FactorError::NotFinite);
        }
        if value < 0.0 {
            return Err(FactorError::Negative);
        }

        // Normalizes -0.0.
        Ok(Self(value + 0.0))
    }

    /// Returns a factor that disables the penalty.
    #[must_use]
    pub fn zero() -> Self {
        Self(0.0)
    }

    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }
}

impl TryFrom<f64> for PenaltyFactor {
    type Error = FactorError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PenaltyFactor> for f64 {
    fn from(factor: PenaltyFactor) -> Self {
        factor.0
    }
}
