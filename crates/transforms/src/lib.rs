//! Problem transforms for black-box optimization benchmarks.
//!
//! A transform wraps an [`Evaluable`] and is itself an [`Evaluable`]. It
//! forwards evaluation to the wrapped problem and adjusts the input or the
//! output around that call, so transforms can be stacked to any depth
//! without special cases.
//!
//! Transforms borrow the problem they wrap. Dropping a transform releases
//! only its own state; the wrapped problem stays with its owner.
//!
//! # Transforms
//!
//! - [`boundary_penalty`]: adds a quadratic penalty to every objective when
//!   the input leaves the region of interest
//!
//! [`Evaluable`]: bbob_core::Evaluable

mod ext;

pub mod boundary_penalty;

pub use boundary_penalty::{BoundaryPenalty, FactorError, PenaltyFactor, quadratic_penalty};
pub use ext::EvaluableExt;
