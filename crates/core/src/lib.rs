//! Core traits and types for black-box optimization benchmark problems.
//!
//! This crate defines the shared abstractions that problems and problem
//! transforms build on:
//!
//! - [`Evaluable`]: an objective function with a fixed dimension, a fixed
//!   number of objectives, and a box-shaped region of interest
//! - [`RegionOfInterest`]: validated per-dimension lower and upper bounds
//! - [`RegionError`]: the ways a region of interest can be misconfigured

mod evaluable;
mod region;

pub use evaluable::Evaluable;
pub use region::{RegionError, RegionOfInterest, check_bounds};
