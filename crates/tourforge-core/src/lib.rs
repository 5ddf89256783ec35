//! TourForge Core - Core types for travelling salesman solving
//!
//! This crate provides the fundamental abstractions shared by every solver:
//! - [`Distance`] weight types for matrix entries and tour lengths
//! - [`DistanceMatrix`] dense, validated n×n cost storage
//! - [`Route`] and [`Tour`] for visiting orders and their lengths
//! - [`TourForgeError`] error taxonomy

pub mod distance;
pub mod error;
pub mod matrix;
pub mod route;

pub use distance::Distance;
pub use error::{Result, TourForgeError};
pub use matrix::DistanceMatrix;
pub use route::{Route, Tour};
