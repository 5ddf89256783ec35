//! Shared test fixtures for TourForge crates.
//!
//! - [`matrices`] - hand-written and seeded random distance matrices
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! tourforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use tourforge_test::matrices;
//!
//! let matrix = matrices::random_symmetric(10, 42);
//! ```

pub mod matrices;

pub use matrices::{four_cities, random_symmetric};
