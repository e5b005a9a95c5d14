//! `captiond-core` — failure classification shared across layers.
//!
//! This crate contains only the pieces every layer agrees on. Resource
//! entities and their domain errors live with their resource crates.

pub mod error;

pub use error::{Defect, DefectResult};
