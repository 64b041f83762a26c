//! Point-of-interest data model and value coercion.
//!
//! This crate defines the canonical record every format parser produces, the
//! stored entity shape, and the total coercion functions parsers use to turn
//! loosely typed source values into numbers.

pub mod coerce;
pub mod types;

pub use coerce::{RawValue, avg_rating, to_float};
pub use types::*;
