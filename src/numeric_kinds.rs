//! The closed set of scalar kinds the conversions work on.
//!
//! Kinds are selected at compile time through the generic parameter of each
//! conversion; there is no runtime tag.

pub mod core;
pub mod float;
pub mod integer;

pub use self::core::{DecimalKind, FloatKind, IntegerKind, NumericKind};
