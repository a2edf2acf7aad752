//! Typed conversions between decimal text and fixed-width numbers.
//!
//! The target kind is always a type parameter: `i8`, `i16`, `i32`, `i64` and
//! `isize` for integers, `f32` and `f64` for floats. Parsing checks range and
//! rounds at the exact width of that kind.
//!
//! A failed parse still yields a value. Syntax errors carry zero, integer
//! overflow carries the saturated bound and float overflow carries the signed
//! infinity:
//!
//! ```
//! use dconv::{parse_int, Outcome};
//!
//! let (value, err) = parse_int::<i8>("300").into_parts();
//! assert_eq!(value, i8::MAX);
//! assert!(err.unwrap().is_range());
//! ```

pub mod error;
pub mod format;
pub mod numeric_kinds;
pub mod parse;

pub use error::{NumError, NumErrorKind, Outcome};
pub use format::{format_decimal, format_float, format_int};
pub use numeric_kinds::{DecimalKind, FloatKind, IntegerKind, NumericKind};
pub use parse::{parse_float, parse_int};
