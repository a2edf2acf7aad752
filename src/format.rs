//! Number to text.
//!
//! None of these can fail.

use crate::numeric_kinds::{DecimalKind, FloatKind, IntegerKind};

/// Canonical base-10 form: `-` only when negative, no leading zeros, no
/// grouping.
///
/// ```
/// assert_eq!(dconv::format_int(1i32), "1");
/// assert_eq!(dconv::format_int(i8::MIN), "-128");
/// ```
pub fn format_int<T: IntegerKind>(i: T) -> String {
    i.to_string()
}

/// Fixed notation with the fewest digits that parse back to the same bits at
/// `T`'s width. Never uses an exponent, however large or small the value.
///
/// Infinities come out as `+Inf` and `-Inf`, and NaN as `NaN`.
///
/// ```
/// assert_eq!(dconv::format_float(1234567.8f32), "1234567.8");
/// assert_eq!(dconv::format_float(1e21f64), "1000000000000000000000");
/// ```
pub fn format_float<T: FloatKind>(f: T) -> String {
    if f.is_nan() {
        return "NaN".to_owned();
    }
    if f.is_infinite() {
        let s = if f.is_sign_negative() { "-Inf" } else { "+Inf" };
        return s.to_owned();
    }
    // std's Display already gives the shortest round-trip digits for the
    // value's own width, without switching to exponent form.
    f.to_string()
}

/// Formats any integer or float by widening it to `f64` first.
///
/// Integers beyond 2^53 are not exact in `f64`, so they print as the nearest
/// representable float. Use [`format_int`] for exact integers.
///
/// ```
/// use dconv::format_decimal;
///
/// assert_eq!(format_decimal(1), "1");
/// assert_eq!(format_decimal(12345678.9), "12345678.9");
/// assert_eq!(format_decimal(i64::MAX), "9223372036854776000");
/// ```
pub fn format_decimal<T: DecimalKind>(d: T) -> String {
    format_float::<f64>(d.as_())
}
