//! Text to number.
//!
//! Both parsers return the error together with a best-effort value, see
//! [`NumError::value`] and [`Outcome`](crate::Outcome).

use std::num::IntErrorKind;

use num_traits::NumCast;

use crate::{
    error::NumError,
    numeric_kinds::{FloatKind, IntegerKind},
};

/// Parses a base-10 integer into `T`, checking the range against `T::BITS`.
///
/// The text is an optional `+` or `-` followed by decimal digits and nothing
/// else. On overflow the error carries `T::MAX` or `T::MIN`.
///
/// ```
/// use dconv::{parse_int, NumErrorKind};
///
/// assert_eq!(parse_int::<i8>("-12"), Ok(-12));
///
/// let err = parse_int::<i8>("128").unwrap_err();
/// assert_eq!(err.kind(), NumErrorKind::Range);
/// assert_eq!(err.value(), i8::MAX);
/// assert_eq!(err.to_string(), "parsing \"128\" as i8: value out of range");
/// ```
pub fn parse_int<T: IntegerKind>(s: &str) -> Result<T, NumError<T>> {
    // Every supported width fits in i128, so only text that is too long
    // for any kind overflows here. std stops at the first overflow, so the
    // rest of the digits are checked before calling it a range error.
    let wide = match i128::from_str_radix(s, 10) {
        Ok(wide) => wide,
        Err(_) if !is_decimal_digits(s) => {
            return Err(NumError::syntax(s, T::NAME, T::zero()));
        }
        Err(e) => {
            return Err(match e.kind() {
                IntErrorKind::PosOverflow => NumError::range(s, T::NAME, T::max_value()),
                IntErrorKind::NegOverflow => NumError::range(s, T::NAME, T::min_value()),
                _ => NumError::syntax(s, T::NAME, T::zero()),
            });
        }
    };

    let cutoff = 1i128 << (T::BITS - 1);
    if wide >= cutoff {
        return Err(NumError::range(s, T::NAME, T::max_value()));
    }
    if wide < -cutoff {
        return Err(NumError::range(s, T::NAME, T::min_value()));
    }

    <T as NumCast>::from(wide).ok_or_else(|| {
        let bound = if wide < 0 { T::min_value() } else { T::max_value() };
        NumError::range(s, T::NAME, bound)
    })
}

/// Parses a decimal float literal, rounding once at `T`'s width.
///
/// Finite literals too large for `T` report a range error carrying the
/// signed infinity. Spelled-out infinities (`inf`, `-Infinity`) and `NaN`
/// are accepted as is; only infinity may carry a sign. Underflow rounds
/// toward zero without error.
///
/// ```
/// use dconv::parse_float;
///
/// assert_eq!(parse_float::<f32>("1.1"), Ok(1.1f32));
///
/// let err = parse_float::<f32>("-1e39").unwrap_err();
/// assert!(err.is_range());
/// assert_eq!(err.value(), f32::NEG_INFINITY);
/// ```
pub fn parse_float<T: FloatKind>(s: &str) -> Result<T, NumError<T>> {
    if is_signed_nan_literal(s) {
        return Err(NumError::syntax(s, T::NAME, T::zero()));
    }

    let f = s
        .parse::<T>()
        .map_err(|_| NumError::syntax(s, T::NAME, T::zero()))?;

    if f.is_infinite() && !is_infinity_literal(s) {
        return Err(NumError::range(s, T::NAME, f));
    }
    Ok(f)
}

fn is_decimal_digits(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn is_infinity_literal(s: &str) -> bool {
    let s = s.strip_prefix(['+', '-']).unwrap_or(s);
    s.eq_ignore_ascii_case("inf") || s.eq_ignore_ascii_case("infinity")
}

fn is_signed_nan_literal(s: &str) -> bool {
    s.strip_prefix(['+', '-'])
        .is_some_and(|rest| rest.eq_ignore_ascii_case("nan"))
}
