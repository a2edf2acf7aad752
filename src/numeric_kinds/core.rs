use std::{
    fmt::{Debug, Display},
    mem,
    num::ParseFloatError,
    str::FromStr,
};

use num_traits::{AsPrimitive, Float, PrimInt, Signed};

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// A fixed-width scalar that the conversions know how to handle.
///
/// Implemented only for `i8`, `i16`, `i32`, `i64`, `isize`, `f32` and `f64`.
pub trait NumericKind:
    sealed::Sealed + Copy + Debug + Display + PartialOrd + Send + Sync + 'static
{
    /// Storage size of the concrete type, in bits.
    const BITS: u32 = (mem::size_of::<Self>() * 8) as u32;
    /// Type name used when reporting a failed parse.
    const NAME: &'static str;
}

/// Any integer or float kind. Only the widening formatter cares about this
/// union, so the single extra requirement is a lossy cast to `f64`.
pub trait DecimalKind: NumericKind + AsPrimitive<f64> {}

pub trait IntegerKind: DecimalKind + PrimInt + Signed {}

pub trait FloatKind: DecimalKind + Float + FromStr<Err = ParseFloatError> {}
