use crate::numeric_kinds::core::{DecimalKind, FloatKind, NumericKind, sealed::Sealed};

impl Sealed for f32 {}

impl NumericKind for f32 {
    const NAME: &'static str = "f32";
}

impl DecimalKind for f32 {}

impl FloatKind for f32 {}

impl Sealed for f64 {}

impl NumericKind for f64 {
    const NAME: &'static str = "f64";
}

impl DecimalKind for f64 {}

impl FloatKind for f64 {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_bits() {
        assert_eq!(<f32 as NumericKind>::BITS, 32);
        assert_eq!(<f64 as NumericKind>::BITS, 64);
        assert_eq!(<f32 as NumericKind>::NAME, "f32");
    }
}
