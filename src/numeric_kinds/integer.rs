use crate::numeric_kinds::core::{DecimalKind, IntegerKind, NumericKind, sealed::Sealed};

macro_rules! impl_integer_kind {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Sealed for $ty {}

            impl NumericKind for $ty {
                const NAME: &'static str = stringify!($ty);
            }

            impl DecimalKind for $ty {}

            impl IntegerKind for $ty {}
        )+
    };
}

// isize is the platform-default width.
impl_integer_kind!(i8, i16, i32, i64, isize);

#[cfg(test)]
mod tests {
    use super::*;

    fn validate_bits<T: IntegerKind>(expected: u32) {
        assert_eq!(T::BITS, expected, "bit width mismatch for {}", T::NAME);
        // The width has to agree with the type's own bounds.
        let max = T::max_value().to_i128().unwrap();
        assert_eq!(max, (1i128 << (expected - 1)) - 1, "max mismatch for {}", T::NAME);
    }

    #[test]
    fn test_integer_bits() {
        validate_bits::<i8>(8);
        validate_bits::<i16>(16);
        validate_bits::<i32>(32);
        validate_bits::<i64>(64);
        validate_bits::<isize>(usize::BITS);
    }

    #[test]
    fn test_integer_names() {
        assert_eq!(<i8 as NumericKind>::NAME, "i8");
        assert_eq!(<i64 as NumericKind>::NAME, "i64");
        assert_eq!(<isize as NumericKind>::NAME, "isize");
    }
}
