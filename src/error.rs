use std::fmt::Debug;

use thiserror::Error;

/// Why a parse failed. The two kinds never overlap: malformed text is always
/// `Syntax`, even when its digits would also overflow.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumErrorKind {
    #[error("invalid syntax")]
    Syntax,
    #[error("value out of range")]
    Range,
}

/// A failed parse, together with the value the parser settled on.
///
/// The value is `0` for syntax errors, the saturated bound for integer
/// overflow and the signed infinity for float overflow.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("parsing {input:?} as {target}: {kind}")]
pub struct NumError<T: Debug> {
    kind: NumErrorKind,
    input: String,
    target: &'static str,
    value: T,
}

impl<T: Copy + Debug> NumError<T> {
    pub(crate) fn syntax(input: &str, target: &'static str, value: T) -> Self {
        Self::new(NumErrorKind::Syntax, input, target, value)
    }

    pub(crate) fn range(input: &str, target: &'static str, value: T) -> Self {
        Self::new(NumErrorKind::Range, input, target, value)
    }

    fn new(kind: NumErrorKind, input: &str, target: &'static str, value: T) -> Self {
        NumError {
            kind,
            input: input.to_owned(),
            target,
            value,
        }
    }

    pub fn kind(&self) -> NumErrorKind {
        self.kind
    }

    pub fn is_syntax(&self) -> bool {
        self.kind == NumErrorKind::Syntax
    }

    pub fn is_range(&self) -> bool {
        self.kind == NumErrorKind::Range
    }

    /// The text that was rejected.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Name of the kind the text was parsed as, e.g. `"i8"`.
    pub fn target(&self) -> &'static str {
        self.target
    }

    /// Best-effort value produced alongside the error.
    pub fn value(&self) -> T {
        self.value
    }
}

/// Splits a parse result into the value the caller can fall back on and the
/// error, if any.
pub trait Outcome<T: Debug> {
    fn into_parts(self) -> (T, Option<NumError<T>>);

    /// The parsed value, or the best-effort value if parsing failed.
    fn best_effort(self) -> T
    where
        Self: Sized,
    {
        self.into_parts().0
    }
}

impl<T: Copy + Debug> Outcome<T> for Result<T, NumError<T>> {
    fn into_parts(self) -> (T, Option<NumError<T>>) {
        match self {
            Ok(value) => (value, None),
            Err(err) => (err.value, Some(err)),
        }
    }
}
