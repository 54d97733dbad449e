//! Error types for runtime construction.
//!
//! Almost every failure in this crate is a compile error. The exception is
//! building a [`Str`](crate::datatype::Str) from bytes that are only known
//! at runtime, which reports what is wrong with the bytes through
//! [`StrError`].

/// Why a byte sequence is not a valid [`Str`](crate::datatype::Str).
///
/// # Examples
///
/// ```rust
/// use polytag::datatype::Str;
/// use polytag::error::StrError;
///
/// assert_eq!(Str::from_bytes_with_nul(b"abc"), Err(StrError::MissingNul));
/// assert_eq!(
///     Str::from_bytes_with_nul(b"a\0c\0"),
///     Err(StrError::InteriorNul { position: 1 })
/// );
/// assert_eq!(
///     format!("{}", StrError::NonAscii { position: 4 }),
///     "non-ASCII byte at position 4"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrError {
    /// The bytes do not end with a NUL terminator.
    MissingNul,
    /// A NUL byte occurs before the terminator.
    InteriorNul {
        /// The index of the first NUL byte.
        position: usize,
    },
    /// A byte outside the ASCII range occurs before the terminator.
    NonAscii {
        /// The index of the first non-ASCII byte.
        position: usize,
    },
}

impl std::fmt::Display for StrError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingNul => write!(formatter, "missing NUL terminator"),
            Self::InteriorNul { position } => {
                write!(formatter, "interior NUL byte at position {position}")
            }
            Self::NonAscii { position } => {
                write!(formatter, "non-ASCII byte at position {position}")
            }
        }
    }
}

impl std::error::Error for StrError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(StrError::MissingNul, "missing NUL terminator")]
    #[case(StrError::InteriorNul { position: 0 }, "interior NUL byte at position 0")]
    #[case(StrError::NonAscii { position: 12 }, "non-ASCII byte at position 12")]
    fn test_str_error_display(#[case] error: StrError, #[case] expected: &str) {
        assert_eq!(format!("{error}"), expected);
    }

    #[rstest]
    fn test_str_error_is_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(StrError::MissingNul);
        assert!(error.source().is_none());
    }
}
