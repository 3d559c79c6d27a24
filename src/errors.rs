// Copyright 2024-2025 Irreducible Inc.

use std::num::{IntErrorKind, ParseFloatError, ParseIntError};

use thiserror::Error;

/// Broad category of a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The raw value is not a literal of the requested type.
    Syntax,
    /// The raw value is a well-formed literal that does not fit the requested type.
    Range,
}

/// The underlying reason a raw value could not be converted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Int(#[from] ParseIntError),
    #[error(transparent)]
    Float(#[from] ParseFloatError),
    #[error("number too large to fit in target type")]
    FloatOutOfRange,
    #[error("invalid boolean literal")]
    Bool,
    #[error("value is not valid unicode")]
    NotUnicode,
}

impl ParseError {
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            Self::Int(err) => match err.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ParseErrorKind::Range,
                _ => ParseErrorKind::Syntax,
            },
            Self::FloatOutOfRange => ParseErrorKind::Range,
            Self::Float(_) | Self::Bool | Self::NotUnicode => ParseErrorKind::Syntax,
        }
    }
}

/// Error reported alongside the fallback value by the readers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvError {
    #[error("failed to convert {raw:?} to {type_name}: {source}")]
    Conversion {
        raw: String,
        type_name: &'static str,
        #[source]
        source: ParseError,
    },
    #[error("unsupported type for environment variable conversion: {type_name}")]
    UnsupportedType { type_name: &'static str },
}

impl EnvError {
    pub(crate) fn conversion(raw: impl Into<String>, type_name: &'static str, source: ParseError) -> Self {
        Self::Conversion {
            raw: raw.into(),
            type_name,
            source,
        }
    }

    pub(crate) fn unsupported<T: ?Sized>() -> Self {
        Self::UnsupportedType {
            type_name: std::any::type_name::<T>(),
        }
    }

    /// The wrapped parse failure, if this is a conversion error.
    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            Self::Conversion { source, .. } => Some(source),
            Self::UnsupportedType { .. } => None,
        }
    }

    pub fn is_syntax(&self) -> bool {
        self.parse_error()
            .is_some_and(|err| err.kind() == ParseErrorKind::Syntax)
    }

    pub fn is_range(&self) -> bool {
        self.parse_error()
            .is_some_and(|err| err.kind() == ParseErrorKind::Range)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn int_overflow_is_range() {
        let err = "99999999999999999999".parse::<i64>().unwrap_err();
        assert_eq!(ParseError::from(err).kind(), ParseErrorKind::Range);

        let err = "-99999999999999999999".parse::<i64>().unwrap_err();
        assert_eq!(ParseError::from(err).kind(), ParseErrorKind::Range);
    }

    #[test]
    fn int_garbage_is_syntax() {
        let err = "12a".parse::<i64>().unwrap_err();
        assert_eq!(ParseError::from(err).kind(), ParseErrorKind::Syntax);
    }

    #[test]
    fn conversion_message_quotes_raw_value() {
        let err = EnvError::conversion("a\"b", "bool", ParseError::Bool);
        assert_eq!(
            err.to_string(),
            r#"failed to convert "a\"b" to bool: invalid boolean literal"#
        );
    }

    #[test]
    fn conversion_exposes_source() {
        let err = EnvError::conversion("x", "bool", ParseError::Bool);
        let source = err.source().expect("conversion errors have a source");
        assert_eq!(
            source.downcast_ref::<ParseError>(),
            Some(&ParseError::Bool)
        );
        assert!(err.is_syntax());
        assert!(!err.is_range());
    }

    #[test]
    fn unsupported_has_no_category() {
        let err = EnvError::unsupported::<Vec<u8>>();
        assert!(err.parse_error().is_none());
        assert!(!err.is_syntax());
        assert!(!err.is_range());
        assert!(err.source().is_none());
    }
}
