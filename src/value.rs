// Copyright 2024-2025 Irreducible Inc.

use std::fmt::Debug;

use crate::errors::ParseError;

mod private {
    pub trait Sealed {}

    impl Sealed for isize {}
    impl Sealed for i64 {}
    impl Sealed for String {}
    impl Sealed for bool {}
    impl Sealed for f64 {}
}

/// A scalar type an environment variable can be converted to.
///
/// Implemented for `isize`, `i64`, `String`, `bool` and `f64` only.
pub trait EnvValue: private::Sealed + Debug + Sized + 'static {
    /// Name used in conversion error messages.
    const TYPE_NAME: &'static str;

    fn parse_env(raw: &str) -> Result<Self, ParseError>;
}

impl EnvValue for isize {
    const TYPE_NAME: &'static str = "isize";

    fn parse_env(raw: &str) -> Result<Self, ParseError> {
        Ok(raw.parse()?)
    }
}

impl EnvValue for i64 {
    const TYPE_NAME: &'static str = "i64";

    fn parse_env(raw: &str) -> Result<Self, ParseError> {
        Ok(raw.parse()?)
    }
}

impl EnvValue for String {
    const TYPE_NAME: &'static str = "String";

    fn parse_env(raw: &str) -> Result<Self, ParseError> {
        Ok(raw.to_owned())
    }
}

impl EnvValue for bool {
    const TYPE_NAME: &'static str = "bool";

    fn parse_env(raw: &str) -> Result<Self, ParseError> {
        match raw {
            "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
            "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
            _ => Err(ParseError::Bool),
        }
    }
}

impl EnvValue for f64 {
    const TYPE_NAME: &'static str = "f64";

    fn parse_env(raw: &str) -> Result<Self, ParseError> {
        let value: f64 = raw.parse()?;
        // finite literals like "1e400" saturate to infinity
        if value.is_infinite() && !is_infinity_literal(raw) {
            return Err(ParseError::FloatOutOfRange);
        }

        Ok(value)
    }
}

fn is_infinity_literal(raw: &str) -> bool {
    let unsigned = raw
        .strip_prefix('+')
        .or_else(|| raw.strip_prefix('-'))
        .unwrap_or(raw);

    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}
