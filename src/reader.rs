// Copyright 2024-2025 Irreducible Inc.

use std::{
    any::{Any, TypeId},
    env::VarError,
};

use crate::{
    errors::{EnvError, ParseError},
    source::{ReadEnv, SystemEnv},
    value::EnvValue,
};

/// Outcome of reading a typed environment variable.
///
/// `value` is either the converted variable or exactly the default that was
/// passed in. `error` is set when the variable was present but could not be
/// converted.
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub struct Reading<T> {
    value: T,
    error: Option<EnvError>,
}

impl<T> Reading<T> {
    fn ok(value: T) -> Self {
        Self { value, error: None }
    }

    fn fallback(default: T, error: EnvError) -> Self {
        Self {
            value: default,
            error: Some(error),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn error(&self) -> Option<&EnvError> {
        self.error.as_ref()
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Discards the error, if any.
    pub fn into_value(self) -> T {
        self.value
    }

    pub fn into_parts(self) -> (T, Option<EnvError>) {
        (self.value, self.error)
    }

    /// Drops the fallback value when there was an error.
    pub fn into_result(self) -> Result<T, EnvError> {
        match self.error {
            None => Ok(self.value),
            Some(err) => Err(err),
        }
    }
}

enum Raw {
    Unset,
    Value(String),
    Invalid(EnvError),
}

/// Single lookup of `key`. Unset and empty are the same outcome.
fn fetch_raw<E: ReadEnv + ?Sized>(env: &E, key: &str, type_name: &'static str) -> Raw {
    match env.var(key) {
        Ok(raw) if raw.is_empty() => Raw::Unset,
        Ok(raw) => Raw::Value(raw),
        Err(VarError::NotPresent) => Raw::Unset,
        Err(VarError::NotUnicode(raw)) => Raw::Invalid(EnvError::conversion(
            raw.to_string_lossy(),
            type_name,
            ParseError::NotUnicode,
        )),
    }
}

fn convert<T: EnvValue>(raw: &str) -> Result<T, EnvError> {
    T::parse_env(raw).map_err(|source| EnvError::conversion(raw, T::TYPE_NAME, source))
}

/// Reads `key` from the process environment as a `T`, falling back to `default`.
pub fn read_env<T: EnvValue>(key: &str, default: T) -> Reading<T> {
    read_env_from(&SystemEnv, key, default)
}

/// Reads `key` from `env` as a `T`, falling back to `default`.
pub fn read_env_from<E, T>(env: &E, key: &str, default: T) -> Reading<T>
where
    E: ReadEnv + ?Sized,
    T: EnvValue,
{
    let raw = match fetch_raw(env, key, T::TYPE_NAME) {
        Raw::Unset => return Reading::ok(default),
        Raw::Invalid(err) => return Reading::fallback(default, err),
        Raw::Value(raw) => raw,
    };

    match convert(&raw) {
        Ok(value) => Reading::ok(value),
        Err(err) => Reading::fallback(default, err),
    }
}

/// Like [`read_env`] but accepts any `T`, reporting
/// [`EnvError::UnsupportedType`] for types outside the supported scalars.
pub fn read_env_any<T: Any>(key: &str, default: T) -> Reading<T> {
    read_env_any_from(&SystemEnv, key, default)
}

/// Like [`read_env_from`] but accepts any `T`, reporting
/// [`EnvError::UnsupportedType`] for types outside the supported scalars.
pub fn read_env_any_from<E, T>(env: &E, key: &str, default: T) -> Reading<T>
where
    E: ReadEnv + ?Sized,
    T: Any,
{
    let supported = supported_type_name::<T>();
    let raw = match fetch_raw(env, key, supported.unwrap_or_else(std::any::type_name::<T>)) {
        Raw::Unset => return Reading::ok(default),
        Raw::Invalid(err) if supported.is_some() => return Reading::fallback(default, err),
        Raw::Invalid(_) => return Reading::fallback(default, EnvError::unsupported::<T>()),
        Raw::Value(raw) => raw,
    };

    match convert_any::<T>(&raw) {
        Some(Ok(value)) => Reading::ok(value),
        Some(Err(err)) => Reading::fallback(default, err),
        None => Reading::fallback(default, EnvError::unsupported::<T>()),
    }
}

fn supported_type_name<T: Any>() -> Option<&'static str> {
    fn name_if<V: EnvValue, T: Any>() -> Option<&'static str> {
        (TypeId::of::<V>() == TypeId::of::<T>()).then_some(V::TYPE_NAME)
    }

    name_if::<isize, T>()
        .or_else(name_if::<i64, T>)
        .or_else(name_if::<String, T>)
        .or_else(name_if::<bool, T>)
        .or_else(name_if::<f64, T>)
}

/// Returns `None` when `T` is not a supported scalar.
fn convert_any<T: Any>(raw: &str) -> Option<Result<T, EnvError>> {
    fn convert_as<V: EnvValue, T: Any>(raw: &str) -> Option<Result<T, EnvError>> {
        if TypeId::of::<V>() != TypeId::of::<T>() {
            return None;
        }

        let converted = match convert::<V>(raw) {
            Ok(value) => Box::new(value) as Box<dyn Any>,
            Err(err) => return Some(Err(err)),
        };
        converted.downcast::<T>().ok().map(|value| Ok(*value))
    }

    convert_as::<isize, T>(raw)
        .or_else(|| convert_as::<i64, T>(raw))
        .or_else(|| convert_as::<String, T>(raw))
        .or_else(|| convert_as::<bool, T>(raw))
        .or_else(|| convert_as::<f64, T>(raw))
}
