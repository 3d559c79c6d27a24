// Copyright 2024-2025 Irreducible Inc.

use crate::{
    reader::read_env_from,
    source::{ReadEnv, SystemEnv},
    value::EnvValue,
};

/// Reads `name` from the process environment, logging a warning and using
/// `default` if the value cannot be converted.
pub fn get_env_var<T: EnvValue>(name: &str, default: T) -> T {
    get_env_var_from(&SystemEnv, name, default)
}

/// Like [`get_env_var`], reading from `env` instead of the process environment.
pub fn get_env_var_from<E, T>(env: &E, name: &str, default: T) -> T
where
    E: ReadEnv + ?Sized,
    T: EnvValue,
{
    let (value, error) = read_env_from(env, name, default).into_parts();
    if let Some(error) = error {
        tracing::warn!(
            variable = name,
            %error,
            default = ?value,
            "invalid environment value, using the default value"
        );
    }

    value
}
