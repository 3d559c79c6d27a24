// Copyright 2024-2025 Irreducible Inc.

use std::{
    collections::HashMap,
    env::VarError,
    ffi::{OsStr, OsString},
};

use super::ReadEnv;

/// An environment table that never touches the process environment.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEnv {
    vars: HashMap<String, OsString>,
}

impl InMemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`InMemoryEnv::set`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), OsString::from(value.into()));
    }

    /// Stores a value that need not be valid unicode.
    pub fn set_os(&mut self, key: impl Into<String>, value: impl AsRef<OsStr>) {
        self.vars.insert(key.into(), value.as_ref().to_owned());
    }

    pub fn remove(&mut self, key: &str) {
        self.vars.remove(key);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }
}

impl ReadEnv for InMemoryEnv {
    fn var(&self, key: &str) -> Result<String, VarError> {
        let value = self.vars.get(key).ok_or(VarError::NotPresent)?;
        value.clone().into_string().map_err(VarError::NotUnicode)
    }
}
