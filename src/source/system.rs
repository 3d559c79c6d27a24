// Copyright 2024-2025 Irreducible Inc.

use std::env::{self, VarError};

use super::ReadEnv;

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl ReadEnv for SystemEnv {
    #[inline]
    fn var(&self, key: &str) -> Result<String, VarError> {
        env::var(key)
    }
}
