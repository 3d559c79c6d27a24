// Copyright 2024-2025 Irreducible Inc.

mod in_memory;
mod system;

use std::env::VarError;

pub use in_memory::InMemoryEnv;
pub use system::SystemEnv;

/// A read-only table of environment variables.
pub trait ReadEnv {
    fn var(&self, key: &str) -> Result<String, VarError>;
}

impl<E: ReadEnv + ?Sized> ReadEnv for &E {
    #[inline]
    fn var(&self, key: &str) -> Result<String, VarError> {
        (**self).var(key)
    }
}
