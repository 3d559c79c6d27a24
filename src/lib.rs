//! Read environment variables as typed scalars, falling back to a default.
//!
//! # Overview
//! [`read_env`] looks a variable up once and converts it to the type of the
//! default it is given. The outcome is a [`Reading`], which holds either the
//! converted value or exactly the default, plus the error that caused the
//! fallback, if any.
//!
//! Supported types are `isize`, `i64`, `String`, `bool` and `f64`.
//!
//! - An unset or empty variable yields the default with no error.
//! - A value that fails to convert yields the default and an [`EnvError::Conversion`]
//!   whose [`ParseError`] tells syntax errors apart from out of range values.
//!
//! [`read_env_any`] accepts any `'static` type and reports
//! [`EnvError::UnsupportedType`] for everything outside the supported set.
//! [`get_env_var`] is the lossy form: it logs a `tracing` warning and returns the value.
//!
//! ```
//! use typed_env::{read_env, read_env_from, InMemoryEnv};
//!
//! let env = InMemoryEnv::new()
//!     .with("WORKERS", "8")
//!     .with("RATIO", "not_a_float");
//!
//! assert_eq!(read_env_from(&env, "WORKERS", 1isize).into_value(), 8);
//!
//! let reading = read_env_from(&env, "RATIO", 0.5);
//! assert_eq!(*reading.value(), 0.5);
//! assert!(reading.error().is_some_and(|err| err.is_syntax()));
//!
//! // the process environment
//! let verbose: bool = read_env("SOME_UNSET_VERBOSE_FLAG", false).into_value();
//! assert!(!verbose);
//! ```
//!
//! The readers never log and never panic; callers decide whether an error is fatal.

mod env_utils;
mod errors;
mod reader;
mod source;
mod value;

pub use env_utils::{get_env_var, get_env_var_from};
pub use errors::{EnvError, ParseError, ParseErrorKind};
pub use reader::{read_env, read_env_any, read_env_any_from, read_env_from, Reading};
pub use source::{InMemoryEnv, ReadEnv, SystemEnv};
pub use value::EnvValue;
