// Integration tests against the public API
use std::error::Error as _;

use rusty_fork::rusty_fork_test;
use typed_env::{
    get_env_var, read_env, read_env_any, read_env_any_from, read_env_from, EnvError, InMemoryEnv,
    ParseError, ParseErrorKind, ReadEnv, SystemEnv,
};

#[derive(Debug, Clone, PartialEq)]
struct Endpoint {
    host: String,
    port: u16,
}

#[test]
fn source_error_is_introspectable() {
    let env = InMemoryEnv::new().with("PORT", "80a");

    let err = read_env_from(&env, "PORT", 8080i64)
        .into_result()
        .unwrap_err();
    let source = err.source().and_then(|err| err.downcast_ref::<ParseError>());
    assert!(matches!(source, Some(ParseError::Int(_))));
    assert_eq!(source.map(ParseError::kind), Some(ParseErrorKind::Syntax));
}

#[test]
fn struct_default_is_unsupported() {
    let env = InMemoryEnv::new().with("ENDPOINT", "{}");
    let default = Endpoint {
        host: "localhost".to_string(),
        port: 80,
    };

    let reading = read_env_any_from(&env, "ENDPOINT", default.clone());
    assert_eq!(reading.value(), &default);
    assert!(matches!(
        reading.error(),
        Some(EnvError::UnsupportedType { type_name }) if type_name.ends_with("Endpoint")
    ));
}

#[test]
fn custom_source() {
    struct Prefixed<'a>(&'a InMemoryEnv);

    impl ReadEnv for Prefixed<'_> {
        fn var(&self, key: &str) -> Result<String, std::env::VarError> {
            self.0.var(&format!("APP_{key}"))
        }
    }

    let inner = InMemoryEnv::new().with("APP_DEBUG", "True");
    let env = Prefixed(&inner);
    assert_eq!(read_env_from(&env, "DEBUG", false).into_parts(), (true, None));

    let dyn_env: &dyn ReadEnv = &env;
    assert!(read_env_from(dyn_env, "DEBUG", false).into_value());
}

rusty_fork_test! {
    #[test]
    fn process_environment_round() {
        std::env::set_var("TEST_INT64", "9223372036854775807");
        std::env::set_var("TEST_INVALID_INT64", "xyz");

        assert_eq!(read_env("TEST_INT64", 0i64).into_parts(), (i64::MAX, None));
        assert_eq!(
            read_env_from(&SystemEnv, "TEST_INT64", 0i64),
            read_env("TEST_INT64", 0i64)
        );

        let reading = read_env("TEST_INVALID_INT64", 99i64);
        assert_eq!(*reading.value(), 99);
        assert_eq!(
            reading.error().map(ToString::to_string).as_deref(),
            Some(r#"failed to convert "xyz" to i64: invalid digit found in string"#)
        );
        assert_eq!(get_env_var("TEST_INVALID_INT64", 99i64), 99);

        let reading = read_env_any("TEST_INT64", ());
        assert_eq!(reading.error(), Some(&EnvError::UnsupportedType { type_name: "()" }));
    }
}
