//! Runtime kind assertions for dynamic values.
//!
//! A check classifies a [`Value`] into a kind name such as `"array"` or
//! `"generatorfunction"`, compares it with the expected kind, and on
//! mismatch returns an [`AssertionError`] carrying the actual and expected
//! kinds, the failing operator, the value, and the caller's location.
//!
//! ```
//! use assert_kindof::Value;
//!
//! assert_kindof::object(&Value::object([("a", 1)])).unwrap();
//!
//! let err = assert_kindof::object(&Value::from("foo")).unwrap_err();
//! assert_eq!(err.to_string(), "string !== object");
//!
//! assert!(assert_kindof::not::number(&Value::from("123")).is_ok());
//! assert!(assert_kindof::is::string(&Value::from("123")));
//! ```

use std::sync::LazyLock;

pub mod assert;
pub mod compat;
pub mod config;
pub mod error;
pub mod kind;
pub mod location;
pub mod message;
pub mod value;

pub use assert::{Assert, AssertBuilder, Not, That};
pub use compat::kind_set::KindSet;
pub use config::Config;
pub use error::{AssertionError, Error, Operator, Result};
pub use message::Message;
pub use value::Value;

static ENGINE: LazyLock<Assert> = LazyLock::new(Assert::new);

pub fn engine() -> &'static Assert {
    &ENGINE
}

/// Checks `value` against `kind` on the default engine.
#[track_caller]
pub fn kind<'m>(value: &Value, kind: &str, message: impl Into<Message<'m>>) -> Result<()> {
    engine().kind(value, kind, true, message)
}

/// Checks that `value` is any of `kinds` on the default engine.
#[track_caller]
pub fn one_of<'m>(value: &Value, kinds: impl KindSet, message: impl Into<Message<'m>>) -> Result<()> {
    engine().one_of(value, kinds, message)
}

pub fn that(value: &Value) -> That<'_> {
    engine().that(value)
}

pub fn nothing() -> That<'static> {
    engine().nothing()
}

macro_rules! free_functions {
    ($(($kind: ident, $with: ident)),*) => {
        $(
            #[track_caller]
            pub fn $kind(value: &Value) -> Result<()> {
                engine().$kind(value)
            }

            #[track_caller]
            pub fn $with<'m>(value: &Value, message: impl Into<Message<'m>>) -> Result<()> {
                engine().$with(value, message)
            }
        )*

        /// Negated checks on the default engine.
        pub mod not {
            use crate::{Message, Result, engine, value::Value};

            #[track_caller]
            pub fn kind<'m>(value: &Value, kind: &str, message: impl Into<Message<'m>>) -> Result<()> {
                engine().not().kind(value, kind, message)
            }

            $(
                #[track_caller]
                pub fn $kind(value: &Value) -> Result<()> {
                    engine().not().$kind(value)
                }

                #[track_caller]
                pub fn $with<'m>(value: &Value, message: impl Into<Message<'m>>) -> Result<()> {
                    engine().not().$with(value, message)
                }
            )*
        }

        pub mod is {
            use crate::{engine, value::Value};

            $(
                pub fn $kind(value: &Value) -> bool {
                    engine().is(value, crate::compat::stringify_ident!($kind))
                }
            )*
        }
    };
}

compat::for_each_kind!(free_functions);
