//! Kind classification.
//!
//! A kind is the canonical lowercase name of a value's runtime type, as
//! produced by a [`Classify`] implementation. Matching is always exact
//! string equality; names are never case-normalized.

use std::borrow::Cow;

use crate::value::Value;

pub mod registry;

pub use registry::{KindRegistry, Predicate};

/// Kinds every registry starts with.
pub const BUILTIN_KINDS: &[&str] = &[
    "array",
    "boolean",
    "buffer",
    "date",
    "error",
    "function",
    "generator",
    "generatorfunction",
    "map",
    "null",
    "number",
    "object",
    "promise",
    "regexp",
    "set",
    "string",
    "symbol",
    "undefined",
    "weakmap",
    "weakset",
];

/// Kinds [`KindOf`] recognizes beyond [`BUILTIN_KINDS`].
pub const EXTRA_KINDS: &[&str] = &[
    "arguments",
    "float32array",
    "float64array",
    "int16array",
    "int32array",
    "int8array",
    "uint16array",
    "uint32array",
    "uint8array",
    "uint8clampedarray",
];

/// A mislabeled kind some classifiers expose. Extended registries drop it.
pub const HYBRID: &str = "hybrid";

/// Maps any value to its kind name.
///
/// Implementations must be total: every value gets a name.
pub trait Classify: Send + Sync {
    fn classify(&self, value: &Value) -> Cow<'static, str>;

    /// Kinds this classifier can produce on top of [`BUILTIN_KINDS`].
    fn extra_kinds(&self) -> Vec<Cow<'static, str>> {
        Vec::new()
    }
}

/// The default classifier, backed by [`Value::kind`].
#[derive(Debug, Default, Clone, Copy)]
pub struct KindOf;

impl Classify for KindOf {
    fn classify(&self, value: &Value) -> Cow<'static, str> {
        Cow::Borrowed(value.kind())
    }

    fn extra_kinds(&self) -> Vec<Cow<'static, str>> {
        EXTRA_KINDS.iter().copied().map(Cow::Borrowed).collect()
    }
}
