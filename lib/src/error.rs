use std::fmt;

use crate::{location::Location, value::Value};

/// Everything a kind check can fail with.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// The value's kind did not satisfy the check.
    #[error(transparent)]
    Assertion(#[from] AssertionError),
    /// The requested kind is not in the registry.
    #[error("unknown kind `{0}`")]
    UnknownKind(String),
    /// A multi-kind check was given no kinds to match.
    #[error("no kinds to check against")]
    EmptyKinds,
}

impl Error {
    pub fn as_assertion(&self) -> Option<&AssertionError> {
        match self {
            Self::Assertion(err) => Some(err),
            Self::UnknownKind(_) | Self::EmptyKinds => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// The comparison that describes a failed check.
///
/// Affirmative checks fail when `actual !== expected`; negated checks fail
/// when `actual === expected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    StrictEqual,
    StrictNotEqual,
}

impl Operator {
    pub(crate) fn for_control(control: bool) -> Self {
        if control {
            Self::StrictNotEqual
        } else {
            Self::StrictEqual
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::StrictEqual => "===",
            Self::StrictNotEqual => "!==",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed kind check.
///
/// Built once per failure and handed straight to the caller.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct AssertionError {
    name: String,
    value: Value,
    actual: String,
    expected: String,
    operator: Operator,
    message: String,
    location: Option<Location>,
}

impl AssertionError {
    pub(crate) fn new(
        name: impl Into<String>,
        value: Value,
        actual: impl Into<String>,
        expected: impl Into<String>,
        operator: Operator,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value,
            actual: actual.into(),
            expected: expected.into(),
            operator,
            message: message.into(),
            location: None,
        }
    }
    pub(crate) fn with_location(mut self, location: Option<Location>) -> Self {
        self.location = location;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn value(&self) -> &Value {
        &self.value
    }
    pub fn actual(&self) -> &str {
        &self.actual
    }
    /// The expected kind, or several joined with `" or "`.
    pub fn expected(&self) -> &str {
        &self.expected
    }
    pub fn operator(&self) -> Operator {
        self.operator
    }
    pub fn message(&self) -> &str {
        &self.message
    }
    /// Where the failing check was called from, when captured.
    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }
}
