//! The assertion engine.
//!
//! Every check, whatever its entry point, funnels into [`Assert::kind`] or
//! [`Assert::one_of`], which classify the value once, compare, and build an
//! [`AssertionError`] on failure.

use std::{borrow::Cow, sync::Arc};

use crate::{
    compat::{for_each_kind, kind_set::KindSet},
    config::Config,
    error::{AssertionError, Error, Operator, Result},
    kind::{Classify, KindOf, KindRegistry, Predicate},
    location::resolve_call_site,
    message::{Failure, Message, Render, Template},
    value::Value,
};

/// Runs kind checks against a [`KindRegistry`].
///
/// Immutable once built, so one engine can serve any number of threads.
pub struct Assert {
    registry: KindRegistry,
    renderer: Arc<dyn Render>,
    config: Config,
}

impl Assert {
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> AssertBuilder {
        AssertBuilder::default()
    }

    pub fn registry(&self) -> &KindRegistry {
        &self.registry
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn classify(&self, value: &Value) -> Cow<'static, str> {
        self.registry.classifier().classify(value)
    }

    pub fn predicate(&self, kind: &str) -> Option<&Predicate> {
        self.registry.get(kind)
    }

    /// Non-raising check. Unknown kinds never match.
    pub fn is(&self, value: &Value, kind: &str) -> bool {
        self.registry
            .get(kind)
            .is_some_and(|predicate| predicate.test(value))
    }

    /// Checks `value` against a single kind.
    ///
    /// With `control` set the check passes when the value *is* of `kind`;
    /// cleared, it passes when the value is not.
    #[track_caller]
    pub fn kind<'m>(
        &self,
        value: &Value,
        kind: &str,
        control: bool,
        message: impl Into<Message<'m>>,
    ) -> Result<()> {
        let Some(predicate) = self.registry.get(kind) else {
            return Err(Error::UnknownKind(kind.to_string()));
        };
        let actual = self.classify(value);
        let result = actual == predicate.kind();
        if result == control {
            return Ok(());
        }
        Err(self.fail(
            value,
            &actual,
            kind,
            Operator::for_control(control),
            message.into(),
        ))
    }

    /// Checks that `value` is any of `kinds`.
    ///
    /// There is no negated form of this check.
    #[track_caller]
    pub fn one_of<'m>(
        &self,
        value: &Value,
        kinds: impl KindSet,
        message: impl Into<Message<'m>>,
    ) -> Result<()> {
        let kinds = kinds.kinds();
        if kinds.is_empty() {
            return Err(Error::EmptyKinds);
        }
        if let Some(unknown) = kinds.iter().find(|kind| !self.registry.contains(kind)) {
            return Err(Error::UnknownKind(unknown.to_string()));
        }
        let actual = self.classify(value);
        if kinds.iter().any(|kind| actual == *kind) {
            return Ok(());
        }
        Err(self.fail(
            value,
            &actual,
            &kinds.join(" or "),
            Operator::StrictNotEqual,
            message.into(),
        ))
    }

    pub fn not(&self) -> Not<'_> {
        Not { assert: self }
    }

    /// Binds `value` for a chained check such as `assert.that(&v).number()`.
    pub fn that<'a>(&'a self, value: &'a Value) -> That<'a> {
        That {
            assert: self,
            value: Some(value),
            control: true,
            message: Message::Default,
        }
    }

    /// A chained check with no value supplied, which checks `undefined`.
    pub fn nothing(&self) -> That<'_> {
        That {
            assert: self,
            value: None,
            control: true,
            message: Message::Default,
        }
    }

    #[track_caller]
    fn fail(
        &self,
        value: &Value,
        actual: &str,
        expected: &str,
        operator: Operator,
        message: Message<'_>,
    ) -> Error {
        let failure = Failure {
            name: &self.config.error_name,
            value,
            actual,
            expected,
            operator: operator.as_str(),
        };
        let message = message.resolve(&failure, self.renderer.as_ref());
        tracing::debug!(actual, expected, %operator, "kind assertion failed");

        AssertionError::new(
            &self.config.error_name,
            value.clone(),
            actual,
            expected,
            operator,
            message,
        )
        .with_location(resolve_call_site(self.config.capture_location))
        .into()
    }
}

impl Default for Assert {
    fn default() -> Self {
        Self::new()
    }
}

/// Negated checks: each passes when the value is *not* of the kind.
#[derive(Clone, Copy)]
pub struct Not<'a> {
    assert: &'a Assert,
}

impl Not<'_> {
    #[track_caller]
    pub fn kind<'m>(&self, value: &Value, kind: &str, message: impl Into<Message<'m>>) -> Result<()> {
        self.assert.kind(value, kind, false, message)
    }
}

/// A check bound to one value (or to none at all).
pub struct That<'a> {
    assert: &'a Assert,
    value: Option<&'a Value>,
    control: bool,
    message: Message<'a>,
}

impl<'a> That<'a> {
    pub fn message(mut self, message: impl Into<Message<'a>>) -> Self {
        self.message = message.into();
        self
    }

    pub fn not(mut self) -> Self {
        self.control = !self.control;
        self
    }

    #[track_caller]
    pub fn kind(self, kind: &str) -> Result<()> {
        let undefined = Value::Undefined;
        let value = self.value.unwrap_or(&undefined);
        self.assert.kind(value, kind, self.control, self.message)
    }
}

macro_rules! kind_methods {
    ($(($kind: ident, $with: ident)),*) => {
        impl Assert {
            $(
                #[track_caller]
                pub fn $kind(&self, value: &Value) -> Result<()> {
                    self.kind(value, crate::compat::stringify_ident!($kind), true, Message::Default)
                }

                #[track_caller]
                pub fn $with<'m>(&self, value: &Value, message: impl Into<Message<'m>>) -> Result<()> {
                    self.kind(value, crate::compat::stringify_ident!($kind), true, message)
                }
            )*
        }

        impl Not<'_> {
            $(
                #[track_caller]
                pub fn $kind(&self, value: &Value) -> Result<()> {
                    self.kind(value, crate::compat::stringify_ident!($kind), Message::Default)
                }

                #[track_caller]
                pub fn $with<'m>(&self, value: &Value, message: impl Into<Message<'m>>) -> Result<()> {
                    self.kind(value, crate::compat::stringify_ident!($kind), message)
                }
            )*
        }

        impl That<'_> {
            $(
                #[track_caller]
                pub fn $kind(self) -> Result<()> {
                    self.kind(crate::compat::stringify_ident!($kind))
                }
            )*
        }
    };
}

for_each_kind!(kind_methods);

/// Builds an [`Assert`] from injected collaborators.
pub struct AssertBuilder {
    classifier: Arc<dyn Classify>,
    renderer: Arc<dyn Render>,
    extended: bool,
    kinds: Vec<Cow<'static, str>>,
    config: Config,
}

impl Default for AssertBuilder {
    fn default() -> Self {
        Self {
            classifier: Arc::new(KindOf),
            renderer: Arc::new(Template),
            extended: true,
            kinds: Vec::new(),
            config: Config::default(),
        }
    }
}

impl AssertBuilder {
    pub fn classifier(mut self, classifier: impl Classify + 'static) -> Self {
        self.classifier = Arc::new(classifier);
        self
    }

    pub fn renderer(mut self, renderer: impl Render + 'static) -> Self {
        self.renderer = Arc::new(renderer);
        self
    }

    /// Whether to pick up the classifier's extra kinds. On by default.
    pub fn extended(mut self, extended: bool) -> Self {
        self.extended = extended;
        self
    }

    /// Registers an additional kind name.
    pub fn kind(mut self, kind: impl Into<Cow<'static, str>>) -> Self {
        self.kinds.push(kind.into());
        self
    }

    pub fn config(mut self, config: Config) -> Self {
        self.config = config.sanitized();
        self
    }

    pub fn capture_location(mut self, capture: bool) -> Self {
        self.config.capture_location = capture;
        self
    }

    pub fn build(self) -> Assert {
        let mut registry = if self.extended {
            KindRegistry::extended(self.classifier)
        } else {
            KindRegistry::builtin(self.classifier)
        };
        for kind in self.kinds {
            registry.register(kind);
        }
        Assert {
            registry,
            renderer: self.renderer,
            config: self.config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_only_engine_rejects_extra_kinds() {
        let assert = Assert::builder().extended(false).build();
        let err = assert.arguments(&Value::Arguments(Vec::new())).unwrap_err();
        assert!(matches!(err, Error::UnknownKind(kind) if kind == "arguments"));
    }

    #[test]
    fn builder_registers_extra_names() {
        let assert = Assert::builder().kind("stream").build();
        assert!(assert.registry().contains("stream"));
        assert!(!assert.is(&Value::Null, "stream"));
    }

    #[test]
    fn disabled_location_capture() {
        let assert = Assert::builder().capture_location(false).build();
        let err = assert.number(&Value::Null).unwrap_err();
        assert_eq!(err.as_assertion().unwrap().location(), None);
    }
}
