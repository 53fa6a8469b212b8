use std::{borrow::Cow, sync::Arc};

use assert_kindof::{
    Assert, Error, Message, Value,
    kind::{BUILTIN_KINDS, Classify, HYBRID, KindOf, KindRegistry},
};

/// Labels even numbers `even`, and exposes the mislabeled `hybrid` kind.
struct Parity;

impl Classify for Parity {
    fn classify(&self, value: &Value) -> Cow<'static, str> {
        match value {
            Value::Number(n) if n % 2.0 == 0.0 => Cow::Borrowed("even"),
            value => Cow::Borrowed(value.kind()),
        }
    }

    fn extra_kinds(&self) -> Vec<Cow<'static, str>> {
        vec![Cow::Borrowed("even"), Cow::Borrowed(HYBRID), Cow::Borrowed("number")]
    }
}

#[test]
fn builtin_registry_holds_builtin_kinds() {
    let registry = KindRegistry::builtin(Arc::new(KindOf));
    let mut expected = BUILTIN_KINDS.to_vec();
    expected.sort_unstable();
    assert_eq!(registry.kinds().collect::<Vec<_>>(), expected);
}

#[test]
fn extended_registry_drops_hybrid_and_duplicates() {
    let registry = KindRegistry::extended(Arc::new(Parity));
    assert!(registry.contains("even"));
    assert!(!registry.contains(HYBRID));
    assert_eq!(registry.len(), BUILTIN_KINDS.len() + 1);
}

#[test]
fn removed_kinds_become_unknown() {
    let mut registry = KindRegistry::builtin(Arc::new(KindOf));
    let removed = registry.remove("symbol").unwrap();
    assert_eq!(removed.kind(), "symbol");
    assert!(registry.get("symbol").is_none());
    assert!(registry.remove("symbol").is_none());
}

#[test]
fn injected_classifier_drives_checks() {
    let assert = Assert::builder().classifier(Parity).build();

    assert!(assert.kind(&Value::from(4), "even", true, Message::Default).is_ok());
    assert!(assert.number(&Value::from(3)).is_ok());

    let Err(Error::Assertion(err)) = assert.number(&Value::from(4)) else {
        panic!("expected an assertion error");
    };
    assert_eq!(err.actual(), "even");
    assert_eq!(err.message(), "even !== number");
}

#[test]
fn classifier_output_outside_registry_only_fails_checks() {
    let assert = Assert::builder().classifier(Parity).extended(false).build();
    assert!(!assert.registry().contains("even"));
    assert!(assert.not().number(&Value::from(2)).is_ok());
    assert!(matches!(
        assert.kind(&Value::from(2), "even", true, Message::Default),
        Err(Error::UnknownKind(_))
    ));
}

#[test]
fn engine_is_shareable_across_threads() {
    let assert = Arc::new(Assert::new());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let assert = assert.clone();
            std::thread::spawn(move || assert.number(&Value::from(i)).is_ok())
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
