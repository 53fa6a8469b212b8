use std::{borrow::Cow, collections::BTreeMap, fmt, sync::Arc};

use super::{BUILTIN_KINDS, Classify, HYBRID};
use crate::value::Value;

/// A non-raising check for a single kind.
#[derive(Clone)]
pub struct Predicate {
    kind: Cow<'static, str>,
    classifier: Arc<dyn Classify>,
}

impl Predicate {
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Whether `value` classifies as exactly this kind.
    pub fn test(&self, value: &Value) -> bool {
        self.classifier.classify(value) == self.kind
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Predicate").field(&self.kind).finish()
    }
}

/// The table of recognized kinds, one [`Predicate`] per name.
///
/// Built once and then only read; entries are never duplicated.
#[derive(Clone)]
pub struct KindRegistry {
    classifier: Arc<dyn Classify>,
    predicates: BTreeMap<Cow<'static, str>, Predicate>,
}

impl KindRegistry {
    pub fn new(classifier: Arc<dyn Classify>) -> Self {
        Self {
            classifier,
            predicates: BTreeMap::new(),
        }
    }

    pub fn builtin(classifier: Arc<dyn Classify>) -> Self {
        let mut registry = Self::new(classifier);
        for kind in BUILTIN_KINDS {
            registry.register(*kind);
        }
        tracing::trace!(kinds = registry.len(), "built builtin kind registry");
        registry
    }

    /// The builtin kinds plus whatever the classifier exposes, minus [`HYBRID`].
    pub fn extended(classifier: Arc<dyn Classify>) -> Self {
        let mut registry = Self::builtin(classifier.clone());
        for kind in classifier.extra_kinds() {
            registry.register(kind);
        }
        if registry.remove(HYBRID).is_some() {
            tracing::trace!("dropped mislabeled hybrid kind");
        }
        tracing::trace!(kinds = registry.len(), "built extended kind registry");
        registry
    }

    /// Adds `kind`, returning the existing predicate if it is already known.
    pub fn register(&mut self, kind: impl Into<Cow<'static, str>>) -> &Predicate {
        let kind = kind.into();
        let classifier = &self.classifier;
        self.predicates.entry(kind.clone()).or_insert_with(|| {
            tracing::trace!(kind = %kind, "registered kind");
            Predicate {
                kind,
                classifier: classifier.clone(),
            }
        })
    }

    pub fn remove(&mut self, kind: &str) -> Option<Predicate> {
        self.predicates.remove(kind)
    }

    pub fn get(&self, kind: &str) -> Option<&Predicate> {
        self.predicates.get(kind)
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.predicates.contains_key(kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.predicates.keys().map(|kind| &**kind)
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn classifier(&self) -> &Arc<dyn Classify> {
        &self.classifier
    }
}

impl fmt::Debug for KindRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.kinds()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::{EXTRA_KINDS, KindOf};

    #[test]
    fn register_never_duplicates() {
        let mut registry = KindRegistry::new(Arc::new(KindOf));
        registry.register("number");
        registry.register(String::from("number"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn predicates_test_exact_kind() {
        let registry = KindRegistry::builtin(Arc::new(KindOf));
        let number = registry.get("number").unwrap();
        assert!(number.test(&Value::from(1)));
        assert!(!number.test(&Value::from("1")));
        assert!(registry.get("Number").is_none());
    }

    #[test]
    fn extended_adds_classifier_kinds() {
        let registry = KindRegistry::extended(Arc::new(KindOf));
        assert_eq!(registry.len(), BUILTIN_KINDS.len() + EXTRA_KINDS.len());
        assert!(registry.contains("arguments"));
    }
}
