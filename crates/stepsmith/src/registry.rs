//! Run-scoped bookkeeping of pattern-to-name assignments.
//!
//! The registry is the only state that outlives a single generation call.
//! One instance spans one generation run; callers inject the same instance
//! into every generator participating in the run and [`reset`](SnippetRegistry::reset)
//! it (or drop it) between runs, otherwise stale entries corrupt the
//! uniqueness guarantees.

use crate::environment::ContextClass;
use crate::naming::{derive_seed, resolve_unique_name};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use stepsmith_patterns::{Pattern, PatternIdentity};

type ClassEntries = HashMap<PatternIdentity, String>;

/// Remembers which method name each pattern was assigned, per context class.
///
/// Name resolution and registration run under one lock, so parallel
/// generation calls for the same class cannot interleave between resolving
/// a candidate and claiming it.
#[derive(Debug, Default)]
pub struct SnippetRegistry {
    entries: Mutex<HashMap<String, ClassEntries>>,
}

impl SnippetRegistry {
    /// Create an empty registry for a fresh generation run.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive and claim a method name for `pattern` on `context`.
    ///
    /// The same pattern identity always re-yields the name it was first
    /// assigned; a different pattern whose canonical text collides is pushed
    /// to the next free suffix. Candidates are checked against the context's
    /// declared methods first, then against every other entry registered for
    /// the class in this run.
    #[must_use]
    pub fn assign_name(&self, context: &ContextClass, pattern: &Pattern) -> String {
        let seed = derive_seed(pattern.canonical_text());
        let identity = pattern.identity();
        let mut entries = self.lock();
        let class_entries = entries.entry(context.name().to_string()).or_default();
        let name = resolve_unique_name(
            &seed,
            |candidate| context.declares_method(candidate),
            |candidate| {
                class_entries
                    .iter()
                    .any(|(entry, assigned)| *entry != identity && assigned == candidate)
            },
        );
        log::trace!(
            "assigned method name '{name}' to pattern '{identity}' on context '{}'",
            context.name()
        );
        class_entries.insert(identity, name.clone());
        name
    }

    /// Name previously assigned to `identity` on the named context, if any.
    #[must_use]
    pub fn assigned_name(&self, context: &str, identity: &PatternIdentity) -> Option<String> {
        self.lock()
            .get(context)
            .and_then(|class_entries| class_entries.get(identity).cloned())
    }

    /// Whether the registry holds no assignments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().values().all(HashMap::is_empty)
    }

    /// Discard every assignment, starting a fresh generation run.
    pub fn reset(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, ClassEntries>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(feature = "diagnostics")]
mod diagnostics {
    use super::SnippetRegistry;
    use serde::Serialize;
    use std::collections::BTreeMap;

    /// Stable view of the registry for diagnostic tooling.
    #[derive(Debug, Serialize)]
    struct RegistrySnapshot {
        contexts: BTreeMap<String, BTreeMap<String, String>>,
    }

    impl SnippetRegistry {
        /// Serialize the registry to JSON, keyed by context then pattern text.
        ///
        /// Entries are sorted so the output is stable across runs, making it
        /// safe to diff in tooling.
        ///
        /// # Errors
        ///
        /// Returns an error if serialization fails.
        pub fn dump(&self) -> serde_json::Result<String> {
            let contexts = self
                .lock()
                .iter()
                .map(|(context, class_entries)| {
                    let assignments = class_entries
                        .iter()
                        .map(|(identity, name)| (identity.to_string(), name.clone()))
                        .collect();
                    (context.clone(), assignments)
                })
                .collect();
            serde_json::to_string_pretty(&RegistrySnapshot { contexts })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::ContextCapabilities;
    use stepsmith_patterns::PatternMatcher;

    fn context(methods: &[&str]) -> ContextClass {
        ContextClass::new("basket_steps", ContextCapabilities::accepting())
            .with_methods(methods.iter().copied())
    }

    fn literal(text: &str, canonical: &str) -> Pattern {
        Pattern::new(PatternMatcher::Literal(text.into()), canonical, 0)
    }

    #[test]
    fn same_pattern_re_yields_its_name() {
        let registry = SnippetRegistry::new();
        let ctx = context(&[]);
        let pattern = literal("I have a basket", "iHaveABasket");
        let first = registry.assign_name(&ctx, &pattern);
        let second = registry.assign_name(&ctx, &pattern);
        assert_eq!(first, "iHaveABasket");
        assert_eq!(first, second);
    }

    #[test]
    fn distinct_patterns_with_shared_canonical_text_diverge() {
        let registry = SnippetRegistry::new();
        let ctx = context(&[]);
        let first = registry.assign_name(&ctx, &literal("there are 5 items", "thereAreNItems"));
        let second = registry.assign_name(&ctx, &literal("there are 9 items", "thereAreNItems"));
        assert_eq!(first, "thereAreNItems");
        assert_eq!(second, "thereAreNItems2");
    }

    #[test]
    fn declared_methods_block_the_seed() {
        let registry = SnippetRegistry::new();
        let ctx = context(&["iHaveABasket"]);
        let name = registry.assign_name(&ctx, &literal("I have a basket", "iHaveABasket"));
        assert_eq!(name, "iHaveABasket2");
    }

    #[test]
    fn contexts_do_not_share_assignments() {
        let registry = SnippetRegistry::new();
        let first = ContextClass::new("first", ContextCapabilities::accepting());
        let second = ContextClass::new("second", ContextCapabilities::accepting());
        let pattern = literal("I have a basket", "iHaveABasket");
        let other = literal("I have a large basket", "iHaveABasket");
        assert_eq!(registry.assign_name(&first, &pattern), "iHaveABasket");
        // A fresh class sees no prior entries, so the same canonical text
        // resolves without a suffix.
        assert_eq!(registry.assign_name(&second, &other), "iHaveABasket");
    }

    #[test]
    fn reset_discards_assignments() {
        let registry = SnippetRegistry::new();
        let ctx = context(&[]);
        let pattern = literal("there are 5 items", "thereAreNItems");
        let _ = registry.assign_name(&ctx, &pattern);
        assert!(!registry.is_empty());

        registry.reset();
        assert!(registry.is_empty());
        let name = registry.assign_name(&ctx, &literal("there are 9 items", "thereAreNItems"));
        assert_eq!(name, "thereAreNItems");
    }

    #[test]
    fn assigned_name_reads_back_registrations() {
        let registry = SnippetRegistry::new();
        let ctx = context(&[]);
        let pattern = literal("I have a basket", "iHaveABasket");
        assert!(registry
            .assigned_name(ctx.name(), &pattern.identity())
            .is_none());
        let name = registry.assign_name(&ctx, &pattern);
        assert_eq!(
            registry.assigned_name(ctx.name(), &pattern.identity()),
            Some(name)
        );
    }

    #[cfg(feature = "diagnostics")]
    #[test]
    fn dump_lists_assignments_by_context_and_pattern() {
        let registry = SnippetRegistry::new();
        let ctx = context(&[]);
        let _ = registry.assign_name(&ctx, &literal("I have a basket", "iHaveABasket"));
        let json = match registry.dump() {
            Ok(json) => json,
            Err(err) => panic!("dump should serialize: {err}"),
        };
        assert!(json.contains("basket_steps"));
        assert!(json.contains("I have a basket"));
        assert!(json.contains("iHaveABasket"));
    }
}
