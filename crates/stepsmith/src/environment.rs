//! Test-environment model: candidate context classes and their capabilities.
//!
//! Capabilities are declared as plain data when a context is registered
//! with the environment, so eligibility checks are simple field reads
//! rather than runtime type inspection. The declared-method set serves the
//! same purpose for name-collision checks.

use std::collections::HashSet;
use stepsmith_patterns::PatternFlavor;

/// Capability descriptor attached to a context class at registration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContextCapabilities {
    /// Whether the context is willing to host generated step definitions.
    pub accepts_snippets: bool,
    /// Pattern flavor the context prefers, when it declares one.
    pub pattern_flavor: Option<PatternFlavor>,
}

impl ContextCapabilities {
    /// Descriptor for a context that accepts snippets in the default flavor.
    #[must_use]
    pub const fn accepting() -> Self {
        Self {
            accepts_snippets: true,
            pattern_flavor: None,
        }
    }

    /// Descriptor for a context that accepts snippets in a declared flavor.
    #[must_use]
    pub const fn accepting_with_flavor(flavor: PatternFlavor) -> Self {
        Self {
            accepts_snippets: true,
            pattern_flavor: Some(flavor),
        }
    }
}

/// A user-authored step-definition holder known to the environment.
///
/// # Examples
///
/// ```
/// use stepsmith::{ContextCapabilities, ContextClass};
///
/// let context = ContextClass::new("basket_steps", ContextCapabilities::accepting())
///     .with_method("i_have_a_basket");
/// assert!(context.declares_method("i_have_a_basket"));
/// assert!(!context.declares_method("i_have_a_basket2"));
/// ```
#[derive(Debug, Clone)]
pub struct ContextClass {
    name: String,
    methods: HashSet<String>,
    capabilities: ContextCapabilities,
}

impl ContextClass {
    /// Register a context class under `name` with the given capabilities.
    #[must_use]
    pub fn new(name: impl Into<String>, capabilities: ContextCapabilities) -> Self {
        Self {
            name: name.into(),
            methods: HashSet::new(),
            capabilities,
        }
    }

    /// Record a method the context already declares.
    #[must_use]
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.methods.insert(method.into());
        self
    }

    /// Record several declared methods at once.
    #[must_use]
    pub fn with_methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.methods.extend(methods.into_iter().map(Into::into));
        self
    }

    /// The context's registered name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The capability descriptor supplied at registration.
    #[must_use]
    pub fn capabilities(&self) -> ContextCapabilities {
        self.capabilities
    }

    /// Whether the context accepts generated snippets.
    #[must_use]
    pub fn accepts_snippets(&self) -> bool {
        self.capabilities.accepts_snippets
    }

    /// The flavor patterns for this context should be generated in.
    #[must_use]
    pub fn pattern_flavor(&self) -> PatternFlavor {
        self.capabilities.pattern_flavor.unwrap_or_default()
    }

    /// Whether the context already declares a method named `method`.
    #[must_use]
    pub fn declares_method(&self, method: &str) -> bool {
        self.methods.contains(method)
    }
}

/// Ordered collection of candidate context classes for one test run.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    contexts: Vec<ContextClass>,
}

impl Environment {
    /// Create an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a context class, preserving declaration order.
    #[must_use]
    pub fn with_context(mut self, context: ContextClass) -> Self {
        self.contexts.push(context);
        self
    }

    /// Append a context class in place.
    pub fn push_context(&mut self, context: ContextClass) {
        self.contexts.push(context);
    }

    /// Whether any context classes are registered.
    #[must_use]
    pub fn has_contexts(&self) -> bool {
        !self.contexts.is_empty()
    }

    /// The registered context classes, in declaration order.
    #[must_use]
    pub fn contexts(&self) -> &[ContextClass] {
        &self.contexts
    }
}
