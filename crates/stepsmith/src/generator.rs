//! Snippet generation orchestration.
//!
//! The generator wires the collaborators together: it picks the target
//! context, asks the transformer for a pattern, resolves a unique method
//! name through the registry, derives the parameter list, and renders the
//! stub. The registry write during name assignment is its only side
//! effect.

use crate::arguments::derive_parameters;
use crate::environment::{ContextClass, Environment};
use crate::errors::SnippetError;
use crate::registry::SnippetRegistry;
use crate::snippet::Snippet;
use crate::step::Step;
use crate::template::render_stub;
use std::sync::Arc;
use stepsmith_patterns::PatternTransformer;

/// Generates step-definition stubs for unmatched steps.
///
/// One registry instance spans one generation run. [`new`](Self::new)
/// creates a fresh registry; [`with_registry`](Self::with_registry) lets
/// several generators (or several worker threads holding clones of the
/// `Arc`) share one run's bookkeeping.
///
/// # Examples
///
/// ```
/// use stepsmith::{
///     ContextCapabilities, ContextClass, Environment, Pattern, PatternError,
///     PatternFlavor, PatternMatcher, PatternTransformer, SnippetGenerator, Step,
/// };
///
/// struct Echo;
///
/// impl PatternTransformer for Echo {
///     fn transform(&self, _: PatternFlavor, text: &str) -> Result<Pattern, PatternError> {
///         Ok(Pattern::new(PatternMatcher::Literal(text.into()), "iHaveABasket", 0))
///     }
/// }
///
/// let environment = Environment::new()
///     .with_context(ContextClass::new("basket_steps", ContextCapabilities::accepting()));
/// let step = Step::new("I have a basket");
/// let generator = SnippetGenerator::new(Echo);
/// assert!(generator.supports(&environment, &step));
///
/// let snippet = generator
///     .generate(&environment, &step)
///     .expect("accepting context is registered");
/// assert_eq!(snippet.context(), "basket_steps");
/// assert!(snippet.text().contains("fn iHaveABasket()"));
/// ```
#[derive(Debug)]
pub struct SnippetGenerator<T> {
    transformer: T,
    registry: Arc<SnippetRegistry>,
}

impl<T: PatternTransformer> SnippetGenerator<T> {
    /// Create a generator with a fresh registry for a new run.
    #[must_use]
    pub fn new(transformer: T) -> Self {
        Self::with_registry(transformer, Arc::new(SnippetRegistry::new()))
    }

    /// Create a generator sharing an existing run's registry.
    #[must_use]
    pub fn with_registry(transformer: T, registry: Arc<SnippetRegistry>) -> Self {
        Self {
            transformer,
            registry,
        }
    }

    /// The registry backing this generator's run.
    #[must_use]
    pub fn registry(&self) -> &SnippetRegistry {
        &self.registry
    }

    /// Whether the environment offers a context this generator can target.
    ///
    /// Pure and cheap; upstream dispatch may call it repeatedly. A `true`
    /// result is the precondition for [`generate`](Self::generate).
    #[must_use]
    pub fn supports(&self, environment: &Environment, _step: &Step) -> bool {
        environment
            .contexts()
            .iter()
            .any(ContextClass::accepts_snippets)
    }

    /// Generate a snippet for `step` against the first accepting context.
    ///
    /// # Errors
    ///
    /// Returns [`SnippetError::NoEligibleTarget`] when no context accepts
    /// snippets (the caller skipped [`supports`](Self::supports)), and
    /// [`SnippetError::Pattern`] when the transformer cannot infer a
    /// pattern from the step text.
    pub fn generate(
        &self,
        environment: &Environment,
        step: &Step,
    ) -> Result<Snippet, SnippetError> {
        let context = environment
            .contexts()
            .iter()
            .find(|context| context.accepts_snippets())
            .ok_or(SnippetError::NoEligibleTarget)?;
        log::debug!(
            "generating snippet for step '{}' in context '{}'",
            step.text(),
            context.name()
        );

        let pattern = self
            .transformer
            .transform(context.pattern_flavor(), step.text())?;
        let name = self.registry.assign_name(context, &pattern);
        let parameters = derive_parameters(step, pattern.placeholder_count());
        let text = render_stub(pattern.text(), &name, &parameters);

        Ok(Snippet::new(context.name(), text, step.clone()))
    }
}
