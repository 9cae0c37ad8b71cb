//! The generated snippet value returned to callers.

use crate::keyword::StepKeyword;
use crate::step::Step;
use crate::template::KEYWORD_PLACEHOLDER;

/// A ready-to-paste step-definition stub bound to its target context.
///
/// The rendered text carries a keyword placeholder; presenters that know
/// the step's resolved keyword can finalise it with
/// [`text_for`](Snippet::text_for).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    context: String,
    text: String,
    step: Step,
}

impl Snippet {
    pub(crate) fn new(context: impl Into<String>, text: String, step: Step) -> Self {
        Self {
            context: context.into(),
            text,
            step,
        }
    }

    /// Name of the context class the stub belongs in.
    #[must_use]
    pub fn context(&self) -> &str {
        &self.context
    }

    /// The rendered stub text, keyword placeholder included.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The step this snippet was generated for.
    #[must_use]
    pub fn step(&self) -> &Step {
        &self.step
    }

    /// Finalise the stub text for a resolved step keyword.
    ///
    /// Substitutes the keyword placeholder and collapses the brace escaping
    /// applied during rendering, yielding text ready to paste.
    ///
    /// # Examples
    ///
    /// ```
    /// # use stepsmith::{ContextCapabilities, ContextClass, Environment,
    /// #     SnippetGenerator, Step, StepKeyword};
    /// # use stepsmith::{Pattern, PatternError, PatternFlavor, PatternMatcher,
    /// #     PatternTransformer};
    /// # struct Echo;
    /// # impl PatternTransformer for Echo {
    /// #     fn transform(&self, _: PatternFlavor, text: &str) -> Result<Pattern, PatternError> {
    /// #         Ok(Pattern::new(PatternMatcher::Literal(text.into()), "iHaveABasket", 0))
    /// #     }
    /// # }
    /// let environment = Environment::new()
    ///     .with_context(ContextClass::new("basket_steps", ContextCapabilities::accepting()));
    /// let generator = SnippetGenerator::new(Echo);
    /// let snippet = generator
    ///     .generate(&environment, &Step::new("I have a basket"))
    ///     .expect("accepting context is registered");
    /// assert!(snippet.text_for(StepKeyword::Given).starts_with("#[given("));
    /// ```
    #[must_use]
    pub fn text_for(&self, keyword: StepKeyword) -> String {
        // The attribute placeholder precedes any pattern text, so replacing
        // only the first occurrence cannot touch escaped braces.
        self.text
            .replacen(KEYWORD_PLACEHOLDER, keyword.attribute_name(), 1)
            .replace("{{", "{")
            .replace("}}", "}")
    }
}
