//! Shared helpers for snippet generation integration tests.

use std::collections::HashMap;
use stepsmith::{Pattern, PatternError, PatternFlavor, PatternMatcher, PatternTransformer};

/// Transformer returning pre-registered patterns for exact step text.
///
/// Steps without a canned entry fail with a tokenization error, which also
/// exercises the generator's hard-stop path.
#[derive(Debug, Default)]
pub struct CannedTransformer {
    patterns: HashMap<String, (String, usize)>,
}

impl CannedTransformer {
    /// Create a transformer with no canned patterns.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the pattern to return for `step_text`.
    #[must_use]
    pub fn with_pattern(
        mut self,
        step_text: &str,
        canonical_text: &str,
        placeholder_count: usize,
    ) -> Self {
        self.patterns.insert(
            step_text.to_string(),
            (canonical_text.to_string(), placeholder_count),
        );
        self
    }
}

impl PatternTransformer for CannedTransformer {
    fn transform(&self, flavor: PatternFlavor, step_text: &str) -> Result<Pattern, PatternError> {
        self.patterns.get(step_text).map_or_else(
            || {
                Err(PatternError::tokenize(
                    "no pattern can be inferred for step text",
                    0,
                    Some(step_text.to_string()),
                ))
            },
            |(canonical_text, placeholder_count)| {
                let matcher = match flavor {
                    PatternFlavor::Placeholder => PatternMatcher::Literal(step_text.to_string()),
                    PatternFlavor::Regex => PatternMatcher::Regex(format!("^{step_text}$")),
                };
                Ok(Pattern::new(matcher, canonical_text, *placeholder_count))
            },
        )
    }
}
