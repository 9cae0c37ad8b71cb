//! Error types for snippet generation.

use stepsmith_patterns::PatternError;
use thiserror::Error;

/// Errors a generation call can surface.
///
/// Name resolution and rendering have no failure paths; everything that can
/// go wrong happens before them.
#[derive(Debug, Error)]
pub enum SnippetError {
    /// No candidate context accepts generated snippets.
    ///
    /// Callers are expected to consult
    /// [`supports`](crate::SnippetGenerator::supports) first, so hitting
    /// this variant indicates a caller contract violation rather than a
    /// user-facing condition.
    #[error("no context in the environment accepts generated snippets")]
    NoEligibleTarget,

    /// The transformer could not infer a pattern from the step text.
    ///
    /// Propagated unchanged and never retried; present it to users as
    /// "could not infer a step pattern".
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_eligible_target_displays_message() {
        assert_eq!(
            SnippetError::NoEligibleTarget.to_string(),
            "no context in the environment accepts generated snippets"
        );
    }

    #[test]
    fn pattern_errors_pass_through_unchanged() {
        let inner = PatternError::tokenize("empty step text", 0, None);
        let display = inner.to_string();
        let error = SnippetError::from(inner);
        assert_eq!(error.to_string(), display);
    }
}
