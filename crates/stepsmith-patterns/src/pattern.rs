//! Pattern values produced by transformers and consumed by the generator.
//!
//! A [`Pattern`] couples a matcher with the canonical step text used as an
//! identifier seed and the number of free placeholders the matcher implies.
//! The generator treats the value as opaque beyond those three attributes;
//! the lazily compiled regex exists so callers can confirm that an inferred
//! matcher really matches the step it was derived from.

use crate::errors::PatternError;
use derive_more::{Deref, From};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Matcher half of a pattern: either an explicit phrase or a regex source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PatternMatcher {
    /// An explicit phrase matched verbatim (placeholder dialects render here).
    Literal(String),
    /// Raw regular-expression source with explicit capture groups.
    Regex(String),
}

impl PatternMatcher {
    /// Access the textual form of the matcher.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Literal(text) | Self::Regex(text) => text,
        }
    }
}

impl fmt::Display for PatternMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Registry key distinguishing one pattern from another.
///
/// Two patterns are the same registration unit exactly when their matchers
/// are equal; canonical text and placeholder count do not participate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, From)]
pub struct PatternIdentity(PatternMatcher);

impl fmt::Display for PatternIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A step pattern inferred from step text by a transformer.
#[derive(Debug)]
pub struct Pattern {
    matcher: PatternMatcher,
    canonical_text: String,
    placeholder_count: usize,
    regex: OnceLock<Regex>,
}

// Equality and hashing are by the matcher alone, mirroring the registry's
// notion of identity. Canonical text and placeholder count are derived
// attributes of the same inference and never vary independently in practice.
impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.matcher == other.matcher
    }
}

impl Eq for Pattern {}

impl Pattern {
    /// Create a pattern from a matcher, its canonical text, and the number
    /// of placeholders the matcher captures.
    #[must_use]
    pub fn new(
        matcher: PatternMatcher,
        canonical_text: impl Into<String>,
        placeholder_count: usize,
    ) -> Self {
        Self {
            matcher,
            canonical_text: canonical_text.into(),
            placeholder_count,
            regex: OnceLock::new(),
        }
    }

    /// Access the matcher.
    #[must_use]
    pub fn matcher(&self) -> &PatternMatcher {
        &self.matcher
    }

    /// Textual form of the matcher, as rendered into snippets.
    #[must_use]
    pub fn text(&self) -> &str {
        self.matcher.text()
    }

    /// Canonical step text used as the identifier seed.
    #[must_use]
    pub fn canonical_text(&self) -> &str {
        &self.canonical_text
    }

    /// Number of free parameters the matcher implies.
    #[must_use]
    pub fn placeholder_count(&self) -> usize {
        self.placeholder_count
    }

    /// The registry key for this pattern.
    #[must_use]
    pub fn identity(&self) -> PatternIdentity {
        PatternIdentity::from(self.matcher.clone())
    }

    /// Compile the matcher into a regular expression, caching the result.
    ///
    /// Literal matchers are escaped and anchored; regex matchers compile
    /// verbatim.
    ///
    /// # Errors
    /// Returns [`PatternError::Regex`] when the matcher source fails to
    /// compile. Subsequent calls after a success are no-ops.
    pub fn compile(&self) -> Result<(), PatternError> {
        if self.regex.get().is_some() {
            return Ok(());
        }
        let source = match &self.matcher {
            PatternMatcher::Literal(text) => format!("^{}$", regex::escape(text)),
            PatternMatcher::Regex(source) => source.clone(),
        };
        let regex = Regex::new(&source).map_err(PatternError::from)?;
        let _ = self.regex.set(regex);
        Ok(())
    }

    /// Report whether the matcher matches `text`, compiling it on demand.
    ///
    /// # Errors
    /// Returns [`PatternError::Regex`] when compilation fails.
    pub fn matches(&self, text: &str) -> Result<bool, PatternError> {
        self.compile()?;
        Ok(self.regex.get().is_some_and(|regex| regex.is_match(text)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literal(text: &str) -> Pattern {
        Pattern::new(PatternMatcher::Literal(text.into()), "aStep", 0)
    }

    #[test]
    fn literal_matchers_match_their_own_text_only() {
        let pattern = literal("I have a basket");
        assert!(matches!(pattern.matches("I have a basket"), Ok(true)));
        assert!(matches!(
            pattern.matches("I have a basket of apples"),
            Ok(false)
        ));
    }

    #[test]
    fn literal_matchers_escape_regex_metacharacters() {
        let pattern = literal("costs $5 (roughly)");
        assert!(matches!(pattern.matches("costs $5 (roughly)"), Ok(true)));
        assert!(matches!(pattern.matches("costs 55 roughly"), Ok(false)));
    }

    #[test]
    fn regex_matchers_compile_verbatim() {
        let pattern = Pattern::new(
            PatternMatcher::Regex(r"^I have (\d+) cucumbers$".into()),
            "iHaveCucumbers",
            1,
        );
        assert!(matches!(pattern.matches("I have 12 cucumbers"), Ok(true)));
    }

    #[test]
    fn invalid_regex_source_surfaces_compile_error() {
        let pattern = Pattern::new(PatternMatcher::Regex("(unclosed".into()), "broken", 0);
        assert!(matches!(
            pattern.matches("anything"),
            Err(PatternError::Regex(_))
        ));
    }

    #[test]
    fn identity_tracks_matcher_not_canonical_text() {
        let first = Pattern::new(PatternMatcher::Literal("same phrase".into()), "one", 0);
        let second = Pattern::new(PatternMatcher::Literal("same phrase".into()), "two", 3);
        assert_eq!(first.identity(), second.identity());
        assert_eq!(first, second);

        let third = Pattern::new(PatternMatcher::Regex("same phrase".into()), "one", 0);
        assert_ne!(first.identity(), third.identity());
    }

    #[test]
    fn identity_displays_matcher_text() {
        let pattern = literal("there are {count} items");
        assert_eq!(pattern.identity().to_string(), "there are {count} items");
    }
}
