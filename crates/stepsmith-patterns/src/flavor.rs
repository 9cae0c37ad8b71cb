//! Pattern flavors a transformer can be asked to produce.

use std::fmt;
use std::str::FromStr;

/// Dialect of matcher a transformer should emit for a step.
///
/// Context classes may declare a preferred flavor; the generator falls back
/// to [`PatternFlavor::Placeholder`] when none is declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PatternFlavor {
    /// Brace-delimited placeholder syntax, e.g. `I have {count} cucumbers`.
    #[default]
    Placeholder,
    /// Raw regular-expression syntax with explicit capture groups.
    Regex,
}

impl PatternFlavor {
    /// Return the flavor as its canonical token.
    ///
    /// # Examples
    ///
    /// ```
    /// use stepsmith_patterns::PatternFlavor;
    ///
    /// assert_eq!(PatternFlavor::Placeholder.as_str(), "placeholder");
    /// assert_eq!(PatternFlavor::Regex.as_str(), "regex");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Placeholder => "placeholder",
            Self::Regex => "regex",
        }
    }
}

impl fmt::Display for PatternFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`PatternFlavor`] from a string fails.
///
/// Contains the unrecognised token for diagnostic purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternFlavorParseError(pub String);

impl fmt::Display for PatternFlavorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid pattern flavor: {}", self.0)
    }
}

impl std::error::Error for PatternFlavorParseError {}

impl FromStr for PatternFlavor {
    type Err = PatternFlavorParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("placeholder") {
            Ok(Self::Placeholder)
        } else if trimmed.eq_ignore_ascii_case("regex") {
            Ok(Self::Regex)
        } else {
            Err(PatternFlavorParseError(trimmed.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("placeholder", PatternFlavor::Placeholder)]
    #[case(" Regex ", PatternFlavor::Regex)]
    #[case("REGEX", PatternFlavor::Regex)]
    fn parses_case_insensitively(#[case] input: &str, #[case] expected: PatternFlavor) {
        assert_eq!(input.parse::<PatternFlavor>(), Ok(expected));
    }

    #[test]
    fn rejects_unknown_flavor() {
        let err = "turnip".parse::<PatternFlavor>();
        assert_eq!(err, Err(PatternFlavorParseError("turnip".to_string())));
    }

    #[test]
    fn defaults_to_placeholder() {
        assert_eq!(PatternFlavor::default(), PatternFlavor::Placeholder);
    }

    #[test]
    fn display_matches_canonical_token() {
        assert_eq!(PatternFlavor::Placeholder.to_string(), "placeholder");
        assert_eq!(PatternFlavor::Regex.to_string(), "regex");
    }
}
