//! Error types shared across the pattern boundary.

use std::fmt;
use thiserror::Error;

/// Additional context for a failed attempt to tokenize step text.
///
/// # Examples
/// ```
/// use stepsmith_patterns::TokenizeErrorInfo;
/// let info = TokenizeErrorInfo::new("unterminated quote", 7, Some("\"basket".into()));
/// assert_eq!(info.token.as_deref(), Some("\"basket"));
/// assert_eq!(info.position, 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizeErrorInfo {
    /// Reason the step text could not be tokenized.
    pub message: &'static str,
    /// Zero-based byte offset in the step text where tokenization failed.
    pub position: usize,
    /// The offending token, when one was isolated.
    pub token: Option<String>,
}

impl TokenizeErrorInfo {
    /// Create a new error description for a tokenization failure.
    #[must_use]
    pub fn new(message: &'static str, position: usize, token: Option<String>) -> Self {
        Self {
            message,
            position,
            token,
        }
    }
}

impl fmt::Display for TokenizeErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.token {
            Some(token) => write!(
                f,
                "{} near `{}` at byte {} (zero-based)",
                self.message, token, self.position
            ),
            None => write!(f, "{} at byte {} (zero-based)", self.message, self.position),
        }
    }
}

/// Errors surfaced while turning step text into a [`Pattern`](crate::Pattern).
///
/// Transformer failures are terminal for the enclosing generation call; the
/// generator propagates them unchanged rather than retrying.
#[derive(Debug, Error)]
pub enum PatternError {
    /// The step text could not be tokenized into a valid pattern.
    #[error("cannot infer a pattern from step text: {0}")]
    Tokenize(TokenizeErrorInfo),
    /// The matcher source failed to compile as a regular expression.
    #[error(transparent)]
    Regex(#[from] regex::Error),
}

impl PatternError {
    /// Build a tokenization error from its parts.
    #[must_use]
    pub fn tokenize(message: &'static str, position: usize, token: Option<String>) -> Self {
        Self::Tokenize(TokenizeErrorInfo::new(message, position, token))
    }
}
