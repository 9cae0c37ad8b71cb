//! Contract implemented by external pattern transformers.

use crate::errors::PatternError;
use crate::flavor::PatternFlavor;
use crate::pattern::Pattern;

/// Produces a [`Pattern`] from raw step text.
///
/// Pattern synthesis lives outside the generator core. Implementations are
/// free to tokenize however they like, but must honour the requested
/// [`PatternFlavor`] and report a placeholder count consistent with the
/// matcher they emit.
pub trait PatternTransformer {
    /// Infer a pattern for `step_text` in the requested `flavor`.
    ///
    /// # Errors
    /// Returns [`PatternError`] when the text cannot be tokenized into a
    /// valid pattern. Callers treat this as a hard stop for the enclosing
    /// generation call; no retry happens at this layer.
    fn transform(&self, flavor: PatternFlavor, step_text: &str) -> Result<Pattern, PatternError>;
}

impl<T: PatternTransformer + ?Sized> PatternTransformer for &T {
    fn transform(&self, flavor: PatternFlavor, step_text: &str) -> Result<Pattern, PatternError> {
        (**self).transform(flavor, step_text)
    }
}
