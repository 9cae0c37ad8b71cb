//! Scenario step model consumed by the generator.
//!
//! A [`Step`] is the read-only input to one generation call: its text plus
//! the ordered attached arguments. Argument kinds are a closed sum so the
//! parameter-derivation logic can match them exhaustively.

/// An argument attached to a scenario step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepArgument {
    /// A multi-line doc-string block.
    DocString(String),
    /// A data table, row-major.
    Table(Vec<Vec<String>>),
}

/// One line of a scenario, with optional attached data.
///
/// # Examples
///
/// ```
/// use stepsmith::Step;
///
/// let step = Step::new("the following users exist")
///     .with_table(vec![vec!["name".into()], vec!["alice".into()]]);
/// assert!(step.table().is_some());
/// assert!(step.docstring().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    text: String,
    arguments: Vec<StepArgument>,
}

impl Step {
    /// Create a step with no attached arguments.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            arguments: Vec::new(),
        }
    }

    /// Attach a doc-string argument.
    #[must_use]
    pub fn with_docstring(mut self, content: impl Into<String>) -> Self {
        self.arguments.push(StepArgument::DocString(content.into()));
        self
    }

    /// Attach a table argument.
    #[must_use]
    pub fn with_table(mut self, rows: Vec<Vec<String>>) -> Self {
        self.arguments.push(StepArgument::Table(rows));
        self
    }

    /// The raw step text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Attached arguments, in source order.
    #[must_use]
    pub fn arguments(&self) -> &[StepArgument] {
        &self.arguments
    }

    /// The first doc-string argument, if any.
    #[must_use]
    pub fn docstring(&self) -> Option<&str> {
        self.arguments.iter().find_map(|arg| match arg {
            StepArgument::DocString(content) => Some(content.as_str()),
            StepArgument::Table(_) => None,
        })
    }

    /// The first table argument, if any.
    #[must_use]
    pub fn table(&self) -> Option<&[Vec<String>]> {
        self.arguments.iter().find_map(|arg| match arg {
            StepArgument::Table(rows) => Some(rows.as_slice()),
            StepArgument::DocString(_) => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_step_has_no_arguments() {
        let step = Step::new("I have a basket");
        assert_eq!(step.text(), "I have a basket");
        assert!(step.arguments().is_empty());
        assert!(step.docstring().is_none());
        assert!(step.table().is_none());
    }

    #[test]
    fn arguments_preserve_source_order() {
        let step = Step::new("I submit the form")
            .with_docstring("payload")
            .with_table(vec![vec!["a".into()]]);
        assert_eq!(step.arguments().len(), 2);
        assert_eq!(step.docstring(), Some("payload"));
        assert_eq!(step.table(), Some([vec!["a".to_string()]].as_slice()));
    }
}
