//! Formal-parameter derivation for generated step definitions.

use crate::step::Step;
use std::fmt;

/// One formal parameter in a generated step-definition signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    name: String,
    type_name: &'static str,
}

impl Parameter {
    /// Anonymous positional parameter for the `index`-th placeholder
    /// (1-based).
    #[must_use]
    pub fn positional(index: usize) -> Self {
        Self {
            name: format!("arg{index}"),
            type_name: "String",
        }
    }

    /// Parameter receiving the step's doc-string argument.
    #[must_use]
    pub fn docstring() -> Self {
        Self {
            name: "docstring".to_string(),
            type_name: "String",
        }
    }

    /// Parameter receiving the step's table argument.
    #[must_use]
    pub fn datatable() -> Self {
        Self {
            name: "datatable".to_string(),
            type_name: "Vec<Vec<String>>",
        }
    }

    /// The parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The parameter's rendered type.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.type_name)
    }
}

/// Derive the ordered parameter list for a step and its pattern.
///
/// One anonymous positional parameter per placeholder, in order, then at
/// most one doc-string parameter and at most one table parameter. The two
/// trailing parameters always come last in that fixed order, regardless of
/// where the arguments sat in the step source; only the step's own argument
/// list decides their presence.
///
/// # Examples
///
/// ```
/// use stepsmith::{derive_parameters, Step};
///
/// let step = Step::new("the following exist").with_table(vec![vec!["a".into()]]);
/// let rendered: Vec<String> = derive_parameters(&step, 2)
///     .iter()
///     .map(ToString::to_string)
///     .collect();
/// assert_eq!(
///     rendered,
///     ["arg1: String", "arg2: String", "datatable: Vec<Vec<String>>"],
/// );
/// ```
#[must_use]
pub fn derive_parameters(step: &Step, placeholder_count: usize) -> Vec<Parameter> {
    let mut parameters: Vec<_> = (1..=placeholder_count).map(Parameter::positional).collect();
    if step.docstring().is_some() {
        parameters.push(Parameter::docstring());
    }
    if step.table().is_some() {
        parameters.push(Parameter::datatable());
    }
    parameters
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn rendered(step: &Step, placeholder_count: usize) -> Vec<String> {
        derive_parameters(step, placeholder_count)
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn bare_step_without_placeholders_yields_empty_signature() {
        assert!(rendered(&Step::new("I have a basket"), 0).is_empty());
    }

    #[rstest]
    #[case(1, &["arg1: String"])]
    #[case(3, &["arg1: String", "arg2: String", "arg3: String"])]
    fn positional_parameters_match_placeholder_count(
        #[case] count: usize,
        #[case] expected: &[&str],
    ) {
        assert_eq!(rendered(&Step::new("step"), count), expected);
    }

    #[test]
    fn docstring_argument_appends_one_parameter() {
        let step = Step::new("I submit").with_docstring("body");
        assert_eq!(rendered(&step, 1), ["arg1: String", "docstring: String"]);
    }

    #[test]
    fn table_argument_appends_one_parameter() {
        let step = Step::new("these exist").with_table(vec![vec!["a".into()]]);
        assert_eq!(
            rendered(&step, 2),
            ["arg1: String", "arg2: String", "datatable: Vec<Vec<String>>"],
        );
    }

    #[test]
    fn docstring_precedes_table_regardless_of_source_order() {
        let step = Step::new("I submit")
            .with_table(vec![vec!["a".into()]])
            .with_docstring("body");
        assert_eq!(
            rendered(&step, 0),
            ["docstring: String", "datatable: Vec<Vec<String>>"],
        );
    }
}
