//! Step-definition snippet generation for behaviour-driven test suites.
//!
//! When a scenario step has no matching step definition, this crate turns
//! the step into a ready-to-paste function stub for one of the context
//! classes registered in the test environment: an attribute line carrying
//! the inferred pattern, a collision-free function name, an ordered
//! parameter list, and a `todo!` body.
//!
//! Pattern synthesis is delegated to an external
//! [`PatternTransformer`]; this crate owns name derivation, per-run
//! uniqueness bookkeeping, parameter derivation, and stub rendering. The
//! [`SnippetRegistry`] is the only state that outlives a single call and
//! is scoped to one generation run.

mod arguments;
mod environment;
mod errors;
mod generator;
mod keyword;
mod naming;
mod registry;
mod snippet;
mod step;
mod template;

pub use arguments::{Parameter, derive_parameters};
pub use environment::{ContextCapabilities, ContextClass, Environment};
pub use errors::SnippetError;
pub use generator::SnippetGenerator;
pub use keyword::{StepKeyword, StepKeywordParseError};
pub use naming::{FALLBACK_SEED, derive_seed, resolve_unique_name};
pub use registry::SnippetRegistry;
pub use snippet::Snippet;
pub use step::{Step, StepArgument};
pub use template::KEYWORD_PLACEHOLDER;

// Re-export the pattern vocabulary so downstream crates need only one
// dependency for the common case.
pub use stepsmith_patterns::{
    Pattern, PatternError, PatternFlavor, PatternIdentity, PatternMatcher, PatternTransformer,
    TokenizeErrorInfo,
};
