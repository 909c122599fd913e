use crate::document::Document;
use crate::validation::RuleKind;
use crate::validation::ValidationContext;

/// A single, stateless static-semantics check.
///
/// Rules hold no per-run state of their own: everything a rule needs to
/// remember while walking a document lives in the [`ValidationContext`]
/// scratch structures, so one rule instance can be shared by any number of
/// concurrent validation runs.
pub trait ValidationRule: std::fmt::Debug + Send + Sync {
    /// Walk `document` and append an error to `ctx` for every violation.
    fn validate(&self, ctx: &mut ValidationContext<'_>, document: &Document);

    fn kind(&self) -> RuleKind;
}
