use crate::validation::ValidationRule;
use crate::validation::rules::AllVariableUsagesAreAllowedRule;
use crate::validation::rules::AllVariablesUsedRule;
use crate::validation::rules::DirectivesAreValidRule;
use crate::validation::rules::ExecutableDefinitionsRule;
use crate::validation::rules::FieldMustBeDefinedRule;
use crate::validation::rules::FragmentsAreValidRule;
use crate::validation::rules::VariableUniqueAndInputTypeRule;

/// Identifies one of the built-in validation rules.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum RuleKind {
    AllVariableUsagesAreAllowed,
    AllVariablesUsed,
    DirectivesAreValid,
    ExecutableDefinitions,
    FieldMustBeDefined,
    FragmentsAreValid,
    VariableUniqueAndInputType,
}
impl RuleKind {
    /// The rules a [`DocumentValidator`](crate::validation::DocumentValidator)
    /// runs when none are specified, in the order they run.
    pub const DEFAULT_ORDER: [RuleKind; 7] = [
        RuleKind::DirectivesAreValid,
        RuleKind::ExecutableDefinitions,
        RuleKind::FieldMustBeDefined,
        RuleKind::FragmentsAreValid,
        RuleKind::AllVariablesUsed,
        RuleKind::AllVariableUsagesAreAllowed,
        RuleKind::VariableUniqueAndInputType,
    ];

    pub fn instantiate(&self) -> Box<dyn ValidationRule> {
        match self {
            Self::AllVariableUsagesAreAllowed => Box::new(AllVariableUsagesAreAllowedRule),
            Self::AllVariablesUsed => Box::new(AllVariablesUsedRule),
            Self::DirectivesAreValid => Box::new(DirectivesAreValidRule),
            Self::ExecutableDefinitions => Box::new(ExecutableDefinitionsRule),
            Self::FieldMustBeDefined => Box::new(FieldMustBeDefinedRule),
            Self::FragmentsAreValid => Box::new(FragmentsAreValidRule),
            Self::VariableUniqueAndInputType => Box::new(VariableUniqueAndInputTypeRule),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::AllVariableUsagesAreAllowed => "AllVariableUsagesAreAllowed",
            Self::AllVariablesUsed => "AllVariablesUsed",
            Self::DirectivesAreValid => "DirectivesAreValid",
            Self::ExecutableDefinitions => "ExecutableDefinitions",
            Self::FieldMustBeDefined => "FieldMustBeDefined",
            Self::FragmentsAreValid => "FragmentsAreValid",
            Self::VariableUniqueAndInputType => "VariableUniqueAndInputType",
        }
    }
}
impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Serializable description of how to construct a
/// [`DocumentValidator`](crate::validation::DocumentValidator).
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Maximum number of idle contexts kept around for reuse.
    pub pool_capacity: usize,

    /// Rules to run, in order.
    pub rules: Vec<RuleKind>,
}
impl ValidatorConfig {
    pub const DEFAULT_POOL_CAPACITY: usize = 8;
}
impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            pool_capacity: Self::DEFAULT_POOL_CAPACITY,
            rules: RuleKind::DEFAULT_ORDER.to_vec(),
        }
    }
}
