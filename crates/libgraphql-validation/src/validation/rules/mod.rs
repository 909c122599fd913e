//! The built-in validation rules.

mod all_variable_usages_are_allowed;
mod all_variables_used;
mod directives_are_valid;
mod executable_definitions;
mod field_must_be_defined;
mod fragments_are_valid;
mod variable_unique_and_input_type;

pub use all_variable_usages_are_allowed::AllVariableUsagesAreAllowedRule;
pub use all_variable_usages_are_allowed::is_variable_usage_allowed;
pub use all_variables_used::AllVariablesUsedRule;
pub use directives_are_valid::DirectivesAreValidRule;
pub use executable_definitions::ExecutableDefinitionsRule;
pub use field_must_be_defined::FieldMustBeDefinedRule;
pub use fragments_are_valid::FragmentsAreValidRule;
pub use variable_unique_and_input_type::VariableUniqueAndInputTypeRule;
