use crate::loc;
use crate::types::DirectiveLocation;
use crate::types::TypeAnnotation;
use crate::validation::RuleKind;
use thiserror::Error;

/// Broad classification of a [`ValidationError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum ErrorCategory {
    Directive,
    Field,
    Fragment,
    Structural,
    Variable,
}

/// A single static-semantics violation found in a document.
///
/// Every variant carries the source locations of the nodes implicated in
/// the violation (see [`ValidationError::locations`]).
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error(
        "The specified directive `@{directive_name}` is not supported by the \
        current schema."
    )]
    DirectiveNotSupported {
        directive_name: String,
        locations: Vec<loc::FilePosition>,
    },

    #[error(
        "Only one of each directive is allowed per location \
        (`@{directive_name}` is not repeatable)."
    )]
    DirectiveNotUniqueInLocation {
        directive_name: String,
        locations: Vec<loc::FilePosition>,
    },

    #[error(
        "The specified directive `@{directive_name}` is not valid in location \
        {location}."
    )]
    DirectiveNotValidInLocation {
        directive_name: String,
        location: DirectiveLocation,
        locations: Vec<loc::FilePosition>,
    },

    #[error("The field `{field_name}` does not exist on the type `{type_name}`.")]
    FieldDoesNotExist {
        field_name: String,
        locations: Vec<loc::FilePosition>,
        type_name: String,
    },

    #[error(
        "A union type cannot declare a field directly. Use inline fragments \
        or fragments instead."
    )]
    FieldOnUnion {
        field_name: String,
        locations: Vec<loc::FilePosition>,
        type_name: String,
    },

    #[error(
        "The graph of fragment spreads must not form any cycles including \
        spreading itself. Otherwise an operation could infinitely spread or \
        infinitely execute on cycles in the underlying data. (path: {})",
        .spread_path.join(" -> "),
    )]
    FragmentCycle {
        fragment_name: String,
        locations: Vec<loc::FilePosition>,
        spread_path: Vec<String>,
    },

    #[error("There are multiple fragments with the name `{fragment_name}`.")]
    FragmentNameNotUnique {
        fragment_name: String,
        locations: Vec<loc::FilePosition>,
    },

    #[error("Fragments can only be declared on unions, interfaces, and objects.")]
    FragmentNotOnCompositeType {
        locations: Vec<loc::FilePosition>,
        type_name: String,
    },

    #[error(
        "The specified fragment `{fragment_name}` is not used within the \
        current document."
    )]
    FragmentNotUsed {
        fragment_name: String,
        locations: Vec<loc::FilePosition>,
    },

    #[error("The parent type does not match the type condition on the fragment.")]
    FragmentSpreadNotPossible {
        fragment_name: Option<String>,
        locations: Vec<loc::FilePosition>,
        parent_type_name: String,
        type_condition: String,
    },

    #[error("The specified fragment `{fragment_name}` does not exist.")]
    FragmentSpreadTargetUndefined {
        fragment_name: String,
        locations: Vec<loc::FilePosition>,
    },

    #[error("Unknown type `{type_name}`.")]
    FragmentTypeConditionUnknown {
        locations: Vec<loc::FilePosition>,
        type_name: String,
    },

    #[error("A document containing TypeSystemDefinition is invalid for execution.")]
    TypeSystemDefinitionNotExecutable {
        locations: Vec<loc::FilePosition>,
    },

    #[error(
        "A document containing operations that define more than one variable \
        with the same name is invalid for execution."
    )]
    VariableNameNotUnique {
        locations: Vec<loc::FilePosition>,
        operation_name: Option<String>,
        variable_name: String,
    },

    #[error(
        "The variable `${variable_name}` is not declared by operation `{}`.",
        display_operation_name(.operation_name.as_deref()),
    )]
    VariableNotDeclared {
        locations: Vec<loc::FilePosition>,
        operation_name: Option<String>,
        variable_name: String,
    },

    #[error("The type of variable `${variable_name}` is not an input type.")]
    VariableNotInputType {
        locations: Vec<loc::FilePosition>,
        type_name: String,
        variable_name: String,
    },

    #[error(
        "The variable `${variable_name}` is not used by operation `{}`.",
        display_operation_name(.operation_name.as_deref()),
    )]
    VariableNotUsed {
        locations: Vec<loc::FilePosition>,
        operation_name: Option<String>,
        variable_name: String,
    },

    #[error(
        "The variable `${variable_name}` of type `{variable_type}` is not \
        compatible with the type `{location_type}` of the current location."
    )]
    VariableUsageNotAllowed {
        location_type: TypeAnnotation,
        locations: Vec<loc::FilePosition>,
        variable_name: String,
        variable_type: TypeAnnotation,
    },
}
impl ValidationError {
    pub fn category(&self) -> ErrorCategory {
        match self.rule() {
            RuleKind::AllVariableUsagesAreAllowed
                | RuleKind::AllVariablesUsed
                | RuleKind::VariableUniqueAndInputType =>
                ErrorCategory::Variable,
            RuleKind::DirectivesAreValid => ErrorCategory::Directive,
            RuleKind::ExecutableDefinitions => ErrorCategory::Structural,
            RuleKind::FieldMustBeDefined => ErrorCategory::Field,
            RuleKind::FragmentsAreValid => ErrorCategory::Fragment,
        }
    }

    /// Source locations of the nodes implicated in this error.
    pub fn locations(&self) -> &[loc::FilePosition] {
        match self {
            Self::DirectiveNotSupported { locations, .. }
                | Self::DirectiveNotUniqueInLocation { locations, .. }
                | Self::DirectiveNotValidInLocation { locations, .. }
                | Self::FieldDoesNotExist { locations, .. }
                | Self::FieldOnUnion { locations, .. }
                | Self::FragmentCycle { locations, .. }
                | Self::FragmentNameNotUnique { locations, .. }
                | Self::FragmentNotOnCompositeType { locations, .. }
                | Self::FragmentNotUsed { locations, .. }
                | Self::FragmentSpreadNotPossible { locations, .. }
                | Self::FragmentSpreadTargetUndefined { locations, .. }
                | Self::FragmentTypeConditionUnknown { locations, .. }
                | Self::TypeSystemDefinitionNotExecutable { locations }
                | Self::VariableNameNotUnique { locations, .. }
                | Self::VariableNotDeclared { locations, .. }
                | Self::VariableNotInputType { locations, .. }
                | Self::VariableNotUsed { locations, .. }
                | Self::VariableUsageNotAllowed { locations, .. } =>
                locations,
        }
    }

    /// The rule that reports this kind of error.
    pub fn rule(&self) -> RuleKind {
        match self {
            Self::DirectiveNotSupported { .. }
                | Self::DirectiveNotUniqueInLocation { .. }
                | Self::DirectiveNotValidInLocation { .. } =>
                RuleKind::DirectivesAreValid,

            Self::FieldDoesNotExist { .. }
                | Self::FieldOnUnion { .. } =>
                RuleKind::FieldMustBeDefined,

            Self::FragmentCycle { .. }
                | Self::FragmentNameNotUnique { .. }
                | Self::FragmentNotOnCompositeType { .. }
                | Self::FragmentNotUsed { .. }
                | Self::FragmentSpreadNotPossible { .. }
                | Self::FragmentSpreadTargetUndefined { .. }
                | Self::FragmentTypeConditionUnknown { .. } =>
                RuleKind::FragmentsAreValid,

            Self::TypeSystemDefinitionNotExecutable { .. } =>
                RuleKind::ExecutableDefinitions,

            Self::VariableNameNotUnique { .. }
                | Self::VariableNotInputType { .. } =>
                RuleKind::VariableUniqueAndInputType,

            Self::VariableNotDeclared { .. }
                | Self::VariableNotUsed { .. } =>
                RuleKind::AllVariablesUsed,

            Self::VariableUsageNotAllowed { .. } =>
                RuleKind::AllVariableUsagesAreAllowed,
        }
    }
}

fn display_operation_name(name: Option<&str>) -> &str {
    name.unwrap_or("<anonymous>")
}
