use crate::document::Document;
use crate::types::TypeAnnotation;
use crate::validation::RuleKind;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use crate::validation::ValidationRule;

/// Variable names must be unique within an operation, and every variable
/// must be declared with an input type (scalar, enum or input object,
/// optionally wrapped in lists and non-null).
///
/// A variable whose type the schema does not define is reported as not
/// being an input type.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Validation.Variables)
#[derive(Clone, Copy, Debug, Default)]
pub struct VariableUniqueAndInputTypeRule;
impl ValidationRule for VariableUniqueAndInputTypeRule {
    fn validate(&self, ctx: &mut ValidationContext<'_>, document: &Document) {
        let schema = ctx.schema();

        for op in document.operations() {
            ctx.clear_names();
            for var_def in op.variable_definitions() {
                let var_name = var_def.name.as_str();
                if !ctx.insert_name(var_name) {
                    ctx.report(ValidationError::VariableNameNotUnique {
                        locations: vec![document.position(var_def.position)],
                        operation_name: op.name().map(str::to_string),
                        variable_name: var_name.to_string(),
                    });
                }

                let var_type = TypeAnnotation::from_ast_type(&var_def.var_type);
                let type_name = var_type.innermost_type_name();
                let is_input_type = schema
                    .lookup_type(type_name)
                    .is_some_and(|t| t.is_input_type());
                if !is_input_type {
                    ctx.report(ValidationError::VariableNotInputType {
                        locations: vec![document.position(var_def.position)],
                        type_name: type_name.to_string(),
                        variable_name: var_name.to_string(),
                    });
                }
            }
        }
    }

    fn kind(&self) -> RuleKind {
        RuleKind::VariableUniqueAndInputType
    }
}
