use crate::ast;
use crate::document::Document;
use crate::types::TypeAnnotation;
use crate::validation::RuleKind;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use crate::validation::ValidationRule;
use crate::validation::traversal;
use indexmap::IndexMap;

/// Every variable passed as an argument (directly, or nested within a list
/// or input object value) must have a type compatible with the input
/// location it flows into.
///
/// Undeclared variables and arguments the schema does not define are left
/// to other rules.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-All-Variable-Usages-Are-Allowed)
#[derive(Clone, Copy, Debug, Default)]
pub struct AllVariableUsagesAreAllowedRule;
impl ValidationRule for AllVariableUsagesAreAllowedRule {
    fn validate(&self, ctx: &mut ValidationContext<'_>, document: &Document) {
        let schema = ctx.schema();

        for op in document.operations() {
            let mut var_defs: IndexMap<&str, &ast::query::VariableDefinition> = IndexMap::new();
            for var_def in op.variable_definitions() {
                var_defs.entry(var_def.name.as_str()).or_insert(var_def);
            }

            let mut disallowed = vec![];
            traversal::operation_arguments(ctx, op, &mut |usage| {
                traversal::for_each_variable(schema, usage.value, usage.location, &mut |var_name, location| {
                    let (Some(location), Some(var_def)) = (location, var_defs.get(var_name)) else {
                        return;
                    };
                    let var_type = TypeAnnotation::from_ast_type(&var_def.var_type);
                    let var_has_default = matches!(
                        &var_def.default_value,
                        Some(default_value) if *default_value != ast::query::Value::Null,
                    );
                    if !is_variable_usage_allowed(
                        &var_type,
                        var_has_default,
                        location.type_annotation,
                        location.has_default,
                    ) {
                        disallowed.push(ValidationError::VariableUsageNotAllowed {
                            location_type: location.type_annotation.clone(),
                            locations: vec![document.position(usage.position)],
                            variable_name: var_name.to_string(),
                            variable_type: var_type,
                        });
                    }
                });
            });

            for error in disallowed {
                ctx.report(error);
            }
        }
    }

    fn kind(&self) -> RuleKind {
        RuleKind::AllVariableUsagesAreAllowed
    }
}

/// Whether a variable of type `var_type` may be used where a value of
/// `location_type` is expected.
///
/// A nullable variable may flow into a non-null location only if the
/// variable has a non-null default value or the location itself declares a
/// default.
pub fn is_variable_usage_allowed(
    var_type: &TypeAnnotation,
    var_has_non_null_default: bool,
    location_type: &TypeAnnotation,
    location_has_default: bool,
) -> bool {
    if !location_type.nullable() && var_type.nullable() {
        if !var_has_non_null_default && !location_has_default {
            return false;
        }
        return are_types_compatible(var_type, true, location_type, true);
    }
    are_types_compatible(
        var_type,
        var_type.nullable(),
        location_type,
        location_type.nullable(),
    )
}

// Nullability is passed alongside each annotation so that an outer non-null
// layer can be stripped without rebuilding the annotation.
fn are_types_compatible(
    var_type: &TypeAnnotation,
    var_nullable: bool,
    location_type: &TypeAnnotation,
    location_nullable: bool,
) -> bool {
    if !location_nullable {
        if var_nullable {
            return false;
        }
        return are_types_compatible(var_type, true, location_type, true);
    }

    if !var_nullable {
        return are_types_compatible(var_type, true, location_type, true);
    }

    match (var_type, location_type) {
        (TypeAnnotation::List(var_list), TypeAnnotation::List(location_list)) => {
            let var_inner = var_list.inner_type_annotation();
            let location_inner = location_list.inner_type_annotation();
            are_types_compatible(
                var_inner,
                var_inner.nullable(),
                location_inner,
                location_inner.nullable(),
            )
        },

        (TypeAnnotation::Named(var_named), TypeAnnotation::Named(location_named)) =>
            var_named.graphql_type_name() == location_named.graphql_type_name(),

        (TypeAnnotation::List(_), TypeAnnotation::Named(_))
            | (TypeAnnotation::Named(_), TypeAnnotation::List(_)) => false,
    }
}
