use crate::ast;
use crate::document::Document;
use crate::validation::RuleKind;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use crate::validation::ValidationRule;
use crate::validation::traversal;
use indexmap::IndexMap;

/// Within each operation's scope (its own selections and directives plus
/// those of every fragment it transitively spreads), every referenced
/// variable must be declared by the operation and every declared variable
/// must be referenced.
///
/// Each offending variable name is reported once per operation.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-All-Variable-Uses-Defined)
#[derive(Clone, Copy, Debug, Default)]
pub struct AllVariablesUsedRule;
impl ValidationRule for AllVariablesUsedRule {
    fn validate(&self, ctx: &mut ValidationContext<'_>, document: &Document) {
        let schema = ctx.schema();

        for op in document.operations() {
            // Variable name -> position of its first use.
            let mut used: IndexMap<&str, ast::Pos> = IndexMap::new();
            traversal::operation_arguments(ctx, op, &mut |usage| {
                traversal::for_each_variable(schema, usage.value, None, &mut |var_name, _| {
                    used.entry(var_name).or_insert(usage.position);
                });
            });

            let var_defs = op.variable_definitions();
            for (var_name, position) in &used {
                if !var_defs.iter().any(|var_def| var_def.name == *var_name) {
                    ctx.report(ValidationError::VariableNotDeclared {
                        locations: vec![
                            document.position(*position),
                            document.position(op.position()),
                        ],
                        operation_name: op.name().map(str::to_string),
                        variable_name: var_name.to_string(),
                    });
                }
            }

            ctx.clear_names();
            for var_def in var_defs {
                let var_name = var_def.name.as_str();
                if !used.contains_key(var_name) && ctx.insert_name(var_name) {
                    ctx.report(ValidationError::VariableNotUsed {
                        locations: vec![document.position(var_def.position)],
                        operation_name: op.name().map(str::to_string),
                        variable_name: var_name.to_string(),
                    });
                }
            }
        }
    }

    fn kind(&self) -> RuleKind {
        RuleKind::AllVariablesUsed
    }
}
