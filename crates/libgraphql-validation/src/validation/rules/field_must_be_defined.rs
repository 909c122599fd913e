use crate::ast;
use crate::document::Document;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use crate::validation::RuleKind;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use crate::validation::ValidationRule;
use crate::validation::traversal;

/// Meta-field available on every composite type.
const TYPENAME_FIELD: &str = "__typename";

/// Introspection entry points, available only on the query root type.
const QUERY_ROOT_META_FIELDS: [&str; 2] = ["__schema", "__type"];

/// Every field selected within a selection set must be defined on the type
/// that selection set is scoped to.
///
/// Unions define no fields of their own, so anything other than
/// `__typename` selected directly on a union is an error. Sub-selections of
/// an undefined field are not checked.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Field-Selections)
#[derive(Clone, Copy, Debug, Default)]
pub struct FieldMustBeDefinedRule;
impl ValidationRule for FieldMustBeDefinedRule {
    fn validate(&self, ctx: &mut ValidationContext<'_>, document: &Document) {
        let schema = ctx.schema();
        let query_type_name = schema.query_type().map(ObjectType::name);

        let mut check_selection = |selection: &ast::query::Selection, scope: Option<&GraphQLType>| {
            let ast::query::Selection::Field(field) = selection else {
                return;
            };
            let Some(scope) = scope.filter(|t| t.is_composite_type()) else {
                return;
            };

            let field_name = field.name.as_str();
            if field_name == TYPENAME_FIELD
                || (QUERY_ROOT_META_FIELDS.contains(&field_name)
                    && query_type_name == Some(scope.name())) {
                return;
            }

            if let GraphQLType::Union(_) = scope {
                ctx.report(ValidationError::FieldOnUnion {
                    field_name: field_name.to_string(),
                    locations: vec![document.position(field.position)],
                    type_name: scope.name().to_string(),
                });
            } else if scope.field(field_name).is_none() {
                ctx.report(ValidationError::FieldDoesNotExist {
                    field_name: field_name.to_string(),
                    locations: vec![document.position(field.position)],
                    type_name: scope.name().to_string(),
                });
            }
        };

        for op in document.operations() {
            traversal::walk_selections(
                schema,
                op.selection_set(),
                schema.root_operation_type(op.kind()),
                &mut check_selection,
            );
        }

        for frag in document.fragments() {
            traversal::walk_selections(
                schema,
                &frag.selection_set,
                traversal::fragment_scope(schema, frag),
                &mut check_selection,
            );
        }
    }

    fn kind(&self) -> RuleKind {
        RuleKind::FieldMustBeDefined
    }
}
