//! Descent helpers shared by the validation rules.
//!
//! None of these follow named fragment spreads on their own; rules that need
//! an operation's transitive scope combine them with
//! [`mark_reachable_fragments`].

use crate::ast;
use crate::document::Definition;
use crate::document::Document;
use crate::document::Operation;
use crate::document::OperationKind;
use crate::schema::Schema;
use crate::types::DirectiveLocation;
use crate::types::GraphQLType;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use crate::validation::ValidationContext;

/// An input position a value can flow into (a field or directive argument,
/// or an input object field), as declared by the schema.
#[derive(Clone, Copy, Debug)]
pub(crate) struct InputLocation<'a> {
    pub(crate) has_default: bool,
    pub(crate) type_annotation: &'a TypeAnnotation,
}
impl<'a> InputLocation<'a> {
    pub(crate) fn from_parameter(param: &'a Parameter) -> Self {
        Self {
            has_default: param.default_value().is_some(),
            type_annotation: param.type_annotation(),
        }
    }
}

/// A single `name: value` argument in a field selection or directive.
///
/// `location` is `None` when the schema does not define the argument (or
/// the field/directive it belongs to).
#[derive(Clone, Copy, Debug)]
pub(crate) struct ArgumentUsage<'a> {
    pub(crate) location: Option<InputLocation<'a>>,
    pub(crate) position: ast::Pos,
    pub(crate) value: &'a ast::query::Value,
}

pub(crate) fn operation_location(kind: OperationKind) -> DirectiveLocation {
    match kind {
        OperationKind::Mutation => DirectiveLocation::Mutation,
        OperationKind::Query => DirectiveLocation::Query,
        OperationKind::Subscription => DirectiveLocation::Subscription,
    }
}

/// The type a fragment definition's selection set is scoped to.
pub(crate) fn fragment_scope<'a>(
    schema: &'a Schema,
    fragment: &ast::query::FragmentDefinition,
) -> Option<&'a GraphQLType> {
    let ast::query::TypeCondition::On(type_name) = &fragment.type_condition;
    schema.lookup_type(type_name)
}

/// The type a field's sub-selection is scoped to, given the scope the field
/// itself was selected in.
pub(crate) fn field_scope<'a>(
    schema: &'a Schema,
    scope: Option<&'a GraphQLType>,
    field: &ast::query::Field,
) -> Option<&'a GraphQLType> {
    let field_def = scope?.field(field.name.as_str())?;
    schema.lookup_type(field_def.type_annotation().innermost_type_name())
}

/// Walk every selection in `selection_set` depth-first, calling `f` with
/// each selection and the type of the selection set it appears in.
///
/// Once a scope can't be resolved (unknown field, unknown type condition)
/// everything beneath it is walked with a `None` scope.
pub(crate) fn walk_selections<'a, F>(
    schema: &'a Schema,
    selection_set: &'a ast::query::SelectionSet,
    scope: Option<&'a GraphQLType>,
    f: &mut F,
) where
    F: FnMut(&'a ast::query::Selection, Option<&'a GraphQLType>),
{
    for selection in &selection_set.items {
        f(selection, scope);
        match selection {
            ast::query::Selection::Field(field) => walk_selections(
                schema,
                &field.selection_set,
                field_scope(schema, scope, field),
                f,
            ),

            ast::query::Selection::FragmentSpread(_) => (),

            ast::query::Selection::InlineFragment(inline_frag) => {
                let inline_scope = match &inline_frag.type_condition {
                    Some(ast::query::TypeCondition::On(type_name)) =>
                        schema.lookup_type(type_name),
                    None => scope,
                };
                walk_selections(schema, &inline_frag.selection_set, inline_scope, f);
            },
        }
    }
}

/// Call `f` with every directive list in `document` and the location that
/// list is attached to. Type-system definitions are skipped.
pub(crate) fn for_each_directive_list<'a, F>(document: &'a Document, f: &mut F)
where
    F: FnMut(DirectiveLocation, &'a [ast::query::Directive]),
{
    for def in document.definitions() {
        match def {
            Definition::Fragment(frag) => {
                f(DirectiveLocation::FragmentDefinition, &frag.directives);
                selection_directive_lists(&frag.selection_set, f);
            },

            Definition::Operation(op_def) => {
                let op = Operation::new(op_def);
                f(operation_location(op.kind()), op.directives());
                selection_directive_lists(op.selection_set(), f);
            },

            Definition::TypeSystem(_) => (),
        }
    }
}

fn selection_directive_lists<'a, F>(selection_set: &'a ast::query::SelectionSet, f: &mut F)
where
    F: FnMut(DirectiveLocation, &'a [ast::query::Directive]),
{
    for selection in &selection_set.items {
        match selection {
            ast::query::Selection::Field(field) => {
                f(DirectiveLocation::Field, &field.directives);
                selection_directive_lists(&field.selection_set, f);
            },

            ast::query::Selection::FragmentSpread(spread) =>
                f(DirectiveLocation::FragmentSpread, &spread.directives),

            ast::query::Selection::InlineFragment(inline_frag) => {
                f(DirectiveLocation::InlineFragment, &inline_frag.directives);
                selection_directive_lists(&inline_frag.selection_set, f);
            },
        }
    }
}

/// Call `f` with every argument of every directive in `directives`.
pub(crate) fn directive_arguments<'a, F>(
    schema: &'a Schema,
    directives: &'a [ast::query::Directive],
    f: &mut F,
) where
    F: FnMut(ArgumentUsage<'a>),
{
    for directive in directives {
        let directive_def = schema.lookup_directive(directive.name.as_str());
        for (arg_name, value) in &directive.arguments {
            let param = directive_def
                .and_then(|def| def.parameters().get(arg_name.as_str()));
            f(ArgumentUsage {
                location: param.map(InputLocation::from_parameter),
                position: directive.position,
                value,
            });
        }
    }
}

/// Call `f` with every field and directive argument within `selection_set`
/// (not following named fragment spreads).
pub(crate) fn selection_set_arguments<'a, F>(
    schema: &'a Schema,
    selection_set: &'a ast::query::SelectionSet,
    scope: Option<&'a GraphQLType>,
    f: &mut F,
) where
    F: FnMut(ArgumentUsage<'a>),
{
    walk_selections(schema, selection_set, scope, &mut |selection, scope| match selection {
        ast::query::Selection::Field(field) => {
            let field_def = scope.and_then(|t| t.field(field.name.as_str()));
            for (arg_name, value) in &field.arguments {
                let param = field_def.and_then(|def| def.parameter(arg_name.as_str()));
                f(ArgumentUsage {
                    location: param.map(InputLocation::from_parameter),
                    position: field.position,
                    value,
                });
            }
            directive_arguments(schema, &field.directives, &mut *f);
        },

        ast::query::Selection::FragmentSpread(spread) =>
            directive_arguments(schema, &spread.directives, &mut *f),

        ast::query::Selection::InlineFragment(inline_frag) =>
            directive_arguments(schema, &inline_frag.directives, &mut *f),
    });
}

/// Call `f` with every argument in the transitive scope of `op`: its own
/// directives and selections plus those of every fragment reachable from it.
pub(crate) fn operation_arguments<'a: 's, 's, F>(
    ctx: &mut ValidationContext<'a>,
    op: Operation<'s>,
    f: &mut F,
) where
    F: FnMut(ArgumentUsage<'s>),
{
    let schema = ctx.schema();
    directive_arguments(schema, op.directives(), f);
    selection_set_arguments(
        schema,
        op.selection_set(),
        schema.root_operation_type(op.kind()),
        f,
    );

    ctx.clear_visited();
    for frag in mark_reachable_fragments(ctx, op.selection_set()) {
        directive_arguments(schema, &frag.directives, f);
        selection_set_arguments(
            schema,
            &frag.selection_set,
            fragment_scope(schema, frag),
            f,
        );
    }
}

/// Call `f` with every variable referenced by `value`, descending into list
/// and input object values. The input location each variable flows into is
/// derived from `location` where the schema allows it.
pub(crate) fn for_each_variable<'a, F>(
    schema: &'a Schema,
    value: &'a ast::query::Value,
    location: Option<InputLocation<'a>>,
    f: &mut F,
) where
    F: FnMut(&'a str, Option<InputLocation<'a>>),
{
    match value {
        ast::query::Value::Variable(var_name) => f(var_name.as_str(), location),

        ast::query::Value::List(items) => {
            let item_location = location
                .and_then(|loc| loc.type_annotation.as_list_annotation())
                .map(|list_annot| InputLocation {
                    has_default: false,
                    type_annotation: list_annot.inner_type_annotation(),
                });
            for item in items {
                for_each_variable(schema, item, item_location, f);
            }
        },

        ast::query::Value::Object(fields) => {
            let input_obj_type = location
                .and_then(|loc| schema.lookup_type(loc.type_annotation.innermost_type_name()))
                .and_then(GraphQLType::as_input_object);
            for (field_name, field_value) in fields {
                let field_location = input_obj_type
                    .and_then(|t| t.fields().get(field_name.as_str()))
                    .map(InputLocation::from_parameter);
                for_each_variable(schema, field_value, field_location, f);
            }
        },

        ast::query::Value::Boolean(_)
            | ast::query::Value::Enum(_)
            | ast::query::Value::Float(_)
            | ast::query::Value::Int(_)
            | ast::query::Value::Null
            | ast::query::Value::String(_) => (),
    }
}

/// Mark every fragment transitively spread from `selection_set` as visited
/// in `ctx`, returning the definitions of those that were not already
/// marked (in breadth-first discovery order).
///
/// Spreads of undefined fragments are marked but produce no definition.
/// Each fragment is expanded at most once, so cyclic spreads terminate.
pub(crate) fn mark_reachable_fragments<'a: 's, 's>(
    ctx: &mut ValidationContext<'a>,
    selection_set: &'s ast::query::SelectionSet,
) -> Vec<&'a ast::query::FragmentDefinition> {
    let mut spreads: Vec<&'s ast::query::FragmentSpread> = vec![];
    collect_spreads(selection_set, &mut spreads);

    let mut reached = vec![];
    let mut next = 0;
    while let Some(spread) = spreads.get(next).copied() {
        next += 1;
        if !ctx.mark_visited(spread.fragment_name.as_str()) {
            continue;
        }
        if let Some(frag) = ctx.fragment(spread.fragment_name.as_str()) {
            collect_spreads(&frag.selection_set, &mut spreads);
            reached.push(frag);
        }
    }
    reached
}

/// Every fragment spread within `selection_set`, in document order (not
/// following the spreads themselves).
pub(crate) fn collect_spreads<'a>(
    selection_set: &'a ast::query::SelectionSet,
    spreads: &mut Vec<&'a ast::query::FragmentSpread>,
) {
    for selection in &selection_set.items {
        match selection {
            ast::query::Selection::Field(field) =>
                collect_spreads(&field.selection_set, spreads),
            ast::query::Selection::FragmentSpread(spread) =>
                spreads.push(spread),
            ast::query::Selection::InlineFragment(inline_frag) =>
                collect_spreads(&inline_frag.selection_set, spreads),
        }
    }
}
