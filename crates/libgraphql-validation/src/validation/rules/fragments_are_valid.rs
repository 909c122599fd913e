use crate::ast;
use crate::document::Document;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::validation::RuleKind;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use crate::validation::ValidationRule;
use crate::validation::VisitState;
use crate::validation::traversal;

/// Checks every fragment-related requirement of an executable document:
///
///   * fragment names are unique,
///   * every fragment is (transitively) spread by at least one operation,
///   * type conditions name existing composite types,
///   * spreads target defined fragments,
///   * a fragment can only be spread where its type condition could apply,
///   * fragment spreads never form a cycle.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Validation.Fragments)
#[derive(Clone, Copy, Debug, Default)]
pub struct FragmentsAreValidRule;
impl FragmentsAreValidRule {
    fn check_name_uniqueness(ctx: &mut ValidationContext<'_>, document: &Document) {
        ctx.clear_names();
        for frag in document.fragments() {
            if !ctx.insert_name(frag.name.as_str()) {
                ctx.report(ValidationError::FragmentNameNotUnique {
                    fragment_name: frag.name.to_string(),
                    locations: vec![document.position(frag.position)],
                });
            }
        }
    }

    fn check_selections(ctx: &mut ValidationContext<'_>, document: &Document) {
        let schema = ctx.schema();

        for frag in document.fragments() {
            let ast::query::TypeCondition::On(type_name) = &frag.type_condition;
            check_type_condition(ctx, document, schema, type_name, frag.position);
        }

        let mut check_selection = |selection: &ast::query::Selection, scope: Option<&GraphQLType>| {
            match selection {
                ast::query::Selection::Field(_) => (),

                ast::query::Selection::FragmentSpread(spread) => {
                    let Some(target) = ctx.fragment(spread.fragment_name.as_str()) else {
                        ctx.report(ValidationError::FragmentSpreadTargetUndefined {
                            fragment_name: spread.fragment_name.to_string(),
                            locations: vec![document.position(spread.position)],
                        });
                        return;
                    };
                    check_spread_possible(
                        ctx,
                        document,
                        schema,
                        Some(spread.fragment_name.as_str()),
                        scope,
                        traversal::fragment_scope(schema, target),
                        spread.position,
                    );
                },

                ast::query::Selection::InlineFragment(inline_frag) => {
                    let Some(ast::query::TypeCondition::On(type_name)) = &inline_frag.type_condition else {
                        return;
                    };
                    let condition = check_type_condition(
                        ctx,
                        document,
                        schema,
                        type_name,
                        inline_frag.position,
                    );
                    check_spread_possible(
                        ctx,
                        document,
                        schema,
                        None,
                        scope,
                        condition,
                        inline_frag.position,
                    );
                },
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

    fn check_usage(ctx: &mut ValidationContext<'_>, document: &Document) {
        ctx.clear_visited();
        for op in document.operations() {
            traversal::mark_reachable_fragments(ctx, op.selection_set());
        }

        for frag in document.fragments() {
            if !ctx.is_visited(frag.name.as_str()) {
                ctx.report(ValidationError::FragmentNotUsed {
                    fragment_name: frag.name.to_string(),
                    locations: vec![document.position(frag.position)],
                });
            }
        }
    }

    fn check_cycles(ctx: &mut ValidationContext<'_>, document: &Document) {
        for frag in document.fragments() {
            if ctx.visit_state(frag.name.as_str()) != VisitState::Unvisited {
                continue;
            }
            if let Some(indexed_frag) = ctx.fragment(frag.name.as_str()) {
                detect_cycles_from(ctx, document, indexed_frag);
            }
        }
    }
}
impl ValidationRule for FragmentsAreValidRule {
    fn validate(&self, ctx: &mut ValidationContext<'_>, document: &Document) {
        Self::check_name_uniqueness(ctx, document);
        Self::check_selections(ctx, document);
        Self::check_usage(ctx, document);
        Self::check_cycles(ctx, document);
    }

    fn kind(&self) -> RuleKind {
        RuleKind::FragmentsAreValid
    }
}

/// Resolve a type condition, reporting it if it names an unknown or
/// non-composite type.
fn check_type_condition<'a>(
    ctx: &mut ValidationContext<'_>,
    document: &Document,
    schema: &'a Schema,
    type_name: &str,
    position: ast::Pos,
) -> Option<&'a GraphQLType> {
    match schema.lookup_type(type_name) {
        None => {
            ctx.report(ValidationError::FragmentTypeConditionUnknown {
                locations: vec![document.position(position)],
                type_name: type_name.to_string(),
            });
            None
        },

        Some(type_) if !type_.is_composite_type() => {
            ctx.report(ValidationError::FragmentNotOnCompositeType {
                locations: vec![document.position(position)],
                type_name: type_name.to_string(),
            });
            None
        },

        Some(type_) => Some(type_),
    }
}

fn check_spread_possible(
    ctx: &mut ValidationContext<'_>,
    document: &Document,
    schema: &Schema,
    fragment_name: Option<&str>,
    parent_type: Option<&GraphQLType>,
    condition_type: Option<&GraphQLType>,
    position: ast::Pos,
) {
    let (Some(parent_type), Some(condition_type)) = (parent_type, condition_type) else {
        return;
    };
    if !parent_type.is_composite_type() || !condition_type.is_composite_type() {
        return;
    }

    if !schema.types_overlap(parent_type, condition_type) {
        ctx.report(ValidationError::FragmentSpreadNotPossible {
            fragment_name: fragment_name.map(str::to_string),
            locations: vec![document.position(position)],
            parent_type_name: parent_type.name().to_string(),
            type_condition: condition_type.name().to_string(),
        });
    }
}

/// Depth-first walk of the spread graph starting at `frag`. A spread of a
/// fragment that is still in progress closes a cycle: it is reported once,
/// with the spread path that formed it, and not followed.
///
/// The walk keeps its own frame stack so that arbitrarily long spread chains
/// cannot exhaust the thread's stack.
fn detect_cycles_from<'a>(
    ctx: &mut ValidationContext<'a>,
    document: &Document,
    frag: &'a ast::query::FragmentDefinition,
) {
    let mut frames = vec![enter_fragment(ctx, frag)];

    while let Some(frame) = frames.last_mut() {
        let Some(spread) = frame.spreads.get(frame.next).copied() else {
            let fragment = frame.fragment;
            frames.pop();
            ctx.pop_spread();
            ctx.set_visit_state(fragment.name.as_str(), VisitState::Done);
            continue;
        };
        frame.next += 1;

        let target_name = spread.fragment_name.as_str();
        match ctx.visit_state(target_name) {
            VisitState::Done => (),

            VisitState::InProgress => {
                let path = ctx.spread_path();
                let cycle_start = path
                    .iter()
                    .position(|name| name == target_name)
                    .unwrap_or(0);
                let mut spread_path = path[cycle_start..].to_vec();
                spread_path.push(target_name.to_string());
                ctx.report(ValidationError::FragmentCycle {
                    fragment_name: target_name.to_string(),
                    locations: vec![document.position(spread.position)],
                    spread_path,
                });
            },

            VisitState::Unvisited => {
                if let Some(target) = ctx.fragment(target_name) {
                    frames.push(enter_fragment(ctx, target));
                }
            },
        }
    }
}

struct CycleFrame<'a> {
    fragment: &'a ast::query::FragmentDefinition,
    next: usize,
    spreads: Vec<&'a ast::query::FragmentSpread>,
}

fn enter_fragment<'a>(
    ctx: &mut ValidationContext<'a>,
    fragment: &'a ast::query::FragmentDefinition,
) -> CycleFrame<'a> {
    ctx.set_visit_state(fragment.name.as_str(), VisitState::InProgress);
    ctx.push_spread(fragment.name.as_str());

    let mut spreads = vec![];
    traversal::collect_spreads(&fragment.selection_set, &mut spreads);
    CycleFrame {
        fragment,
        next: 0,
        spreads,
    }
}
