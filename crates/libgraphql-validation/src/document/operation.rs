use crate::ast;
use crate::document::OperationKind;

/// A read-only view over an [`ast::query::OperationDefinition`] that papers
/// over the differences between its four syntactic forms.
///
/// The `{ ... }` shorthand form is an anonymous query with no variables and
/// no directives.
#[derive(Clone, Copy, Debug)]
pub struct Operation<'a> {
    def: &'a ast::query::OperationDefinition,
}
impl<'a> Operation<'a> {
    pub fn new(def: &'a ast::query::OperationDefinition) -> Self {
        Self { def }
    }

    pub fn ast(&self) -> &'a ast::query::OperationDefinition {
        self.def
    }

    pub fn directives(&self) -> &'a [ast::query::Directive] {
        use ast::query::OperationDefinition as Op;
        match self.def {
            Op::Mutation(m) => &m.directives,
            Op::Query(q) => &q.directives,
            Op::SelectionSet(_) => &[],
            Op::Subscription(s) => &s.directives,
        }
    }

    pub fn kind(&self) -> OperationKind {
        use ast::query::OperationDefinition as Op;
        match self.def {
            Op::Mutation(_) => OperationKind::Mutation,
            Op::Query(_) | Op::SelectionSet(_) => OperationKind::Query,
            Op::Subscription(_) => OperationKind::Subscription,
        }
    }

    pub fn name(&self) -> Option<&'a str> {
        use ast::query::OperationDefinition as Op;
        match self.def {
            Op::Mutation(m) => m.name.as_deref(),
            Op::Query(q) => q.name.as_deref(),
            Op::SelectionSet(_) => None,
            Op::Subscription(s) => s.name.as_deref(),
        }
    }

    pub fn position(&self) -> ast::Pos {
        use ast::query::OperationDefinition as Op;
        match self.def {
            Op::Mutation(m) => m.position,
            Op::Query(q) => q.position,
            Op::SelectionSet(ss) => ss.span.0,
            Op::Subscription(s) => s.position,
        }
    }

    pub fn selection_set(&self) -> &'a ast::query::SelectionSet {
        use ast::query::OperationDefinition as Op;
        match self.def {
            Op::Mutation(m) => &m.selection_set,
            Op::Query(q) => &q.selection_set,
            Op::SelectionSet(ss) => ss,
            Op::Subscription(s) => &s.selection_set,
        }
    }

    pub fn variable_definitions(&self) -> &'a [ast::query::VariableDefinition] {
        use ast::query::OperationDefinition as Op;
        match self.def {
            Op::Mutation(m) => &m.variable_definitions,
            Op::Query(q) => &q.variable_definitions,
            Op::SelectionSet(_) => &[],
            Op::Subscription(s) => &s.variable_definitions,
        }
    }
}
