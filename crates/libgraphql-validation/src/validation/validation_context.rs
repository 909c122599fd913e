use crate::ast;
use crate::document::Definition;
use crate::document::Document;
use crate::loc;
use crate::schema::Schema;
use crate::validation::ContextState;
use crate::validation::ValidationError;
use crate::validation::VisitState;

/// Per-run state shared by every rule while validating one document.
///
/// The schema and document are borrowed read-only. Everything mutable
/// (errors, the fragment index, rule scratch space) lives in a pooled
/// [`ContextState`].
#[derive(Debug)]
pub struct ValidationContext<'a> {
    document: &'a Document,
    schema: &'a Schema,
    state: &'a mut ContextState,
}
impl<'a> ValidationContext<'a> {
    /// Bind `schema` and `document` to a (clean) state and index the
    /// document's fragments by name.
    ///
    /// When multiple fragments share a name the last one wins.
    pub fn new(
        schema: &'a Schema,
        document: &'a Document,
        state: &'a mut ContextState,
    ) -> Self {
        state.fragment_index.clear();
        for (idx, def) in document.definitions().iter().enumerate() {
            if let Definition::Fragment(frag) = def {
                state.fragment_index.insert(frag.name.to_string(), idx);
            }
        }
        Self {
            document,
            schema,
            state,
        }
    }

    pub fn document(&self) -> &'a Document {
        self.document
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.state.errors
    }

    /// Look up the fragment definition a spread of `name` resolves to.
    pub fn fragment(&self, name: &str) -> Option<&'a ast::query::FragmentDefinition> {
        let document = self.document;
        self.state.fragment_index
            .get(name)
            .and_then(|idx| document.definitions().get(*idx))
            .and_then(Definition::as_fragment)
    }

    pub fn position(&self, pos: ast::Pos) -> loc::FilePosition {
        self.document.position(pos)
    }

    pub fn report(&mut self, error: ValidationError) {
        self.state.errors.push(error);
    }

    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    pub(crate) fn clear_scratch(&mut self) {
        self.state.clear_scratch();
    }

    pub(crate) fn take_errors(&mut self) -> Vec<ValidationError> {
        std::mem::take(&mut self.state.errors)
    }

    // Rule scratch space

    /// Records `name` in the shared name set, returning `false` if it was
    /// already present.
    pub(crate) fn insert_name(&mut self, name: &str) -> bool {
        if self.state.names.contains(name) {
            false
        } else {
            self.state.names.insert(name.to_string())
        }
    }

    pub(crate) fn clear_names(&mut self) {
        self.state.names.clear();
    }

    pub(crate) fn mark_visited(&mut self, fragment_name: &str) -> bool {
        self.state.visited_fragments.insert(fragment_name.to_string())
    }

    pub(crate) fn is_visited(&self, fragment_name: &str) -> bool {
        self.state.visited_fragments.contains(fragment_name)
    }

    pub(crate) fn clear_visited(&mut self) {
        self.state.visited_fragments.clear();
    }

    pub(crate) fn visit_state(&self, fragment_name: &str) -> VisitState {
        self.state.visit_states
            .get(fragment_name)
            .copied()
            .unwrap_or_default()
    }

    pub(crate) fn set_visit_state(&mut self, fragment_name: &str, state: VisitState) {
        self.state.visit_states.insert(fragment_name.to_string(), state);
    }

    pub(crate) fn spread_path(&self) -> &[String] {
        &self.state.spread_path
    }

    pub(crate) fn push_spread(&mut self, fragment_name: &str) {
        self.state.spread_path.push(fragment_name.to_string());
    }

    pub(crate) fn pop_spread(&mut self) {
        self.state.spread_path.pop();
    }
}
