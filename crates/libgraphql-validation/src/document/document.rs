use crate::ast;
use crate::document::Definition;
use crate::document::DocumentBuilder;
use crate::document::Operation;
use crate::loc;
use std::path::Path;
use std::path::PathBuf;

/// An immutable, parsed GraphQL document: an ordered list of
/// [`Definition`]s plus the file it was loaded from (if any).
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub(crate) definitions: Vec<Definition>,
    pub(crate) file_path: Option<PathBuf>,
}
impl Document {
    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::new()
    }

    pub fn definitions(&self) -> &[Definition] {
        &self.definitions
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Every fragment definition in document order (duplicates included).
    pub fn fragments(&self) -> impl Iterator<Item = &ast::query::FragmentDefinition> {
        self.definitions.iter().filter_map(Definition::as_fragment)
    }

    /// Every operation definition in document order.
    pub fn operations(&self) -> impl Iterator<Item = Operation<'_>> {
        self.definitions.iter().filter_map(Definition::as_operation)
    }

    /// Resolve a syntax-tree position within this document to a
    /// [`loc::FilePosition`].
    pub fn position(&self, pos: ast::Pos) -> loc::FilePosition {
        loc::FilePosition::from_pos(self.file_path.as_deref(), pos)
    }
}
