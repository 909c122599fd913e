use crate::ast;
use crate::document::Definition;
use crate::document::Document;
use crate::document::source_split;
use crate::document::source_split::RunKind;
use crate::file_reader;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, DocumentBuildError>;

/// Utility for assembling a [`Document`] from one or more chunks of GraphQL
/// source text.
///
/// Text that is not an executable document but does parse as SDL is loaded
/// as [`Definition::TypeSystem`] definitions, as are the SDL definitions of a
/// source mixing both.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    definitions: Vec<Definition>,
    file_path: Option<PathBuf>,
}
impl DocumentBuilder {
    pub fn build(self) -> Document {
        Document {
            definitions: self.definitions,
            file_path: self.file_path,
        }
    }

    pub fn from_file(file_path: impl AsRef<Path>) -> Result<Self> {
        Self::new().load_file(file_path)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(file_path: Option<PathBuf>, content: &str) -> Result<Self> {
        Self {
            definitions: vec![],
            file_path,
        }.load_str(content)
    }

    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_file(mut self, file_path: impl AsRef<Path>) -> Result<Self> {
        let file_path = file_path.as_ref();
        let content = file_reader::read_content(file_path)
            .map_err(|err| DocumentBuildError::DocumentFileReadError(
                Box::new(err),
            ))?;
        if self.file_path.is_none() {
            self.file_path = Some(file_path.to_path_buf());
        }
        self.load_str(content.as_str())
    }

    /// Parse `content` and append its definitions.
    ///
    /// Executable text and SDL are each accepted whole. A source mixing the
    /// two is split into runs of top-level definitions which are parsed
    /// separately, keeping document order and source positions.
    pub fn load_str(mut self, content: &str) -> Result<Self> {
        let query_err = match ast::query::parse_query::<String>(content) {
            Ok(ast_doc) => {
                self.push_executable_defs(ast_doc.into_static());
                return Ok(self);
            },
            Err(err) => err,
        };

        if let Ok(ast_doc) = ast::schema::parse_schema::<String>(content) {
            self.push_type_system_defs(ast_doc.into_static());
            return Ok(self);
        }

        let runs = source_split::split_definition_runs(content);
        if runs.len() < 2 {
            return Err(self.parse_error(query_err.to_string()));
        }

        let mut mixed = Self::new();
        for run in runs {
            let run_source = source_split::positioned_source(content, run.range);
            match run.kind {
                RunKind::Executable => {
                    let ast_doc = ast::query::parse_query::<String>(&run_source)
                        .map_err(|err| self.parse_error(err.to_string()))?;
                    mixed.push_executable_defs(ast_doc.into_static());
                },
                RunKind::TypeSystem => {
                    let ast_doc = ast::schema::parse_schema::<String>(&run_source)
                        .map_err(|err| self.parse_error(err.to_string()))?;
                    mixed.push_type_system_defs(ast_doc.into_static());
                },
            }
        }
        tracing::trace!(
            definitions = mixed.definitions.len(),
            "loaded a source mixing executable and type-system definitions",
        );
        self.definitions.append(&mut mixed.definitions);
        Ok(self)
    }

    /// Append type-system (SDL) definitions to the document being built.
    pub fn load_type_system_str(mut self, content: &str) -> Result<Self> {
        let ast_doc = ast::schema::parse_schema::<String>(content)
            .map_err(|err| self.parse_error(err.to_string()))?;
        self.push_type_system_defs(ast_doc.into_static());
        Ok(self)
    }

    fn parse_error(&self, err: String) -> DocumentBuildError {
        DocumentBuildError::ParseError {
            file: self.file_path.to_owned(),
            err,
        }
    }

    fn push_executable_defs(&mut self, ast_doc: ast::query::Document) {
        self.definitions.extend(
            ast_doc.definitions.into_iter().map(|def| match def {
                ast::query::Definition::Fragment(frag) =>
                    Definition::Fragment(frag),
                ast::query::Definition::Operation(op) =>
                    Definition::Operation(op),
            }),
        );
    }

    fn push_type_system_defs(&mut self, ast_doc: ast::schema::Document) {
        self.definitions.extend(
            ast_doc.definitions.into_iter().map(Definition::TypeSystem),
        );
    }
}

#[derive(Debug, Error)]
pub enum DocumentBuildError {
    #[error("Failure while trying to read a document file from disk")]
    DocumentFileReadError(#[source] Box<file_reader::ReadContentError>),

    #[error("Error parsing document{}: {err}", file_suffix(.file.as_deref()))]
    ParseError {
        file: Option<PathBuf>,
        err: String,
    },
}

fn file_suffix(file: Option<&Path>) -> String {
    file.map(|f| format!(" from {}", f.display()))
        .unwrap_or_default()
}
