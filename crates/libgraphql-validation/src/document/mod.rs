mod definition;
mod document;
mod document_builder;
mod operation;
mod operation_kind;
mod source_split;

pub use definition::Definition;
pub use document::Document;
pub use document_builder::DocumentBuildError;
pub use document_builder::DocumentBuilder;
pub use operation::Operation;
pub use operation_kind::OperationKind;
