use crate::ast;
use crate::document::Operation;

/// A single top-level definition in a [`Document`](crate::document::Document).
///
/// Only operations and fragments are executable. Type-system definitions are
/// kept (rather than rejected at load time) so that validation can report
/// them.
#[derive(Clone, Debug, PartialEq)]
pub enum Definition {
    Fragment(ast::query::FragmentDefinition),
    Operation(ast::query::OperationDefinition),
    TypeSystem(ast::schema::Definition),
}
impl Definition {
    pub fn as_fragment(&self) -> Option<&ast::query::FragmentDefinition> {
        if let Self::Fragment(def) = self {
            Some(def)
        } else {
            None
        }
    }

    pub fn as_operation(&self) -> Option<Operation<'_>> {
        if let Self::Operation(def) = self {
            Some(Operation::new(def))
        } else {
            None
        }
    }

    pub fn is_executable(&self) -> bool {
        !matches!(self, Self::TypeSystem(_))
    }

    pub fn position(&self) -> ast::Pos {
        match self {
            Self::Fragment(def) => def.position,
            Self::Operation(def) => Operation::new(def).position(),
            Self::TypeSystem(def) => type_system_def_position(def),
        }
    }
}

fn type_system_def_position(def: &ast::schema::Definition) -> ast::Pos {
    use ast::schema::Definition as D;
    use graphql_parser::schema::TypeDefinition as TD;
    use graphql_parser::schema::TypeExtension as TE;

    match def {
        D::DirectiveDefinition(d) => d.position,
        D::SchemaDefinition(d) => d.position,
        D::TypeDefinition(td) => match td {
            TD::Enum(t) => t.position,
            TD::InputObject(t) => t.position,
            TD::Interface(t) => t.position,
            TD::Object(t) => t.position,
            TD::Scalar(t) => t.position,
            TD::Union(t) => t.position,
        },
        D::TypeExtension(te) => match te {
            TE::Enum(t) => t.position,
            TE::InputObject(t) => t.position,
            TE::Interface(t) => t.position,
            TE::Object(t) => t.position,
            TE::Scalar(t) => t.position,
            TE::Union(t) => t.position,
        },
    }
}
