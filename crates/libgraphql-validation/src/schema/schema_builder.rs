use crate::ast;
use crate::document::OperationKind;
use crate::file_reader;
use crate::loc;
use crate::schema::Schema;
use crate::types::Directive;
use crate::types::DirectiveLocation;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::Parameter;
use crate::types::ScalarType;
use crate::types::UnionType;
use indexmap::IndexMap;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use std::sync::OnceLock;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

fn builtin_directive_names() -> &'static HashSet<&'static str> {
    static NAMES: OnceLock<HashSet<&'static str>> = OnceLock::new();
    NAMES.get_or_init(|| {
        HashSet::from([
            "skip",
            "include",
            "deprecated",
            "specifiedBy",
        ])
    })
}

#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeDefLocation {
    pub def_location: loc::FilePosition,
    pub type_name: String,
}

/// Utility for building a [Schema] from one or more SDL sources.
///
/// Type extensions are collected while loading and applied when the schema is
/// built, so an extension may appear before (or in a different file than)
/// the definition it extends.
#[derive(Debug)]
pub struct SchemaBuilder {
    directive_defs: IndexMap<String, Directive>,
    mutation_type: Option<NamedTypeDefLocation>,
    pending_extensions: Vec<(PathBuf, ast::schema::TypeExtension)>,
    query_type: Option<NamedTypeDefLocation>,
    str_load_counter: u16,
    subscription_type: Option<NamedTypeDefLocation>,
    types: IndexMap<String, GraphQLType>,
}
impl SchemaBuilder {
    pub fn build(mut self) -> Result<Schema> {
        self.inject_missing_builtin_directives();

        for (file_path, ext) in std::mem::take(&mut self.pending_extensions) {
            self.apply_type_extension(file_path.as_path(), ext)?;
        }

        let query_type = match self.query_type.take() {
            Some(def) => {
                self.check_root_operation_type(OperationKind::Query, &def)?;
                def.type_name
            },
            None => match self.types.get("Query") {
                Some(GraphQLType::Object(_)) => "Query".to_string(),
                _ => return Err(SchemaBuildError::NoQueryOperationTypeDefined),
            },
        };

        let mutation_type = self.resolve_optional_root_type(
            OperationKind::Mutation,
            "Mutation",
        )?;
        let subscription_type = self.resolve_optional_root_type(
            OperationKind::Subscription,
            "Subscription",
        )?;

        Ok(Schema {
            directive_defs: self.directive_defs,
            mutation_type,
            query_type,
            subscription_type,
            types: self.types,
        })
    }

    pub fn from_file(file_path: impl AsRef<Path>) -> Result<Self> {
        Self::new().load_file(file_path)
    }

    pub fn from_files(
        file_paths: impl IntoIterator<Item = impl AsRef<Path>>,
    ) -> Result<Self> {
        Self::new().load_files(file_paths)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(file_path: Option<PathBuf>, content: &str) -> Result<Self> {
        Self::new().load_str(file_path, content)
    }

    pub fn new() -> Self {
        Self {
            directive_defs: IndexMap::new(),
            mutation_type: None,
            pending_extensions: vec![],
            query_type: None,
            str_load_counter: 0,
            subscription_type: None,
            types: IndexMap::from([
                ("Boolean".to_string(), GraphQLType::Bool),
                ("Float".to_string(), GraphQLType::Float),
                ("ID".to_string(), GraphQLType::ID),
                ("Int".to_string(), GraphQLType::Int),
                ("String".to_string(), GraphQLType::String),
            ]),
        }
    }

    pub fn load_file(self, file_path: impl AsRef<Path>) -> Result<Self> {
        self.load_files([file_path])
    }

    pub fn load_files(
        mut self,
        file_paths: impl IntoIterator<Item = impl AsRef<Path>>,
    ) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let file_content = file_reader::read_content(file_path)
                .map_err(|err| SchemaBuildError::SchemaFileReadError(
                    Box::new(err),
                ))?;
            self = self.load_str(
                Some(file_path.to_path_buf()),
                file_content.as_str(),
            )?;
        }
        Ok(self)
    }

    pub fn load_str(
        mut self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        let file_path =
            if let Some(file_path) = file_path {
                file_path
            } else {
                let ctr = self.str_load_counter;
                self.str_load_counter += 1;
                PathBuf::from(format!("str://{ctr}"))
            };

        let ast_doc =
            ast::schema::parse_schema::<String>(content)
                .map_err(|err| SchemaBuildError::ParseError {
                    file: file_path.to_owned(),
                    err: err.to_string(),
                })?.into_static();

        for def in ast_doc.definitions {
            self.visit_ast_def(file_path.as_path(), def)?;
        }

        Ok(self)
    }

    fn apply_type_extension(
        &mut self,
        file_path: &Path,
        ext: ast::schema::TypeExtension,
    ) -> Result<()> {
        use ast::schema::TypeExtension;

        let (type_name, position, expected_kind) = match &ext {
            TypeExtension::Enum(e) => (e.name.as_str(), e.position, GraphQLTypeKind::Enum),
            TypeExtension::InputObject(e) => (e.name.as_str(), e.position, GraphQLTypeKind::InputObject),
            TypeExtension::Interface(e) => (e.name.as_str(), e.position, GraphQLTypeKind::Interface),
            TypeExtension::Object(e) => (e.name.as_str(), e.position, GraphQLTypeKind::Object),
            TypeExtension::Scalar(e) => (e.name.as_str(), e.position, GraphQLTypeKind::Scalar),
            TypeExtension::Union(e) => (e.name.as_str(), e.position, GraphQLTypeKind::Union),
        };
        let ext_location = loc::FilePosition::from_pos(Some(file_path), position);

        let Some(type_) = self.types.get_mut(type_name) else {
            return Err(SchemaBuildError::ExtensionOfUndefinedType {
                ext_location,
                type_name: type_name.to_string(),
            });
        };

        match (type_, ext) {
            (GraphQLType::Enum(enum_type), TypeExtension::Enum(e)) =>
                enum_type.values.extend(e.values.into_iter().map(|v| v.name)),

            (GraphQLType::InputObject(inputobj_type), TypeExtension::InputObject(e)) =>
                inputobj_type.fields.extend(e.fields.iter().map(|input_val| (
                    input_val.name.to_string(),
                    Parameter::from_ast(file_path, input_val),
                ))),

            (GraphQLType::Interface(iface_type), TypeExtension::Interface(e)) =>
                iface_type.fields.extend(e.fields.iter().map(|field| (
                    field.name.to_string(),
                    Field::from_ast(file_path, field),
                ))),

            (GraphQLType::Object(obj_type), TypeExtension::Object(e)) => {
                obj_type.interfaces.extend(e.implements_interfaces);
                obj_type.fields.extend(e.fields.iter().map(|field| (
                    field.name.to_string(),
                    Field::from_ast(file_path, field),
                )));
            },

            (GraphQLType::Scalar(_), TypeExtension::Scalar(_)) => (),

            (GraphQLType::Union(union_type), TypeExtension::Union(e)) =>
                union_type.members.extend(e.types),

            (type_, _) => return Err(SchemaBuildError::InvalidExtensionType {
                actual_kind: type_.kind(),
                expected_kind,
                ext_location,
                type_name: type_.name().to_string(),
            }),
        }

        Ok(())
    }

    fn check_root_operation_type(
        &self,
        operation: OperationKind,
        def: &NamedTypeDefLocation,
    ) -> Result<()> {
        match self.types.get(def.type_name.as_str()) {
            Some(GraphQLType::Object(_)) => Ok(()),
            _ => Err(SchemaBuildError::RootOperationTypeNotAnObject {
                location: def.def_location.clone(),
                operation,
                type_name: def.type_name.to_owned(),
            }),
        }
    }

    fn inject_missing_builtin_directives(&mut self) {
        for directive in [
            Directive::Skip,
            Directive::Include,
            Directive::Deprecated,
            Directive::SpecifiedBy,
        ] {
            if !self.directive_defs.contains_key(directive.name()) {
                self.directive_defs.insert(directive.name().to_string(), directive);
            }
        }
    }

    fn resolve_optional_root_type(
        &mut self,
        operation: OperationKind,
        default_type_name: &str,
    ) -> Result<Option<String>> {
        let explicit_def = match operation {
            OperationKind::Query => self.query_type.take(),
            OperationKind::Mutation => self.mutation_type.take(),
            OperationKind::Subscription => self.subscription_type.take(),
        };

        if let Some(def) = explicit_def {
            self.check_root_operation_type(operation, &def)?;
            return Ok(Some(def.type_name));
        }

        Ok(match self.types.get(default_type_name) {
            Some(GraphQLType::Object(_)) => Some(default_type_name.to_string()),
            _ => None,
        })
    }

    fn visit_ast_def(
        &mut self,
        file_path: &Path,
        def: ast::schema::Definition,
    ) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::SchemaDefinition(schema_def) =>
                self.visit_ast_schemablock_def(file_path, schema_def),
            Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(file_path, type_def),
            Definition::TypeExtension(type_ext) => {
                self.pending_extensions.push((file_path.to_path_buf(), type_ext));
                Ok(())
            },
            Definition::DirectiveDefinition(directive_def) =>
                self.visit_ast_directive_def(file_path, directive_def),
        }
    }

    fn visit_ast_directive_def(
        &mut self,
        file_path: &Path,
        def: ast::schema::DirectiveDefinition,
    ) -> Result<()> {
        let file_position = loc::FilePosition::from_pos(
            Some(file_path),
            def.position,
        );

        if builtin_directive_names().contains(def.name.as_str()) {
            return Err(SchemaBuildError::RedefinitionOfBuiltinDirective {
                directive_name: def.name,
                location: file_position,
            });
        }

        if let Some(Directive::Custom {
            def_location,
            ..
        }) = self.directive_defs.get(def.name.as_str()) {
            return Err(SchemaBuildError::DuplicateDirectiveDefinition {
                directive_name: def.name.clone(),
                location1: def_location.clone(),
                location2: file_position,
            });
        }

        let mut locations = Vec::with_capacity(def.locations.len());
        for ast_location in &def.locations {
            let location_name = ast_location.as_str();
            let Some(location) = DirectiveLocation::from_name(location_name) else {
                return Err(SchemaBuildError::UnrecognizedDirectiveLocation {
                    directive_name: def.name.clone(),
                    location: file_position,
                    location_name: location_name.to_string(),
                });
            };
            locations.push(location);
        }

        self.directive_defs.insert(def.name.to_string(), Directive::Custom {
            def_location: file_position,
            is_repeatable: def.repeatable,
            locations,
            name: def.name.to_string(),
            params: def.arguments.iter().map(|input_val| (
                input_val.name.to_string(),
                Parameter::from_ast(file_path, input_val),
            )).collect(),
        });

        Ok(())
    }

    fn visit_ast_schemablock_def(
        &mut self,
        file_path: &Path,
        schema_def: ast::schema::SchemaDefinition,
    ) -> Result<()> {
        let def_location = loc::FilePosition::from_pos(
            Some(file_path),
            schema_def.position,
        );

        for (operation, type_name) in [
            (OperationKind::Query, schema_def.query),
            (OperationKind::Mutation, schema_def.mutation),
            (OperationKind::Subscription, schema_def.subscription),
        ] {
            let Some(type_name) = type_name else {
                continue;
            };
            let slot = match operation {
                OperationKind::Query => &mut self.query_type,
                OperationKind::Mutation => &mut self.mutation_type,
                OperationKind::Subscription => &mut self.subscription_type,
            };
            if let Some(existing) = slot {
                return Err(SchemaBuildError::DuplicateOperationDefinition {
                    location1: existing.def_location.clone(),
                    location2: def_location,
                    operation,
                });
            }
            *slot = Some(NamedTypeDefLocation {
                def_location: def_location.clone(),
                type_name,
            });
        }

        Ok(())
    }

    fn visit_ast_type_def(
        &mut self,
        file_path: &Path,
        type_def: ast::schema::TypeDefinition,
    ) -> Result<()> {
        use ast::schema::TypeDefinition;

        let position = match &type_def {
            TypeDefinition::Enum(def) => def.position,
            TypeDefinition::InputObject(def) => def.position,
            TypeDefinition::Interface(def) => def.position,
            TypeDefinition::Object(def) => def.position,
            TypeDefinition::Scalar(def) => def.position,
            TypeDefinition::Union(def) => def.position,
        };
        let def_location = loc::FilePosition::from_pos(Some(file_path), position);

        let type_ = match type_def {
            TypeDefinition::Enum(def) => GraphQLType::Enum(EnumType {
                def_location,
                name: def.name,
                values: def.values.into_iter().map(|v| v.name).collect(),
            }),

            TypeDefinition::InputObject(def) => GraphQLType::InputObject(InputObjectType {
                def_location,
                fields: def.fields.iter().map(|input_val| (
                    input_val.name.to_string(),
                    Parameter::from_ast(file_path, input_val),
                )).collect(),
                name: def.name,
            }),

            TypeDefinition::Interface(def) => GraphQLType::Interface(InterfaceType {
                def_location,
                fields: def.fields.iter().map(|field| (
                    field.name.to_string(),
                    Field::from_ast(file_path, field),
                )).collect(),
                name: def.name,
            }),

            TypeDefinition::Object(def) => GraphQLType::Object(ObjectType {
                def_location,
                fields: def.fields.iter().map(|field| (
                    field.name.to_string(),
                    Field::from_ast(file_path, field),
                )).collect(),
                interfaces: def.implements_interfaces,
                name: def.name,
            }),

            TypeDefinition::Scalar(def) => GraphQLType::Scalar(ScalarType {
                def_location,
                name: def.name,
            }),

            TypeDefinition::Union(def) => GraphQLType::Union(UnionType {
                def_location,
                members: def.types,
                name: def.name,
            }),
        };

        if let Some(existing) = self.types.get(type_.name()) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                def_location1: existing.def_location(),
                def_location2: type_.def_location(),
                type_name: type_.name().to_string(),
            });
        }

        self.types.insert(type_.name().to_string(), type_);
        Ok(())
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Error)]
pub enum SchemaBuildError {
    #[error("Multiple directives were defined with the same name: `@{directive_name}`")]
    DuplicateDirectiveDefinition {
        directive_name: String,
        location1: loc::FilePosition,
        location2: loc::FilePosition,
    },

    #[error("The `{operation}` root operation type was defined more than once")]
    DuplicateOperationDefinition {
        location1: loc::FilePosition,
        location2: loc::FilePosition,
        operation: OperationKind,
    },

    #[error("Multiple GraphQL types with the same name were defined: `{type_name}`")]
    DuplicateTypeDefinition {
        def_location1: loc::SchemaDefLocation,
        def_location2: loc::SchemaDefLocation,
        type_name: String,
    },

    #[error("Attempted to extend a type that is not defined: `{type_name}`")]
    ExtensionOfUndefinedType {
        ext_location: loc::FilePosition,
        type_name: String,
    },

    #[error(
        "Attempted to extend `{type_name}` as a {} type, but it is defined as a {} type",
        expected_kind.name(),
        actual_kind.name(),
    )]
    InvalidExtensionType {
        actual_kind: GraphQLTypeKind,
        expected_kind: GraphQLTypeKind,
        ext_location: loc::FilePosition,
        type_name: String,
    },

    #[error("No `Query` root operation type was defined")]
    NoQueryOperationTypeDefined,

    #[error("Error parsing schema from {file:?}: {err}")]
    ParseError {
        file: PathBuf,
        err: String,
    },

    #[error("Attempted to redefine the built-in directive `@{directive_name}`")]
    RedefinitionOfBuiltinDirective {
        directive_name: String,
        location: loc::FilePosition,
    },

    #[error("The `{operation}` root operation type `{type_name}` is not a defined object type")]
    RootOperationTypeNotAnObject {
        location: loc::FilePosition,
        operation: OperationKind,
        type_name: String,
    },

    #[error("Failure while trying to read a schema file from disk")]
    SchemaFileReadError(#[source] Box<file_reader::ReadContentError>),

    #[error("Directive `@{directive_name}` declares an unrecognized location: `{location_name}`")]
    UnrecognizedDirectiveLocation {
        directive_name: String,
        location: loc::FilePosition,
        location_name: String,
    },
}
