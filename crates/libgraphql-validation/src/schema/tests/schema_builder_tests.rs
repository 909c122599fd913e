use crate::document::OperationKind;
use crate::loc;
use crate::schema::SchemaBuilder;
use crate::schema::SchemaBuildError;
use crate::types::DirectiveLocation;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

mod basics {
    use super::*;

    #[test]
    fn build_without_load() {
        let schema = SchemaBuilder::new().build();

        assert!(matches!(
            schema,
            Err(SchemaBuildError::NoQueryOperationTypeDefined),
        ));
    }

    #[test]
    fn load_empty_query_type_str() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "type Query")?
            .build()?;

        assert_eq!(schema.directive_defs.len(), 4);
        assert_eq!(schema.types.len(), 6);
        assert_eq!(schema.query_type, "Query");
        assert!(schema.mutation_type.is_none());
        assert!(schema.subscription_type.is_none());

        let query_type = schema.query_type().expect("query type is an object");
        assert_eq!(query_type.def_location(), &loc::FilePosition {
            col: 1,
            file: Some(PathBuf::from("str://0")),
            line: 1,
        });

        Ok(())
    }

    #[test]
    fn implicit_root_operation_types() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, concat!(
            "type Mutation { a: Int }\n",
            "type Query { b: Int }\n",
            "type Subscription { c: Int }",
        ))?.build()?;

        assert_eq!(schema.mutation_type().map(|t| t.name()), Some("Mutation"));
        assert_eq!(schema.query_type().map(|t| t.name()), Some("Query"));
        assert_eq!(schema.subscription_type().map(|t| t.name()), Some("Subscription"));

        Ok(())
    }

    #[test]
    fn explicit_schema_block_renames_root_types() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, concat!(
            "schema { query: RootQuery, mutation: RootMutation }\n",
            "type RootQuery { a: Int }\n",
            "type RootMutation { b: Int }\n",
            "type Query { unused: Int }",
        ))?.build()?;

        assert_eq!(schema.query_type().map(|t| t.name()), Some("RootQuery"));
        assert_eq!(schema.mutation_type().map(|t| t.name()), Some("RootMutation"));
        assert!(schema.subscription_type().is_none());

        Ok(())
    }

    #[test]
    fn str_load_counter_names_anonymous_sources() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "type Query { a: A }")?
            .load_str(None, "type A { b: Int }")?
            .build()?;

        let a_type = schema.lookup_type("A").expect("A is defined");
        assert_eq!(a_type.def_location(), loc::SchemaDefLocation::Schema(loc::FilePosition {
            col: 1,
            file: Some(PathBuf::from("str://1")),
            line: 1,
        }));

        Ok(())
    }

    #[test]
    fn builtin_scalars_are_injected() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, "type Query { a: Int }")?.build()?;

        for (name, kind) in [
            ("Boolean", GraphQLTypeKind::Bool),
            ("Float", GraphQLTypeKind::Float),
            ("ID", GraphQLTypeKind::ID),
            ("Int", GraphQLTypeKind::Int),
            ("String", GraphQLTypeKind::String),
        ] {
            let type_ = schema.lookup_type(name).expect("built-in scalar is defined");
            assert_eq!(type_.kind(), kind);
            assert_eq!(type_.def_location(), loc::SchemaDefLocation::GraphQLBuiltIn);
        }

        Ok(())
    }
}

mod type_definitions {
    use super::*;

    #[test]
    fn object_fields_and_interfaces() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, concat!(
            "type Query { pet: Pet }\n",
            "interface Pet { name: String }\n",
            "type Dog implements Pet { name: String, barks(loud: Boolean = false): Boolean! }",
        ))?.build()?;

        let dog = schema.lookup_type("Dog")
            .and_then(GraphQLType::as_object)
            .expect("Dog is an object type");
        assert!(dog.implements_interface("Pet"));
        assert_eq!(dog.fields().keys().collect::<Vec<_>>(), vec!["name", "barks"]);

        let barks = dog.fields().get("barks").expect("barks is defined");
        assert_eq!(barks.type_annotation().to_string(), "Boolean!");
        let loud = barks.parameter("loud").expect("loud is defined");
        assert_eq!(loud.type_annotation().to_string(), "Boolean");
        assert!(loud.default_value().is_some());

        Ok(())
    }

    #[test]
    fn union_members_and_enum_values() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, concat!(
            "type Query { a: Int }\n",
            "type Cat { a: Int }\n",
            "type Dog { a: Int }\n",
            "union CatOrDog = Cat | Dog\n",
            "enum Command { SIT, HEEL }",
        ))?.build()?;

        let union_type = schema.lookup_type("CatOrDog")
            .and_then(GraphQLType::as_union)
            .expect("CatOrDog is a union");
        assert_eq!(union_type.member_type_names(), vec!["Cat", "Dog"]);

        let Some(GraphQLType::Enum(enum_type)) = schema.lookup_type("Command") else {
            panic!("Command is not an enum");
        };
        assert_eq!(enum_type.value_names(), vec!["SIT", "HEEL"]);

        Ok(())
    }

    #[test]
    fn duplicate_type_definition() {
        let result = SchemaBuilder::from_str(None, concat!(
            "type Query { a: Int }\n",
            "type Query { b: Int }",
        ));

        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateTypeDefinition { type_name, .. })
                if type_name == "Query",
        ));
    }

    #[test]
    fn redefinition_of_builtin_scalar() {
        let result = SchemaBuilder::from_str(None, "scalar Int");

        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateTypeDefinition {
                def_location1: loc::SchemaDefLocation::GraphQLBuiltIn,
                ..
            }),
        ));
    }

    #[test]
    fn parse_error() {
        let result = SchemaBuilder::from_str(
            Some(PathBuf::from("broken.graphqls")),
            "type Query {",
        );

        assert!(matches!(
            result,
            Err(SchemaBuildError::ParseError { file, .. })
                if file == PathBuf::from("broken.graphqls"),
        ));
    }
}

mod extensions {
    use super::*;

    #[test]
    fn extension_before_definition_is_applied() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "extend type Query { b: Int }")?
            .load_str(None, "type Query { a: Int }")?
            .build()?;

        let query_type = schema.query_type().expect("query type is an object");
        assert_eq!(query_type.fields().keys().collect::<Vec<_>>(), vec!["a", "b"]);

        Ok(())
    }

    #[test]
    fn extension_of_undefined_type() -> Result<()> {
        let result = SchemaBuilder::from_str(None, concat!(
            "type Query { a: Int }\n",
            "extend type Missing { b: Int }",
        ))?.build();

        assert!(matches!(
            result,
            Err(SchemaBuildError::ExtensionOfUndefinedType { type_name, .. })
                if type_name == "Missing",
        ));

        Ok(())
    }

    #[test]
    fn extension_kind_mismatch() -> Result<()> {
        let result = SchemaBuilder::from_str(None, concat!(
            "type Query { a: Int }\n",
            "enum Color { RED }\n",
            "extend type Color { b: Int }",
        ))?.build();

        assert!(matches!(
            result,
            Err(SchemaBuildError::InvalidExtensionType {
                actual_kind: GraphQLTypeKind::Enum,
                expected_kind: GraphQLTypeKind::Object,
                ..
            }),
        ));

        Ok(())
    }

    #[test]
    fn union_and_enum_extensions() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, concat!(
            "type Query { a: Int }\n",
            "type Cat { a: Int }\n",
            "type Dog { a: Int }\n",
            "union Pet = Cat\n",
            "extend union Pet = Dog\n",
            "enum Color { RED }\n",
            "extend enum Color { BLUE }",
        ))?.build()?;

        let pet = schema.lookup_type("Pet")
            .and_then(GraphQLType::as_union)
            .expect("Pet is a union");
        assert!(pet.has_member("Dog"));

        let Some(GraphQLType::Enum(color)) = schema.lookup_type("Color") else {
            panic!("Color is not an enum");
        };
        assert_eq!(color.value_names(), vec!["RED", "BLUE"]);

        Ok(())
    }
}

mod directives {
    use super::*;

    #[test]
    fn builtin_directives_are_injected() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, "type Query { a: Int }")?.build()?;

        let names = schema.defined_directives().keys().collect::<Vec<_>>();
        assert_eq!(names, vec!["skip", "include", "deprecated", "specifiedBy"]);

        let skip = schema.lookup_directive("skip").expect("skip is defined");
        assert!(skip.is_valid_in(DirectiveLocation::Field));
        assert!(!skip.is_valid_in(DirectiveLocation::Query));
        assert!(!skip.is_repeatable());

        Ok(())
    }

    #[test]
    fn custom_directive_definition() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, concat!(
            "type Query { a: Int }\n",
            "directive @tag(name: String!) repeatable on FIELD | QUERY",
        ))?.build()?;

        let tag = schema.lookup_directive("tag").expect("tag is defined");
        assert!(tag.is_repeatable());
        assert_eq!(tag.locations(), &[DirectiveLocation::Field, DirectiveLocation::Query]);
        assert_eq!(
            tag.parameters().get("name").map(|p| p.type_annotation().to_string()),
            Some("String!".to_string()),
        );

        Ok(())
    }

    #[test]
    fn redefinition_of_builtin_directive() {
        let result = SchemaBuilder::from_str(
            None,
            "directive @skip(if: Boolean!) on FIELD",
        );

        assert!(matches!(
            result,
            Err(SchemaBuildError::RedefinitionOfBuiltinDirective { directive_name, .. })
                if directive_name == "skip",
        ));
    }

    #[test]
    fn duplicate_directive_definition() {
        let result = SchemaBuilder::from_str(None, concat!(
            "directive @a on FIELD\n",
            "directive @a on QUERY",
        ));

        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateDirectiveDefinition { directive_name, .. })
                if directive_name == "a",
        ));
    }
}

mod root_operations {
    use super::*;

    #[test]
    fn duplicate_operation_definition() {
        let result = SchemaBuilder::from_str(None, concat!(
            "schema { query: Query }\n",
            "schema { query: Query }\n",
            "type Query { a: Int }",
        ));

        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateOperationDefinition {
                operation: OperationKind::Query,
                ..
            }),
        ));
    }

    #[test]
    fn root_operation_type_not_an_object() -> Result<()> {
        let result = SchemaBuilder::from_str(None, concat!(
            "schema { query: Query, mutation: Color }\n",
            "type Query { a: Int }\n",
            "enum Color { RED }",
        ))?.build();

        assert!(matches!(
            result,
            Err(SchemaBuildError::RootOperationTypeNotAnObject {
                operation: OperationKind::Mutation,
                ..
            }),
        ));

        Ok(())
    }
}
