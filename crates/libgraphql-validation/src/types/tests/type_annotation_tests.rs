use crate::ast;
use crate::types::ListTypeAnnotation;
use crate::types::NamedTypeAnnotation;
use crate::types::TypeAnnotation;

fn parse_var_type(type_str: &str) -> TypeAnnotation {
    let query = format!("query($v: {type_str}) {{ a }}");
    let doc = ast::query::parse_query::<String>(&query).unwrap().into_static();
    let ast::query::Definition::Operation(
        ast::query::OperationDefinition::Query(op),
    ) = &doc.definitions[0] else {
        panic!("expected a query operation");
    };
    TypeAnnotation::from_ast_type(&op.variable_definitions[0].var_type)
}

#[test]
fn from_ast_type_tracks_nullability_per_layer() {
    let annot = parse_var_type("[Int!]");

    assert!(annot.nullable());
    let list_annot = annot.as_list_annotation().expect("annotation is a list");
    let inner = list_annot.inner_type_annotation();
    assert!(!inner.nullable());
    assert_eq!(inner.innermost_type_name(), "Int");
}

#[test]
fn display_round_trips_source_syntax() {
    for type_str in ["Int", "Int!", "[Int]", "[Int!]!", "[[String]!]"] {
        assert_eq!(parse_var_type(type_str).to_string(), type_str);
    }
}

#[test]
fn named_annotation_accessor_only_matches_named_layer() {
    let named = parse_var_type("Dog!");
    let named_annot = named.as_named_annotation().expect("annotation is named");
    assert_eq!(named_annot.graphql_type_name(), "Dog");
    assert!(!named_annot.nullable());

    assert!(parse_var_type("[Dog]").as_named_annotation().is_none());
}

#[test]
fn innermost_type_name_unwraps_nested_lists() {
    assert_eq!(parse_var_type("[[[Dog!]]!]").innermost_type_name(), "Dog");
}

#[test]
fn named_type_annotation_equivalence_same_type_same_nullability() {
    let annot1 = NamedTypeAnnotation::new("Int", true);
    let annot2 = NamedTypeAnnotation::new("Int", true);

    assert!(annot1.is_equivalent_to(&annot2));
    assert!(annot2.is_equivalent_to(&annot1)); // Should be symmetric
}

#[test]
fn named_type_annotation_equivalence_same_type_different_nullability() {
    let annot_nullable = NamedTypeAnnotation::new("String", true);
    let annot_non_null = NamedTypeAnnotation::new("String", false);

    assert!(!annot_nullable.is_equivalent_to(&annot_non_null));
    assert!(!annot_non_null.is_equivalent_to(&annot_nullable));
}

#[test]
fn list_type_annotation_equivalence_depends_on_inner_type() {
    let ints = ListTypeAnnotation::new(NamedTypeAnnotation::new("Int", false), true);
    let same_ints = ListTypeAnnotation::new(NamedTypeAnnotation::new("Int", false), true);
    let nullable_ints = ListTypeAnnotation::new(NamedTypeAnnotation::new("Int", true), true);

    assert!(ints.is_equivalent_to(&same_ints));
    assert!(!ints.is_equivalent_to(&nullable_ints));
}

#[test]
fn list_and_named_annotations_are_never_equivalent() {
    let named: TypeAnnotation = NamedTypeAnnotation::new("Int", true).into();
    let list: TypeAnnotation = ListTypeAnnotation::new(
        NamedTypeAnnotation::new("Int", true),
        true,
    ).into();

    assert!(!named.is_equivalent_to(&list));
    assert!(!list.is_equivalent_to(&named));
}
