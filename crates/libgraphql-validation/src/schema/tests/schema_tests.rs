use crate::document::OperationKind;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::types::GraphQLTypeKind;

fn build_schema() -> Schema {
    SchemaBuilder::from_str(None, r#"
        type Query { pet: Pet }
        type Mutation { rename(name: String!): Pet }

        interface Pet { name: String }
        interface Sentient { name: String }

        type Dog implements Pet { name: String }
        type Cat implements Pet { name: String }
        type Human implements Sentient { name: String }
        type Alien implements Sentient { name: String }

        union CatOrDog = Cat | Dog
        union DogOrHuman = Dog | Human
        union HumanOrAlien = Human | Alien

        enum Color { RED }
    "#)
    .unwrap()
    .build()
    .unwrap()
}

fn possible_type_names(schema: &Schema, type_name: &str) -> Vec<String> {
    let type_ = schema.lookup_type(type_name).unwrap();
    schema.possible_types(type_)
        .iter()
        .map(|t| t.name().to_string())
        .collect()
}

#[test]
fn possible_types_of_each_kind() {
    let schema = build_schema();

    assert_eq!(possible_type_names(&schema, "Dog"), vec!["Dog"]);
    assert_eq!(possible_type_names(&schema, "Pet"), vec!["Dog", "Cat"]);
    assert_eq!(possible_type_names(&schema, "CatOrDog"), vec!["Cat", "Dog"]);
    assert!(possible_type_names(&schema, "Color").is_empty());
}

#[test]
fn possible_types_of_a_type_not_owned_by_the_schema() {
    let schema = build_schema();
    let detached_dog = schema.lookup_type("Dog").unwrap().clone();

    let possible: Vec<&str> = schema.possible_types(&detached_dog)
        .iter()
        .map(|t| t.name())
        .collect();
    assert_eq!(possible, vec!["Dog"]);
    assert!(schema.types_overlap(&detached_dog, schema.lookup_type("Pet").unwrap()));
}

#[test]
fn is_possible_type() {
    let schema = build_schema();
    let pet = schema.lookup_type("Pet").unwrap();

    assert!(schema.is_possible_type(pet, "Dog"));
    assert!(!schema.is_possible_type(pet, "Human"));
}

#[test]
fn types_overlap() {
    let schema = build_schema();
    let lookup = |name| schema.lookup_type(name).unwrap();

    assert!(schema.types_overlap(lookup("Dog"), lookup("Dog")));
    assert!(schema.types_overlap(lookup("Pet"), lookup("Dog")));
    assert!(schema.types_overlap(lookup("CatOrDog"), lookup("Pet")));
    assert!(schema.types_overlap(lookup("DogOrHuman"), lookup("Sentient")));
    assert!(!schema.types_overlap(lookup("Dog"), lookup("Cat")));
    assert!(!schema.types_overlap(lookup("Pet"), lookup("HumanOrAlien")));
    assert!(!schema.types_overlap(lookup("Color"), lookup("Color")));
}

#[test]
fn root_operation_types() {
    let schema = build_schema();

    assert_eq!(
        schema.root_operation_type(OperationKind::Query).map(|t| t.name()),
        Some("Query"),
    );
    assert_eq!(
        schema.root_operation_type(OperationKind::Mutation).map(|t| t.name()),
        Some("Mutation"),
    );
    assert!(schema.root_operation_type(OperationKind::Subscription).is_none());
}

#[test]
fn defined_types_include_builtin_scalars_and_sdl_types_in_order() {
    let schema = build_schema();
    let names: Vec<&str> = schema.defined_types()
        .keys()
        .map(String::as_str)
        .collect();

    assert_eq!(&names[..5], &["Boolean", "Float", "ID", "Int", "String"]);
    assert!(names.contains(&"HumanOrAlien"));

    let kind = GraphQLTypeKind::from(schema.lookup_type("Color").unwrap());
    assert!(kind.is_leaf());
    assert!(!GraphQLTypeKind::from(schema.lookup_type("Pet").unwrap()).is_leaf());
}

#[test]
fn object_and_interface_accessors() {
    let schema = build_schema();

    let dog = schema.lookup_type("Dog").unwrap().as_object().unwrap();
    assert_eq!(dog.interface_names(), vec!["Pet"]);

    let pet = schema.lookup_type("Pet").unwrap().as_interface().unwrap();
    assert!(pet.fields().contains_key("name"));
    assert!(schema.lookup_type("Dog").unwrap().as_interface().is_none());
}
