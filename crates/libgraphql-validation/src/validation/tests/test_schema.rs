//! The "dog/cat/pet" schema used throughout the GraphQL validation
//! literature, plus a few helpers for running rules against it.

use crate::document::Document;
use crate::document::DocumentBuilder;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::validation::DocumentValidator;
use crate::validation::ValidationError;
use crate::validation::ValidationResult;
use crate::validation::ValidationRule;
use std::sync::OnceLock;

const SCHEMA_SDL: &str = r#"
    type Query {
        dog: Dog
        pet: Pet
        catOrDog: CatOrDog
        human: Human
        findDog(complex: ComplexInput): Dog
        booleanList(booleanListArg: [Boolean!]): Boolean
        intArgField(intArg: Int): Int
        nonNullIntArgField(nonNullIntArg: Int!): Int
        nonNullIntWithDefault(arg: Int! = 0): Int
        listOfListsArg(arg: [[Int]]): Int
    }

    type Mutation {
        mutateDog: Dog
    }

    enum DogCommand { SIT, DOWN, HEEL }

    type Dog implements Pet {
        name: String!
        nickname: String
        barkVolume: Int
        doesKnowCommand(dogCommand: DogCommand!): Boolean!
        isHousetrained(atOtherHomes: Boolean): Boolean!
        owner: Human
    }

    interface Sentient {
        name: String!
    }

    interface Pet {
        name: String!
    }

    type Alien implements Sentient {
        name: String!
        homePlanet: String
    }

    type Human implements Sentient {
        name: String!
        pets: [Pet!]
    }

    enum CatCommand { JUMP }

    type Cat implements Pet {
        name: String!
        nickname: String
        doesKnowCommand(catCommand: CatCommand!): Boolean!
        meowVolume: Int
    }

    union CatOrDog = Cat | Dog
    union DogOrHuman = Dog | Human
    union HumanOrAlien = Human | Alien

    input ComplexInput {
        name: String
        owner: String
        favoriteCookieFlavor: String!
        nested: ComplexInput
        flags: [Boolean!]
    }

    directive @onField on FIELD
    directive @repeatableOnField repeatable on FIELD
    directive @onQuery on QUERY
    directive @onMutation on MUTATION
    directive @onFragmentDefinition on FRAGMENT_DEFINITION
"#;

pub(super) fn schema() -> &'static Schema {
    static SCHEMA: OnceLock<Schema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        SchemaBuilder::from_str(None, SCHEMA_SDL)
            .unwrap()
            .build()
            .unwrap()
    })
}

pub(super) fn document(source: &str) -> Document {
    DocumentBuilder::from_str(None, source)
        .unwrap()
        .build()
}

/// Run a single rule over `source` and return what it reported.
pub(super) fn validate_with(
    rule: impl ValidationRule + 'static,
    source: &str,
) -> Vec<ValidationError> {
    DocumentValidator::builder()
        .rule(rule)
        .build()
        .validate(schema(), &document(source))
        .into_errors()
}

/// Run every built-in rule over `source`.
pub(super) fn validate_all(source: &str) -> ValidationResult {
    DocumentValidator::default().validate(schema(), &document(source))
}
