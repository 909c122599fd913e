use crate::validation::ValidationError;
use crate::validation::rules::AllVariablesUsedRule;
use crate::validation::tests::test_schema;

fn validate(source: &str) -> Vec<ValidationError> {
    test_schema::validate_with(AllVariablesUsedRule, source)
}

#[test]
fn all_variables_used_and_declared() {
    let errors = validate(r#"
        query q($atOtherHomes: Boolean, $cond: Boolean!, $name: String, $flag: Boolean!) {
            dog @include(if: $cond) {
                isHousetrained(atOtherHomes: $atOtherHomes)
            }
            findDog(complex: {
                name: $name
                favoriteCookieFlavor: "oatmeal"
                flags: [true, $flag]
            }) { name }
        }
    "#);

    assert!(errors.is_empty());
}

#[test]
fn unused_variable() {
    let errors = validate("query variableUnused($atOtherHomes: Boolean) { dog { name } }");

    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].to_string(),
        "The variable `$atOtherHomes` is not used by operation `variableUnused`.",
    );
}

#[test]
fn undeclared_variable_reported_once() {
    let errors = validate(r#"
        {
            a: intArgField(intArg: $undeclared)
            b: intArgField(intArg: $undeclared)
        }
    "#);

    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].to_string(),
        "The variable `$undeclared` is not declared by operation `<anonymous>`.",
    );
    assert_eq!(errors[0].locations().len(), 2);
}

#[test]
fn variable_used_through_fragments() {
    let errors = validate(r#"
        query q($atOtherHomes: Boolean) { dog { ...a } }
        fragment a on Dog { owner { pets { ...b } } }
        fragment b on Pet { ... on Dog { isHousetrained(atOtherHomes: $atOtherHomes) } }
    "#);

    assert!(errors.is_empty());
}

#[test]
fn fragment_shared_by_operations_is_checked_per_operation() {
    let errors = validate(r#"
        query A($atOtherHomes: Boolean) { dog { ...housetrained } }
        query B { dog { ...housetrained } }
        fragment housetrained on Dog { isHousetrained(atOtherHomes: $atOtherHomes) }
    "#);

    assert_eq!(errors.len(), 1);
    assert!(matches!(
        &errors[0],
        ValidationError::VariableNotDeclared { operation_name: Some(op_name), variable_name, .. }
            if op_name == "B" && variable_name == "atOtherHomes",
    ));
}

#[test]
fn unreachable_fragment_does_not_count_as_usage() {
    let errors = validate(r#"
        query q($atOtherHomes: Boolean) { dog { name } }
        fragment unused on Dog { isHousetrained(atOtherHomes: $atOtherHomes) }
    "#);

    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0], ValidationError::VariableNotUsed { .. }));
}

#[test]
fn cyclic_fragments_terminate() {
    let errors = validate(r#"
        query q($atOtherHomes: Boolean) { dog { ...a } }
        fragment a on Dog { ...b }
        fragment b on Dog { isHousetrained(atOtherHomes: $atOtherHomes) ...a }
    "#);

    assert!(errors.is_empty());
}
