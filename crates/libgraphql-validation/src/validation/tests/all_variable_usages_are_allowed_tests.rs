use crate::types::ListTypeAnnotation;
use crate::types::NamedTypeAnnotation;
use crate::types::TypeAnnotation;
use crate::validation::ValidationError;
use crate::validation::rules::AllVariableUsagesAreAllowedRule;
use crate::validation::rules::is_variable_usage_allowed;
use crate::validation::tests::test_schema;

fn validate(source: &str) -> Vec<ValidationError> {
    test_schema::validate_with(AllVariableUsagesAreAllowedRule, source)
}

fn named(name: &str, nullable: bool) -> TypeAnnotation {
    NamedTypeAnnotation::new(name, nullable).into()
}

fn list(inner: TypeAnnotation, nullable: bool) -> TypeAnnotation {
    ListTypeAnnotation::new(inner, nullable).into()
}

mod compatibility {
    use super::*;

    #[test]
    fn same_named_type() {
        assert!(is_variable_usage_allowed(&named("Int", true), false, &named("Int", true), false));
        assert!(!is_variable_usage_allowed(&named("String", true), false, &named("Int", true), false));
    }

    #[test]
    fn non_null_variable_into_nullable_location() {
        assert!(is_variable_usage_allowed(&named("Int", false), false, &named("Int", true), false));
    }

    #[test]
    fn nullable_variable_into_non_null_location() {
        assert!(!is_variable_usage_allowed(&named("Int", true), false, &named("Int", false), false));
        assert!(is_variable_usage_allowed(&named("Int", true), true, &named("Int", false), false));
        assert!(is_variable_usage_allowed(&named("Int", true), false, &named("Int", false), true));
    }

    #[test]
    fn list_depth_must_match() {
        let list_of_ints = list(named("Int", true), true);
        let list_of_lists = list(list(named("Int", true), true), true);

        assert!(is_variable_usage_allowed(&list_of_ints, false, &list_of_ints, false));
        assert!(!is_variable_usage_allowed(&named("Int", true), false, &list_of_ints, false));
        assert!(!is_variable_usage_allowed(&list_of_ints, false, &named("Int", true), false));
        assert!(!is_variable_usage_allowed(&list_of_ints, false, &list_of_lists, false));
    }

    #[test]
    fn list_item_nullability() {
        let nullable_items = list(named("Boolean", true), true);
        let non_null_items = list(named("Boolean", false), true);

        assert!(is_variable_usage_allowed(&non_null_items, false, &nullable_items, false));
        assert!(!is_variable_usage_allowed(&nullable_items, false, &non_null_items, false));
        // A default only relaxes the outermost layer.
        assert!(!is_variable_usage_allowed(&nullable_items, true, &non_null_items, true));
    }
}

mod usages {
    use super::*;

    #[test]
    fn compatible_usages() {
        let errors = validate(r#"
            query q(
                $intArg: Int
                $nonNullInt: Int!
                $withDefault: Int = 1
                $bools: [Boolean!]
                $cond: Boolean!
            ) {
                intArgField(intArg: $intArg)
                nonNullIntArgField(nonNullIntArg: $nonNullInt)
                other: nonNullIntArgField(nonNullIntArg: $withDefault)
                nonNullIntWithDefault(arg: $intArg)
                booleanList(booleanListArg: $bools)
                dog @include(if: $cond) { name }
            }
        "#);

        assert!(errors.is_empty(), "{errors:?}");
    }

    #[test]
    fn mismatched_named_type() {
        let errors = validate("query q($str: String) { intArgField(intArg: $str) }");

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].to_string(),
            "The variable `$str` of type `String` is not compatible with the type \
            `Int` of the current location.",
        );
    }

    #[test]
    fn nullable_into_non_null_argument() {
        let errors = validate(r#"
            query q($a: Int, $b: Int = null) {
                x: nonNullIntArgField(nonNullIntArg: $a)
                y: nonNullIntArgField(nonNullIntArg: $b)
            }
        "#);

        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn nullable_into_directive_argument() {
        let errors = validate("query q($cond: Boolean) { dog @skip(if: $cond) { name } }");

        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            ValidationError::VariableUsageNotAllowed { location_type, .. }
                if location_type.to_string() == "Boolean!",
        ));
    }

    #[test]
    fn list_item_nullability_mismatch() {
        let errors = validate("query q($bools: [Boolean]) { booleanList(booleanListArg: $bools) }");

        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn scalar_into_nested_list() {
        let errors = validate("query q($i: Int) { listOfListsArg(arg: $i) }");

        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn variables_nested_in_input_values() {
        let errors = validate(r#"
            query q($flavor: String, $flag: Boolean, $ok: String!) {
                a: findDog(complex: { favoriteCookieFlavor: $flavor }) { name }
                b: findDog(complex: { favoriteCookieFlavor: $ok, flags: [$flag] }) { name }
                c: findDog(complex: { favoriteCookieFlavor: $ok, nested: { favoriteCookieFlavor: $ok } }) { name }
            }
        "#);

        let reported = errors.iter().map(|err| match err {
            ValidationError::VariableUsageNotAllowed { variable_name, location_type, .. } =>
                (variable_name.as_str(), location_type.to_string()),
            other => panic!("unexpected error: {other:?}"),
        }).collect::<Vec<_>>();
        assert_eq!(reported, vec![
            ("flavor", "String!".to_string()),
            ("flag", "Boolean!".to_string()),
        ]);
    }

    #[test]
    fn usages_in_fragments_use_the_operation_declarations() {
        let errors = validate(r#"
            query q($atOtherHomes: String) { dog { ...housetrained } }
            fragment housetrained on Dog { isHousetrained(atOtherHomes: $atOtherHomes) }
        "#);

        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn undeclared_and_unknown_arguments_are_ignored() {
        let errors = validate(r#"
            query q($a: String) {
                intArgField(intArg: $undeclared)
                dog { name(unknownArg: $a) }
            }
        "#);

        assert!(errors.is_empty());
    }
}
