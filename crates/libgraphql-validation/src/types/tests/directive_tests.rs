use crate::types::Directive;
use crate::types::DirectiveLocation;

#[test]
fn skip_and_include_take_a_required_boolean() {
    for directive in [Directive::Skip, Directive::Include] {
        let if_param = directive.parameters().get("if").expect("`if` is defined");
        assert_eq!(if_param.type_annotation().to_string(), "Boolean!");
        assert!(directive.is_valid_in(DirectiveLocation::InlineFragment));
        assert!(!directive.is_valid_in(DirectiveLocation::FragmentDefinition));
    }
}

#[test]
fn deprecated_reason_has_a_default() {
    let reason = Directive::Deprecated
        .parameters()
        .get("reason")
        .expect("`reason` is defined");

    assert_eq!(reason.type_annotation().to_string(), "String");
    assert!(reason.default_value().is_some());
    assert!(!Directive::Deprecated.is_valid_in(DirectiveLocation::Field));
}

#[test]
fn builtin_directive_names() {
    assert_eq!(Directive::Skip.name(), "skip");
    assert_eq!(Directive::Include.name(), "include");
    assert_eq!(Directive::Deprecated.name(), "deprecated");
    assert_eq!(Directive::SpecifiedBy.name(), "specifiedBy");
}
