use crate::types::DirectiveLocation;

#[test]
fn from_name_inverts_as_str() {
    for location in [
        DirectiveLocation::Query,
        DirectiveLocation::FragmentSpread,
        DirectiveLocation::VariableDefinition,
        DirectiveLocation::InputFieldDefinition,
    ] {
        assert_eq!(DirectiveLocation::from_name(location.as_str()), Some(location));
    }
}

#[test]
fn from_name_rejects_unknown_names() {
    assert_eq!(DirectiveLocation::from_name("field"), None);
    assert_eq!(DirectiveLocation::from_name("NOWHERE"), None);
}

#[test]
fn executable_locations() {
    assert!(DirectiveLocation::Query.is_executable());
    assert!(DirectiveLocation::InlineFragment.is_executable());
    assert!(!DirectiveLocation::FieldDefinition.is_executable());
    assert!(!DirectiveLocation::Schema.is_executable());
}
