use crate::loc;
use crate::types::DirectiveLocation;
use crate::types::NamedTypeAnnotation;
use crate::types::Parameter;
use indexmap::IndexMap;
use std::sync::OnceLock;

fn if_parameters() -> &'static IndexMap<String, Parameter> {
    static PARAMS: OnceLock<IndexMap<String, Parameter>> = OnceLock::new();
    PARAMS.get_or_init(|| IndexMap::from([(
        "if".to_string(),
        Parameter::builtin("if", NamedTypeAnnotation::new("Boolean", false).into()),
    )]))
}

fn deprecated_parameters() -> &'static IndexMap<String, Parameter> {
    static PARAMS: OnceLock<IndexMap<String, Parameter>> = OnceLock::new();
    PARAMS.get_or_init(|| {
        let mut reason = Parameter::builtin(
            "reason",
            NamedTypeAnnotation::new("String", true).into(),
        );
        reason.default_value = Some(graphql_parser::query::Value::String(
            "No longer supported".to_string(),
        ));
        IndexMap::from([("reason".to_string(), reason)])
    })
}

fn specified_by_parameters() -> &'static IndexMap<String, Parameter> {
    static PARAMS: OnceLock<IndexMap<String, Parameter>> = OnceLock::new();
    PARAMS.get_or_init(|| IndexMap::from([(
        "url".to_string(),
        Parameter::builtin("url", NamedTypeAnnotation::new("String", false).into()),
    )]))
}

/// Represents a defined directive.
#[derive(Clone, Debug, PartialEq)]
pub enum Directive {
    Custom {
        def_location: loc::FilePosition,
        is_repeatable: bool,
        locations: Vec<DirectiveLocation>,
        name: String,
        params: IndexMap<String, Parameter>,
    },
    Deprecated,
    Include,
    Skip,
    SpecifiedBy,
}
impl Directive {
    pub fn def_location(&self) -> loc::SchemaDefLocation {
        match self {
            Directive::Custom { def_location, .. } => def_location.clone().into(),
            Directive::Deprecated
                | Directive::Include
                | Directive::Skip
                | Directive::SpecifiedBy => loc::SchemaDefLocation::GraphQLBuiltIn,
        }
    }

    /// Whether the directive was declared `repeatable`, allowing more than one
    /// annotation of it at a single location. None of the built-in
    /// directives are repeatable.
    pub fn is_repeatable(&self) -> bool {
        match self {
            Directive::Custom { is_repeatable, .. } => *is_repeatable,
            Directive::Deprecated
                | Directive::Include
                | Directive::Skip
                | Directive::SpecifiedBy => false,
        }
    }

    pub fn is_valid_in(&self, location: DirectiveLocation) -> bool {
        self.locations().contains(&location)
    }

    pub fn locations(&self) -> &[DirectiveLocation] {
        match self {
            Directive::Custom { locations, .. } => locations.as_slice(),
            Directive::Deprecated => &[
                DirectiveLocation::FieldDefinition,
                DirectiveLocation::ArgumentDefinition,
                DirectiveLocation::InputFieldDefinition,
                DirectiveLocation::EnumValue,
            ],
            Directive::Include | Directive::Skip => &[
                DirectiveLocation::Field,
                DirectiveLocation::FragmentSpread,
                DirectiveLocation::InlineFragment,
            ],
            Directive::SpecifiedBy => &[DirectiveLocation::Scalar],
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Directive::Custom { name, .. } => name.as_str(),
            Directive::Deprecated => "deprecated",
            Directive::Include => "include",
            Directive::Skip => "skip",
            Directive::SpecifiedBy => "specifiedBy",
        }
    }

    pub fn parameters(&self) -> &IndexMap<String, Parameter> {
        match self {
            Directive::Custom { params, .. } => params,
            Directive::Deprecated => deprecated_parameters(),
            Directive::Include | Directive::Skip => if_parameters(),
            Directive::SpecifiedBy => specified_by_parameters(),
        }
    }
}
