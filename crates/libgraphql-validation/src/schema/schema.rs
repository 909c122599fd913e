use crate::document::OperationKind;
use crate::schema::SchemaBuilder;
use crate::types::Directive;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use indexmap::IndexMap;

/// Represents a fully built and immutable GraphQL schema.
///
/// A [`Schema`] is only ever read during validation, so a single instance
/// can be shared (e.g. behind an [`Arc`](std::sync::Arc)) by any number of
/// concurrent validation runs.
#[derive(Debug)]
pub struct Schema {
    pub(crate) directive_defs: IndexMap<String, Directive>,
    pub(crate) mutation_type: Option<String>,
    pub(crate) query_type: String,
    pub(crate) subscription_type: Option<String>,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Every directive defined by this schema, including the built-in
    /// directives.
    pub fn defined_directives(&self) -> &IndexMap<String, Directive> {
        &self.directive_defs
    }

    /// Every type defined by this schema, including the built-in scalars.
    pub fn defined_types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }

    pub fn lookup_directive(&self, name: &str) -> Option<&Directive> {
        self.directive_defs.get(name)
    }

    pub fn lookup_type(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    /// The object types a value of the given composite type may resolve to
    /// at runtime:
    ///
    ///   * an object type is its own only possible type,
    ///   * an interface's possible types are the object types implementing it,
    ///   * a union's possible types are its (object) members.
    ///
    /// Non-composite types have no possible types.
    pub fn possible_types<'a>(&'a self, type_: &'a GraphQLType) -> Vec<&'a ObjectType> {
        match type_ {
            GraphQLType::Object(obj_type) => vec![obj_type],
            GraphQLType::Interface(iface_type) =>
                self.types
                    .values()
                    .filter_map(GraphQLType::as_object)
                    .filter(|obj_type| obj_type.implements_interface(iface_type.name()))
                    .collect(),
            GraphQLType::Union(union_type) =>
                union_type.members
                    .iter()
                    .filter_map(|member| self.lookup_type(member))
                    .filter_map(GraphQLType::as_object)
                    .collect(),
            _ => vec![],
        }
    }

    pub fn is_possible_type(&self, abstract_type: &GraphQLType, object_name: &str) -> bool {
        self.possible_types(abstract_type)
            .iter()
            .any(|obj_type| obj_type.name() == object_name)
    }

    /// Whether there is at least one object type that satisfies both `a` and
    /// `b`, i.e. whether a fragment scoped to one could ever apply within a
    /// selection set scoped to the other.
    pub fn types_overlap(&self, a: &GraphQLType, b: &GraphQLType) -> bool {
        if a.name() == b.name() {
            return a.is_composite_type();
        }
        let b_possible = self.possible_types(b);
        self.possible_types(a)
            .iter()
            .any(|a_obj| b_possible.iter().any(|b_obj| a_obj.name() == b_obj.name()))
    }

    pub fn mutation_type(&self) -> Option<&ObjectType> {
        self.lookup_type(self.mutation_type.as_deref()?)?.as_object()
    }

    pub fn query_type(&self) -> Option<&ObjectType> {
        self.lookup_type(self.query_type.as_str())?.as_object()
    }

    /// The root type a given kind of operation is scoped to, if the schema
    /// supports that kind of operation.
    pub fn root_operation_type(&self, kind: OperationKind) -> Option<&GraphQLType> {
        let type_name = match kind {
            OperationKind::Query => Some(self.query_type.as_str()),
            OperationKind::Mutation => self.mutation_type.as_deref(),
            OperationKind::Subscription => self.subscription_type.as_deref(),
        }?;
        self.lookup_type(type_name)
    }

    pub fn subscription_type(&self) -> Option<&ObjectType> {
        self.lookup_type(self.subscription_type.as_deref()?)?.as_object()
    }
}
