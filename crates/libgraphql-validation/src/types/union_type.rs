use crate::loc;

/// Represents a
/// [union type](https://spec.graphql.org/October2021/#sec-Unions) defined
/// within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct UnionType {
    pub(crate) def_location: loc::FilePosition,
    pub(crate) members: Vec<String>,
    pub(crate) name: String,
}
impl UnionType {
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub fn has_member(&self, type_name: &str) -> bool {
        self.members.iter().any(|name| name == type_name)
    }

    /// An ordered list of the names of each type defined as a member of this
    /// union.
    ///
    /// The order retains the order of members on the union definition in the
    /// schema, followed by members added from type extensions.
    pub fn member_type_names(&self) -> Vec<&str> {
        self.members.iter().map(|name| name.as_str()).collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
