use crate::loc;
use crate::types::Field;
use indexmap::IndexMap;

/// Represents an
/// [object type](https://spec.graphql.org/October2021/#sec-Objects) defined
/// within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectType {
    pub(crate) def_location: loc::FilePosition,
    pub(crate) fields: IndexMap<String, Field>,
    pub(crate) interfaces: Vec<String>,
    pub(crate) name: String,
}
impl ObjectType {
    /// The [`FilePosition`](loc::FilePosition) indicating where this
    /// [`ObjectType`] was defined within the schema.
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    /// The fields defined on this type, in schema-definition order. Fields
    /// added by type extensions follow the fields of the original definition.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    pub fn implements_interface(&self, interface_name: &str) -> bool {
        self.interfaces.iter().any(|name| name == interface_name)
    }

    /// Names of the interfaces this type declares that it implements.
    pub fn interface_names(&self) -> Vec<&str> {
        self.interfaces.iter().map(|name| name.as_str()).collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
