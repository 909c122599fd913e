#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NamedTypeAnnotation {
    pub(crate) nullable: bool,
    pub(crate) type_name: String,
}

impl NamedTypeAnnotation {
    pub fn new(type_name: impl AsRef<str>, nullable: bool) -> Self {
        Self {
            nullable,
            type_name: type_name.as_ref().to_string(),
        }
    }

    pub fn graphql_type_name(&self) -> &str {
        self.type_name.as_str()
    }

    pub fn is_equivalent_to(&self, other: &Self) -> bool {
        self.nullable == other.nullable
            && self.type_name == other.type_name
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }
}
