use crate::types::TypeAnnotation;

#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ListTypeAnnotation {
    pub(crate) inner_type_ref: Box<TypeAnnotation>,
    pub(crate) nullable: bool,
}
impl ListTypeAnnotation {
    pub fn new(inner: impl Into<TypeAnnotation>, nullable: bool) -> Self {
        Self {
            inner_type_ref: Box::new(inner.into()),
            nullable,
        }
    }

    pub fn inner_type_annotation(&self) -> &TypeAnnotation {
        &self.inner_type_ref
    }

    pub fn is_equivalent_to(&self, other: &Self) -> bool {
        self.nullable == other.nullable
            && self.inner_type_ref.is_equivalent_to(&other.inner_type_ref)
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }
}
