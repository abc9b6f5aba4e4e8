use core::fmt::Display;
use std::sync::Arc;

use hashbrown::HashSet;
use strum::IntoEnumIterator;

use super::{ContainerKind, FieldType};
use crate::config::types::TypesConfig;
use crate::error::LookupError;

/// Namespace of the container types in the generated sources.
pub const DEFAULT_NAMESPACE: &str = "Dune::XT::LA";

/// Fully resolved container type for one field type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct TypeDescriptor {
    pub kind: ContainerKind,
    pub field: FieldType,
    pub namespace: Arc<str>,
}

impl TypeDescriptor {
    /// The qualified type name, e.g. `Dune::XT::LA::EigenDenseVector<double>`.
    pub fn qualified_name(&self) -> String {
        self.to_string()
    }
}

impl Display for TypeDescriptor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.namespace.is_empty() {
            write!(f, "{}<{}>", self.kind, self.field.cpp_name())
        } else {
            write!(
                f,
                "{}::{}<{}>",
                self.namespace,
                self.kind,
                self.field.cpp_name()
            )
        }
    }
}

/// Resolves a container kind and a field type to a concrete type.
///
/// Implementations must be pure: the same pair always gives the same answer.
pub trait TypeLookup {
    fn resolve(&self, kind: ContainerKind, field: FieldType)
        -> Result<TypeDescriptor, LookupError>;
}

/// Table of the constructible container types.
#[derive(Debug, Clone)]
pub struct TypeTable {
    namespace: Arc<str>,
    entries: HashSet<(ContainerKind, FieldType)>,
}

impl TypeTable {
    /// Empty table, nothing is constructible.
    pub fn new<S: Into<Arc<str>>>(namespace: S) -> Self {
        Self {
            namespace: namespace.into(),
            entries: HashSet::new(),
        }
    }

    /// Every container with every field type, except the mapped Eigen vector which only exists
    /// for real fields.
    pub fn standard<S: Into<Arc<str>>>(namespace: S) -> Self {
        let mut table = Self::new(namespace);
        for kind in ContainerKind::iter() {
            table = table.register(kind, FieldType::iter());
        }

        table.without(ContainerKind::EigenMappedDenseVector, FieldType::ComplexDouble)
    }

    pub fn register<I: IntoIterator<Item = FieldType>>(
        mut self,
        kind: ContainerKind,
        fields: I,
    ) -> Self {
        for field in fields {
            self.entries.insert((kind, field));
        }
        self
    }

    pub fn without(mut self, kind: ContainerKind, field: FieldType) -> Self {
        self.entries.remove(&(kind, field));
        self
    }

    pub fn contains(&self, kind: ContainerKind, field: FieldType) -> bool {
        self.entries.contains(&(kind, field))
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

impl Default for TypeTable {
    fn default() -> Self {
        Self::standard(DEFAULT_NAMESPACE)
    }
}

impl From<&TypesConfig> for TypeTable {
    fn from(config: &TypesConfig) -> Self {
        Self::standard(config.namespace.as_str())
    }
}

impl TypeLookup for TypeTable {
    fn resolve(
        &self,
        kind: ContainerKind,
        field: FieldType,
    ) -> Result<TypeDescriptor, LookupError> {
        if !self.contains(kind, field) {
            return Err(LookupError::Unconstructible { kind, field });
        }

        Ok(TypeDescriptor {
            kind,
            field,
            namespace: self.namespace.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_qualified_name() {
        let table = TypeTable::default();
        let descriptor = table
            .resolve(ContainerKind::EigenDenseVector, FieldType::ComplexDouble)
            .unwrap();

        assert_eq!(
            descriptor.qualified_name(),
            "Dune::XT::LA::EigenDenseVector<std::complex<double>>"
        );
    }

    #[test]
    fn empty_namespace_renders_bare_name() {
        let table = TypeTable::standard("");
        let descriptor = table
            .resolve(ContainerKind::CommonDenseMatrix, FieldType::Double)
            .unwrap();

        assert_eq!(descriptor.to_string(), "CommonDenseMatrix<double>");
    }

    #[test]
    fn mapped_complex_vector_is_unconstructible() {
        let table = TypeTable::default();
        let err = table
            .resolve(ContainerKind::EigenMappedDenseVector, FieldType::ComplexDouble)
            .unwrap_err();

        assert_eq!(
            err,
            LookupError::Unconstructible {
                kind: ContainerKind::EigenMappedDenseVector,
                field: FieldType::ComplexDouble,
            }
        );
    }
}
