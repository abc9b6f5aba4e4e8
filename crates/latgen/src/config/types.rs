use strum::IntoEnumIterator;

use crate::types::{FieldType, DEFAULT_NAMESPACE};

/// Configuration of the type universe.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct TypesConfig {
    /// Namespace prefixed to every resolved container type.
    #[serde(default = "namespace_default")]
    pub namespace: String,

    /// Field types to enumerate. Enumeration always follows declaration order, not the order
    /// given here.
    #[serde(default = "fields_default")]
    pub fields: Vec<FieldType>,
}

impl Default for TypesConfig {
    fn default() -> Self {
        Self {
            namespace: namespace_default(),
            fields: fields_default(),
        }
    }
}

fn namespace_default() -> String {
    DEFAULT_NAMESPACE.to_string()
}

fn fields_default() -> Vec<FieldType> {
    FieldType::iter().collect()
}

/// Configuration of the solver catalog.
#[derive(Default, Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SolverConfig {
    /// Extra catalog entries, as flat `Matrix_RangeVector_SourceVector_field` identifiers,
    /// appended after the built-in ones.
    #[serde(default)]
    pub extra_cases: Vec<String>,
}
