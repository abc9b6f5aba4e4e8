use crate::types::{Backend, ContainerKind, ContainerRole, FieldType};
use thiserror::Error;

/// A container kind and field type pair that can't be turned into a concrete type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("{kind} can't be constructed with field type {field}")]
    Unconstructible {
        kind: ContainerKind,
        field: FieldType,
    },
}

/// Inconsistent solver catalog entry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The flat identifier doesn't split into operator, range, source and field.
    #[error("Malformed solver case '{input}': expected 4 '_'-separated parts, got {parts}")]
    Malformed { input: String, parts: usize },

    #[error("Unknown container '{0}'")]
    UnknownContainer(String),

    #[error("Unknown field type '{0}'")]
    UnknownField(String),

    /// A container is used in a role it can't play, e.g. a vector as the operator.
    #[error("Solver case '{case}' uses {kind} as {expected}")]
    RoleMismatch {
        case: String,
        kind: ContainerKind,
        expected: ContainerRole,
    },

    /// An entry uses containers of more than one optional backend.
    #[error("Solver case '{case}' mixes optional backends {first} and {second}")]
    MixedBackends {
        case: String,
        first: Backend,
        second: Backend,
    },

    #[error("Solver case '{0}' is listed more than once")]
    Duplicate(String),
}

/// Fatal failure of an enumeration run.
///
/// Excluded combinations are never reported here, only inconsistencies between the filters, the
/// catalog and the type table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnumerationError {
    /// A combination passed filtering but the type table can't construct it.
    #[error("Test case '{identifier}' passed filtering but can't be resolved\nCaused by:\n  {source}")]
    Lookup {
        identifier: String,
        #[source]
        source: LookupError,
    },

    #[error("Invalid solver catalog\nCaused by:\n  {0}")]
    Catalog(#[from] CatalogError),

    /// Two different inputs canonicalized to the same identifier.
    #[error("Identifier '{0}' is produced more than once")]
    DuplicateIdentifier(String),
}

/// Configuration loading failure.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Can't read the configuration\nCaused by:\n  {0}")]
    Io(#[from] std::io::Error),

    #[error("The configuration doesn't have the right format\nCaused by:\n  {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Can't serialize the configuration\nCaused by:\n  {0}")]
    Serialize(#[from] toml::ser::Error),
}
