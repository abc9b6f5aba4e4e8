//! Providers of the container and field universes for a given build.

use strum::IntoEnumIterator;

use crate::config::BuildConfig;
use crate::types::{ContainerKind, ContainerRole, FieldType};

/// Available vector kinds, in declaration order.
pub fn vectors(config: &BuildConfig) -> Vec<ContainerKind> {
    containers(config, ContainerRole::Vector)
}

/// Available matrix kinds, in declaration order.
pub fn matrices(config: &BuildConfig) -> Vec<ContainerKind> {
    containers(config, ContainerRole::Matrix)
}

fn containers(config: &BuildConfig, role: ContainerRole) -> Vec<ContainerKind> {
    ContainerKind::iter()
        .filter(|kind| kind.role() == role)
        .filter(|kind| config.backends.is_available(kind.backend()))
        .collect()
}

/// Configured field types, in declaration order and without repetition.
pub fn field_types(config: &BuildConfig) -> Vec<FieldType> {
    FieldType::iter()
        .filter(|field| config.types.fields.contains(field))
        .collect()
}

/// Whether a vector kind gets tests for the given field type.
///
/// The mapped Eigen vector wraps an existing buffer of reals and only exists for real fields.
pub fn vector_filter(kind: ContainerKind, field: FieldType) -> bool {
    !(kind == ContainerKind::EigenMappedDenseVector && field.is_complex())
}

/// Whether a matrix kind gets tests for the given field type.
pub fn matrix_filter(_kind: ContainerKind, _field: FieldType) -> bool {
    true
}
