use hashbrown::HashSet;

use crate::error::EnumerationError;
use crate::types::{FieldType, TypeDescriptor};

/// One generated test translation unit.
pub trait TestCaseRecord {
    /// Symbol-safe identifier, unique within a run.
    fn identifier(&self) -> &str;

    /// The resolved types the test is instantiated with, in role order.
    fn descriptors(&self) -> Vec<&TypeDescriptor>;
}

/// Test case for a single container type.
#[derive(new, Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ContainerRecord {
    pub identifier: String,
    pub container: TypeDescriptor,
}

impl TestCaseRecord for ContainerRecord {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn descriptors(&self) -> Vec<&TypeDescriptor> {
        vec![&self.container]
    }
}

/// Test case for a solver: an operator matrix with its range and source vectors, all over the
/// same field type.
#[derive(new, Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SolverRecord {
    pub identifier: String,
    pub field: FieldType,
    pub matrix: TypeDescriptor,
    pub range: TypeDescriptor,
    pub source: TypeDescriptor,
}

impl TestCaseRecord for SolverRecord {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn descriptors(&self) -> Vec<&TypeDescriptor> {
        vec![&self.matrix, &self.range, &self.source]
    }
}

/// Fails on the first identifier produced twice.
pub(crate) fn ensure_unique<R: TestCaseRecord>(records: &[R]) -> Result<(), EnumerationError> {
    let mut seen = HashSet::with_capacity(records.len());

    for record in records {
        if !seen.insert(record.identifier()) {
            return Err(EnumerationError::DuplicateIdentifier(
                record.identifier().to_string(),
            ));
        }
    }

    Ok(())
}
