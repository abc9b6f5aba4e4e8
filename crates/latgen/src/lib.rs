//! Enumerates the container, field type and solver combinations of the linear-algebra test suite.
//!
//! Every enumerator is a pure function of the [config::BuildConfig], the type lookup and, for
//! solvers, the [enumerate::SolverCatalog]. The ordered records it returns are handed to the code
//! generator, which emits one test translation unit per record.

#[macro_use]
extern crate derive_new;

/// Build configuration module.
pub mod config;
/// Enumerators and the records they produce.
pub mod enumerate;
/// Error types.
pub mod error;
/// Symbol-safe identifiers.
pub mod naming;
/// Container, field and descriptor types.
pub mod types;
pub mod universe;

pub use config::BuildConfig;
pub use enumerate::{
    ContainerRecord, Enumerator, SolverCase, SolverCatalog, SolverRecord, TestCaseRecord,
};
pub use error::{CatalogError, ConfigError, EnumerationError, LookupError};
pub use types::{TypeLookup, TypeTable};
