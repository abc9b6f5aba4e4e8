mod container;
mod record;
mod solver;

pub use container::*;
pub use record::{ContainerRecord, SolverRecord, TestCaseRecord};
pub use solver::*;

use crate::config::{BuildConfig, Logger};
use crate::error::{CatalogError, EnumerationError};
use crate::types::TypeLookup;
use crate::universe;

/// Runs the enumerators of one generation run against an explicit configuration.
///
/// The configuration is read once, when the enumerator is created.
pub struct Enumerator<'a, L: TypeLookup + ?Sized> {
    config: &'a BuildConfig,
    lookup: &'a L,
    logger: Logger,
}

impl<'a, L: TypeLookup + ?Sized> Enumerator<'a, L> {
    pub fn new(config: &'a BuildConfig, lookup: &'a L) -> Self {
        Self {
            config,
            lookup,
            logger: Logger::new(&config.logger),
        }
    }

    /// Replace the logger built from the configuration.
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    /// Vector test cases of the build.
    pub fn vectors(&mut self) -> Result<Vec<ContainerRecord>, EnumerationError> {
        let kinds = universe::vectors(self.config);
        let fields = universe::field_types(self.config);

        let records = enumerate_containers_logged(
            &kinds,
            &fields,
            universe::vector_filter,
            self.lookup,
            &mut self.logger,
        )?;

        self.logger.log_summary(&format_args!(
            "Enumerated {} vector test cases out of {} combinations",
            records.len(),
            kinds.len() * fields.len()
        ));

        Ok(records)
    }

    /// Matrix test cases of the build.
    pub fn matrices(&mut self) -> Result<Vec<ContainerRecord>, EnumerationError> {
        let kinds = universe::matrices(self.config);
        let fields = universe::field_types(self.config);

        let records = enumerate_containers_logged(
            &kinds,
            &fields,
            universe::matrix_filter,
            self.lookup,
            &mut self.logger,
        )?;

        self.logger.log_summary(&format_args!(
            "Enumerated {} matrix test cases out of {} combinations",
            records.len(),
            kinds.len() * fields.len()
        ));

        Ok(records)
    }

    /// The built-in solver catalog extended with the configured extra cases.
    pub fn solver_catalog(&self) -> Result<SolverCatalog, CatalogError> {
        SolverCatalog::builtin()?.with_extra(&self.config.solver.extra_cases)
    }

    /// Solver test cases of the given catalog, restricted to the configured field types.
    pub fn solvers(
        &mut self,
        catalog: &SolverCatalog,
    ) -> Result<Vec<SolverRecord>, EnumerationError> {
        let fields = universe::field_types(self.config);
        let records = enumerate_solvers_logged(
            catalog,
            &self.config.backends,
            &fields,
            self.lookup,
            &mut self.logger,
        )?;

        self.logger.log_summary(&format_args!(
            "Enumerated {} solver test cases out of {} catalog entries",
            records.len(),
            catalog.len()
        ));

        Ok(records)
    }
}
