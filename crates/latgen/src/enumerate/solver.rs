use core::fmt::Display;

use hashbrown::HashSet;

use super::record::{ensure_unique, SolverRecord};
use crate::config::{BackendAvailability, Logger};
use crate::error::{CatalogError, EnumerationError};
use crate::naming::typedef_name;
use crate::types::{Backend, ContainerKind, ContainerRole, FieldTag, FieldType, TypeLookup};

/// One solver catalog entry: the operator matrix, the vector types of its range and source, and
/// the field all three share.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SolverCase {
    pub operator: ContainerKind,
    pub range: ContainerKind,
    pub source: ContainerKind,
    pub field: FieldTag,
}

impl SolverCase {
    pub const fn new(
        operator: ContainerKind,
        range: ContainerKind,
        source: ContainerKind,
        field: FieldTag,
    ) -> Self {
        Self {
            operator,
            range,
            source,
            field,
        }
    }

    /// Parse a flat `Matrix_RangeVector_SourceVector_field` identifier.
    pub fn parse(flat: &str) -> Result<Self, CatalogError> {
        let parts: Vec<&str> = flat.trim().split('_').collect();

        let [operator, range, source, field] = parts.as_slice() else {
            return Err(CatalogError::Malformed {
                input: flat.to_string(),
                parts: parts.len(),
            });
        };

        Ok(Self {
            operator: ContainerKind::parse(operator)?,
            range: ContainerKind::parse(range)?,
            source: ContainerKind::parse(source)?,
            field: FieldTag::from(*field),
        })
    }

    /// Identifier of the generated test case.
    ///
    /// The field part is the catalog tag as written (`_complex`, `_double`), not the
    /// canonicalized C++ name (`std__complex_double_`).
    pub fn identifier(&self) -> String {
        typedef_name(&self.to_string())
    }

    /// The optional backend this entry needs, if any.
    ///
    /// An entry may use a single optional backend across its three containers.
    pub fn required_backend(&self) -> Result<Option<Backend>, CatalogError> {
        let mut required: Option<Backend> = None;

        for backend in self.containers().map(|kind| kind.backend()) {
            if !backend.is_optional() {
                continue;
            }

            match required {
                None => required = Some(backend),
                Some(first) if first != backend => {
                    return Err(CatalogError::MixedBackends {
                        case: self.to_string(),
                        first,
                        second: backend,
                    });
                }
                Some(_) => {}
            }
        }

        Ok(required)
    }

    /// Check roles, backends and field of the entry.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let roles = [
            (self.operator, ContainerRole::Matrix),
            (self.range, ContainerRole::Vector),
            (self.source, ContainerRole::Vector),
        ];

        for (kind, expected) in roles {
            if kind.role() != expected {
                return Err(CatalogError::RoleMismatch {
                    case: self.to_string(),
                    kind,
                    expected,
                });
            }
        }

        self.required_backend()?;
        self.field.resolve()?;

        Ok(())
    }

    fn containers(&self) -> impl Iterator<Item = ContainerKind> {
        [self.operator, self.range, self.source].into_iter()
    }
}

impl Display for SolverCase {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}_{}_{}_{}",
            self.operator, self.range, self.source, self.field
        )
    }
}

const DOUBLE: FieldTag = FieldTag::literal("double");

/// The hand-maintained solver catalog, in generation order.
const BUILTIN_CASES: [SolverCase; 10] = {
    use ContainerKind::*;

    [
        SolverCase::new(CommonDenseMatrix, CommonDenseVector, CommonDenseVector, FieldTag::Complex),
        SolverCase::new(CommonDenseMatrix, CommonDenseVector, CommonDenseVector, DOUBLE),
        SolverCase::new(EigenDenseMatrix, EigenDenseVector, EigenDenseVector, FieldTag::Complex),
        SolverCase::new(EigenDenseMatrix, EigenDenseVector, EigenDenseVector, DOUBLE),
        SolverCase::new(EigenDenseMatrix, EigenDenseVector, EigenMappedDenseVector, DOUBLE),
        SolverCase::new(EigenDenseMatrix, EigenMappedDenseVector, EigenDenseVector, DOUBLE),
        SolverCase::new(EigenDenseMatrix, EigenMappedDenseVector, EigenMappedDenseVector, DOUBLE),
        SolverCase::new(
            EigenRowMajorSparseMatrix,
            EigenDenseVector,
            EigenDenseVector,
            FieldTag::Complex,
        ),
        SolverCase::new(EigenRowMajorSparseMatrix, EigenDenseVector, EigenDenseVector, DOUBLE),
        SolverCase::new(IstlRowMajorSparseMatrix, IstlDenseVector, IstlDenseVector, DOUBLE),
    ]
};

/// Ordered, validated list of solver cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverCatalog {
    cases: Vec<SolverCase>,
}

impl SolverCatalog {
    /// Validate every entry and reject entries producing the same identifier or naming the same
    /// types, e.g. `complex` and `std::complex<double>` for otherwise equal containers.
    pub fn new<I: IntoIterator<Item = SolverCase>>(cases: I) -> Result<Self, CatalogError> {
        let cases: Vec<SolverCase> = cases.into_iter().collect();
        let mut identifiers = HashSet::with_capacity(cases.len());
        let mut resolved = HashSet::with_capacity(cases.len());

        for case in cases.iter() {
            case.validate()?;

            let types = (case.operator, case.range, case.source, case.field.resolve()?);
            if !identifiers.insert(case.identifier()) || !resolved.insert(types) {
                return Err(CatalogError::Duplicate(case.to_string()));
            }
        }

        Ok(Self { cases })
    }

    /// The built-in catalog.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(BUILTIN_CASES)
    }

    /// Append entries given as flat identifiers.
    pub fn with_extra<S: AsRef<str>>(self, extra: &[S]) -> Result<Self, CatalogError> {
        let parsed = extra
            .iter()
            .map(|flat| SolverCase::parse(flat.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(self.cases.into_iter().chain(parsed))
    }

    pub fn cases(&self) -> &[SolverCase] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

/// Test cases for every catalog entry whose backend is available, in catalog order.
///
/// Entries whose field type isn't in `fields` are skipped like unavailable backends.
pub fn enumerate_solvers<L: TypeLookup + ?Sized>(
    catalog: &SolverCatalog,
    availability: &BackendAvailability,
    fields: &[FieldType],
    lookup: &L,
) -> Result<Vec<SolverRecord>, EnumerationError> {
    enumerate_solvers_logged(
        catalog,
        availability,
        fields,
        lookup,
        &mut Logger::disabled(),
    )
}

pub(crate) fn enumerate_solvers_logged<L: TypeLookup + ?Sized>(
    catalog: &SolverCatalog,
    availability: &BackendAvailability,
    fields: &[FieldType],
    lookup: &L,
    logger: &mut Logger,
) -> Result<Vec<SolverRecord>, EnumerationError> {
    let mut records = Vec::with_capacity(catalog.len());

    for case in catalog.cases() {
        let identifier = case.identifier();

        if let Some(backend) = case.required_backend()? {
            if !availability.is_available(backend) {
                logger.log_exclusion(&format_args!(
                    "[{identifier}] excluded, backend {backend} unavailable"
                ));
                continue;
            }
        }

        let field = case.field.resolve()?;
        if !fields.contains(&field) {
            logger.log_exclusion(&format_args!(
                "[{identifier}] excluded, field type {field} not enumerated"
            ));
            continue;
        }

        let resolve = |kind: ContainerKind| {
            lookup
                .resolve(kind, field)
                .map_err(|source| EnumerationError::Lookup {
                    identifier: identifier.clone(),
                    source,
                })
        };

        let matrix = resolve(case.operator)?;
        let range = resolve(case.range)?;
        let source = resolve(case.source)?;

        log::trace!("{identifier} => {matrix}, {range}, {source}");
        records.push(SolverRecord::new(identifier, field, matrix, range, source));
    }

    ensure_unique(&records)?;

    Ok(records)
}
