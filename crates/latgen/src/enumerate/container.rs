use super::record::{ensure_unique, ContainerRecord};
use crate::config::Logger;
use crate::error::EnumerationError;
use crate::naming::typedef_name;
use crate::types::{ContainerKind, FieldType, TypeLookup};

/// Identifier of a single container test case.
///
/// The field part is the short tag (`EigenDenseVector_complex`), not the canonicalized C++ name
/// (`std__complex_double_`) the generated typedefs use.
pub fn container_identifier(kind: ContainerKind, field: FieldType) -> String {
    typedef_name(&format!("{}_{}", kind, field.tag()))
}

/// Test cases for every container and field type pair accepted by `filter`.
///
/// Pairs are visited kind-major, field-minor, in the order given. A pair rejected by the filter is
/// skipped, a pair accepted by the filter but unknown to `lookup` fails the whole run.
pub fn enumerate_containers<F, L>(
    kinds: &[ContainerKind],
    fields: &[FieldType],
    filter: F,
    lookup: &L,
) -> Result<Vec<ContainerRecord>, EnumerationError>
where
    F: Fn(ContainerKind, FieldType) -> bool,
    L: TypeLookup + ?Sized,
{
    enumerate_containers_logged(kinds, fields, filter, lookup, &mut Logger::disabled())
}

pub(crate) fn enumerate_containers_logged<F, L>(
    kinds: &[ContainerKind],
    fields: &[FieldType],
    filter: F,
    lookup: &L,
    logger: &mut Logger,
) -> Result<Vec<ContainerRecord>, EnumerationError>
where
    F: Fn(ContainerKind, FieldType) -> bool,
    L: TypeLookup + ?Sized,
{
    let mut records = Vec::with_capacity(kinds.len() * fields.len());

    for &kind in kinds {
        for &field in fields {
            let identifier = container_identifier(kind, field);

            if !filter(kind, field) {
                logger.log_exclusion(&format_args!("[{identifier}] excluded by filter"));
                continue;
            }

            let container = lookup
                .resolve(kind, field)
                .map_err(|source| EnumerationError::Lookup {
                    identifier: identifier.clone(),
                    source,
                })?;

            log::trace!("{identifier} => {container}");
            records.push(ContainerRecord::new(identifier, container));
        }
    }

    ensure_unique(&records)?;

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LookupError;
    use crate::types::TypeTable;
    use crate::universe::vector_filter;

    #[test]
    fn identifier_uses_field_tag() {
        assert_eq!(
            container_identifier(ContainerKind::EigenDenseVector, FieldType::ComplexDouble),
            "EigenDenseVector_complex"
        );
        assert_eq!(
            typedef_name("EigenDenseVector_std::complex<double>"),
            "EigenDenseVector_std__complex_double_"
        );
    }

    #[test]
    fn filtered_pairs_are_skipped_silently() {
        let records = enumerate_containers(
            &[ContainerKind::EigenMappedDenseVector],
            &[FieldType::Double, FieldType::ComplexDouble],
            vector_filter,
            &TypeTable::default(),
        )
        .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].identifier, "EigenMappedDenseVector_double");
    }

    #[test]
    fn lookup_failure_after_filter_is_fatal() {
        let err = enumerate_containers(
            &[ContainerKind::EigenMappedDenseVector],
            &[FieldType::ComplexDouble],
            |_, _| true,
            &TypeTable::default(),
        )
        .unwrap_err();

        assert_eq!(
            err,
            EnumerationError::Lookup {
                identifier: "EigenMappedDenseVector_complex".to_string(),
                source: LookupError::Unconstructible {
                    kind: ContainerKind::EigenMappedDenseVector,
                    field: FieldType::ComplexDouble,
                },
            }
        );
    }

    #[test]
    fn repeated_kind_is_a_duplicate() {
        let err = enumerate_containers(
            &[ContainerKind::CommonDenseVector, ContainerKind::CommonDenseVector],
            &[FieldType::Double],
            |_, _| true,
            &TypeTable::default(),
        )
        .unwrap_err();

        assert_eq!(
            err,
            EnumerationError::DuplicateIdentifier("CommonDenseVector_double".to_string())
        );
    }
}
