use latgen::config::{BackendAvailability, BuildConfig, Logger};
use latgen::enumerate::{enumerate_containers, enumerate_solvers, SolverCase, SolverCatalog};
use latgen::error::{EnumerationError, LookupError};
use latgen::naming::is_typedef_name;
use latgen::types::{ContainerKind, FieldType, TypeTable};
use latgen::universe::vector_filter;
use latgen::{Enumerator, TestCaseRecord};
use pretty_assertions::assert_eq;
use serial_test::serial;

const ALL_FIELDS: [FieldType; 2] = [FieldType::Double, FieldType::ComplexDouble];
const EIGEN_DENSE: &str = "EigenDenseMatrix_EigenDenseVector_EigenDenseVector_double";

fn identifiers<R: TestCaseRecord>(records: &[R]) -> Vec<String> {
    records.iter().map(|r| r.identifier().to_string()).collect()
}

fn availability(eigen: bool, istl: bool) -> BackendAvailability {
    BackendAvailability { eigen, istl }
}

#[test_log::test]
fn vectors_follow_cross_product_order_and_filter() {
    let records = enumerate_containers(
        &[
            ContainerKind::EigenDenseVector,
            ContainerKind::EigenMappedDenseVector,
        ],
        &[FieldType::Double, FieldType::ComplexDouble],
        vector_filter,
        &TypeTable::default(),
    )
    .unwrap();

    assert_eq!(
        identifiers(&records),
        vec![
            "EigenDenseVector_double",
            "EigenDenseVector_complex",
            "EigenMappedDenseVector_double",
        ]
    );
    assert_eq!(
        records[1].container.to_string(),
        "Dune::XT::LA::EigenDenseVector<std::complex<double>>"
    );
}

#[test_log::test]
fn eigen_solver_case_follows_availability() {
    let catalog = SolverCatalog::new([SolverCase::parse(EIGEN_DENSE).unwrap()]).unwrap();
    let lookup = TypeTable::default();

    let without = enumerate_solvers(
        &catalog,
        &availability(false, true),
        &ALL_FIELDS,
        &lookup,
    )
    .unwrap();
    assert!(without.is_empty());

    let with = enumerate_solvers(
        &catalog,
        &availability(true, false),
        &ALL_FIELDS,
        &lookup,
    )
    .unwrap();
    assert_eq!(with.len(), 1);

    let record = &with[0];
    assert_eq!(record.identifier, EIGEN_DENSE);
    assert_eq!(record.field, FieldType::Double);
    assert_eq!(record.matrix.kind, ContainerKind::EigenDenseMatrix);
    for descriptor in record.descriptors() {
        assert_eq!(descriptor.field, FieldType::Double);
    }
}

#[test_log::test]
fn toggling_a_backend_changes_exactly_its_entries() {
    let catalog = SolverCatalog::builtin().unwrap();
    let lookup = TypeTable::default();

    let native = enumerate_solvers(
        &catalog,
        &availability(false, false),
        &ALL_FIELDS,
        &lookup,
    )
    .unwrap();
    let eigen = enumerate_solvers(
        &catalog,
        &availability(true, false),
        &ALL_FIELDS,
        &lookup,
    )
    .unwrap();
    let all = enumerate_solvers(
        &catalog,
        &availability(true, true),
        &ALL_FIELDS,
        &lookup,
    )
    .unwrap();

    assert_eq!(
        identifiers(&native),
        vec![
            "CommonDenseMatrix_CommonDenseVector_CommonDenseVector_complex",
            "CommonDenseMatrix_CommonDenseVector_CommonDenseVector_double",
        ]
    );

    let added: Vec<String> = identifiers(&eigen)
        .into_iter()
        .filter(|id| !identifiers(&native).contains(id))
        .collect();
    assert_eq!(added.len(), 7);
    assert!(added.iter().all(|id| id.starts_with("Eigen")));

    assert_eq!(all.len(), 10);
    assert_eq!(
        all.last().unwrap().identifier,
        "IstlRowMajorSparseMatrix_IstlDenseVector_IstlDenseVector_double"
    );
}

#[test_log::test]
fn missing_lookup_entry_fails_naming_the_case() {
    let catalog = SolverCatalog::new([SolverCase::parse(EIGEN_DENSE).unwrap()]).unwrap();
    let lookup = TypeTable::default().without(ContainerKind::EigenDenseMatrix, FieldType::Double);

    let err = enumerate_solvers(
        &catalog,
        &availability(true, false),
        &ALL_FIELDS,
        &lookup,
    )
    .unwrap_err();

    assert_eq!(
        err,
        EnumerationError::Lookup {
            identifier: EIGEN_DENSE.to_string(),
            source: LookupError::Unconstructible {
                kind: ContainerKind::EigenDenseMatrix,
                field: FieldType::Double,
            },
        }
    );
    assert!(err.to_string().contains(EIGEN_DENSE));
}

#[test_log::test]
fn unavailable_case_never_reaches_lookup() {
    let catalog = SolverCatalog::new([SolverCase::parse(EIGEN_DENSE).unwrap()]).unwrap();
    let lookup = TypeTable::new("Dune::XT::LA");

    let records = enumerate_solvers(
        &catalog,
        &availability(false, false),
        &ALL_FIELDS,
        &lookup,
    )
    .unwrap();

    assert!(records.is_empty());
}

#[test_log::test]
fn full_build_identifiers_are_unique_and_symbol_safe() {
    let config = BuildConfig {
        backends: BackendAvailability::all(),
        ..Default::default()
    };
    let lookup = TypeTable::from(&config.types);
    let mut enumerator = Enumerator::new(&config, &lookup).with_logger(Logger::disabled());

    let mut all = identifiers(&enumerator.vectors().unwrap());
    all.extend(identifiers(&enumerator.matrices().unwrap()));
    let catalog = enumerator.solver_catalog().unwrap();
    all.extend(identifiers(&enumerator.solvers(&catalog).unwrap()));

    let mut deduplicated = all.clone();
    deduplicated.sort();
    deduplicated.dedup();

    assert_eq!(deduplicated.len(), all.len());
    assert!(all.iter().all(|id| is_typedef_name(id)));
    // 5 vectors x 2 fields minus the complex mapped vector, 5 matrices x 2 fields, 10 solvers.
    assert_eq!(all.len(), 9 + 10 + 10);
}

#[test_log::test]
fn enumeration_is_deterministic() {
    let config = BuildConfig {
        backends: availability(true, false),
        ..Default::default()
    };
    let lookup = TypeTable::default();

    let run = || {
        let mut enumerator = Enumerator::new(&config, &lookup).with_logger(Logger::disabled());
        let catalog = enumerator.solver_catalog().unwrap();
        (
            enumerator.vectors().unwrap(),
            enumerator.solvers(&catalog).unwrap(),
        )
    };

    let (vectors_a, solvers_a) = run();
    let (vectors_b, solvers_b) = run();

    assert_eq!(vectors_a, vectors_b);
    assert_eq!(solvers_a, solvers_b);
    assert_eq!(
        serde_json::to_string(&solvers_a).unwrap(),
        serde_json::to_string(&solvers_b).unwrap()
    );
}

#[test_log::test]
fn configured_extra_cases_and_fields_are_used() {
    let config = BuildConfig::from_toml(
        r#"
        [backends]
        istl = true

        [types]
        namespace = "LA"
        fields = ["double"]

        [solver]
        extra_cases = ["CommonSparseMatrix_CommonDenseVector_CommonDenseVector_double"]
        "#,
    )
    .unwrap();
    let lookup = TypeTable::from(&config.types);
    let mut enumerator = Enumerator::new(&config, &lookup).with_logger(Logger::disabled());

    let vectors = enumerator.vectors().unwrap();
    assert_eq!(
        identifiers(&vectors),
        vec![
            "CommonDenseVector_double",
            "CommonSparseVector_double",
            "IstlDenseVector_double",
        ]
    );

    let catalog = enumerator.solver_catalog().unwrap();
    let solvers = enumerator.solvers(&catalog).unwrap();
    let extra = solvers.last().unwrap();
    assert_eq!(
        extra.identifier,
        "CommonSparseMatrix_CommonDenseVector_CommonDenseVector_double"
    );
    assert_eq!(extra.matrix.to_string(), "LA::CommonSparseMatrix<double>");
    assert!(solvers.iter().all(|record| record.field == FieldType::Double));
    assert!(!identifiers(&solvers).iter().any(|id| id.ends_with("_complex")));
}

#[test_log::test]
fn complex_solver_cases_follow_the_field_selection() {
    let config = BuildConfig::from_toml("[types]\nfields = [\"double\"]").unwrap();
    let lookup = TypeTable::from(&config.types);
    let mut enumerator = Enumerator::new(&config, &lookup).with_logger(Logger::disabled());
    let catalog = enumerator.solver_catalog().unwrap();

    let records = enumerator.solvers(&catalog).unwrap();

    assert_eq!(
        identifiers(&records),
        vec!["CommonDenseMatrix_CommonDenseVector_CommonDenseVector_double"]
    );
}

#[test_log::test]
fn invalid_extra_case_is_reported() {
    let mut config = BuildConfig::default();
    config.solver.extra_cases = vec!["EigenDenseMatrix_IstlDenseVector_IstlDenseVector_double".into()];
    let lookup = TypeTable::default();
    let enumerator = Enumerator::new(&config, &lookup).with_logger(Logger::disabled());

    assert!(enumerator.solver_catalog().is_err());
}

#[test]
#[serial]
fn environment_overrides_backend_availability() {
    std::env::set_var("LATGEN_HAVE_EIGEN", "true");
    std::env::set_var("LATGEN_HAVE_ISTL", "false");

    let config = BuildConfig::default().override_from_env();

    std::env::remove_var("LATGEN_HAVE_EIGEN");
    std::env::remove_var("LATGEN_HAVE_ISTL");

    assert_eq!(config.backends, availability(true, false));
}

#[test]
#[serial]
fn config_file_is_found_in_parent_directory() {
    let root = std::env::temp_dir().join(format!("latgen-config-{}", std::process::id()));
    let nested = root.join("a").join("b");
    std::fs::create_dir_all(&nested).unwrap();
    std::fs::write(root.join("latgen.toml"), "[backends]\nistl = true\n").unwrap();

    let found = BuildConfig::find_in_ancestors(&nested);
    let config = BuildConfig::from_file_path(found.clone().unwrap()).unwrap();
    std::fs::remove_dir_all(&root).ok();

    assert_eq!(found, Some(root.join("latgen.toml")));
    assert!(config.backends.istl);
}
