//! Prints the test cases of a build for the code generator.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use latgen::types::{
    default_backend, default_dense_backend, default_sparse_backend, ContainerBackend, ContainerKind,
};
use latgen::{BuildConfig, Enumerator, TestCaseRecord, TypeTable};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "latgen")]
#[command(about = "Enumerate the linear-algebra test cases of a build", long_about = None)]
struct Cli {
    /// Configuration file, looked up from the current directory when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the Eigen availability of the configuration
    #[arg(long, global = true)]
    eigen: Option<bool>,

    /// Override the dune-istl availability of the configuration
    #[arg(long, global = true)]
    istl: Option<bool>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = Format::Json)]
    format: Format,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Vector container test cases
    Vectors,
    /// Matrix container test cases
    Matrices,
    /// Solver test cases
    Solvers,
    /// Default container backends of the build
    Backends,
    /// Write the default configuration to a file
    SaveConfig {
        /// Destination file
        path: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Records as a JSON array
    Json,
    /// One identifier per line
    Names,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Vectors => {
            let config = load_config(&cli)?;
            let lookup = TypeTable::from(&config.types);
            let records = Enumerator::new(&config, &lookup).vectors()?;
            print_records(&records, cli.format)
        }
        Commands::Matrices => {
            let config = load_config(&cli)?;
            let lookup = TypeTable::from(&config.types);
            let records = Enumerator::new(&config, &lookup).matrices()?;
            print_records(&records, cli.format)
        }
        Commands::Solvers => {
            let config = load_config(&cli)?;
            let lookup = TypeTable::from(&config.types);
            let mut enumerator = Enumerator::new(&config, &lookup);
            let catalog = enumerator.solver_catalog()?;
            print_records(&enumerator.solvers(&catalog)?, cli.format)
        }
        Commands::Backends => {
            let config = load_config(&cli)?;
            let backends = &config.backends;
            println!("default: {}", describe(default_backend(backends)));
            println!("sparse: {}", describe(default_sparse_backend(backends)));
            println!("dense: {}", describe(default_dense_backend(backends)));
            Ok(())
        }
        Commands::SaveConfig { path } => {
            BuildConfig::save_default(path)
                .with_context(|| format!("Can't write {}", path.display()))?;
            log::info!("Default configuration written to {}", path.display());
            Ok(())
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<BuildConfig> {
    let config = match &cli.config {
        Some(path) => BuildConfig::from_file_path(path)
            .with_context(|| format!("Can't load {}", path.display()))?,
        None => BuildConfig::from_current_dir()?,
    };
    let mut config = config.override_from_env();

    if let Some(eigen) = cli.eigen {
        config.backends.eigen = eigen;
    }
    if let Some(istl) = cli.istl {
        config.backends.istl = istl;
    }

    Ok(config)
}

fn print_records<R: TestCaseRecord + Serialize>(
    records: &[R],
    format: Format,
) -> anyhow::Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(records)?),
        Format::Names => {
            for record in records {
                println!("{}", record.identifier());
            }
        }
    }

    Ok(())
}

/// Selector name with the container pair it stands for, `-` where the library defines none.
fn describe(selector: ContainerBackend) -> String {
    let name = |kind: Option<ContainerKind>| kind.map_or("-".to_string(), |k| k.to_string());
    format!(
        "{selector} (vector: {}, matrix: {})",
        name(selector.vector_kind()),
        name(selector.matrix_kind())
    )
}
