//! ethpm CLI - EthPM v2 manifest tool
//!
//! Commands:
//! - `ethpm check` - Validate a manifest file
//! - `ethpm new` - Create a new manifest
//! - `ethpm add-dependency` - Record a build dependency
//! - `ethpm add-contract-type` - Add a contract type from compiler output
//! - `ethpm inspect` - Summarize or pretty-print a manifest

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod check;
mod config;
mod edit;
mod inspect;
mod new;

#[derive(Parser)]
#[command(name = "ethpm")]
#[command(author, version, about = "Create and validate EthPM v2 package manifests", long_about = None)]
struct Cli {
    /// TOML file with validator settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory that sources and ethpm-dependencies/ are resolved against
    #[arg(long, global = true)]
    base_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a manifest
    Check {
        /// Path to the manifest (default: <base-dir>/ethpm.json)
        #[arg(short, long)]
        manifest: Option<PathBuf>,
    },

    /// Create a new manifest
    New {
        /// Package name
        name: String,

        /// Package version (semver)
        version: String,

        /// Output directory (default: base directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Package description
        #[arg(long)]
        description: Option<String>,

        /// Package license
        #[arg(long)]
        license: Option<String>,

        /// Package author (repeatable)
        #[arg(long = "author")]
        authors: Vec<String>,

        /// Directory of source files to record by relative path
        #[arg(long)]
        sources: Option<PathBuf>,

        /// Path prefix for recorded sources (default: ./)
        #[arg(long, default_value = "./")]
        source_prefix: String,

        /// Extension of source files to record
        #[arg(long, default_value = "sol")]
        source_extension: String,
    },

    /// Add a build dependency to an existing manifest
    AddDependency {
        /// Dependency package name
        name: String,

        /// Content-addressed URI of the dependency manifest
        uri: String,

        /// Directory containing ethpm.json (default: base directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Add a contract type from standard-JSON compiler output
    AddContractType {
        /// Contract name to take from the compiler output
        name: String,

        /// Path to the standard-JSON compiler output
        #[arg(short, long)]
        output: PathBuf,

        /// Compiler name
        #[arg(long, default_value = "solc")]
        compiler: String,

        /// Compiler version (semver)
        #[arg(long)]
        compiler_version: String,

        /// Path to the standard-JSON compiler settings
        #[arg(long)]
        settings: Option<PathBuf>,

        /// Directory containing ethpm.json (default: base directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Summarize a manifest without validating it
    Inspect {
        /// Path to the manifest (default: <base-dir>/ethpm.json)
        #[arg(short, long)]
        manifest: Option<PathBuf>,

        /// Print the manifest as pretty JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = config::load(cli.config.as_deref())?;
    let config = config::apply_overrides(config, cli.base_dir, cli.log_level);
    ethpm_logging::init_logging(config::log_level(&config)?);

    match cli.command {
        Commands::Check { manifest } => {
            check::run(&config, manifest)?;
        }
        Commands::New {
            name,
            version,
            dir,
            description,
            license,
            authors,
            sources,
            source_prefix,
            source_extension,
        } => {
            let options = new::NewOptions {
                name,
                version,
                dir,
                description,
                license,
                authors,
                sources,
                source_prefix,
                source_extension,
            };
            new::run(&config, options)?;
        }
        Commands::AddDependency { name, uri, dir } => {
            edit::add_dependency(&config, dir, &name, &uri)?;
        }
        Commands::AddContractType {
            name,
            output,
            compiler,
            compiler_version,
            settings,
            dir,
        } => {
            let source = edit::CompilerSource {
                output,
                compiler,
                compiler_version,
                settings,
            };
            edit::add_contract_type(&config, dir, &name, &source)?;
        }
        Commands::Inspect { manifest, json } => {
            inspect::run(&config, manifest, json)?;
        }
    }

    Ok(())
}
