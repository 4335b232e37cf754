//! fhevm-examples CLI — documentation and scaffolding generator for fhevm
//! smart-contract examples.
//!
//! Provides three commands:
//! `docs` renders an example's contract/test pair into GitBook-style tabbed
//! markdown and maintains the summary index, `scaffold` turns an example
//! into a standalone Hardhat project from the base template, and `list`
//! shows everything the registry knows about.

mod commands;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use fhevm_examples_core::registry::Registry;

#[derive(Parser)]
#[command(
    name = "fhevm-examples",
    about = "Documentation and scaffolding generator for fhevm smart-contract examples",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Project root containing the example sources (default: current directory)
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Optional JSON registry file overriding the built-in example set
    #[arg(long, global = true)]
    registry: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate documentation for one example, or all of them
    Docs {
        /// Example identifier (see `list`)
        example: Option<String>,

        /// Generate every registered example
        #[arg(long, conflicts_with = "example")]
        all: bool,

        /// Summary index location, relative to the project root
        #[arg(long, default_value = "docs/SUMMARY.md")]
        index: PathBuf,
    },

    /// Create a standalone Hardhat project for one example
    Scaffold {
        /// Example identifier (prompts interactively if omitted)
        example: Option<String>,

        /// Destination directory for the new project (must not exist)
        #[arg(long, short)]
        dest: PathBuf,

        /// Base template directory to copy from
        #[arg(long, default_value = "template")]
        template: PathBuf,
    },

    /// List the registered examples by category
    List,
}

fn load_registry(path: Option<&PathBuf>) -> anyhow::Result<Registry> {
    match path {
        Some(path) => Ok(Registry::load(path)?),
        None => Ok(Registry::builtin()),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let registry = load_registry(cli.registry.as_ref())?;

    match cli.command {
        Commands::Docs {
            example,
            all,
            index,
        } => {
            commands::docs::run(&cli.root, &registry, example.as_deref(), all, &index)?;
        }
        Commands::Scaffold {
            example,
            dest,
            template,
        } => {
            commands::scaffold::run(&cli.root, &registry, example.as_deref(), &template, &dest)?;
        }
        Commands::List => {
            commands::list::run(&registry);
        }
    }

    Ok(())
}
