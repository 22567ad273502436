//! CLI entry point for the `adjg` command-line tool.

use std::io;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use adjacency_graph::cli::commands::{self, OutputFormat};
use adjacency_graph::{GraphConfig, GraphError, GraphResult, TraversalOrder};

#[derive(Parser)]
#[command(
    name = "adjg",
    about = "adjg — traverse and export adjacency-list graphs described in JSON"
)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// TOML graph config (e.g. `dedup_edges = true`)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Traverse the graph from a start vertex
    Traverse {
        /// Path to the JSON graph document
        file: PathBuf,
        /// Start vertex
        start: String,
        /// Traversal order: bfs or dfs
        #[arg(long, default_value = "bfs")]
        order: String,
    },
    /// Print the adjacency list
    List {
        /// Path to the JSON graph document
        file: PathBuf,
    },
    /// Print the adjacency matrix
    Matrix {
        /// Path to the JSON graph document
        file: PathBuf,
    },
    /// Print the neighbors of a vertex
    Neighbors {
        /// Path to the JSON graph document
        file: PathBuf,
        /// Vertex to inspect
        vertex: String,
    },
    /// Display summary counts
    Info {
        /// Path to the JSON graph document
        file: PathBuf,
    },
}

fn run(cli: Cli) -> GraphResult<()> {
    let json = cli.format.is_json();
    let config = match &cli.config {
        Some(path) => GraphConfig::load(path)?,
        None => GraphConfig::default(),
    };
    let mut out = io::stdout().lock();

    match cli.command {
        Commands::Traverse { file, start, order } => {
            let order = TraversalOrder::from_name(&order)
                .ok_or_else(|| GraphError::InvalidArgument(format!("unknown order: {}", order)))?;
            commands::cmd_traverse(&mut out, &file, config, &start, order, json)
        }
        Commands::List { file } => commands::cmd_list(&mut out, &file, config, json),
        Commands::Matrix { file } => commands::cmd_matrix(&mut out, &file, config, json),
        Commands::Neighbors { file, vertex } => {
            commands::cmd_neighbors(&mut out, &file, config, &vertex, json)
        }
        Commands::Info { file } => commands::cmd_info(&mut out, &file, config, json),
    }
}

fn main() {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Json(_) | GraphError::Config(_) => 2,
            GraphError::InvalidArgument(_) => 3,
        };
        process::exit(code);
    }
}
