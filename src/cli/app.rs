//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::debug;

use super::output::{Output, OutputFormat};
use super::{graph, load, query};
use crate::config::Config;
use crate::render::{Dialect, Profile};
use crate::source::TOKEN_ENV;

#[derive(Parser)]
#[command(name = "asana-deps")]
#[command(author, version, about = "Render Asana task dependencies as Graphviz or Mermaid")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format for query commands
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Path to a config file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the dependency graph of a project
    Graph {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        dialect: DialectArgs,

        /// Quoted labels and milestone styling only (Graphviz)
        #[arg(long, conflicts_with = "mermaid")]
        simple: bool,

        /// Write to a file instead of stdout
        #[arg(long, short = 'o', value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show tasks ready to work on
    Ready {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Show blocked tasks
    Blocked {
        #[command(flatten)]
        source: SourceArgs,
    },
}

/// Where tasks are read from
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Asana project gid
    #[arg(required_unless_present = "input", conflicts_with = "input")]
    pub project_id: Option<String>,

    /// Read a saved tasks payload instead of calling the API ("-" for stdin)
    #[arg(long, short = 'i', value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Asana personal access token
    #[arg(long, env = TOKEN_ENV, hide_env_values = true)]
    pub token: Option<String>,
}

/// Output dialect flags
#[derive(Args, Debug)]
#[group(multiple = false)]
pub struct DialectArgs {
    /// Graphviz DOT output
    #[arg(long, short = 'g')]
    pub graphviz: bool,

    /// Mermaid flowchart output
    #[arg(long, short = 'm')]
    pub mermaid: bool,
}

impl DialectArgs {
    /// The dialect picked on the command line, if any
    pub fn selected(&self) -> Option<Dialect> {
        if self.graphviz {
            Some(Dialect::Graphviz)
        } else if self.mermaid {
            Some(Dialect::Mermaid)
        } else {
            None
        }
    }
}

/// Sends logs to stderr so stdout carries only the graph
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let output = Output::new(cli.format);

    let config = Config::load(cli.config.as_deref())?;
    debug!(
        dialect = config.default_dialect.as_str(),
        base_url = %config.api.base_url,
        "Loaded config"
    );

    match cli.command {
        Commands::Graph { source, dialect, simple, output: path } => {
            let tasks = load::tasks(&source, &config)?;
            let dialect = dialect.selected().unwrap_or(config.default_dialect);
            let profile = if simple { Profile::Simple } else { Profile::Full };
            debug!(dialect = dialect.as_str(), ?profile, "Rendering graph");

            let renderer = graph::renderer(dialect, profile, &config);
            graph::write(&tasks, renderer.as_ref(), path.as_deref())?
        }
        Commands::Ready { source } => {
            let tasks = load::tasks(&source, &config)?;
            query::ready(&output, &tasks)
        }
        Commands::Blocked { source } => {
            let tasks = load::tasks(&source, &config)?;
            query::blocked(&output, &tasks)
        }
    }

    debug!("Command completed successfully");
    Ok(())
}
