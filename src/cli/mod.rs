//! # Command-Line Interface
//!
//! User-facing commands and output formatting.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `graph` | Print the dependency graph (`-g` Graphviz, `-m` Mermaid) |
//! | `ready` | List tasks whose predecessors are all completed |
//! | `blocked` | List tasks waiting on incomplete predecessors |
//!
//! Every command reads tasks either from the Asana API (`<PROJECT_ID>`,
//! token from `--token` / `ASANA_PAT` / keyring / config) or from a saved payload
//! (`--input FILE`).
//!
//! ## Output Formats
//!
//! `ready` and `blocked` support `--format`:
//! - `text` (default) - Human-readable table
//! - `json` - Machine-parseable JSON
//!
//! ## Logging
//!
//! Logs go to stderr. `--verbose` enables debug logs; `RUST_LOG` overrides
//! the filter entirely.
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod load;
mod graph;
mod query;

pub use app::{Cli, Commands, run};
pub use output::{Output, OutputFormat};
