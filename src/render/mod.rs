//! # Graph Renderers
//!
//! Turn a [`TaskCollection`] into the text of a graph description.
//!
//! ## Dialects
//!
//! | Dialect | Renderer | First line | Last line |
//! |---------|----------|------------|-----------|
//! | Graphviz | [`GraphvizRenderer`] | `digraph{` | `}` |
//! | Mermaid | [`MermaidRenderer`] | `flowchart TB` | last edge |
//!
//! Both renderers classify tasks with [`Status`](crate::domain::Status) and
//! own their palette, so they can be built with alternate colors.
//!
//! Lines are produced lazily: nothing is formatted until the caller pulls.

mod attrs;
mod graphviz;
mod mermaid;

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::domain::TaskCollection;

pub use attrs::Attrs;
pub use graphviz::{GraphvizPalette, GraphvizRenderer, Profile};
pub use mermaid::{MermaidPalette, MermaidRenderer};

/// Lazy sequence of output lines borrowed from the collection
pub type Lines<'a> = Box<dyn Iterator<Item = String> + 'a>;

/// Renders a task collection into one output dialect
pub trait Renderer {
    /// Returns the graph description, one line per item
    fn lines<'a>(&'a self, tasks: &'a TaskCollection) -> Lines<'a>;

    /// Writes every line followed by a newline
    fn write_to(&self, tasks: &TaskCollection, out: &mut dyn Write) -> io::Result<()> {
        for line in self.lines(tasks) {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}

/// Supported output dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    #[default]
    Graphviz,
    Mermaid,
}

impl Dialect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Graphviz => "graphviz",
            Dialect::Mermaid => "mermaid",
        }
    }
}
