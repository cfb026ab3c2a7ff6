//! Graph command

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::config::Config;
use crate::domain::TaskCollection;
use crate::render::{Dialect, GraphvizRenderer, MermaidRenderer, Profile, Renderer};

/// Builds the renderer for a dialect with the configured palette
pub fn renderer(dialect: Dialect, profile: Profile, config: &Config) -> Box<dyn Renderer> {
    match dialect {
        Dialect::Graphviz => Box::new(GraphvizRenderer::new(profile, config.graphviz.clone())),
        Dialect::Mermaid => {
            if profile == Profile::Simple {
                warn!("--simple only applies to Graphviz output; ignoring");
            }
            Box::new(MermaidRenderer::new(config.mermaid.clone()))
        }
    }
}

/// Writes the graph to a file, or stdout when no path is given
pub fn write(tasks: &TaskCollection, renderer: &dyn Renderer, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut out = BufWriter::new(file);
            emit(tasks, renderer, &mut out)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            debug!(path = %path.display(), "Wrote graph");
        }
        None => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            emit(tasks, renderer, &mut out).context("Failed to write graph to stdout")?;
        }
    }
    Ok(())
}

fn emit(tasks: &TaskCollection, renderer: &dyn Renderer, out: &mut dyn Write) -> io::Result<()> {
    renderer.write_to(tasks, out)?;
    out.flush()
}
