//! Mermaid flowchart renderer

use std::iter;

use serde::{Deserialize, Serialize};

use super::attrs::Attrs;
use super::{Lines, Renderer};
use crate::domain::{Status, Task, TaskCollection};

const HEADER: &str = "flowchart TB";

/// Colors used by the Mermaid renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MermaidPalette {
    pub milestone_stroke: String,
    pub milestone_fill: String,
    pub completed: String,
}

impl Default for MermaidPalette {
    fn default() -> Self {
        Self {
            milestone_stroke: "darkgreen".to_string(),
            milestone_fill: "darkseagreen".to_string(),
            completed: "lightgray".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MermaidRenderer {
    palette: MermaidPalette,
}

impl MermaidRenderer {
    pub fn new(palette: MermaidPalette) -> Self {
        Self { palette }
    }

    /// Node line, followed by a style line when any style applies
    fn node(&self, task: &Task, tasks: &TaskCollection) -> impl Iterator<Item = String> {
        let status = Status::of(task, tasks);
        let name = task.name();
        let mut style = Attrs::new();

        let label = match status {
            Status::Completed => {
                style.set("stroke", &self.palette.completed);
                format!("fa:fa-check {}", name)
            }
            Status::Ready => {
                style.set("stroke-width", "2px");
                format!("**{}**", name)
            }
            Status::Blocked => format!("far:fa-hourglass {}", name),
        };

        if task.is_milestone() {
            style.set("stroke", &self.palette.milestone_stroke);
            if status.is_completed() {
                style.set("fill", "none");
            } else {
                style
                    .set("fill", &self.palette.milestone_fill)
                    .set("stroke-width", "4px");
            }
        } else if status.is_completed() {
            style.set("stroke", "none").set("fill", "none");
        }

        let (open, close) = if task.is_milestone() {
            ("{{", "}}")
        } else {
            ("([", "])")
        };

        let node = format!("{}{}\"`{}`\"{}", task.id(), open, label, close);
        let style = (!style.is_empty())
            .then(|| format!("style {} {};", task.id(), style.join(":", ",")));

        iter::once(node).chain(style)
    }

    fn edge(&self, from: &Task, to: &Task) -> String {
        let arrow = if from.is_completed() { "-.->" } else { "-->" };
        format!("{} {} {}", from.id(), arrow, to.id())
    }
}

impl Renderer for MermaidRenderer {
    fn lines<'a>(&'a self, tasks: &'a TaskCollection) -> Lines<'a> {
        let nodes = tasks.iter().flat_map(move |task| self.node(task, tasks));
        let edges = tasks.edges().map(move |(from, to)| self.edge(from, to));

        Box::new(iter::once(HEADER.to_string()).chain(nodes).chain(edges))
    }
}
