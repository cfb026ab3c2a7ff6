//! Graphviz (DOT) renderer

use std::iter;

use serde::{Deserialize, Serialize};

use super::attrs::Attrs;
use super::{Lines, Renderer};
use crate::domain::{Status, Task, TaskCollection};

const OPEN: &str = "digraph{";
const CLOSE: &str = "}";

/// Colors used by the Graphviz renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphvizPalette {
    /// Border and font color of milestones, fill of completed milestones
    pub milestone: String,

    /// Muted color for completed nodes and their outgoing edges
    pub completed: String,
}

impl Default for GraphvizPalette {
    fn default() -> Self {
        Self {
            milestone: "darkgreen".to_string(),
            completed: "gray".to_string(),
        }
    }
}

/// How much status styling a Graphviz graph carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    /// Label markup, colors and edge colors driven by status
    #[default]
    Full,
    /// Quoted labels, milestone shape and color only
    Simple,
}

#[derive(Debug, Clone, Default)]
pub struct GraphvizRenderer {
    profile: Profile,
    palette: GraphvizPalette,
}

impl GraphvizRenderer {
    pub fn new(profile: Profile, palette: GraphvizPalette) -> Self {
        Self { profile, palette }
    }

    fn node(&self, task: &Task, tasks: &TaskCollection) -> String {
        let attrs = match self.profile {
            Profile::Full => self.full_node_attrs(task, Status::of(task, tasks)),
            Profile::Simple => self.simple_node_attrs(task),
        };
        format!("{} [{}];", task.id(), attrs.join("=", ", "))
    }

    fn full_node_attrs(&self, task: &Task, status: Status) -> Attrs {
        let mut attrs = Attrs::new();
        attrs.set("style", "rounded");

        let name = task.name();
        attrs.set(
            "label",
            match status {
                Status::Completed => format!("<<S>{}</S>>", name),
                Status::Ready => format!("<<B>{}</B>>", name),
                Status::Blocked => format!("\"{}\"", name),
            },
        );

        let palette = &self.palette;
        if task.is_milestone() {
            attrs.set("color", &palette.milestone);
            if status.is_completed() {
                attrs
                    .set("style", "filled")
                    .set("fillcolor", &palette.milestone)
                    .set("fontcolor", &palette.completed);
            } else {
                attrs.set("fontcolor", &palette.milestone);
            }
        } else if status.is_completed() {
            attrs
                .set("color", &palette.completed)
                .set("fontcolor", &palette.completed);
        }

        attrs.set("shape", shape(task));
        attrs
    }

    fn simple_node_attrs(&self, task: &Task) -> Attrs {
        let mut attrs = Attrs::new();
        attrs.set("label", format!("\"{}\"", task.name()));
        if task.is_milestone() {
            attrs.set("color", &self.palette.milestone);
        }
        attrs.set("shape", shape(task));
        attrs
    }

    fn edge(&self, from: &Task, to: &Task) -> String {
        match self.profile {
            Profile::Full => {
                let mut attrs = Attrs::new();
                if from.is_completed() {
                    attrs.set("color", &self.palette.completed);
                }
                format!("{} -> {} [{}];", from.id(), to.id(), attrs.join("=", ", "))
            }
            Profile::Simple => format!("{} -> {};", from.id(), to.id()),
        }
    }
}

fn shape(task: &Task) -> &'static str {
    if task.is_milestone() { "hexagon" } else { "box" }
}

impl Renderer for GraphvizRenderer {
    fn lines<'a>(&'a self, tasks: &'a TaskCollection) -> Lines<'a> {
        let nodes = tasks.iter().map(move |task| self.node(task, tasks));
        let edges = tasks.edges().map(move |(from, to)| self.edge(from, to));

        Box::new(
            iter::once(OPEN.to_string())
                .chain(nodes)
                .chain(edges)
                .chain(iter::once(CLOSE.to_string())),
        )
    }
}
