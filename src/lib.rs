//! asana-deps - Render Asana task dependencies as a graph
//!
//! Fetches the tasks of an Asana project and prints their dependency graph
//! as Graphviz DOT or a Mermaid flowchart, styled by each task's state
//! (milestone or regular; completed, ready or blocked).

pub mod domain;
pub mod render;
pub mod source;
pub mod config;
pub mod cli;

pub use domain::{Status, Task, TaskCollection};
pub use render::{Dialect, Renderer};
