//! Structural properties of rendered graphs
//!
//! Checks line counts, framing and determinism over generated task graphs
//! through the public library API.

use asana_deps::domain::sanitize_name;
use asana_deps::render::{GraphvizPalette, GraphvizRenderer, MermaidRenderer, Profile};
use asana_deps::{Renderer, Task, TaskCollection};
use proptest::prelude::*;

/// A closed collection where task `i` only depends on tasks before it
fn arb_collection() -> impl Strategy<Value = TaskCollection> {
    prop::collection::vec(
        (
            any::<bool>(),
            any::<bool>(),
            prop::collection::vec(any::<prop::sample::Index>(), 0..4),
            "[a-zA-Z \"']{0,12}",
        ),
        0..16,
    )
    .prop_map(|specs| {
        let tasks: Vec<Task> = specs
            .into_iter()
            .enumerate()
            .map(|(i, (milestone, completed, deps, name))| {
                let mut blocked_by: Vec<String> = Vec::new();
                if i > 0 {
                    for dep in deps {
                        let id = format!("t{}", dep.index(i));
                        if !blocked_by.contains(&id) {
                            blocked_by.push(id);
                        }
                    }
                }
                Task::new(format!("t{}", i), &name)
                    .with_blocked_by(blocked_by)
                    .with_milestone(milestone)
                    .with_completed(completed)
            })
            .collect();
        TaskCollection::from_tasks(tasks).unwrap()
    })
}

proptest! {
    #[test]
    fn graphviz_is_framed_and_counted(tasks in arb_collection()) {
        for profile in [Profile::Full, Profile::Simple] {
            let renderer = GraphvizRenderer::new(profile, GraphvizPalette::default());
            let lines: Vec<_> = renderer.lines(&tasks).collect();

            prop_assert_eq!(lines.first().map(String::as_str), Some("digraph{"));
            prop_assert_eq!(lines.last().map(String::as_str), Some("}"));
            prop_assert_eq!(lines.len(), 2 + tasks.len() + tasks.edge_count());
        }
    }

    #[test]
    fn mermaid_is_counted(tasks in arb_collection()) {
        let lines: Vec<_> = MermaidRenderer::default().lines(&tasks).collect();
        let styles = lines.iter().filter(|l| l.starts_with("style ")).count();

        prop_assert_eq!(lines[0].as_str(), "flowchart TB");
        prop_assert_eq!(lines.len(), 1 + tasks.len() + styles + tasks.edge_count());
    }

    #[test]
    fn node_lines_precede_edge_lines(tasks in arb_collection()) {
        let lines: Vec<_> = MermaidRenderer::default().lines(&tasks).collect();
        let first_edge = lines.len() - tasks.edge_count();

        prop_assert!(lines[..first_edge].iter().all(|l| !l.contains(" --> ") && !l.contains(" -.-> ")));
        prop_assert!(lines[first_edge..].iter().all(|l| l.contains(" --> ") || l.contains(" -.-> ")));
    }

    #[test]
    fn rendering_is_deterministic(tasks in arb_collection()) {
        let graphviz = GraphvizRenderer::default();
        let mermaid = MermaidRenderer::default();

        prop_assert_eq!(graphviz.lines(&tasks).collect::<Vec<_>>(), graphviz.lines(&tasks).collect::<Vec<_>>());
        prop_assert_eq!(mermaid.lines(&tasks).collect::<Vec<_>>(), mermaid.lines(&tasks).collect::<Vec<_>>());
    }

    #[test]
    fn no_raw_double_quotes_leak_from_names(tasks in arb_collection()) {
        for task in &tasks {
            prop_assert!(!task.name().contains('"'));
        }
    }

    #[test]
    fn sanitize_is_idempotent(name in ".*") {
        let once = sanitize_name(&name).into_owned();
        prop_assert_eq!(sanitize_name(&once).into_owned(), once.clone());
    }
}
