//! Query commands (ready, blocked)

use super::output::Output;
use crate::domain::{Status, Task, TaskCollection};

/// Tasks with the given status, in collection order
fn with_status(tasks: &TaskCollection, status: Status) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|task| Status::of(task, tasks) == status)
        .collect()
}

/// Predecessors of a task that are not completed yet
fn open_blockers<'a>(task: &'a Task, tasks: &'a TaskCollection) -> Vec<&'a str> {
    task.blocked_by()
        .iter()
        .filter(|id| !tasks.get(id.as_str()).is_some_and(Task::is_completed))
        .map(String::as_str)
        .collect()
}

/// Show tasks ready to work on
pub fn ready(output: &Output, tasks: &TaskCollection) {
    let ready_tasks = with_status(tasks, Status::Ready);

    if output.is_json() {
        let items: Vec<_> = ready_tasks
            .iter()
            .map(|t| {
                serde_json::json!({
                    "id": t.id(),
                    "name": t.name(),
                    "milestone": t.is_milestone(),
                })
            })
            .collect();
        output.data(&items);
    } else if ready_tasks.is_empty() {
        println!("No tasks ready to work on.");
    } else {
        println!("Ready tasks ({}):", ready_tasks.len());
        println!("{:<20} NAME", "ID");
        println!("{}", "-".repeat(60));
        for task in ready_tasks {
            println!("{:<20} {}", task.id(), task.name());
        }
    }
}

/// Show blocked tasks
pub fn blocked(output: &Output, tasks: &TaskCollection) {
    let blocked_tasks: Vec<_> = with_status(tasks, Status::Blocked)
        .into_iter()
        .map(|task| (task, open_blockers(task, tasks)))
        .collect();

    if output.is_json() {
        let items: Vec<_> = blocked_tasks
            .iter()
            .map(|(task, blockers)| {
                serde_json::json!({
                    "id": task.id(),
                    "name": task.name(),
                    "milestone": task.is_milestone(),
                    "blocked_by": blockers,
                })
            })
            .collect();
        output.data(&items);
    } else if blocked_tasks.is_empty() {
        println!("No blocked tasks.");
    } else {
        println!("Blocked tasks ({}):", blocked_tasks.len());
        println!("{:<20} {:<30} BLOCKED BY", "ID", "NAME");
        println!("{}", "-".repeat(80));
        for (task, blockers) in blocked_tasks {
            println!("{:<20} {:<30} {}", task.id(), task.name(), blockers.join(", "));
        }
    }
}
