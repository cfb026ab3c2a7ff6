//! Insertion-ordered task collection
//!
//! Tasks keep the order the source returned them in. Lookup by id goes
//! through a side index. The collection is closed: every predecessor id
//! must name a task in the collection.

use std::collections::HashMap;
use thiserror::Error;

use super::task::Task;

#[derive(Debug, Error, PartialEq)]
pub enum CollectionError {
    #[error("Task {task} is blocked by unknown task {missing}")]
    DanglingReference { task: String, missing: String },

    #[error("Duplicate task id: {0}")]
    DuplicateTask(String),
}

/// A read-only set of tasks keyed by id
#[derive(Debug, Default, Clone)]
pub struct TaskCollection {
    /// Tasks in source order
    tasks: Vec<Task>,

    /// Map from task id to position in `tasks`
    index: HashMap<String, usize>,
}

impl TaskCollection {
    /// Builds a collection, rejecting duplicate ids and dangling predecessors
    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> Result<Self, CollectionError> {
        let mut collection = Self::default();

        // First pass: index every task
        for task in tasks {
            if collection.index.contains_key(task.id()) {
                return Err(CollectionError::DuplicateTask(task.id().to_string()));
            }
            collection
                .index
                .insert(task.id().to_string(), collection.tasks.len());
            collection.tasks.push(task);
        }

        // Second pass: every edge must land on a known task
        for task in &collection.tasks {
            if let Some(missing) = task
                .blocked_by()
                .iter()
                .find(|id| !collection.index.contains_key(id.as_str()))
            {
                return Err(CollectionError::DanglingReference {
                    task: task.id().to_string(),
                    missing: missing.clone(),
                });
            }
        }

        Ok(collection)
    }

    /// Looks up a task by id
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.index.get(id).map(|&pos| &self.tasks[pos])
    }

    /// Iterates tasks in source order
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Iterates `(predecessor, task)` pairs: outer loop over tasks, inner
    /// loop over each task's `blocked_by` list
    pub fn edges(&self) -> impl Iterator<Item = (&Task, &Task)> {
        self.tasks.iter().flat_map(move |task| {
            task.blocked_by()
                .iter()
                .filter_map(move |id| self.get(id).map(|dep| (dep, task)))
        })
    }

    /// Total number of dependency edges
    pub fn edge_count(&self) -> usize {
        self.tasks.iter().map(|t| t.blocked_by().len()).sum()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl<'a> IntoIterator for &'a TaskCollection {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collection() {
        let tasks = TaskCollection::from_tasks([]).unwrap();
        assert!(tasks.is_empty());
        assert_eq!(tasks.len(), 0);
        assert_eq!(tasks.edge_count(), 0);
    }

    #[test]
    fn keeps_insertion_order() {
        let tasks = TaskCollection::from_tasks([
            Task::new("30", "c"),
            Task::new("10", "a"),
            Task::new("20", "b"),
        ])
        .unwrap();

        let ids: Vec<_> = tasks.iter().map(Task::id).collect();
        assert_eq!(ids, ["30", "10", "20"]);
    }

    #[test]
    fn lookup_by_id() {
        let tasks = TaskCollection::from_tasks([Task::new("1", "a"), Task::new("2", "b")]).unwrap();

        assert_eq!(tasks.get("2").map(Task::name), Some("b"));
        assert!(tasks.get("3").is_none());
    }

    #[test]
    fn edges_follow_task_then_predecessor_order() {
        let tasks = TaskCollection::from_tasks([
            Task::new("1", "a"),
            Task::new("2", "b"),
            Task::new("3", "c").with_blocked_by(["2", "1"]),
            Task::new("4", "d").with_blocked_by(["1"]),
        ])
        .unwrap();

        let edges: Vec<_> = tasks.edges().map(|(from, to)| (from.id(), to.id())).collect();
        assert_eq!(edges, [("2", "3"), ("1", "3"), ("1", "4")]);
        assert_eq!(tasks.edge_count(), 3);
    }

    #[test]
    fn dangling_reference_is_rejected() {
        let result = TaskCollection::from_tasks([Task::new("1", "a").with_blocked_by(["99"])]);

        assert_eq!(
            result.unwrap_err(),
            CollectionError::DanglingReference {
                task: "1".to_string(),
                missing: "99".to_string(),
            }
        );
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let result = TaskCollection::from_tasks([Task::new("1", "a"), Task::new("1", "b")]);
        assert_eq!(result.unwrap_err(), CollectionError::DuplicateTask("1".to_string()));
    }

    #[test]
    fn forward_references_are_fine() {
        // Predecessor appears later in source order
        let tasks = TaskCollection::from_tasks([
            Task::new("2", "b").with_blocked_by(["1"]),
            Task::new("1", "a"),
        ])
        .unwrap();

        assert_eq!(tasks.edge_count(), 1);
    }
}
