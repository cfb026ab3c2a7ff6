//! Task domain model
//!
//! A task is an immutable snapshot of one Asana task: its identity, display
//! name, the tasks blocking it, and two state flags.

use std::borrow::Cow;

/// Replaces double quotes with single quotes so a name can sit inside a
/// quoted label without terminating it.
///
/// Idempotent: sanitizing an already sanitized name returns it unchanged.
pub fn sanitize_name(name: &str) -> Cow<'_, str> {
    if name.contains('"') {
        Cow::Owned(name.replace('"', "'"))
    } else {
        Cow::Borrowed(name)
    }
}

/// A single task with its dependency edges
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: String,
    name: String,
    blocked_by: Vec<String>,
    is_milestone: bool,
    is_completed: bool,
}

impl Task {
    /// Creates a regular, not completed task with no predecessors
    pub fn new(id: impl Into<String>, name: &str) -> Self {
        Self {
            id: id.into(),
            name: sanitize_name(name).into_owned(),
            blocked_by: Vec::new(),
            is_milestone: false,
            is_completed: false,
        }
    }

    /// Sets the ids of the tasks this one depends on
    pub fn with_blocked_by<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.blocked_by = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Marks the task as a milestone (or not)
    pub fn with_milestone(mut self, is_milestone: bool) -> Self {
        self.is_milestone = is_milestone;
        self
    }

    /// Marks the task as completed (or not)
    pub fn with_completed(mut self, is_completed: bool) -> Self {
        self.is_completed = is_completed;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The quote-sanitized display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ids of predecessor tasks, in API order
    pub fn blocked_by(&self) -> &[String] {
        &self.blocked_by
    }

    pub fn is_milestone(&self) -> bool {
        self.is_milestone
    }

    pub fn is_completed(&self) -> bool {
        self.is_completed
    }
}
