//! # Task Sources
//!
//! Where tasks come from. Every source yields tasks in a stable order that
//! becomes the collection's iteration order.
//!
//! | Source | Input |
//! |--------|-------|
//! | [`AsanaClient`] | `GET /projects/{id}/tasks` on the Asana REST API |
//! | [`FileSource`] | The same JSON payload, from a file or stdin |
//!
//! Both decode the payload through [`TasksResponse`], so a saved API
//! response can be replayed offline.

mod asana;
mod credentials;
mod file;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::Task;

pub use asana::{AsanaClient, TASK_FIELDS};
pub use credentials::{Credential, CredentialError, Keyring, SecretStore, TOKEN_ENV};
pub use file::FileSource;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request to {url} failed")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Asana returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse task list")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Something that can produce the raw task list
pub trait TaskSource {
    fn fetch(&self) -> Result<Vec<Task>, FetchError>;

    /// Short description for log lines
    fn describe(&self) -> String;
}

/// Envelope of the project tasks endpoint
#[derive(Debug, Deserialize)]
pub struct TasksResponse {
    pub data: Vec<RawTask>,
}

/// A task as the API returns it
#[derive(Debug, Deserialize)]
pub struct RawTask {
    pub gid: String,
    pub name: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub dependencies: Vec<TaskRef>,
    #[serde(default)]
    pub resource_subtype: Option<String>,
}

/// Compact reference to another task
#[derive(Debug, Deserialize)]
pub struct TaskRef {
    pub gid: String,
}

impl From<RawTask> for Task {
    fn from(raw: RawTask) -> Self {
        let is_milestone = raw.resource_subtype.as_deref() == Some("milestone");
        Task::new(raw.gid, &raw.name)
            .with_blocked_by(raw.dependencies.into_iter().map(|dep| dep.gid))
            .with_milestone(is_milestone)
            .with_completed(raw.completed)
    }
}

impl TasksResponse {
    pub fn into_tasks(self) -> Vec<Task> {
        self.data.into_iter().map(Task::from).collect()
    }
}

/// Decodes a tasks payload
pub fn parse_tasks(json: &str) -> Result<Vec<Task>, FetchError> {
    let response: TasksResponse = serde_json::from_str(json)?;
    Ok(response.into_tasks())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "data": [
            {
                "gid": "101",
                "name": "Design \"API\"",
                "completed": true,
                "dependencies": [],
                "dependents": [{"gid": "102"}],
                "resource_subtype": "default_task"
            },
            {
                "gid": "102",
                "name": "Launch",
                "completed": false,
                "dependencies": [{"gid": "101"}],
                "dependents": [],
                "resource_subtype": "milestone"
            }
        ]
    }"#;

    #[test]
    fn parses_api_payload() {
        let tasks = parse_tasks(PAYLOAD).unwrap();

        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].id(), "101");
        assert_eq!(tasks[0].name(), "Design 'API'");
        assert!(tasks[0].is_completed());
        assert!(!tasks[0].is_milestone());

        assert_eq!(tasks[1].blocked_by(), ["101".to_string()]);
        assert!(tasks[1].is_milestone());
        assert!(!tasks[1].is_completed());
    }

    #[test]
    fn missing_optional_fields_default() {
        let tasks = parse_tasks(r#"{"data": [{"gid": "1", "name": "bare"}]}"#).unwrap();

        assert!(tasks[0].blocked_by().is_empty());
        assert!(!tasks[0].is_completed());
        assert!(!tasks[0].is_milestone());
    }

    #[test]
    fn malformed_payload_is_parse_error() {
        let result = parse_tasks(r#"{"errors": []}"#);
        assert!(matches!(result, Err(FetchError::Parse(_))));
    }

    #[test]
    fn parse_error_message_leaves_cause_to_source() {
        let err = parse_tasks("not json").unwrap_err();
        assert_eq!(err.to_string(), "Failed to parse task list");
        assert!(std::error::Error::source(&err).is_some());
    }
}
