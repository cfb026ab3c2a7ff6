//! Asana REST API client

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use tracing::debug;

use super::credentials::Credential;
use super::{FetchError, TaskSource, TasksResponse};
use crate::domain::Task;

/// Fields requested for every task
pub const TASK_FIELDS: &[&str] = &[
    "completed",
    "dependencies",
    "dependents",
    "name",
    "resource_subtype",
];

/// Fetches the tasks of one project
pub struct AsanaClient {
    client: Client,
    base_url: String,
    project_id: String,
    credential: Credential,
}

impl AsanaClient {
    pub fn new(
        base_url: &str,
        timeout: Duration,
        project_id: impl Into<String>,
        credential: Credential,
    ) -> Result<Self, FetchError> {
        let base_url = base_url.trim_end_matches('/').to_string();
        let client = Client::builder()
            .user_agent(concat!("asana-deps/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|source| FetchError::Http {
                url: base_url.clone(),
                source,
            })?;

        Ok(Self {
            client,
            base_url,
            project_id: project_id.into(),
            credential,
        })
    }

    /// Endpoint URL without the query string
    pub fn tasks_url(&self) -> String {
        format!("{}/projects/{}/tasks", self.base_url, self.project_id)
    }
}

impl TaskSource for AsanaClient {
    fn fetch(&self) -> Result<Vec<Task>, FetchError> {
        let url = self.tasks_url();
        debug!(%url, "Fetching project tasks");

        let http_err = |source| FetchError::Http {
            url: url.clone(),
            source,
        };

        let response = self
            .client
            .get(&url)
            .query(&[("opt_fields", TASK_FIELDS.join(","))])
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", self.credential.expose()))
            .send()
            .map_err(http_err)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().map_err(http_err)?;
        let payload: TasksResponse = serde_json::from_str(&text)?;
        debug!(count = payload.data.len(), "Fetched tasks");

        Ok(payload.into_tasks())
    }

    fn describe(&self) -> String {
        format!("asana project {}", self.project_id)
    }
}
