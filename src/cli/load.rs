//! Resolving a task source and building the collection

use anyhow::{Context, Result};
use tracing::{debug, info};

use super::app::SourceArgs;
use crate::config::Config;
use crate::domain::TaskCollection;
use crate::source::{AsanaClient, Credential, FileSource, Keyring, SecretStore, TaskSource};

/// Picks the source named on the command line
pub fn source(args: &SourceArgs, config: &Config) -> Result<Box<dyn TaskSource>> {
    if let Some(path) = &args.input {
        return Ok(Box::new(FileSource::new(path)));
    }

    let project_id = args
        .project_id
        .as_deref()
        .context("A project id or --input is required")?;

    let keyring = config.api.keyring.then(Keyring::default);
    let credential = Credential::resolve(
        args.token.as_deref(),
        keyring.as_ref().map(|k| k as &dyn SecretStore),
        config.api.token.as_deref(),
    )?;
    let client = AsanaClient::new(
        &config.api.base_url,
        config.api.timeout(),
        project_id,
        credential,
    )?;

    Ok(Box::new(client))
}

/// Fetches tasks and builds the collection, failing on dangling references
pub fn tasks(args: &SourceArgs, config: &Config) -> Result<TaskCollection> {
    let source = source(args, config)?;
    let description = source.describe();
    debug!(source = %description, "Loading tasks");

    let tasks = source
        .fetch()
        .with_context(|| format!("Failed to load tasks from {}", description))?;

    let collection = TaskCollection::from_tasks(tasks)
        .with_context(|| format!("Inconsistent task list from {}", description))?;

    info!(
        tasks = collection.len(),
        edges = collection.edge_count(),
        "Loaded task graph"
    );
    Ok(collection)
}
