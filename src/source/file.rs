//! Offline source reading a saved tasks payload

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use tracing::debug;

use super::{parse_tasks, FetchError, TaskSource};
use crate::domain::Task;

/// Reads the API payload from a file, or stdin when the path is `-`
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn is_stdin(&self) -> bool {
        self.path.as_os_str() == "-"
    }

    fn read(&self) -> Result<String, FetchError> {
        let io_err = |source| FetchError::Io {
            path: self.path.display().to_string(),
            source,
        };

        if self.is_stdin() {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).map_err(io_err)?;
            Ok(buf)
        } else {
            fs::read_to_string(&self.path).map_err(io_err)
        }
    }
}

impl TaskSource for FileSource {
    fn fetch(&self) -> Result<Vec<Task>, FetchError> {
        debug!(path = %self.path.display(), "Reading tasks payload");
        parse_tasks(&self.read()?)
    }

    fn describe(&self) -> String {
        if self.is_stdin() {
            "stdin".to_string()
        } else {
            format!("file {}", self.path.display())
        }
    }
}
