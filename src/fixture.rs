// Seed fixture loading

use crate::task::Task;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Failure while reading or parsing a seed fixture
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read seed file")]
    Io(#[from] std::io::Error),

    #[error("failed to parse seed file")]
    Parse(#[from] serde_json::Error),
}

/// Load an initial task collection from a JSON file
///
/// The file holds a single JSON array of tasks, e.g.
/// `[{"id":"todo-0","name":"Eat","completed":true}]`. Order in the file is
/// the order in the collection. The result still goes through
/// [`TaskStore::seeded`](crate::store::TaskStore::seeded), which enforces
/// the ID uniqueness invariant.
pub fn load_tasks<P: AsRef<Path>>(path: P) -> Result<Vec<Task>, FixtureError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let tasks: Vec<Task> = serde_json::from_reader(BufReader::new(file))?;

    info!(path = %path.display(), count = tasks.len(), "loaded seed tasks");
    Ok(tasks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_tasks_preserves_order_and_content() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"id":"todo-0","name":"Eat","completed":true}},
                {{"id":"todo-1","name":"Sleep","completed":false}}
            ]"#
        )
        .unwrap();

        let tasks = load_tasks(file.path()).unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].id, "todo-0");
        assert!(tasks[0].completed);
        assert_eq!(tasks[1].name, "Sleep");
        assert!(!tasks[1].completed);
    }

    #[test]
    fn test_load_tasks_empty_array() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[]").unwrap();

        let tasks = load_tasks(file.path()).unwrap();
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_load_tasks_malformed_json_is_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();

        let err = load_tasks(file.path()).unwrap_err();
        assert!(matches!(err, FixtureError::Parse(_)));
    }

    #[test]
    fn test_load_tasks_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_tasks(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, FixtureError::Io(_)));
    }
}
