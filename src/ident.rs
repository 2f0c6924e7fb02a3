// Unique ID generation for tasks

use uuid::Uuid;

/// Prefix carried by every generated task ID
pub const ID_PREFIX: &str = "todo-";

/// Source of unique task identifiers
///
/// The store owns one of these and pulls a fresh ID for every added task.
/// Implementations must not repeat an ID for the lifetime of one store;
/// collision probability must be negligible for the collection's lifetime.
pub trait IdSource {
    fn next_id(&mut self) -> String;
}

/// Default source backed by UUIDv7
#[derive(Debug, Default)]
pub struct UuidSource;

impl IdSource for UuidSource {
    fn next_id(&mut self) -> String {
        format!("{}{}", ID_PREFIX, Uuid::now_v7())
    }
}

/// Deterministic source producing `<prefix>1`, `<prefix>2`, ...
///
/// Meant for tests and demos where stable, readable IDs matter more than
/// uniqueness across runs.
#[derive(Debug)]
pub struct SequentialSource {
    prefix: String,
    next: u64,
}

impl SequentialSource {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 0,
        }
    }
}

impl IdSource for SequentialSource {
    fn next_id(&mut self) -> String {
        self.next += 1;
        format!("{}{}", self.prefix, self.next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_source_generates_prefixed_unique_ids() {
        let mut source = UuidSource;
        let first = source.next_id();
        let second = source.next_id();

        assert!(first.starts_with(ID_PREFIX));
        assert!(second.starts_with(ID_PREFIX));
        assert_ne!(first, second);
    }

    #[test]
    fn test_sequential_source_counts_up() {
        let mut source = SequentialSource::new("task-");
        assert_eq!(source.next_id(), "task-1");
        assert_eq!(source.next_id(), "task-2");
        assert_eq!(source.next_id(), "task-3");
    }
}
