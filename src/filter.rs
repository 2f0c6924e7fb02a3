// Display filters for the task list

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use crate::task::Task;

/// Named predicate selecting which tasks are shown
///
/// The filter never affects stored data, only what a projection of the
/// collection contains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// Every filter, in the order a selector presents them
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    /// Whether a task passes this filter
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !task.completed,
            Filter::Completed => task.completed,
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Filter::All => write!(f, "All"),
            Filter::Active => write!(f, "Active"),
            Filter::Completed => write!(f, "Completed"),
        }
    }
}

/// Filter name outside the {All, Active, Completed} enumeration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown filter: {0} (expected All, Active or Completed)")]
pub struct UnknownFilter(pub String);

impl FromStr for Filter {
    type Err = UnknownFilter;

    /// Parse a filter name, case-insensitively
    ///
    /// Names outside the enumeration are rejected rather than ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Filter::All),
            "active" => Ok(Filter::Active),
            "completed" => Ok(Filter::Completed),
            _ => Err(UnknownFilter(s.to_string())),
        }
    }
}

/// Pure projection of the tasks visible under a filter
///
/// Preserves collection order and is recomputed on every call; nothing is
/// cached.
pub fn visible(tasks: &[Task], filter: Filter) -> impl Iterator<Item = &Task> {
    tasks.iter().filter(move |task| filter.matches(task))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Task> {
        vec![
            Task::new("t1", "Eat"),
            Task {
                id: "t2".to_string(),
                name: "Sleep".to_string(),
                completed: true,
            },
            Task::new("t3", "Repeat"),
        ]
    }

    #[test]
    fn test_matches_predicate_table() {
        let open = Task::new("t1", "Eat");
        let done = Task {
            id: "t2".to_string(),
            name: "Sleep".to_string(),
            completed: true,
        };

        assert!(Filter::All.matches(&open));
        assert!(Filter::All.matches(&done));
        assert!(Filter::Active.matches(&open));
        assert!(!Filter::Active.matches(&done));
        assert!(!Filter::Completed.matches(&open));
        assert!(Filter::Completed.matches(&done));
    }

    #[test]
    fn test_visible_preserves_order() {
        let tasks = sample();

        let all: Vec<&str> = visible(&tasks, Filter::All).map(|t| t.id.as_str()).collect();
        assert_eq!(all, ["t1", "t2", "t3"]);

        let active: Vec<&str> = visible(&tasks, Filter::Active).map(|t| t.id.as_str()).collect();
        assert_eq!(active, ["t1", "t3"]);

        let completed: Vec<&str> = visible(&tasks, Filter::Completed).map(|t| t.id.as_str()).collect();
        assert_eq!(completed, ["t2"]);
    }

    #[test]
    fn test_active_and_completed_partition_the_collection() {
        let tasks = sample();

        let mut partition: Vec<&str> = visible(&tasks, Filter::Active)
            .chain(visible(&tasks, Filter::Completed))
            .map(|t| t.id.as_str())
            .collect();
        partition.sort_unstable();

        let mut ids: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
        ids.sort_unstable();

        assert_eq!(partition, ids);
    }

    #[test]
    fn test_parse_canonical_and_case_variants() {
        assert_eq!("All".parse::<Filter>().unwrap(), Filter::All);
        assert_eq!("active".parse::<Filter>().unwrap(), Filter::Active);
        assert_eq!("COMPLETED".parse::<Filter>().unwrap(), Filter::Completed);
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        let err = "Done".parse::<Filter>().unwrap_err();
        assert_eq!(err, UnknownFilter("Done".to_string()));
        assert!("".parse::<Filter>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for filter in Filter::ALL {
            assert_eq!(filter.to_string().parse::<Filter>().unwrap(), filter);
        }
    }

    #[test]
    fn test_default_is_all() {
        assert_eq!(Filter::default(), Filter::All);
    }
}
