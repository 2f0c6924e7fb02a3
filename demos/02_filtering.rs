//! Example 02: Display filters
//!
//! This example seeds a store and shows how the All, Active and Completed
//! filters project the same collection without touching it.
//!
//! Run with: cargo run --example 02_filtering

use eyre::Result;
use todomatic::{Filter, Task, TaskStore, visible};

fn main() -> Result<()> {
    println!("TodoMatic Filtering Example");
    println!("===========================\n");

    let seed = vec![
        Task {
            id: "todo-0".to_string(),
            name: "Eat".to_string(),
            completed: true,
        },
        Task::new("todo-1", "Sleep"),
        Task::new("todo-2", "Repeat"),
        Task {
            id: "todo-3".to_string(),
            name: "Stretch".to_string(),
            completed: true,
        },
    ];

    println!("Seeding {} tasks...\n", seed.len());
    let mut store = TaskStore::seeded(seed)?;

    // Walk every filter and show its projection
    for (i, filter) in Filter::ALL.into_iter().enumerate() {
        store.set_filter(filter);
        println!("{}. Filter = {}:", i + 1, filter);
        for task in store.visible_tasks() {
            let mark = if task.completed { "[x]" } else { "[ ]" };
            println!("   {} {} {}", mark, task.id, task.name);
        }
        println!("   Visible: {} of {}\n", store.visible_count(), store.len());
    }

    // Active and Completed partition the collection
    let active: Vec<&str> = visible(store.tasks(), Filter::Active)
        .map(|t| t.id.as_str())
        .collect();
    let completed: Vec<&str> = visible(store.tasks(), Filter::Completed)
        .map(|t| t.id.as_str())
        .collect();
    println!("Active ids:    {:?}", active);
    println!("Completed ids: {:?}", completed);
    println!("Together they cover all {} tasks.\n", store.len());

    println!("Example complete!");
    Ok(())
}
