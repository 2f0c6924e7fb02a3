//! Example 01: Basic task operations
//!
//! This example walks through add, toggle, edit and delete against an
//! in-memory task store.
//!
//! Run with: cargo run --example 01_basic_ops

use eyre::Result;
use todomatic::{SequentialSource, TaskStore};

fn main() -> Result<()> {
    println!("TodoMatic Basic Operations Example");
    println!("==================================\n");

    // Sequential IDs keep the transcript readable; the default store uses
    // UUIDv7-backed IDs instead.
    let mut store = TaskStore::with_ids(Box::new(SequentialSource::new("todo-")));

    // ADD: Append a few tasks
    println!("1. ADD - Appending tasks...");
    let first = store.add_task("Buy milk")?;
    let second = store.add_task("Water the plants")?;
    println!("   Added: {}", first);
    println!("   Added: {}\n", second);

    // TOGGLE: Complete the first task
    println!("2. TOGGLE - Completing the first task...");
    store.toggle_task_completed(&first);
    for task in store.tasks() {
        let mark = if task.completed { "[x]" } else { "[ ]" };
        println!("   {} {} {}", mark, task.id, task.name);
    }
    println!();

    // EDIT: Rename the second task
    println!("3. EDIT - Renaming the second task...");
    store.edit_task(&second, "Water the ferns")?;
    println!("   New name: {}\n", store.tasks()[1].name);

    // Unknown IDs are silent no-ops, never errors
    println!("4. NO-OP - Toggling an unknown ID...");
    let matched = store.toggle_task_completed("todo-999");
    println!("   Matched: {}\n", matched);

    // DELETE: Remove the completed task
    println!("5. DELETE - Removing the completed task...");
    store.delete_task(&first);
    println!("   Tasks left: {}", store.len());
    for task in store.tasks() {
        println!("   - {} : {}", task.id, task.name);
    }
    println!();

    println!("Example complete!");
    Ok(())
}
