//! Example 03: Seeded interactive session
//!
//! This example writes a JSON seed fixture, loads it the way the binary
//! does, and drives a scripted session through the CLI loop.
//!
//! Run with: cargo run --example 03_seeded_session

use eyre::Result;
use std::io::{Cursor, Write};
use todomatic::{TaskStore, cli, fixture};

fn main() -> Result<()> {
    println!("TodoMatic Seeded Session Example");
    println!("================================\n");

    // Write a seed fixture
    let mut seed_file = tempfile::NamedTempFile::new()?;
    write!(
        seed_file,
        r#"[
            {{"id":"todo-0","name":"Eat","completed":true}},
            {{"id":"todo-1","name":"Sleep","completed":false}}
        ]"#
    )?;
    println!("Seed fixture: {}\n", seed_file.path().display());

    // Load it and seed the store
    let tasks = fixture::load_tasks(seed_file.path())?;
    let mut store = TaskStore::seeded(tasks)?;
    println!("Loaded {} tasks.\n", store.len());

    // Drive a scripted session: add a task, complete it, narrow the view
    let script = "add Repeat\ntoggle todo-1\nfilter Completed\nquit\n";
    println!("Script:\n{}", script);

    let mut transcript = Vec::new();
    cli::run_session(&mut store, Cursor::new(script), &mut transcript)?;

    println!("Transcript:");
    println!("{}", String::from_utf8_lossy(&transcript));

    println!("Example complete!");
    Ok(())
}
