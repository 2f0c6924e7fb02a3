use clap::Parser;
use eyre::{Context, Result};
use std::io::{stdin, stdout};
use std::path::PathBuf;
use todomatic::Filter;
use todomatic::cli;
use todomatic::fixture;
use todomatic::store::TaskStore;

#[derive(Parser)]
#[command(name = "todomatic")]
#[command(about = "TodoMatic CLI - interactive to-do list over an in-memory task store")]
#[command(version)]
struct Cli {
    /// JSON file holding the initial task collection
    #[arg(short, long)]
    seed: Option<PathBuf>,

    /// Filter to start with (All, Active or Completed)
    #[arg(short, long, default_value_t = Filter::All)]
    filter: Filter,
}

fn main() -> Result<()> {
    // Setup tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let tasks = match &cli.seed {
        Some(path) => fixture::load_tasks(path)
            .with_context(|| format!("failed to load seed from {}", path.display()))?,
        None => Vec::new(),
    };

    let mut store = TaskStore::seeded(tasks)?;
    store.set_filter(cli.filter);

    let stdin = stdin();
    let mut stdout = stdout();
    cli::run_session(&mut store, stdin.lock(), &mut stdout)?;

    Ok(())
}
