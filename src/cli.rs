// Interactive session over the task store

use crate::filter::Filter;
use crate::store::TaskStore;
use colored::Colorize;
use eyre::{Result, eyre};
use std::io::{BufRead, Write};

/// One user intent, parsed from an input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { name: String },
    Toggle { id: String },
    Edit { id: String, name: String },
    Delete { id: String },
    SetFilter { filter: Filter },
    List,
    Help,
    Quit,
}

/// Parse one input line into a command
///
/// Blank lines parse to `None`. Malformed input is an error carrying a
/// usage hint; it never reaches the store.
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb {
        "add" => {
            if rest.is_empty() {
                return Err(eyre!("usage: add <name>"));
            }
            Command::Add {
                name: rest.to_string(),
            }
        }
        "toggle" | "done" => {
            if rest.is_empty() {
                return Err(eyre!("usage: toggle <id>"));
            }
            Command::Toggle {
                id: rest.to_string(),
            }
        }
        "edit" => {
            let (id, name) = rest
                .split_once(char::is_whitespace)
                .ok_or_else(|| eyre!("usage: edit <id> <name>"))?;
            Command::Edit {
                id: id.to_string(),
                name: name.trim().to_string(),
            }
        }
        "delete" | "rm" => {
            if rest.is_empty() {
                return Err(eyre!("usage: delete <id>"));
            }
            Command::Delete {
                id: rest.to_string(),
            }
        }
        "filter" => {
            let filter = rest.parse::<Filter>()?;
            Command::SetFilter { filter }
        }
        "list" | "ls" => Command::List,
        "help" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(eyre!("unknown command: {other} (try help)")),
    };

    Ok(Some(command))
}

/// Run the interactive session until `quit` or end of input
///
/// All state lives in the store; this loop only parses intents, applies
/// them, and re-renders the projection after each one.
pub fn run_session<R: BufRead, W: Write>(
    store: &mut TaskStore,
    input: R,
    output: &mut W,
) -> Result<()> {
    render(store, output)?;

    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Ok(None) => continue,
            Ok(Some(Command::Quit)) => break,
            Ok(Some(command)) => {
                if let Err(e) = apply(store, command, output) {
                    writeln!(output, "{}", format!("error: {e}").red())?;
                }
            }
            Err(e) => {
                writeln!(output, "{}", format!("{e}").red())?;
                continue;
            }
        }
        render(store, output)?;
    }

    Ok(())
}

fn apply<W: Write>(store: &mut TaskStore, command: Command, output: &mut W) -> Result<()> {
    match command {
        Command::Add { name } => {
            let id = store.add_task(&name)?;
            writeln!(output, "added {}", id.cyan())?;
        }
        Command::Toggle { id } => {
            if store.toggle_task_completed(&id) {
                writeln!(output, "toggled {}", id.cyan())?;
            } else {
                report_miss(output, &id)?;
            }
        }
        Command::Edit { id, name } => {
            if store.edit_task(&id, &name)? {
                writeln!(output, "renamed {}", id.cyan())?;
            } else {
                report_miss(output, &id)?;
            }
        }
        Command::Delete { id } => {
            if store.delete_task(&id) {
                writeln!(output, "deleted {}", id.cyan())?;
            } else {
                report_miss(output, &id)?;
            }
        }
        Command::SetFilter { filter } => {
            store.set_filter(filter);
        }
        Command::Help => print_help(output)?,
        // List just re-renders; Quit is handled by the session loop
        Command::List | Command::Quit => {}
    }

    Ok(())
}

fn report_miss<W: Write>(output: &mut W, id: &str) -> Result<()> {
    writeln!(output, "{}", format!("no task with id {id}").dimmed())?;
    Ok(())
}

/// Render the filter selector, list heading and visible tasks
pub fn render<W: Write>(store: &TaskStore, output: &mut W) -> Result<()> {
    let selector: Vec<String> = Filter::ALL
        .iter()
        .map(|f| {
            if *f == store.filter() {
                format!("[{f}]")
            } else {
                f.to_string()
            }
        })
        .collect();
    writeln!(output, "{}", selector.join(" "))?;

    writeln!(output, "{}", heading(store.visible_count()).bold())?;

    for task in store.visible_tasks() {
        let mark = if task.completed { "[x]" } else { "[ ]" };
        let name = if task.completed {
            task.name.strikethrough()
        } else {
            task.name.normal()
        };
        writeln!(output, "{} {} {}", mark, task.id.cyan(), name)?;
    }

    Ok(())
}

/// List heading, with noun agreement for exactly one task
fn heading(count: usize) -> String {
    let noun = if count == 1 { "task" } else { "tasks" };
    format!("{count} {noun} remaining")
}

fn print_help<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output, "commands:")?;
    writeln!(output, "  add <name>        append a new task")?;
    writeln!(output, "  toggle <id>       flip a task's completion (alias: done)")?;
    writeln!(output, "  edit <id> <name>  rename a task")?;
    writeln!(output, "  delete <id>       remove a task (alias: rm)")?;
    writeln!(output, "  filter <name>     show All, Active or Completed tasks")?;
    writeln!(output, "  list              re-render the task list (alias: ls)")?;
    writeln!(output, "  quit              leave the session (aliases: exit, q)")?;
    Ok(())
}
