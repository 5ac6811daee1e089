//! Interactive prompt: top-level menu and per-list session loop.
//!
//! All prompting, input trimming, and priority range validation happens
//! here, before anything reaches the core; the core only re-applies
//! separator sanitization defensively. Reader and writer are generic so
//! tests can drive a session from a string.

use crate::config::Config;
use colored::*;
use eyre::{Context, Result};
use log::{info, warn};
use std::io::{BufRead, Write};
use std::path::Path;
use taskr::domain::Priority;
use taskr::storage;
use taskr::store::TaskStore;

const TOP_MENU: &str = "\nType one of the following commands:\n\topen: view an existing to-do list.\n\tcreate: create a new to-do list.\n\texit: exit the program.";

const SESSION_MENU: &str = "\nSession commands:\n\tlist: print the to-do list ordered by priority.\n\tadd: add a task to the list.\n\tdelete: delete a task from the list.\n\tsave: save the current list state.\n\texit: leave this list.";

/// Run the top-level menu until `exit` or end of input.
pub fn run_top_menu<R: BufRead, W: Write>(input: &mut R, output: &mut W, config: &Config) -> Result<()> {
    loop {
        writeln!(output, "{}", TOP_MENU)?;
        let Some(command) = prompt(input, output, "> ")? else {
            return Ok(());
        };

        match command.as_str() {
            "open" => open_from_prompt(input, output, config)?,
            "create" => create_from_prompt(input, output, config)?,
            "exit" => return Ok(()),
            "" => {}
            other => writeln!(output, "{}", format!("Invalid command: {other}").red())?,
        }
    }
}

/// Load `path` into a fresh store and run a session on it.
///
/// A list that fails to load aborts the open: the error propagates and no
/// empty store is fabricated in its place.
pub fn open_list<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    config: &Config,
    path: &Path,
) -> Result<()> {
    let mut store = TaskStore::new();
    storage::load(&mut store, path).with_context(|| format!("Failed to load {}", path.display()))?;
    writeln!(
        output,
        "{}",
        format!("Opened {} ({} tasks).", path.display(), store.len()).cyan()
    )?;
    run_session(input, output, &mut store, path, config)
}

/// Run a session on a fresh, empty list that will save to `path`.
pub fn create_list<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    config: &Config,
    path: &Path,
) -> Result<()> {
    let mut store = TaskStore::new();
    writeln!(output, "{}", format!("Created new list {}.", path.display()).cyan())?;
    run_session(input, output, &mut store, path, config)
}

fn open_from_prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, config: &Config) -> Result<()> {
    let Some(name) = prompt(input, output, "\nEnter the to-do file name to open: ")? else {
        return Ok(());
    };
    if name.is_empty() {
        writeln!(output, "{}", "Invalid file name entered.".red())?;
        return Ok(());
    }

    let path = config.resolve_list_path(Path::new(&name));
    // A failed load aborts this open but not the program; back to the menu.
    if let Err(e) = open_list(input, output, config, &path) {
        warn!("open failed: {e:#}");
        writeln!(output, "{}", format!("{e:#}").red())?;
    }
    Ok(())
}

fn create_from_prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, config: &Config) -> Result<()> {
    let Some(name) = prompt(input, output, "\nEnter a name for the new to-do list file: ")? else {
        return Ok(());
    };
    if name.is_empty() {
        writeln!(output, "{}", "Invalid file name entered.".red())?;
        return Ok(());
    }

    let path = config.resolve_list_path(Path::new(&name));
    create_list(input, output, config, &path)
}

/// The per-list command loop. Exit autosaves when configured to.
fn run_session<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    store: &mut TaskStore,
    path: &Path,
    config: &Config,
) -> Result<()> {
    writeln!(output, "{}", SESSION_MENU)?;
    loop {
        let Some(command) = prompt(input, output, "\nEnter command to execute: ")? else {
            break;
        };

        match command.as_str() {
            "list" => list_tasks(output, store)?,
            "add" => add_task(input, output, store)?,
            "delete" => delete_task(input, output, store)?,
            "save" => save_list(output, store, path)?,
            "exit" => break,
            "" => {}
            other => writeln!(output, "{}", format!("Invalid command: {other}").red())?,
        }
    }

    if config.lists.autosave_on_exit {
        save_list(output, store, path)?;
    }
    Ok(())
}

fn list_tasks<W: Write>(output: &mut W, store: &mut TaskStore) -> Result<()> {
    writeln!(output, "\nTotal Tasks: {}", store.len())?;
    for (i, task) in store.sorted_tasks().iter().enumerate() {
        let label = Priority::from_int(task.priority).map_or("?", |p| p.label());
        writeln!(
            output,
            "\tTask {}: {}; priority: {} ({})",
            i + 1,
            task.name,
            task.priority,
            label
        )?;
    }
    Ok(())
}

fn add_task<R: BufRead, W: Write>(input: &mut R, output: &mut W, store: &mut TaskStore) -> Result<()> {
    let Some(name) = prompt(input, output, "\tEnter task name: ")? else {
        return Ok(());
    };
    if name.is_empty() {
        writeln!(output, "{}", "Task name cannot be empty.".red())?;
        return Ok(());
    }

    let Some(raw) = prompt(
        input,
        output,
        "\tEnter priority (1: high, 2: medium, 3: low): ",
    )?
    else {
        return Ok(());
    };
    let Some(priority) = raw.parse::<i32>().ok().and_then(Priority::from_int) else {
        writeln!(
            output,
            "{}",
            "Invalid input. Priority must be an integer between 1 and 3.".red()
        )?;
        return Ok(());
    };

    match store.add(&name, priority.as_int()) {
        Ok(()) => {
            info!("added task '{}' with priority {}", name, priority.as_int());
            writeln!(output, "{}", "Task added.".green())?;
        }
        Err(e) => {
            warn!("add failed: {e}");
            writeln!(output, "{}", format!("Could not add task: {e}").red())?;
        }
    }
    Ok(())
}

fn delete_task<R: BufRead, W: Write>(input: &mut R, output: &mut W, store: &mut TaskStore) -> Result<()> {
    let Some(name) = prompt(input, output, "\tEnter task name to delete: ")? else {
        return Ok(());
    };

    if store.remove(&name) {
        info!("deleted task '{}'", name);
        writeln!(output, "{}", "Task deleted.".green())?;
    } else {
        writeln!(output, "{}", "Task not found.".yellow())?;
    }
    Ok(())
}

fn save_list<W: Write>(output: &mut W, store: &TaskStore, path: &Path) -> Result<()> {
    match storage::save(store, path) {
        Ok(()) => writeln!(output, "{}", format!("Saved to {}.", path.display()).green())?,
        Err(e) => {
            warn!("save failed: {e}");
            writeln!(output, "{}", format!("Failed to save {}: {e}", path.display()).red())?;
        }
    }
    Ok(())
}

/// Print a prompt, then read one line. `None` means end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, text: &str) -> Result<Option<String>> {
    write!(output, "{text}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
