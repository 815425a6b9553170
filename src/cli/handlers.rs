use std::path::Path;

use crate::cli::commands::{AddArgs, Cli, Commands, EditArgs, MvArgs, TagArgs};
use crate::cli::output::{TaskJson, format_task_line, task_to_json};
use crate::io::data::{load_tasks, save_tasks};
use crate::io::lock::FileLock;
use crate::io::paths::resolve_data_dir;
use crate::model::store::TaskStore;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let data_dir = resolve_data_dir(cli.data_dir.as_deref().map(Path::new));

    match cli.command {
        // No subcommand opens the TUI
        None => crate::tui::run(&data_dir),
        Some(cmd) => match cmd {
            Commands::Add(args) => cmd_add(&data_dir, args),
            Commands::List => cmd_list(&data_dir, json),
            Commands::Done(args) => cmd_set_completed(&data_dir, args.number, true),
            Commands::Undone(args) => cmd_set_completed(&data_dir, args.number, false),
            Commands::Edit(args) => cmd_edit(&data_dir, args),
            Commands::Rm(args) => cmd_rm(&data_dir, args.number),
            Commands::Tag(args) => cmd_tag(&data_dir, args),
            Commands::Mv(args) => cmd_mv(&data_dir, args),
        },
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn load_store(data_dir: &Path) -> TaskStore {
    TaskStore::from_tasks(load_tasks(data_dir))
}

/// Convert a 1-based CLI task number into a list index.
fn task_index(store: &TaskStore, number: usize) -> Result<usize, String> {
    let index = number.checked_sub(1).ok_or("task number must be >= 1")?;
    if index >= store.len() {
        return Err(format!("task not found: {}", number));
    }
    Ok(index)
}

/// Build the permutation that moves the element at `from` to position `to`.
fn moved_order(len: usize, from: usize, to: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    let item = order.remove(from);
    order.insert(to, item);
    order
}

// ---------------------------------------------------------------------------
// Read command handlers
// ---------------------------------------------------------------------------

fn cmd_list(data_dir: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = load_store(data_dir);

    if json {
        let tasks: Vec<TaskJson> = store
            .tasks()
            .iter()
            .enumerate()
            .map(|(i, task)| task_to_json(i + 1, task))
            .collect();
        println!("{}", serde_json::to_string_pretty(&tasks)?);
    } else {
        if store.is_empty() {
            println!("(no tasks)");
        }
        for (i, task) in store.tasks().iter().enumerate() {
            println!("{}", format_task_line(i + 1, task));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Write command handlers
// ---------------------------------------------------------------------------

fn cmd_add(data_dir: &Path, args: AddArgs) -> Result<(), Box<dyn std::error::Error>> {
    let _lock = FileLock::acquire_default(data_dir)?;
    let mut store = load_store(data_dir);

    if !store.append(&args.text, args.tag) {
        return Err("task text is empty".into());
    }

    save_tasks(data_dir, store.tasks())?;
    println!("{}", store.len());
    Ok(())
}

fn cmd_set_completed(
    data_dir: &Path,
    number: usize,
    completed: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let _lock = FileLock::acquire_default(data_dir)?;
    let mut store = load_store(data_dir);

    let index = task_index(&store, number)?;
    store.set_completed(index, completed);

    save_tasks(data_dir, store.tasks())?;
    println!("{}", format_task_line(number, &store.tasks()[index]));
    Ok(())
}

fn cmd_edit(data_dir: &Path, args: EditArgs) -> Result<(), Box<dyn std::error::Error>> {
    let _lock = FileLock::acquire_default(data_dir)?;
    let mut store = load_store(data_dir);

    let index = task_index(&store, args.number)?;
    if !store.set_text(index, &args.text) {
        return Err("task text is empty".into());
    }

    save_tasks(data_dir, store.tasks())?;
    println!("{}", format_task_line(args.number, &store.tasks()[index]));
    Ok(())
}

fn cmd_rm(data_dir: &Path, number: usize) -> Result<(), Box<dyn std::error::Error>> {
    let _lock = FileLock::acquire_default(data_dir)?;
    let mut store = load_store(data_dir);

    let index = task_index(&store, number)?;
    let line = format_task_line(number, &store.tasks()[index]);
    store.remove_at(index);

    save_tasks(data_dir, store.tasks())?;
    println!("removed {}", line);
    Ok(())
}

fn cmd_tag(data_dir: &Path, args: TagArgs) -> Result<(), Box<dyn std::error::Error>> {
    let _lock = FileLock::acquire_default(data_dir)?;
    let mut store = load_store(data_dir);

    let index = task_index(&store, args.number)?;
    store.set_tags(index, args.tags);

    save_tasks(data_dir, store.tasks())?;
    println!("{}", format_task_line(args.number, &store.tasks()[index]));
    Ok(())
}

fn cmd_mv(data_dir: &Path, args: MvArgs) -> Result<(), Box<dyn std::error::Error>> {
    let _lock = FileLock::acquire_default(data_dir)?;
    let mut store = load_store(data_dir);

    let from = task_index(&store, args.from)?;
    let to = task_index(&store, args.to)?;
    store.reorder(&moved_order(store.len(), from, to))?;

    save_tasks(data_dir, store.tasks())?;
    println!("{}", format_task_line(args.to, &store.tasks()[to]));
    Ok(())
}
