use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "lt", about = concat!("[x] lift v", env!("CARGO_PKG_VERSION"), " - a to-do list you can drag around"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different data directory
    #[arg(short = 'C', long = "data-dir", global = true)]
    pub data_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a task to the bottom of the list
    Add(AddArgs),
    /// List all tasks
    List,
    /// Mark a task completed
    Done(NumberArg),
    /// Mark a task not completed
    Undone(NumberArg),
    /// Replace a task's text
    Edit(EditArgs),
    /// Remove a task
    Rm(NumberArg),
    /// Replace a task's tags
    Tag(TagArgs),
    /// Move a task to a new position
    Mv(MvArgs),
}

// ---------------------------------------------------------------------------
// Command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct AddArgs {
    /// Task text
    pub text: String,
    /// Tag the new task (repeatable)
    #[arg(long)]
    pub tag: Vec<String>,
}

#[derive(Args)]
pub struct NumberArg {
    /// Task number, as shown by `lt list`
    pub number: usize,
}

#[derive(Args)]
pub struct EditArgs {
    /// Task number, as shown by `lt list`
    pub number: usize,
    /// New task text
    pub text: String,
}

#[derive(Args)]
pub struct TagArgs {
    /// Task number, as shown by `lt list`
    pub number: usize,
    /// Tags to set (omit to clear)
    pub tags: Vec<String>,
}

#[derive(Args)]
pub struct MvArgs {
    /// Task number to move
    pub from: usize,
    /// Destination position (1-based)
    pub to: usize,
}
