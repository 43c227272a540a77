use clap::{Parser, Subcommand};
use colored::Colorize;
use eyre::Result;
use std::path::PathBuf;
use std::process::ExitCode;
use taskpad::{JsonFileStorage, StoreConfig, StoreError, TaskPriority, TaskStore, report};

#[derive(Parser)]
#[command(name = "taskpad")]
#[command(about = "taskpad - a small to-do list with persistence and statistics")]
#[command(version)]
struct Cli {
    /// Path to the task file (default: ~/.tasks.json)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Path to a YAML config file
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new task
    Add {
        /// Task description
        #[arg(required = true)]
        description: Vec<String>,

        /// Task priority: high, medium or low
        #[arg(short, long)]
        priority: Option<TaskPriority>,

        /// Task category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List all tasks
    List,

    /// Mark a task as done
    Done {
        /// Task id
        id: u64,
    },

    /// Delete a task
    Delete {
        /// Task id
        id: u64,
    },

    /// Clear all completed tasks
    Clear,

    /// Show aggregate statistics
    Stats,
}

fn main() -> Result<ExitCode> {
    // Setup tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => StoreConfig::from_file(path)?,
        None => StoreConfig::default(),
    };

    let storage = match &cli.file {
        Some(path) => JsonFileStorage::new(path),
        None => JsonFileStorage::default_location(),
    };

    let mut store = TaskStore::open(Box::new(storage), config);

    let exit = match cli.command {
        Commands::Add {
            description,
            priority,
            category,
        } => {
            let description = description.join(" ");
            match store.add(&description, priority, category.as_deref()) {
                Ok(task) => {
                    println!("Added: {}", task.description);
                    ExitCode::SUCCESS
                }
                Err(e @ StoreError::Validation(_)) => {
                    eprintln!("{} {e}", "Error:".red().bold());
                    ExitCode::FAILURE
                }
                Err(e) => {
                    println!("Added: {}", description.trim());
                    warn_save_failure(&e);
                    ExitCode::SUCCESS
                }
            }
        }

        Commands::List => {
            let tasks = store.tasks();
            if tasks.is_empty() {
                println!("No tasks found");
            } else {
                for task in tasks {
                    let line = report::format_task(task);
                    if task.is_done() {
                        println!("{}", line.dimmed());
                    } else {
                        println!("{line}");
                    }
                }
            }
            ExitCode::SUCCESS
        }

        Commands::Done { id } => match store.mark_done(id) {
            Ok(true) => {
                println!("Task {id} marked as done");
                ExitCode::SUCCESS
            }
            Ok(false) => {
                println!("Task {id} is already done or does not exist");
                ExitCode::SUCCESS
            }
            Err(e) => {
                println!("Task {id} marked as done");
                warn_save_failure(&e);
                ExitCode::SUCCESS
            }
        },

        Commands::Delete { id } => match store.delete(id) {
            Ok(true) => {
                println!("Task {id} deleted");
                ExitCode::SUCCESS
            }
            Ok(false) => {
                eprintln!("{} Task {id} not found", "Error:".red().bold());
                ExitCode::FAILURE
            }
            Err(e) => {
                println!("Task {id} deleted");
                warn_save_failure(&e);
                ExitCode::SUCCESS
            }
        },

        Commands::Clear => {
            let before = store.stats().completed;
            match store.clear_completed() {
                Ok(_) => {
                    println!("Cleared {before} completed tasks");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    println!("Cleared {before} completed tasks");
                    warn_save_failure(&e);
                    ExitCode::SUCCESS
                }
            }
        }

        Commands::Stats => {
            println!("{}", report::format_stats(&store.stats()));
            let categories = store.category_breakdown();
            if !categories.is_empty() {
                println!();
                println!("{}", report::format_category_breakdown(&categories));
            }
            let priorities = store.priority_breakdown();
            if !priorities.is_empty() {
                println!();
                println!("{}", report::format_priority_breakdown(&priorities));
            }
            if store.is_overloaded() {
                println!();
                println!("{}", "Warning: too many pending tasks, clear the backlog!".yellow());
            }
            ExitCode::SUCCESS
        }
    };

    Ok(exit)
}

/// Persistence failures are non-fatal: the mutation applied in memory and
/// the command still reports success.
fn warn_save_failure(err: &StoreError) {
    eprintln!("{} {err}", "warning:".yellow().bold());
}
