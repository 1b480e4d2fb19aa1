//! Weekly To-Do - Main Entry Point
//!
//! Command-line front end for the `weekly_todo` library. Each subcommand maps
//! onto one `TaskStore` operation.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use weekly_todo::todo::DATE_FORMAT;
use weekly_todo::{
    Config, SortColumn, TaskId, TaskStore, TodoError, ViewMode, formatting, local_date_today,
    validation,
};

/// Weekly To-Do - ranked tasks with weekly carry-over and cleanup
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the task data file (overrides the config file)
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Treat this date as today (YYYY-MM-DD)
    #[arg(long, global = true)]
    today: Option<String>,

    /// Do not purge last weeks' completed tasks on startup
    #[arg(long, global = true)]
    no_cleanup: bool,

    /// Replace a task file that cannot be read instead of refusing to write
    #[arg(long, global = true)]
    force: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a config file with default settings to --config (or weekly-todo.toml)
    InitConfig,
    #[command(flatten)]
    Task(TaskCommand),
}

#[derive(Subcommand, Debug)]
enum TaskCommand {
    /// Add a task
    Add {
        /// Task description
        text: String,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
        /// Rank: A, B or C
        #[arg(long, default_value = "B")]
        rank: String,
    },
    /// Edit one task; omitted fields keep their current value
    Edit {
        id: TaskId,
        #[arg(long)]
        text: Option<String>,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        rank: Option<String>,
    },
    /// Delete tasks by ID
    Delete { ids: Vec<TaskId> },
    /// Mark tasks complete, or incomplete again
    Toggle { ids: Vec<TaskId> },
    /// Show tasks
    List {
        /// all or this_week (defaults to the config's default_view)
        #[arg(long)]
        view: Option<ViewMode>,
        /// Re-sort by column: status, text, date or rank
        #[arg(long)]
        sort: Option<SortColumn>,
        /// Sort descending
        #[arg(long, requires = "sort")]
        reverse: bool,
    },
    /// Move last week's unfinished tasks to this week's Monday
    CarryOver,
    /// Remove completed tasks from previous weeks
    Cleanup,
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> ExitCode {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        // No arguments provided, show help and exit with error code
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!(); // Add a newline after help
        return ExitCode::from(2);
    }

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(warning) = err.downcast_ref::<TodoError>() {
                eprintln!("Warning: {}", warning);
            } else {
                eprintln!("Error: {:#}", err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = Config::load(args.config.as_deref())?;
    init_tracing(&config.log_level);

    let command = match args.command {
        Command::InitConfig => return init_config(args.config),
        Command::Task(command) => command,
    };

    let today = match args.today.as_deref() {
        Some(date) => validation::parse_date(date)?,
        None => local_date_today(),
    };

    let data_file = args.file.unwrap_or(config.data_file);
    let mut store = TaskStore::open(&data_file)?;
    if args.force {
        if let Some(reason) = store.discard_corruption() {
            eprintln!(
                "Warning: {} could not be read ({}); replacing it with an empty list",
                data_file.display(),
                reason
            );
        }
    } else if let Some(reason) = store.corruption() {
        eprintln!(
            "Warning: {} could not be read ({}); it will not be modified",
            data_file.display(),
            reason
        );
    }

    if config.cleanup_on_start && !args.no_cleanup {
        store.cleanup_old_completed(today)?;
    }

    match command {
        TaskCommand::Add { text, date, rank } => {
            let date = date.unwrap_or_else(|| today.format(DATE_FORMAT).to_string());
            let id = store.add_task(&text, &date, &rank)?;
            println!("Task added with ID: {}", id);
        }
        TaskCommand::Edit {
            id,
            text,
            date,
            rank,
        } => {
            let current = store.get(id).cloned().ok_or(TodoError::NotFound(id))?;
            let text = text.unwrap_or(current.text);
            let date = date.or(current.date).unwrap_or_default();
            let rank = rank
                .or_else(|| current.rank.map(|r| r.to_string()))
                .unwrap_or_default();
            store.edit_task(id, &text, &date, &rank)?;
            println!("Task {} updated", id);
        }
        TaskCommand::Delete { ids } => {
            let removed = store.delete_tasks(&ids)?;
            println!("{}", formatting::format_deleted(&removed));
        }
        TaskCommand::Toggle { ids } => {
            let toggled = store.toggle_complete(&ids)?;
            println!("{}", formatting::format_toggled(&toggled));
        }
        TaskCommand::List {
            view,
            sort,
            reverse,
        } => {
            let mode = view.unwrap_or(config.default_view);
            let tasks = store.list(mode, today, sort.map(|column| (column, reverse)));
            println!("{}", formatting::format_tasks(&tasks).trim_end());
        }
        TaskCommand::CarryOver => {
            let carried = store.carry_over(today)?;
            println!("{}", formatting::format_carry_over(&carried));
        }
        TaskCommand::Cleanup => {
            let removed = store.cleanup_old_completed(today)?;
            println!("{}", formatting::format_cleanup(&removed));
        }
    }

    Ok(())
}

fn init_config(path: Option<PathBuf>) -> Result<()> {
    let path = path.unwrap_or_else(|| PathBuf::from("weekly-todo.toml"));
    if path.exists() {
        println!("Config already exists: {}", path.display());
        return Ok(());
    }
    Config::default().save(&path)?;
    println!("Wrote {}", path.display());
    Ok(())
}
