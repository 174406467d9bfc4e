use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::models::{Priority, Status};
use crate::view::{PriorityFilter, SortOrder, StatusFilter};

#[derive(Parser)]
#[command(
    name = "taskdeck",
    version,
    about = "Local task list manager",
    after_help = "\
NOTE:
  Tasks live in .taskdeck/tasks.json under the working directory
  (override with --store). A missing or unreadable store starts empty;
  every mutation rewrites the whole file before the command returns.

EXIT CODES:
  0  Success
  1  Error (blank title, unknown task, storage write failure)

BEHAVIOR NOTES:
  Status changes are unrestricted: any status can be set from any other.
  `done`/`reopen` mirror a checkbox: reopen goes straight back to todo.
  An `edit --title` that is blank keeps the current title.
  Task IDs may be abbreviated to any unique prefix."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to the task store file
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task
    Add {
        /// Task title (must not be blank)
        title: String,
        #[arg(long)]
        description: Option<String>,
        /// Due date, stored as-is (not validated)
        #[arg(long)]
        due: Option<String>,
        #[arg(long, value_enum, default_value_t = Priority::Medium)]
        priority: Priority,
    },

    /// List tasks with optional filters and priority sort
    List {
        #[arg(long, value_enum, default_value_t = StatusFilter::All)]
        status: StatusFilter,
        #[arg(long, value_enum, default_value_t = PriorityFilter::All)]
        priority: PriorityFilter,
        #[arg(long, value_enum, default_value_t = SortOrder::None)]
        sort: SortOrder,
    },

    /// Show task details
    Show {
        /// Task ID or prefix
        id: String,
    },

    /// Edit task fields
    Edit {
        /// Task ID or prefix
        id: String,
        /// New title (a blank value keeps the current title)
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        due: Option<String>,
        #[arg(long, value_enum)]
        priority: Option<Priority>,
    },

    /// Set a task's status directly
    Status {
        /// Task ID or prefix
        id: String,
        #[arg(value_enum)]
        status: Status,
    },

    /// Mark a task done
    Done {
        /// Task ID or prefix
        id: String,
    },

    /// Reopen a task (back to todo)
    Reopen {
        /// Task ID or prefix
        id: String,
    },

    /// Delete a task
    Delete {
        /// Task ID or prefix
        id: String,
    },

    /// Show status counts
    Stats,
}
