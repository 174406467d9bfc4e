//! Pure projections over the task collection: filtered/sorted views and
//! aggregate status counts. Nothing here mutates the store.

use std::cmp::Reverse;

use clap::ValueEnum;

use crate::models::{Priority, Status, Task};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum StatusFilter {
    #[default]
    All,
    Todo,
    InProgress,
    Done,
}

impl StatusFilter {
    fn matches(self, status: Status) -> bool {
        match self {
            Self::All => true,
            Self::Todo => status == Status::Todo,
            Self::InProgress => status == Status::InProgress,
            Self::Done => status == Status::Done,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PriorityFilter {
    #[default]
    All,
    Low,
    Medium,
    High,
}

impl PriorityFilter {
    fn matches(self, priority: Priority) -> bool {
        match self {
            Self::All => true,
            Self::Low => priority == Priority::Low,
            Self::Medium => priority == Priority::Medium,
            Self::High => priority == Priority::High,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortOrder {
    #[default]
    None,
    HighLow,
    LowHigh,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StatusCounts {
    pub total: usize,
    pub todo: usize,
    pub in_progress: usize,
    pub done: usize,
}

/// Tally tasks by status in one pass. `total` covers the full collection,
/// independent of any active filters.
pub fn compute_counts(tasks: &[Task]) -> StatusCounts {
    let mut counts = StatusCounts {
        total: tasks.len(),
        ..StatusCounts::default()
    };
    for task in tasks {
        match task.status {
            Status::Todo => counts.todo += 1,
            Status::InProgress => counts.in_progress += 1,
            Status::Done => counts.done += 1,
        }
    }
    counts
}

/// Filter then sort a snapshot of the collection. Sorting is stable: tasks
/// of equal priority keep their relative order from the filtered sequence.
pub fn compute_view(
    tasks: &[Task],
    status: StatusFilter,
    priority: PriorityFilter,
    sort: SortOrder,
) -> Vec<Task> {
    let mut view: Vec<Task> = tasks
        .iter()
        .filter(|t| status.matches(t.status) && priority.matches(t.priority))
        .cloned()
        .collect();
    match sort {
        SortOrder::HighLow => view.sort_by_key(|t| Reverse(t.priority.rank())),
        SortOrder::LowHigh => view.sort_by_key(|t| t.priority.rank()),
        SortOrder::None => {}
    }
    view
}
