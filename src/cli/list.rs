use std::path::Path;

use serde_json::json;

use crate::error::TaskdeckError;
use crate::output;
use crate::store::TaskStore;
use crate::view::{self, PriorityFilter, SortOrder, StatusFilter};

pub fn run(
    store_path: &Path,
    status: StatusFilter,
    priority: PriorityFilter,
    sort: SortOrder,
    json_output: bool,
) -> i32 {
    super::report(
        run_inner(store_path, status, priority, sort, json_output),
        json_output,
    )
}

fn run_inner(
    store_path: &Path,
    status: StatusFilter,
    priority: PriorityFilter,
    sort: SortOrder,
    json_output: bool,
) -> Result<i32, TaskdeckError> {
    let store = TaskStore::open(store_path);
    let tasks = view::compute_view(store.tasks(), status, priority, sort);
    // Counts always cover the whole store, not the filtered view.
    let counts = view::compute_counts(store.tasks());

    if json_output {
        let tasks_json: Vec<_> = tasks.iter().map(output::json::task_json).collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&output::json::success(json!({
                "tasks": tasks_json,
                "counts": output::json::counts_json(&counts)
            })))
            .unwrap()
        );
    } else {
        output::text::print_task_list(&tasks);
        println!();
        output::text::print_counts(&counts);
    }
    Ok(0)
}
