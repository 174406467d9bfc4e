use std::path::Path;

use serde_json::json;

use crate::error::TaskdeckError;
use crate::output;
use crate::store::TaskStore;
use crate::view;

pub fn run(store_path: &Path, json_output: bool) -> i32 {
    super::report(run_inner(store_path, json_output), json_output)
}

fn run_inner(store_path: &Path, json_output: bool) -> Result<i32, TaskdeckError> {
    let store = TaskStore::open(store_path);
    let counts = view::compute_counts(store.tasks());
    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&output::json::success(json!({
                "counts": output::json::counts_json(&counts)
            })))
            .unwrap()
        );
    } else {
        output::text::print_counts(&counts);
    }
    Ok(0)
}
