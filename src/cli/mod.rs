pub mod commands;
pub mod list;
pub mod stats;
pub mod task;

pub use commands::*;

use crate::error::TaskdeckError;
use crate::output;

/// Turn a command result into an exit code, printing the error envelope the
/// way the rest of the CLI prints output.
pub(crate) fn report(result: Result<i32, TaskdeckError>, json_output: bool) -> i32 {
    match result {
        Ok(code) => code,
        Err(e) => {
            if json_output {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output::json::error(&e)).unwrap()
                );
            } else {
                eprintln!("Error: {}", e.message);
            }
            1
        }
    }
}
