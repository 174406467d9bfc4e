use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::TaskdeckError;
use crate::models::Task;

pub const STORE_VERSION: u32 = 1;

/// On-disk shape of the store slot: the whole collection as one block,
/// wrapped in a versioned envelope.
#[derive(Serialize, Deserialize)]
struct StoreFile {
    version: u32,
    tasks: Vec<Task>,
}

/// Default store slot, relative to the working directory.
pub fn default_store_path() -> PathBuf {
    PathBuf::from(".taskdeck").join("tasks.json")
}

/// Read the store slot. An absent or unparsable slot loads as an empty
/// collection; read problems never surface to the caller.
pub fn load(path: &Path) -> Vec<Task> {
    let Ok(raw) = fs::read_to_string(path) else {
        return Vec::new();
    };
    match serde_json::from_str::<StoreFile>(&raw) {
        Ok(file) => file.tasks,
        Err(_) => Vec::new(),
    }
}

/// Overwrite the store slot with the full collection. Called after every
/// mutation; a rejected write propagates as a storage error.
pub fn save(path: &Path, tasks: &[Task]) -> Result<(), TaskdeckError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = StoreFile {
        version: STORE_VERSION,
        tasks: tasks.to_vec(),
    };
    fs::write(path, serde_json::to_string_pretty(&file)?)?;
    Ok(())
}
