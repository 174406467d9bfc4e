use std::path::Path;

use serde_json::json;

use crate::error::TaskdeckError;
use crate::models::{Priority, Status};
use crate::output;
use crate::store::TaskStore;

pub fn run_add(
    store_path: &Path,
    title: &str,
    description: Option<&str>,
    due: Option<String>,
    priority: Priority,
    json_output: bool,
) -> i32 {
    super::report(
        add_inner(store_path, title, description, due, priority, json_output),
        json_output,
    )
}

fn add_inner(
    store_path: &Path,
    title: &str,
    description: Option<&str>,
    due: Option<String>,
    priority: Priority,
    json_output: bool,
) -> Result<i32, TaskdeckError> {
    let mut store = TaskStore::open(store_path);
    let task = store.add(title, description.unwrap_or(""), due, priority)?;
    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&output::json::success(json!({
                "task": output::json::task_json(task)
            })))
            .unwrap()
        );
    } else {
        println!("Added task: {} ({})", task.title, task.id);
    }
    Ok(0)
}

pub fn run_show(store_path: &Path, reference: &str, json_output: bool) -> i32 {
    super::report(show_inner(store_path, reference, json_output), json_output)
}

fn show_inner(store_path: &Path, reference: &str, json_output: bool) -> Result<i32, TaskdeckError> {
    let store = TaskStore::open(store_path);
    let task = store.resolve(reference)?;
    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&output::json::success(json!({
                "task": output::json::task_json(task)
            })))
            .unwrap()
        );
    } else {
        output::text::print_task(task);
    }
    Ok(0)
}

pub fn run_edit(
    store_path: &Path,
    reference: &str,
    title: Option<String>,
    description: Option<String>,
    due: Option<String>,
    priority: Option<Priority>,
    json_output: bool,
) -> i32 {
    super::report(
        edit_inner(
            store_path,
            reference,
            title,
            description,
            due,
            priority,
            json_output,
        ),
        json_output,
    )
}

fn edit_inner(
    store_path: &Path,
    reference: &str,
    title: Option<String>,
    description: Option<String>,
    due: Option<String>,
    priority: Option<Priority>,
    json_output: bool,
) -> Result<i32, TaskdeckError> {
    let mut store = TaskStore::open(store_path);
    let id = store.resolve(reference)?.id.clone();
    let task = store.update(&id, |t| {
        if let Some(new_title) = title {
            // Blank input keeps the current title, matching prompt-cancel
            // semantics.
            let trimmed = new_title.trim();
            if !trimmed.is_empty() {
                t.title = trimmed.to_string();
            }
        }
        if let Some(desc) = description {
            t.description = desc.trim().to_string();
        }
        if let Some(new_due) = due {
            t.due_date = if new_due.is_empty() {
                None
            } else {
                Some(new_due)
            };
        }
        if let Some(p) = priority {
            t.priority = p;
        }
    })?;
    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&output::json::success(json!({
                "task": output::json::task_json(task)
            })))
            .unwrap()
        );
    } else {
        println!("Updated task: {} ({})", task.title, task.id);
    }
    Ok(0)
}

pub fn run_set_status(
    store_path: &Path,
    reference: &str,
    status: Status,
    json_output: bool,
) -> i32 {
    super::report(
        set_status_inner(store_path, reference, status, json_output),
        json_output,
    )
}

fn set_status_inner(
    store_path: &Path,
    reference: &str,
    status: Status,
    json_output: bool,
) -> Result<i32, TaskdeckError> {
    let mut store = TaskStore::open(store_path);
    let id = store.resolve(reference)?.id.clone();
    let task = store.update(&id, |t| t.status = status)?;
    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&output::json::success(json!({
                "task": output::json::task_json(task)
            })))
            .unwrap()
        );
    } else {
        println!("Task {} -> {}", task.id, task.status.as_str());
    }
    Ok(0)
}

pub fn run_delete(store_path: &Path, reference: &str, json_output: bool) -> i32 {
    super::report(delete_inner(store_path, reference, json_output), json_output)
}

fn delete_inner(
    store_path: &Path,
    reference: &str,
    json_output: bool,
) -> Result<i32, TaskdeckError> {
    let mut store = TaskStore::open(store_path);
    let id = store.resolve(reference)?.id.clone();
    let task = store.remove(&id)?;
    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&output::json::success(json!({
                "deleted": { "id": task.id, "title": task.title }
            })))
            .unwrap()
        );
    } else {
        println!("Deleted task: {} ({})", task.title, task.id);
    }
    Ok(0)
}
