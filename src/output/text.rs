use crate::models::Task;
use crate::view::StatusCounts;

pub fn print_task(t: &Task) {
    println!("Task: {} ({})", t.title, t.id);
    if !t.description.is_empty() {
        println!("  Description: {}", t.description);
    }
    if let Some(ref due) = t.due_date {
        println!("  Due: {due}");
    }
    println!("  Priority: {}", t.priority.as_str());
    println!("  Status: {}", t.status.as_str());
    if !t.created_at.is_empty() {
        println!("  Created: {}", t.created_at);
    }
    if !t.updated_at.is_empty() {
        println!("  Updated: {}", t.updated_at);
    }
}

pub fn print_task_list(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }
    for t in tasks {
        let due = t
            .due_date
            .as_deref()
            .map(|d| format!(" due={d}"))
            .unwrap_or_default();
        println!(
            "  [{}] {} ({}) p={}{}",
            t.status.as_str(),
            t.title,
            &t.id[..std::cmp::min(8, t.id.len())],
            t.priority.as_str(),
            due
        );
    }
}

pub fn print_counts(c: &StatusCounts) {
    println!(
        "Total: {}  To Do: {}  In Progress: {}  Done: {}",
        c.total, c.todo, c.in_progress, c.done
    );
}
