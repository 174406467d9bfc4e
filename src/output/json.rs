use serde_json::{json, Value};

use crate::error::TaskdeckError;
use crate::models::Task;
use crate::view::StatusCounts;

pub fn success(data: Value) -> Value {
    json!({
        "success": true,
        "data": data
    })
}

pub fn error(err: &TaskdeckError) -> Value {
    json!({
        "success": false,
        "error": {
            "code": err.code.as_str(),
            "message": err.message
        }
    })
}

pub fn task_json(t: &Task) -> Value {
    json!({
        "id": t.id,
        "title": t.title,
        "description": t.description,
        "dueDate": t.due_date,
        "priority": t.priority.as_str(),
        "status": t.status.as_str(),
        "createdAt": t.created_at,
        "updatedAt": t.updated_at
    })
}

pub fn counts_json(c: &StatusCounts) -> Value {
    json!({
        "total": c.total,
        "todo": c.todo,
        "inProgress": c.in_progress,
        "done": c.done
    })
}
