use std::path::PathBuf;

use chrono::Utc;

use crate::error::TaskdeckError;
use crate::models::{Priority, Status, Task};

use super::persist;

/// The authoritative ordered collection of tasks. Owns its backing `Vec`;
/// every mutation goes through the methods here and is written through to
/// the store slot before returning.
#[derive(Debug)]
pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Open the store at `path`. A missing or unreadable slot starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let tasks = persist::load(&path);
        Self { path, tasks }
    }

    /// Current tasks in insertion order. Read-only snapshot.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Resolve a task by exact ID or unique ID prefix.
    pub fn resolve(&self, reference: &str) -> Result<&Task, TaskdeckError> {
        if let Some(task) = self.get(reference) {
            return Ok(task);
        }
        let matches: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|t| t.id.starts_with(reference))
            .collect();
        match matches.len() {
            0 => Err(TaskdeckError::task_not_found(reference)),
            1 => Ok(matches[0]),
            _ => {
                let candidates: Vec<String> = matches
                    .iter()
                    .map(|t| format!("{} ({})", t.title, t.id))
                    .collect();
                Err(TaskdeckError::ambiguous_ref(reference, &candidates))
            }
        }
    }

    /// Append a new task with a fresh ID and status `todo`. A blank title is
    /// rejected without mutating the store.
    pub fn add(
        &mut self,
        title: &str,
        description: &str,
        due_date: Option<String>,
        priority: Priority,
    ) -> Result<&Task, TaskdeckError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TaskdeckError::validation("Task title must not be empty"));
        }
        let now = Utc::now().to_rfc3339();
        self.tasks.push(Task {
            id: ulid::Ulid::new().to_string(),
            title: title.to_string(),
            description: description.trim().to_string(),
            due_date,
            priority,
            status: Status::Todo,
            created_at: now.clone(),
            updated_at: now,
        });
        persist::save(&self.path, &self.tasks)?;
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    /// Apply `mutate` to the task with the given ID and persist. An unknown
    /// ID leaves the store untouched.
    pub fn update<F>(&mut self, id: &str, mutate: F) -> Result<&Task, TaskdeckError>
    where
        F: FnOnce(&mut Task),
    {
        let Some(idx) = self.tasks.iter().position(|t| t.id == id) else {
            return Err(TaskdeckError::task_not_found(id));
        };
        mutate(&mut self.tasks[idx]);
        self.tasks[idx].updated_at = Utc::now().to_rfc3339();
        persist::save(&self.path, &self.tasks)?;
        Ok(&self.tasks[idx])
    }

    /// Remove the task with the given ID and persist. An unknown ID leaves
    /// the store untouched.
    pub fn remove(&mut self, id: &str) -> Result<Task, TaskdeckError> {
        let Some(idx) = self.tasks.iter().position(|t| t.id == id) else {
            return Err(TaskdeckError::task_not_found(id));
        };
        let task = self.tasks.remove(idx);
        persist::save(&self.path, &self.tasks)?;
        Ok(task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use tempfile::TempDir;

    fn open_store(dir: &TempDir) -> TaskStore {
        TaskStore::open(dir.path().join("tasks.json"))
    }

    #[test]
    fn add_appends_todo_task() {
        let dir = TempDir::new().expect("tempdir");
        let mut store = open_store(&dir);

        let id = store
            .add("Buy milk", "two liters", None, Priority::Low)
            .expect("add")
            .id
            .clone();

        assert_eq!(store.len(), 1);
        let task = store.get(&id).expect("present");
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.description, "two liters");
        assert_eq!(task.status, Status::Todo);
        assert_eq!(task.priority, Priority::Low);
        assert!(!task.created_at.is_empty());
    }

    #[test]
    fn add_trims_title_and_rejects_blank() {
        let dir = TempDir::new().expect("tempdir");
        let mut store = open_store(&dir);

        let err = store.add("   ", "", None, Priority::Medium).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(store.len(), 0);

        let task = store
            .add("  padded  ", "", None, Priority::Medium)
            .expect("add");
        assert_eq!(task.title, "padded");
    }

    #[test]
    fn ids_are_unique() {
        let dir = TempDir::new().expect("tempdir");
        let mut store = open_store(&dir);
        for i in 0..20 {
            store
                .add(&format!("task {i}"), "", None, Priority::Medium)
                .expect("add");
        }
        let mut ids: Vec<&str> = store.tasks().iter().map(|t| t.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn update_mutates_in_place() {
        let dir = TempDir::new().expect("tempdir");
        let mut store = open_store(&dir);
        let id = store
            .add("Draft email", "", None, Priority::Medium)
            .expect("add")
            .id
            .clone();

        let task = store
            .update(&id, |t| t.status = Status::InProgress)
            .expect("update");
        assert_eq!(task.status, Status::InProgress);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn update_unknown_id_leaves_store_untouched() {
        let dir = TempDir::new().expect("tempdir");
        let mut store = open_store(&dir);
        store.add("Only task", "", None, Priority::Medium).expect("add");

        let err = store
            .update("nope", |t| t.title = "changed".to_string())
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::TaskNotFound);
        assert_eq!(store.tasks()[0].title, "Only task");
    }

    #[test]
    fn remove_drops_exactly_one() {
        let dir = TempDir::new().expect("tempdir");
        let mut store = open_store(&dir);
        let id = store
            .add("First", "", None, Priority::Medium)
            .expect("add")
            .id
            .clone();
        store.add("Second", "", None, Priority::Medium).expect("add");

        let removed = store.remove(&id).expect("remove");
        assert_eq!(removed.title, "First");
        assert_eq!(store.len(), 1);
        assert!(store.get(&id).is_none());

        let err = store.remove(&id).unwrap_err();
        assert_eq!(err.code, ErrorCode::TaskNotFound);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn resolve_accepts_unique_prefix() {
        let dir = TempDir::new().expect("tempdir");
        let mut store = open_store(&dir);
        let id = store
            .add("Prefixed", "", None, Priority::Medium)
            .expect("add")
            .id
            .clone();

        let task = store.resolve(&id[..10]).expect("resolve");
        assert_eq!(task.id, id);
        let err = store.resolve("ZZZZ").unwrap_err();
        assert_eq!(err.code, ErrorCode::TaskNotFound);
    }

    #[test]
    fn resolve_reports_ambiguity() {
        let dir = TempDir::new().expect("tempdir");
        let mut store = open_store(&dir);
        let a = store
            .add("One", "", None, Priority::Medium)
            .expect("add")
            .id
            .clone();
        let b = store
            .add("Two", "", None, Priority::Medium)
            .expect("add")
            .id
            .clone();

        let common: String = a
            .chars()
            .zip(b.chars())
            .take_while(|(x, y)| x == y)
            .map(|(x, _)| x)
            .collect();
        // ULIDs minted in the same process share a timestamp prefix
        assert!(!common.is_empty());

        let err = store.resolve(&common).unwrap_err();
        assert_eq!(err.code, ErrorCode::AmbiguousRef);
    }

    #[test]
    fn mutations_write_through() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("tasks.json");

        let id = {
            let mut store = TaskStore::open(&path);
            let id = store
                .add("Persisted", "", None, Priority::High)
                .expect("add")
                .id
                .clone();
            store
                .update(&id, |t| t.status = Status::Done)
                .expect("update");
            id
        };

        let reopened = TaskStore::open(&path);
        assert_eq!(reopened.len(), 1);
        let task = reopened.get(&id).expect("present");
        assert_eq!(task.status, Status::Done);
        assert_eq!(task.priority, Priority::High);
    }
}
