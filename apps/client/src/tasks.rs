//! Transient task checklist split into pending and done views.

use std::fmt::Write as _;

use crate::errors::AppError;
use crate::models::task::Task;

pub const EMPTY_TITLE: &str = "Task title cannot be empty.";

const SEED_TASKS: [(u32, &str, bool); 4] = [
    (1, "task 1", true),
    (2, "Finish React Native project", false),
    (3, "Call sda", true),
    (4, "react native", false),
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// The four starter tasks every checklist opens with.
    pub fn seeded() -> Self {
        let tasks = SEED_TASKS
            .iter()
            .map(|&(id, title, checked)| Task {
                id,
                title: title.to_string(),
                checked,
            })
            .collect();
        Self { tasks }
    }

    /// Appends an unchecked task and returns its id (one past the current max).
    pub fn add(&mut self, title: &str) -> Result<u32, AppError> {
        if title.trim().is_empty() {
            return Err(AppError::Validation(EMPTY_TITLE.to_string()));
        }
        let id = self.tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        self.tasks.push(Task {
            id,
            title: title.to_string(),
            checked: false,
        });
        Ok(id)
    }

    /// Flips the checked flag. Returns false when no task has `id`.
    pub fn toggle(&mut self, id: u32) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.checked = !task.checked;
                true
            }
            None => false,
        }
    }

    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    pub fn pending(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| !t.checked).collect()
    }

    pub fn done(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.checked).collect()
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for (heading, tasks) in [("Tasks", self.pending()), ("Done Tasks", self.done())] {
            if !out.is_empty() {
                let _ = writeln!(out);
            }
            let _ = writeln!(out, "{heading}");
            for task in tasks {
                let mark = if task.checked { 'x' } else { ' ' };
                let _ = writeln!(out, "  [{mark}] {}. {}", task.id, task.title);
            }
        }
        out
    }
}
