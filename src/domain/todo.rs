use super::enums::{Filter, Priority};
use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

/// Reasons a todo cannot be appended
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TodoError {
    #[error("todo title must not be empty")]
    EmptyTitle,
}

/// A single task record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    /// Unique, stable ID
    pub id: Uuid,
    /// Task title (never empty)
    pub title: String,
    pub completed: bool,
    pub priority: Priority,
    pub due_date: NaiveDate,
    /// Free-form category, normally one of the settings categories
    pub category: String,
}

impl Todo {
    /// Flip the completion flag
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// Fields needed to create a todo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
    pub priority: Priority,
    pub due_date: NaiveDate,
    pub category: String,
}

/// Totals shown in the list title and filter tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TodoCounts {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

impl TodoCounts {
    pub fn for_filter(&self, filter: Filter) -> usize {
        match filter {
            Filter::All => self.total,
            Filter::Active => self.active,
            Filter::Completed => self.completed,
        }
    }
}

/// Ordered collection of todos; insertion order is display order
#[derive(Debug, Clone, Default)]
pub struct TodoStore {
    todos: Vec<Todo>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new todo at the end, returning its ID.
    ///
    /// The title is stored as typed; only an all-whitespace title is rejected.
    pub fn append(&mut self, new: NewTodo) -> Result<Uuid, TodoError> {
        if new.title.trim().is_empty() {
            return Err(TodoError::EmptyTitle);
        }

        let todo = Todo {
            id: Uuid::new_v4(),
            title: new.title,
            completed: false,
            priority: new.priority,
            due_date: new.due_date,
            category: new.category,
        };
        let id = todo.id;
        self.todos.push(todo);
        Ok(id)
    }

    /// Flip completion on the todo with `id`. Returns false if no such todo.
    pub fn toggle(&mut self, id: Uuid) -> bool {
        match self.todos.iter_mut().find(|todo| todo.id == id) {
            Some(todo) => {
                todo.toggle();
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: Uuid) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    /// Todos passing `filter`, in insertion order
    pub fn filtered(&self, filter: Filter) -> Vec<&Todo> {
        self.todos
            .iter()
            .filter(|todo| filter.matches(todo.completed))
            .collect()
    }

    pub fn counts(&self) -> TodoCounts {
        let completed = self.todos.iter().filter(|todo| todo.completed).count();
        TodoCounts {
            total: self.len(),
            active: self.len() - completed,
            completed,
        }
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }
}
