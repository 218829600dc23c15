//! Board State
//!
//! Plain data the page renders from. Cloned out of the board as snapshots.

use crate::domain::{Entity, Todo, TodoId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoardPhase {
    /// Mounted, first fetch not finished
    #[default]
    Loading,
    Ready,
    /// Logged out or the server rejected the token; nothing more happens
    SignedOut,
}

/// Text typed into the "new todo" form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub description: String,
}

/// Working copy of the todo being edited
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditSession {
    pub id: TodoId,
    pub title: String,
    pub description: String,
    pub is_completed: bool,
}

impl EditSession {
    pub fn begin(todo: &Todo) -> Self {
        Self {
            id: todo.id(),
            title: todo.title.clone(),
            description: todo.description.clone(),
            is_completed: todo.is_completed,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardState {
    pub phase: BoardPhase,
    /// Server order, newest creations first
    pub todos: Vec<Todo>,
    pub compose: Draft,
    /// At most one todo is edited at a time
    pub edit: Option<EditSession>,
}

impl BoardState {
    pub fn find(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id() == id)
    }

    pub(crate) fn find_mut(&mut self, id: TodoId) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|t| t.id() == id)
    }

    pub fn is_editing(&self, id: TodoId) -> bool {
        self.edit.as_ref().is_some_and(|e| e.id == id)
    }

    /// Number of todos not yet completed
    pub fn remaining(&self) -> usize {
        self.todos.iter().filter(|t| !t.is_completed).count()
    }

    pub fn has_completed(&self) -> bool {
        self.todos.iter().any(|t| t.is_completed)
    }
}
