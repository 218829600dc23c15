//! Todo Board
//!
//! View-model of the todo page: the list mirrored from the server, the new-todo
//! form and the single edit session.
//!
//! Local state only changes after the server confirms a mutation, so there is
//! nothing to roll back. Mutating round-trips are serialized through one writer
//! lock per board: each operation sees the list exactly as the previous one
//! left it, and responses can no longer be applied out of order.

mod state;

#[cfg(test)]
mod fake;

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::api::{ApiError, TodoApi};
use crate::domain::{Action, Entity, Session, SyncError, SyncResult, Todo, TodoId, TodoInput};
use crate::route::Route;

pub use state::{BoardPhase, BoardState, Draft, EditSession};

const EDIT_TITLE_EMPTY: &str = "Title cannot be empty";

/// Result of a delete request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The user did not confirm; nothing was sent
    Declined,
    /// No such todo in the local list
    Missing,
}

/// What a "clear completed" pass did on the server
///
/// The local list drops every completed todo regardless; `failed` lists the
/// ids the server may still hold until the next full fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClearReport {
    pub attempted: usize,
    pub failed: Vec<TodoId>,
}

/// The todo page's state machine, bound to one session's API client
pub struct TodoBoard<A> {
    api: A,
    display_name: String,
    state: Mutex<BoardState>,
    writer: tokio::sync::Mutex<()>,
}

impl<A: TodoApi> TodoBoard<A> {
    /// Entry guard: without a session no client is built and the caller is
    /// sent to the login route
    pub fn mount<F>(session: Option<&Session>, connect: F) -> Result<Self, Route>
    where
        F: FnOnce(&Session) -> A,
    {
        match (Route::Todos.guard(session), session) {
            (Route::Todos, Some(session)) => Ok(Self::new(connect(session), session.display_name())),
            (target, _) => Err(target),
        }
    }

    pub fn new(api: A, display_name: impl Into<String>) -> Self {
        Self {
            api,
            display_name: display_name.into(),
            state: Mutex::new(BoardState::default()),
            writer: tokio::sync::Mutex::new(()),
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn snapshot(&self) -> BoardState {
        self.state().clone()
    }

    pub fn phase(&self) -> BoardPhase {
        self.state().phase
    }

    fn state(&self) -> MutexGuard<'_, BoardState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn ensure_open(&self) -> SyncResult<()> {
        if self.state().phase == BoardPhase::SignedOut {
            return Err(SyncError::SessionInvalid);
        }
        Ok(())
    }

    /// Classify a failed request; a 401 closes the board for good
    fn fail(&self, action: Action, error: ApiError) -> SyncError {
        if error.is_unauthorized() {
            tracing::warn!("{} rejected as unauthorized, closing board", action.as_str());
            self.state().phase = BoardPhase::SignedOut;
            return SyncError::SessionInvalid;
        }
        tracing::warn!("{} failed: {}", action.as_str(), error);
        SyncError::request(action, error.to_string())
    }

    // ========================
    // Fetch
    // ========================

    /// Replace the local list wholesale with the server's
    ///
    /// On failure the list is left as it was and nothing is retried.
    pub async fn load(&self) -> SyncResult<usize> {
        let _writer = self.writer.lock().await;
        self.ensure_open()?;

        match self.api.list().await {
            Ok(todos) => {
                let todos = dedupe_by_id(todos);
                let count = todos.len();
                let mut state = self.state();
                state.todos = todos;
                state.phase = BoardPhase::Ready;
                tracing::info!("loaded {} todos", count);
                Ok(count)
            }
            Err(e) => {
                let err = self.fail(Action::Load, e);
                let mut state = self.state();
                if state.phase == BoardPhase::Loading {
                    state.phase = BoardPhase::Ready;
                }
                Err(err)
            }
        }
    }

    // ========================
    // Create
    // ========================

    pub fn set_compose_title(&self, title: impl Into<String>) {
        self.state().compose.title = title.into();
    }

    pub fn set_compose_description(&self, description: impl Into<String>) {
        self.state().compose.description = description.into();
    }

    /// Submit the new-todo form
    ///
    /// The server's record goes to the head of the list and the form is
    /// cleared. On failure the form keeps its text.
    pub async fn create(&self) -> SyncResult<Todo> {
        let _writer = self.writer.lock().await;
        self.ensure_open()?;

        let input = {
            let state = self.state();
            TodoInput::new(&state.compose.title, &state.compose.description, false)?
        };

        match self.api.create(&input).await {
            Ok(todo) => {
                let mut state = self.state();
                state.todos.retain(|t| t.id() != todo.id());
                state.todos.insert(0, todo.clone());
                state.compose = Draft::default();
                tracing::debug!("created todo {}", todo.id());
                Ok(todo)
            }
            Err(e) => Err(self.fail(Action::Create, e)),
        }
    }

    // ========================
    // Edit
    // ========================

    /// Open the edit form on `id`, silently discarding any other draft
    pub fn begin_edit(&self, id: TodoId) -> bool {
        let mut state = self.state();
        if state.phase == BoardPhase::SignedOut {
            return false;
        }
        let Some(edit) = state.find(id).map(EditSession::begin) else {
            return false;
        };
        state.edit = Some(edit);
        true
    }

    pub fn set_edit_title(&self, title: impl Into<String>) {
        if let Some(edit) = self.state().edit.as_mut() {
            edit.title = title.into();
        }
    }

    pub fn set_edit_description(&self, description: impl Into<String>) {
        if let Some(edit) = self.state().edit.as_mut() {
            edit.description = description.into();
        }
    }

    pub fn set_edit_completed(&self, is_completed: bool) {
        if let Some(edit) = self.state().edit.as_mut() {
            edit.is_completed = is_completed;
        }
    }

    pub fn cancel_edit(&self) {
        self.state().edit = None;
    }

    /// Send the whole draft as a full replacement
    ///
    /// On success the record is patched in place and the edit closes. On
    /// failure the edit stays open. No-op without an active edit.
    pub async fn commit_edit(&self) -> SyncResult<()> {
        let _writer = self.writer.lock().await;
        self.ensure_open()?;

        let (id, input) = {
            let state = self.state();
            let Some(edit) = state.edit.as_ref() else {
                return Ok(());
            };
            if edit.title.trim().is_empty() {
                return Err(SyncError::Validation(EDIT_TITLE_EMPTY.to_string()));
            }
            (edit.id, TodoInput::new(&edit.title, &edit.description, edit.is_completed)?)
        };

        match self.api.update(id, &input).await {
            Ok(()) => {
                let mut state = self.state();
                if let Some(todo) = state.find_mut(id) {
                    todo.apply(&input);
                }
                if state.is_editing(id) {
                    state.edit = None;
                }
                Ok(())
            }
            Err(e) => Err(self.fail(Action::Update, e)),
        }
    }

    // ========================
    // Toggle / Delete
    // ========================

    /// Flip completion, sending the cached title and description unchanged
    ///
    /// Returns the new flag, or `None` when the id is not in the list.
    pub async fn toggle(&self, id: TodoId) -> SyncResult<Option<bool>> {
        let _writer = self.writer.lock().await;
        self.ensure_open()?;

        let input = {
            let state = self.state();
            let Some(todo) = state.find(id) else {
                return Ok(None);
            };
            let mut input = todo.to_input();
            input.is_completed = !todo.is_completed;
            input
        };

        match self.api.update(id, &input).await {
            Ok(()) => {
                let mut state = self.state();
                if let Some(todo) = state.find_mut(id) {
                    todo.is_completed = input.is_completed;
                }
                if let Some(edit) = state.edit.as_mut().filter(|e| e.id == id) {
                    edit.is_completed = input.is_completed;
                }
                Ok(Some(input.is_completed))
            }
            Err(e) => Err(self.fail(Action::Toggle, e)),
        }
    }

    /// Delete one todo after `confirm` approves it
    pub async fn delete<F>(&self, id: TodoId, confirm: F) -> SyncResult<DeleteOutcome>
    where
        F: FnOnce(&Todo) -> bool,
    {
        let _writer = self.writer.lock().await;
        self.ensure_open()?;

        let Some(todo) = self.state().find(id).cloned() else {
            return Ok(DeleteOutcome::Missing);
        };
        if !confirm(&todo) {
            return Ok(DeleteOutcome::Declined);
        }

        match self.api.remove(id).await {
            Ok(()) => {
                let mut state = self.state();
                state.todos.retain(|t| t.id() != id);
                if state.is_editing(id) {
                    state.edit = None;
                }
                Ok(DeleteOutcome::Deleted)
            }
            Err(e) => Err(self.fail(Action::Delete, e)),
        }
    }

    /// Delete every completed todo one by one, best effort
    ///
    /// Individual failures are logged and skipped. Afterwards all completed
    /// todos leave the local list whether or not their delete succeeded. An
    /// unauthorized response stops the pass without touching the list.
    pub async fn clear_completed(&self) -> SyncResult<ClearReport> {
        let _writer = self.writer.lock().await;
        self.ensure_open()?;

        let targets: Vec<TodoId> = self
            .state()
            .todos
            .iter()
            .filter(|t| t.is_completed)
            .map(Entity::id)
            .collect();

        let mut report = ClearReport {
            attempted: targets.len(),
            failed: Vec::new(),
        };
        for id in targets {
            match self.api.remove(id).await {
                Ok(()) => {}
                Err(e) if e.is_unauthorized() => return Err(self.fail(Action::ClearCompleted, e)),
                Err(e) => {
                    tracing::warn!("failed to delete completed todo {}: {}", id, e);
                    report.failed.push(id);
                }
            }
        }

        let mut state = self.state();
        let editing_completed = state
            .edit
            .as_ref()
            .and_then(|e| state.find(e.id))
            .is_some_and(|t| t.is_completed);
        state.todos.retain(|t| !t.is_completed);
        if editing_completed {
            state.edit = None;
        }
        Ok(report)
    }

    /// Logout: stop accepting operations; in-flight requests are not cancelled
    pub fn close(&self) {
        let mut state = self.state();
        state.phase = BoardPhase::SignedOut;
        state.edit = None;
    }
}

/// Keep the first record for each id
fn dedupe_by_id(todos: Vec<Todo>) -> Vec<Todo> {
    let mut seen = HashSet::with_capacity(todos.len());
    let total = todos.len();
    let unique: Vec<Todo> = todos.into_iter().filter(|t| seen.insert(t.id())).collect();
    if unique.len() != total {
        tracing::warn!("server returned {} duplicate todo ids", total - unique.len());
    }
    unique
}
