//! In-memory TodoApi for board tests
//!
//! Behaves like the backend, records every call and fails on demand.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use async_trait::async_trait;

use crate::api::{ApiError, ApiResult, TodoApi};
use crate::domain::{Todo, TodoId, TodoInput};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Create(TodoInput),
    Update(TodoId, TodoInput),
    Remove(TodoId),
}

#[derive(Default)]
struct FakeServer {
    todos: RefCell<Vec<Todo>>,
    next_id: Cell<TodoId>,
    calls: RefCell<Vec<Call>>,
    fail_next: RefCell<VecDeque<ApiError>>,
    fail_ids: RefCell<HashMap<TodoId, ApiError>>,
}

/// Cloneable handle; clones share one fake server
#[derive(Clone, Default)]
pub struct FakeTodoApi {
    inner: Rc<FakeServer>,
}

impl FakeTodoApi {
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        let fake = Self::default();
        let next = todos.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        fake.inner.next_id.set(next);
        *fake.inner.todos.borrow_mut() = todos;
        fake
    }

    /// The next call fails with `error`
    pub fn fail_next(&self, error: ApiError) {
        self.inner.fail_next.borrow_mut().push_back(error);
    }

    /// Every update/remove of `id` fails with `error`
    pub fn fail_for(&self, id: TodoId, error: ApiError) {
        self.inner.fail_ids.borrow_mut().insert(id, error);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.inner.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.inner.calls.borrow().len()
    }

    pub fn server_todos(&self) -> Vec<Todo> {
        self.inner.todos.borrow().clone()
    }

    async fn begin(&self, call: Call, id: Option<TodoId>) -> ApiResult<()> {
        self.inner.calls.borrow_mut().push(call);
        // Let other pending operations run, as a real round-trip would
        tokio::task::yield_now().await;
        if let Some(error) = self.inner.fail_next.borrow_mut().pop_front() {
            return Err(error);
        }
        if let Some(error) = id.and_then(|id| self.inner.fail_ids.borrow().get(&id).cloned()) {
            return Err(error);
        }
        Ok(())
    }
}

pub fn server_error() -> ApiError {
    ApiError::Status { status: 500, message: None }
}

pub fn unauthorized() -> ApiError {
    ApiError::Status { status: 401, message: None }
}

#[async_trait(?Send)]
impl TodoApi for FakeTodoApi {
    async fn list(&self) -> ApiResult<Vec<Todo>> {
        self.begin(Call::List, None).await?;
        Ok(self.server_todos())
    }

    async fn create(&self, input: &TodoInput) -> ApiResult<Todo> {
        self.begin(Call::Create(input.clone()), None).await?;
        let id = self.inner.next_id.get().max(1);
        self.inner.next_id.set(id + 1);
        let todo = Todo::new(id, input.title.clone(), input.description.clone(), input.is_completed);
        self.inner.todos.borrow_mut().insert(0, todo.clone());
        Ok(todo)
    }

    async fn update(&self, id: TodoId, input: &TodoInput) -> ApiResult<()> {
        self.begin(Call::Update(id, input.clone()), Some(id)).await?;
        match self.inner.todos.borrow_mut().iter_mut().find(|t| t.id == id) {
            Some(todo) => {
                todo.apply(input);
                Ok(())
            }
            None => Err(ApiError::Status { status: 404, message: None }),
        }
    }

    async fn remove(&self, id: TodoId) -> ApiResult<()> {
        self.begin(Call::Remove(id), Some(id)).await?;
        self.inner.todos.borrow_mut().retain(|t| t.id != id);
        Ok(())
    }
}
