//! Todo Sync Core
//!
//! Platform-neutral session and synchronization logic for the Todo web client.
//!
//! Layered architecture:
//! - domain: Todo entity, session token, error taxonomy
//! - api: HTTP contract with the todo backend (traits + reqwest client)
//! - session: durable token storage and the login/register/logout flows
//! - board: the todo list view-model kept in step with the server
//! - route: page routes and the authentication guard

pub mod api;
pub mod board;
pub mod config;
pub mod domain;
pub mod route;
pub mod session;

pub use api::{ApiError, ApiResult, AuthApi, HttpAuthApi, HttpTodoApi, TodoApi};
pub use board::{BoardPhase, BoardState, ClearReport, DeleteOutcome, Draft, EditSession, TodoBoard};
pub use config::ApiConfig;
pub use domain::{Action, Entity, Session, SyncError, SyncResult, Todo, TodoId, TodoInput};
pub use route::Route;
pub use session::{Credentials, KeyValueStorage, MemoryStorage, Registration, SessionStore};
