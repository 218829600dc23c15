//! API Layer - Core Traits
//!
//! Abstract interfaces for talking to the backend.
//! Implementations can use reqwest, in-memory fakes, etc.

use async_trait::async_trait;

use super::dto::{AuthResponse, LoginRequest, RegisterRequest};
use super::error::ApiResult;
use crate::domain::{Todo, TodoId, TodoInput};

/// CRUD operations on the todo resource collection
///
/// Every call is made on behalf of the session the implementation was built
/// with. Futures are not required to be `Send`: in the browser they run on the
/// single JS thread.
#[async_trait(?Send)]
pub trait TodoApi {
    /// GET the whole collection
    async fn list(&self) -> ApiResult<Vec<Todo>>;

    /// POST a new record; the server assigns its id
    async fn create(&self, input: &TodoInput) -> ApiResult<Todo>;

    /// PUT a full replacement of one record
    async fn update(&self, id: TodoId, input: &TodoInput) -> ApiResult<()>;

    /// DELETE one record
    async fn remove(&self, id: TodoId) -> ApiResult<()>;
}

/// Unauthenticated account endpoints
#[async_trait(?Send)]
pub trait AuthApi {
    async fn login(&self, request: &LoginRequest) -> ApiResult<AuthResponse>;

    async fn register(&self, request: &RegisterRequest) -> ApiResult<AuthResponse>;
}
