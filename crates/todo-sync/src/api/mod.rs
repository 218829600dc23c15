//! API Layer
//!
//! The HTTP contract with the todo backend.

mod dto;
mod error;
mod http;
mod traits;

pub use dto::{AuthResponse, ErrorBody, LoginRequest, RegisterRequest};
pub use error::{ApiError, ApiResult};
pub use http::{HttpAuthApi, HttpTodoApi};
pub use traits::{AuthApi, TodoApi};
