//! API Configuration
//!
//! Where the backend lives. A wasm bundle has no process environment, so the
//! override is read at compile time.

use crate::domain::TodoId;

/// Backend used when no override is compiled in
pub const DEFAULT_API_BASE_URL: &str = "https://todo-sachin.runasp.net/api";

/// Backend endpoint configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Use `TODO_API_BASE_URL` from the build environment, if set
    pub fn from_build_env() -> Self {
        match option_env!("TODO_API_BASE_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn login_url(&self) -> String {
        format!("{}/login", self.base_url)
    }

    pub fn register_url(&self) -> String {
        format!("{}/register", self.base_url)
    }

    /// The todo resource collection
    pub fn todos_url(&self) -> String {
        format!("{}/todoapi", self.base_url)
    }

    pub fn todo_url(&self, id: TodoId) -> String {
        format!("{}/todoapi/{}", self.base_url, id)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}
