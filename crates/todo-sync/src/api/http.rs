//! reqwest Implementations
//!
//! Same code on native and wasm32: reqwest switches to `fetch` in the browser.
//! No timeout override and no retry; transport defaults apply.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use super::dto::{AuthResponse, ErrorBody, LoginRequest, RegisterRequest};
use super::error::{ApiError, ApiResult};
use super::traits::{AuthApi, TodoApi};
use crate::config::ApiConfig;
use crate::domain::{Session, Todo, TodoId, TodoInput};

/// Todo collection client bound to one session
///
/// The bearer token is captured here and attached to every request; a later
/// login does not affect an existing client.
#[derive(Debug, Clone)]
pub struct HttpTodoApi {
    client: Client,
    config: ApiConfig,
    token: String,
}

impl HttpTodoApi {
    pub fn new(config: &ApiConfig, session: &Session) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
            token: session.token().to_string(),
        }
    }
}

#[async_trait(?Send)]
impl TodoApi for HttpTodoApi {
    async fn list(&self) -> ApiResult<Vec<Todo>> {
        let response = self
            .client
            .get(self.config.todos_url())
            .bearer_auth(&self.token)
            .send()
            .await?;
        read_json(check_status(response).await?).await
    }

    async fn create(&self, input: &TodoInput) -> ApiResult<Todo> {
        let response = self
            .client
            .post(self.config.todos_url())
            .bearer_auth(&self.token)
            .json(input)
            .send()
            .await?;
        read_json(check_status(response).await?).await
    }

    async fn update(&self, id: TodoId, input: &TodoInput) -> ApiResult<()> {
        let response = self
            .client
            .put(self.config.todo_url(id))
            .bearer_auth(&self.token)
            .json(input)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    async fn remove(&self, id: TodoId) -> ApiResult<()> {
        let response = self
            .client
            .delete(self.config.todo_url(id))
            .bearer_auth(&self.token)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }
}

/// Login and registration client
#[derive(Debug, Clone)]
pub struct HttpAuthApi {
    client: Client,
    config: ApiConfig,
}

impl HttpAuthApi {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn login(&self, request: &LoginRequest) -> ApiResult<AuthResponse> {
        let response = self.client.post(self.config.login_url()).json(request).send().await?;
        read_optional_json(check_status(response).await?).await
    }

    async fn register(&self, request: &RegisterRequest) -> ApiResult<AuthResponse> {
        let response = self.client.post(self.config.register_url()).json(request).send().await?;
        read_optional_json(check_status(response).await?).await
    }
}

/// Turn a non-success status into [`ApiError::Status`], keeping the server message
async fn check_status(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        message: ErrorBody::message_from(&body),
    })
}

async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Like [`read_json`], but an empty or non-JSON body means "no fields"
async fn read_optional_json<T: DeserializeOwned + Default>(response: Response) -> ApiResult<T> {
    let body = response.text().await?;
    if body.trim().is_empty() {
        return Ok(T::default());
    }
    match serde_json::from_str(&body) {
        Ok(value) => Ok(value),
        Err(e) => {
            tracing::debug!("ignoring non-JSON auth response body: {}", e);
            Ok(T::default())
        }
    }
}
