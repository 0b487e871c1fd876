//! Todo API Client
//!
//! Thin async wrappers over the four REST endpoints. Requests are built and
//! parsed in `request`; a `Transport` executes them.

mod fetch;
mod request;

pub use fetch::FetchTransport;
pub use request::{ApiRequest, ApiResponse, Method};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{Todo, TodoId};

/// Executes one HTTP round trip.
///
/// Any status comes back as `Ok`; only transport-level failures are `Err`.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

#[derive(Debug, Clone)]
pub struct TodoClient<T = FetchTransport> {
    config: ApiConfig,
    transport: T,
}

impl TodoClient<FetchTransport> {
    pub fn browser(config: ApiConfig) -> Self {
        Self::new(config, FetchTransport)
    }
}

impl<T: Transport> TodoClient<T> {
    pub fn new(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    #[cfg(test)]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn list_todos(&self) -> Result<Vec<Todo>, ApiError> {
        let response = self.transport.send(request::build_list(&self.config)).await?;
        request::parse_list(response)
    }

    pub async fn create_todo(&self, text: &str) -> Result<Todo, ApiError> {
        let req = request::build_create(&self.config, text)?;
        let response = self.transport.send(req).await?;
        request::parse_todo(response)
    }

    pub async fn toggle_todo(&self, id: &TodoId) -> Result<Todo, ApiError> {
        let response = self.transport.send(request::build_toggle(&self.config, id)).await?;
        request::parse_todo(response)
    }

    pub async fn delete_todo(&self, id: &TodoId) -> Result<(), ApiError> {
        let response = self.transport.send(request::build_delete(&self.config, id)).await?;
        request::parse_empty(response)
    }
}
