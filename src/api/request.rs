//! Request building and response parsing.
//!
//! Pure functions: nothing in here touches the network, so the wire format
//! can be checked without a browser.

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{NewTodo, Todo, TodoId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// A single HTTP request. `body` is always JSON when present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

// ========================
// Builders
// ========================

pub fn build_list(config: &ApiConfig) -> ApiRequest {
    ApiRequest {
        method: Method::Get,
        path: config.collection().to_string(),
        body: None,
    }
}

pub fn build_create(config: &ApiConfig, text: &str) -> Result<ApiRequest, ApiError> {
    let body = serde_json::to_string(&NewTodo { text }).map_err(|e| ApiError::Encode(e.to_string()))?;
    Ok(ApiRequest {
        method: Method::Post,
        path: config.collection().to_string(),
        body: Some(body),
    })
}

pub fn build_toggle(config: &ApiConfig, id: &TodoId) -> ApiRequest {
    ApiRequest {
        method: Method::Put,
        path: item_path(config, id),
        body: None,
    }
}

pub fn build_delete(config: &ApiConfig, id: &TodoId) -> ApiRequest {
    ApiRequest {
        method: Method::Delete,
        path: item_path(config, id),
        body: None,
    }
}

fn item_path(config: &ApiConfig, id: &TodoId) -> String {
    format!("{}/{}", config.collection(), id.path_segment())
}

// ========================
// Parsers
// ========================

fn check_status(response: ApiResponse) -> Result<ApiResponse, ApiError> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            status: response.status,
            body: response.body,
        })
    }
}

pub fn parse_list(response: ApiResponse) -> Result<Vec<Todo>, ApiError> {
    let response = check_status(response)?;
    Ok(serde_json::from_str(&response.body)?)
}

pub fn parse_todo(response: ApiResponse) -> Result<Todo, ApiError> {
    let response = check_status(response)?;
    Ok(serde_json::from_str(&response.body)?)
}

/// Success is all that matters; a 204 carries no body and any other body is ignored.
pub fn parse_empty(response: ApiResponse) -> Result<(), ApiError> {
    check_status(response).map(|_| ())
}
