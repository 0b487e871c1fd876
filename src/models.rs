//! Frontend Models
//!
//! Data structures matching the todo API.

use std::fmt;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

/// Server-assigned todo identifier.
///
/// Opaque to the client: the API may hand out any JSON number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TodoId {
    Number(serde_json::Number),
    Text(String),
}

impl TodoId {
    /// Form used as the last segment of `/api/todos/{id}`
    pub fn path_segment(&self) -> String {
        match self {
            TodoId::Number(n) => n.to_string(),
            TodoId::Text(s) => utf8_percent_encode(s, NON_ALPHANUMERIC).to_string(),
        }
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoId::Number(n) => write!(f, "{}", n),
            TodoId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for TodoId {
    fn from(n: u64) -> Self {
        TodoId::Number(n.into())
    }
}

/// Todo data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub text: String,
    pub done: bool,
}

/// Create request body
#[derive(Debug, Serialize)]
pub struct NewTodo<'a> {
    pub text: &'a str,
}
