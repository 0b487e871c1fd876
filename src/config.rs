//! API location.

/// Collection path used when nothing else is configured
pub const DEFAULT_BASE: &str = "/api/todos";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base: String,
}

impl ApiConfig {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// Path of the todo collection, without trailing slash
    pub fn collection(&self) -> &str {
        &self.base
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE)
    }
}
