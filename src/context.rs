//! Todo View Context
//!
//! The view-model built once in `App` and shared with every component
//! through the Leptos Context API.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::actions;
use crate::api::TodoClient;
use crate::config::ApiConfig;
use crate::models::TodoId;
use crate::store::{store_apply, Change, TodoState, TodoStore};

#[derive(Clone, Copy)]
pub struct TodoView {
    api: StoredValue<TodoClient>,
    /// Rendered list
    pub store: TodoStore,
    /// New-todo input text - read
    pub input: ReadSignal<String>,
    /// New-todo input text - write
    pub set_input: WriteSignal<String>,
    /// New-todo input element, refocused after a successful add
    pub input_ref: NodeRef<html::Input>,
}

impl TodoView {
    pub fn new(config: ApiConfig) -> Self {
        let (input, set_input) = signal(String::new());
        Self {
            api: StoredValue::new(TodoClient::browser(config)),
            store: Store::new(TodoState::default()),
            input,
            set_input,
            input_ref: NodeRef::new(),
        }
    }

    /// Replace the whole list with the server's
    pub fn load_todos(&self) {
        let api = self.api.get_value();
        let store = self.store;
        spawn_local(async move {
            let change = actions::load_todos(&api).await;
            store_apply(&store, change);
        });
    }

    /// Create from the current input; clears and refocuses it on success
    pub fn add_todo(&self) {
        let api = self.api.get_value();
        let text = self.input.get_untracked();
        let this = *self;
        spawn_local(async move {
            let outcome = actions::add_todo(&api, &text).await;
            if this.finish_add(outcome) {
                this.focus_input();
            }
        });
    }

    /// Render an add result. The input is cleared only when a todo was
    /// appended; returns whether that happened.
    fn finish_add(&self, outcome: Option<Change>) -> bool {
        match outcome {
            Some(change @ Change::Append(_)) => {
                store_apply(&self.store, change);
                self.set_input.set(String::new());
                true
            }
            _ => false,
        }
    }

    fn focus_input(&self) {
        if let Some(el) = self.input_ref.get_untracked() {
            if let Err(e) = el.focus() {
                log::warn!("[TODO] Could not refocus input: {:?}", e);
            }
        }
    }

    pub fn toggle_todo(&self, id: TodoId) {
        let api = self.api.get_value();
        let store = self.store;
        spawn_local(async move {
            if let Some(change) = actions::toggle_todo(&api, id).await {
                store_apply(&store, change);
            }
        });
    }

    pub fn delete_todo(&self, id: TodoId) {
        let api = self.api.get_value();
        let store = self.store;
        spawn_local(async move {
            if let Some(change) = actions::delete_todo(&api, id).await {
                store_apply(&store, change);
            }
        });
    }
}

/// Get the view-model from context
pub fn use_todo_view() -> TodoView {
    expect_context::<TodoView>()
}
