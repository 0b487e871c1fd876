//! Todo List Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is only
//! a rendering cache: every write goes through a `Change` produced after the
//! server confirmed it.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Todo, TodoId};

/// Text shown as the single list entry when the initial fetch fails
pub const LOAD_ERROR_TEXT: &str = "Error loading todos.";

/// Rendered list state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Todos in server order, creations appended
    pub todos: Vec<Todo>,
    /// Last full fetch failed; the list shows the error placeholder only
    pub load_failed: bool,
}

/// A server-confirmed patch to the rendered list
#[derive(Debug, Clone, PartialEq)]
pub enum Change {
    Replace(Vec<Todo>),
    LoadFailed,
    Append(Todo),
    SetDone { id: TodoId, done: bool },
    Remove(TodoId),
}

impl Change {
    /// Changes that only touch `todos`, leaving `load_failed` alone
    fn is_row_patch(&self) -> bool {
        matches!(self, Change::Append(_) | Change::SetDone { .. } | Change::Remove(_))
    }
}

/// Row-level part of `Change`; whole-list changes are handled by `TodoState::apply`
fn patch_rows(todos: &mut Vec<Todo>, change: Change) {
    match change {
        Change::Append(todo) => todos.push(todo),
        Change::SetDone { id, done } => {
            // A row deleted while the toggle was in flight stays deleted
            if let Some(todo) = todos.iter_mut().find(|t| t.id == id) {
                todo.done = done;
            }
        }
        Change::Remove(id) => todos.retain(|t| t.id != id),
        Change::Replace(_) | Change::LoadFailed => {}
    }
}

impl TodoState {
    pub fn apply(&mut self, change: Change) {
        match change {
            Change::Replace(todos) => {
                self.todos = todos;
                self.load_failed = false;
            }
            Change::LoadFailed => {
                self.todos.clear();
                self.load_failed = true;
            }
            row => patch_rows(&mut self.todos, row),
        }
    }
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Apply a change, touching only the fields it affects
pub fn store_apply(store: &TodoStore, change: Change) {
    if change.is_row_patch() {
        patch_rows(&mut store.todos().write(), change);
    } else {
        store.update(|state| state.apply(change));
    }
}
