//! Todo Actions
//!
//! The four user intents. Each awaits its request and returns the change to
//! render, or `None` when the page must stay as it is. Failures end here:
//! they are logged and never returned.

use crate::api::{TodoClient, Transport};
use crate::models::TodoId;
use crate::store::Change;

/// Fetch the whole list. Always yields a change: the list or the error placeholder.
pub async fn load_todos<T: Transport>(api: &TodoClient<T>) -> Change {
    match api.list_todos().await {
        Ok(todos) => {
            log::debug!("[TODO] loaded {} todos", todos.len());
            Change::Replace(todos)
        }
        Err(e) => {
            log::error!("[TODO] Error loading todos: {}", e);
            Change::LoadFailed
        }
    }
}

/// Create from raw input. Blank input is not an error; nothing is sent.
pub async fn add_todo<T: Transport>(api: &TodoClient<T>, input: &str) -> Option<Change> {
    // A stray BOM counts as blank
    let text = input.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if text.is_empty() {
        return None;
    }

    match api.create_todo(text).await {
        Ok(todo) => Some(Change::Append(todo)),
        Err(e) => {
            log::error!("[TODO] Error adding todo: {}", e);
            None
        }
    }
}

/// Ask the server to flip `id`; the reply's `done` is what gets rendered.
pub async fn toggle_todo<T: Transport>(api: &TodoClient<T>, id: TodoId) -> Option<Change> {
    match api.toggle_todo(&id).await {
        Ok(updated) => Some(Change::SetDone { id, done: updated.done }),
        Err(e) => {
            log::error!("[TODO] Error toggling todo {}: {}", id, e);
            None
        }
    }
}

pub async fn delete_todo<T: Transport>(api: &TodoClient<T>, id: TodoId) -> Option<Change> {
    match api.delete_todo(&id).await {
        Ok(()) => Some(Change::Remove(id)),
        Err(e) => {
            log::error!("[TODO] Error deleting todo {}: {}", id, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::api::testing::{client, ScriptedTransport};
    use crate::api::Method;
    use crate::models::Todo;
    use crate::store::TodoState;

    const TWO_TODOS: &str =
        r#"[{"id":1,"text":"milk","done":false},{"id":2,"text":"eggs","done":true}]"#;

    fn loaded_state() -> TodoState {
        let api = client(ScriptedTransport::default().reply(200, TWO_TODOS));
        let mut state = TodoState::default();
        state.apply(block_on(load_todos(&api)));
        state
    }

    #[test]
    fn test_load_renders_server_list() {
        let state = loaded_state();
        assert_eq!(state.todos.len(), 2);
        assert_eq!(state.todos[0].text, "milk");
        assert!(!state.todos[0].done);
        assert_eq!(state.todos[1].text, "eggs");
        assert!(state.todos[1].done);
    }

    #[test]
    fn test_load_accepts_negative_and_fractional_ids() {
        let api = client(ScriptedTransport::default().reply(
            200,
            r#"[{"id":-1,"text":"milk","done":false},{"id":1.5,"text":"eggs","done":true}]"#,
        ));
        let mut state = TodoState::default();
        state.apply(block_on(load_todos(&api)));
        assert!(!state.load_failed);
        assert_eq!(state.todos.len(), 2);
        assert_eq!(state.todos[1].id.to_string(), "1.5");
    }

    #[test]
    fn test_load_failure_shows_placeholder() {
        let api = client(ScriptedTransport::default().reply(500, "oops"));
        let mut state = loaded_state();
        state.apply(block_on(load_todos(&api)));
        assert!(state.todos.is_empty());
        assert!(state.load_failed);

        let api = client(ScriptedTransport::default().fail("dns"));
        assert_eq!(block_on(load_todos(&api)), Change::LoadFailed);
    }

    #[test]
    fn test_add_blank_input_sends_nothing() {
        let api = client(ScriptedTransport::default());
        assert_eq!(block_on(add_todo(&api, "")), None);
        assert_eq!(block_on(add_todo(&api, "   \t ")), None);
        assert_eq!(block_on(add_todo(&api, "\u{feff}")), None);
        assert_eq!(block_on(add_todo(&api, " \u{feff}\u{a0}\n")), None);
        assert!(api.transport().sent().is_empty());
    }

    #[test]
    fn test_add_trims_and_appends() {
        let api = client(
            ScriptedTransport::default().reply(201, r#"{"id":3,"text":"bread","done":false}"#),
        );
        let mut state = loaded_state();

        let change = block_on(add_todo(&api, "  bread  ")).unwrap();
        state.apply(change);

        let sent = api.transport().sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(sent[0].body.as_deref(), Some(r#"{"text":"bread"}"#));

        assert_eq!(state.todos.len(), 3);
        let last = state.todos.last().unwrap();
        assert_eq!(last.id, TodoId::from(3));
        assert_eq!(last.text, "bread");
        assert!(!last.done);
    }

    #[test]
    fn test_add_failure_changes_nothing() {
        let api = client(ScriptedTransport::default().reply(400, "bad"));
        assert_eq!(block_on(add_todo(&api, "bread")), None);
        assert_eq!(api.transport().sent().len(), 1);
    }

    #[test]
    fn test_toggle_follows_server_value() {
        let api = client(
            ScriptedTransport::default()
                .reply(200, r#"{"id":2,"text":"eggs","done":true}"#)
                .reply(200, r#"{"id":1,"text":"milk","done":true}"#),
        );
        let mut state = loaded_state();

        // Already done; server still says done
        state.apply(block_on(toggle_todo(&api, TodoId::from(2))).unwrap());
        assert!(state.todos[1].done);

        state.apply(block_on(toggle_todo(&api, TodoId::from(1))).unwrap());
        assert!(state.todos[0].done);

        let sent = api.transport().sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].method, Method::Put);
        assert_eq!(sent[0].path, "/api/todos/2");
    }

    #[test]
    fn test_toggle_failure_keeps_state() {
        let api = client(ScriptedTransport::default().fail("timeout"));
        assert_eq!(block_on(toggle_todo(&api, TodoId::from(1))), None);
    }

    #[test]
    fn test_delete_removes_on_204_only() {
        let api = client(ScriptedTransport::default().reply(500, "").reply(204, ""));
        let mut state = loaded_state();

        assert_eq!(block_on(delete_todo(&api, TodoId::from(2))), None);
        assert_eq!(state.todos.len(), 2);

        state.apply(block_on(delete_todo(&api, TodoId::from(2))).unwrap());
        assert_eq!(
            state.todos,
            vec![Todo { id: TodoId::from(1), text: "milk".to_string(), done: false }]
        );

        let sent = api.transport().sent();
        assert!(sent.iter().all(|r| r.method == Method::Delete && r.path == "/api/todos/2"));
    }
}
