//! Todo Item Component
//!
//! One `<li>` in the list: click the text to toggle, click × to delete.

use leptos::prelude::*;

use crate::context::use_todo_view;
use crate::models::Todo;

#[component]
pub fn TodoItem(todo: Todo) -> impl IntoView {
    let todo_view = use_todo_view();

    let toggle_id = todo.id.clone();
    let delete_id = todo.id.clone();

    view! {
        <li class=if todo.done { "done" } else { "" }>
            <span
                class="todo-text"
                on:click=move |_| todo_view.toggle_todo(toggle_id.clone())
            >
                {todo.text}
            </span>
            <button
                class="delete-btn"
                on:click=move |_| todo_view.delete_todo(delete_id.clone())
            >
                "×"
            </button>
        </li>
    }
}
