//! New Todo Form Component
//!
//! Text input plus Add button. Enter in the input behaves like the button.

use leptos::prelude::*;

use crate::context::use_todo_view;

#[component]
pub fn NewTodoForm() -> impl IntoView {
    let todo_view = use_todo_view();

    view! {
        <div class="new-todo-form">
            <input
                id="newTodoInput"
                type="text"
                placeholder="Add a new todo..."
                node_ref=todo_view.input_ref
                prop:value=move || todo_view.input.get()
                on:input=move |ev| todo_view.set_input.set(event_target_value(&ev))
                on:keypress=move |ev| {
                    if ev.key() == "Enter" {
                        todo_view.add_todo();
                    }
                }
            />
            <button id="addTodoBtn" on:click=move |_| todo_view.add_todo()>"Add"</button>
        </div>
    }
}
