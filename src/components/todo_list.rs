//! Todo List Component

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::context::use_todo_view;
use crate::store::{TodoStateStoreFields, LOAD_ERROR_TEXT};

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_todo_view().store;

    view! {
        <ul id="todoList">
            {move || store.load_failed().get().then(|| view! { <li>{LOAD_ERROR_TEXT}</li> })}
            <For
                each=move || store.todos().get()
                // `done` is part of the key so a confirmed toggle rebuilds the row
                key=|todo| (todo.id.clone(), todo.done)
                children=move |todo| view! { <TodoItem todo=todo /> }
            />
        </ul>
    }
}
