//! Todo App
//!
//! Root component: builds the view-model, provides it, and kicks off the
//! initial load.

use leptos::prelude::*;

use crate::components::{NewTodoForm, TodoList};
use crate::config::ApiConfig;
use crate::context::TodoView;

#[component]
pub fn App() -> impl IntoView {
    let todo_view = TodoView::new(ApiConfig::default());
    provide_context(todo_view);

    // Initial load
    Effect::new(move |_| {
        todo_view.load_todos();
    });

    view! {
        <main class="todo-app">
            <h1>"Todos"</h1>
            <NewTodoForm />
            <TodoList />
        </main>
    }
}
