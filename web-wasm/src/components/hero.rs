//! トップ画面コンポーネント

use leptos::prelude::*;

#[component]
pub fn Hero<F>(on_begin: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    view! {
        <header class="hero" id="home-section">
            <h1>"Memory Journal"</h1>
            <p class="text-muted">"Every day is a new chapter. Write it down, keep it forever."</p>
            <button
                class="arrow-btn"
                aria-label="Start writing"
                on:click=move |_| on_begin(())
            >
                "↓"
            </button>
        </header>
    }
}
