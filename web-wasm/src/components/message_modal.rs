//! メッセージモーダルコンポーネント

use journal_common::Page;
use leptos::prelude::*;

#[component]
pub fn MessageModal(page: RwSignal<Page>) -> impl IntoView {
    let message = Memo::new(move |_| page.with(|p| p.modal.message().map(str::to_string)));

    view! {
        <div class="modal-backdrop" class:hidden=move || message.get().is_none()>
            <div class="modal" role="dialog" aria-modal="true">
                <p class="modal-message">{move || message.get().unwrap_or_default()}</p>
                <button
                    class="btn btn-primary"
                    on:click=move |_| page.update(|p| p.modal.dismiss())
                >
                    "OK"
                </button>
            </div>
        </div>
    }
}
