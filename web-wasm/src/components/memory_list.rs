//! 思い出一覧（メモリーボックス）コンポーネント

use journal_common::{messages, CardImage, EntryCard, Page};
use leptos::prelude::*;

#[component]
pub fn MemoryList<FO, FD>(
    page: RwSignal<Page>,
    on_open: FO,
    on_delete_all: FD,
    /// false の場合は全削除ボタンを置かない
    #[prop(optional)]
    show_delete_all: bool,
) -> impl IntoView
where
    FO: Fn(usize) + 'static + Clone + Send + Sync,
    FD: Fn(()) + 'static + Clone,
{
    let memories = Memo::new(move |_| page.with(|p| p.memories.clone()));
    let deleting = Memo::new(move |_| page.with(|p| p.busy.deleting));

    view! {
        <section id="memory-box" class="memory-box">
            <div class="memory-box-header">
                <h3>"📚 Memory Box"</h3>
                {show_delete_all.then(|| {
                    let on_delete_all = on_delete_all.clone();
                    view! {
                        <button
                            class="btn btn-small btn-danger"
                            disabled=move || deleting.get()
                            on:click=move |_| on_delete_all(())
                        >
                            "🗑️ Delete all"
                        </button>
                    }
                })}
            </div>

            <p class="text-muted" class:hidden=move || !memories.get().shows_empty_message()>
                {messages::NO_MEMORIES}
            </p>

            <div class="memory-cards">
                {move || {
                    let on_open = on_open.clone();
                    memories
                        .get()
                        .cards()
                        .iter()
                        .cloned()
                        .enumerate()
                        .map(|(index, card)| {
                            let on_open = on_open.clone();
                            view! { <MemoryCard card=card on_click=move |_| on_open(index) /> }
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}

#[component]
fn MemoryCard<F>(card: EntryCard, on_click: F) -> impl IntoView
where
    F: Fn(()) + 'static,
{
    let image = match card.image {
        CardImage::Photo(url) => view! {
            <img class="memory-card-image" src=url alt=card.title.clone() />
        }
        .into_any(),
        CardImage::Placeholder => view! {
            <div class="memory-card-image placeholder">"📖"</div>
        }
        .into_any(),
    };

    view! {
        <div class="memory-card" on:click=move |_| on_click(())>
            {image}
            <div class="memory-card-info">
                <h4>{card.title}</h4>
                <p class="text-muted">{card.date_line}</p>
            </div>
        </div>
    }
}
