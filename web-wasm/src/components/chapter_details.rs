//! 詳細画面コンポーネント

use journal_common::Page;
use leptos::prelude::*;

#[component]
pub fn ChapterDetails<FB>(page: RwSignal<Page>, on_back: FB) -> impl IntoView
where
    FB: Fn(()) + 'static + Clone,
{
    let detail = Memo::new(move |_| page.with(|p| p.detail.clone()));
    let field = move |get: fn(&journal_common::ChapterDetail) -> String| {
        move || detail.get().as_ref().map(get).unwrap_or_default()
    };
    let image_url = move || detail.get().and_then(|d| d.image_url);
    let download_href = move || detail.get().and_then(|d| d.download_href);

    view! {
        <article class="chapter-details">
            <button
                class="btn btn-small btn-tertiary"
                on:click={
                    let on_back = on_back.clone();
                    move |_| on_back(())
                }
            >
                "← Back to writing"
            </button>

            <h3 class="chapter-title">{field(|d| d.title.clone())}</h3>
            <p class="text-muted chapter-date">{field(|d| d.date_line.clone())}</p>

            <div class="chapter-image" class:hidden=move || image_url().is_none()>
                <img src=move || image_url().unwrap_or_default() alt="Memory photo" />
            </div>

            <h4>"Original entry"</h4>
            <p class="chapter-original">{field(|d| d.original_text.clone())}</p>

            <h4>"AI-enhanced version"</h4>
            <p class="chapter-enhanced">{field(|d| d.enhanced_text.clone())}</p>

            <a
                class="btn btn-small btn-secondary"
                class:hidden=move || download_href().is_none()
                href=move || download_href().unwrap_or_default()
                download=""
            >
                "⬇ Download as text"
            </a>
        </article>
    }
}
