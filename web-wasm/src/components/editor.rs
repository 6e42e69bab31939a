//! エディタコンポーネント

use journal_common::Page;
use leptos::prelude::*;

use crate::components::image_picker::ImagePicker;

#[component]
pub fn Editor<FE, FS, FM>(
    page: RwSignal<Page>,
    on_enhance: FE,
    on_save: FS,
    on_show_memories: FM,
) -> impl IntoView
where
    FE: Fn(()) + 'static + Clone,
    FS: Fn(()) + 'static + Clone,
    FM: Fn(()) + 'static + Clone,
{
    let title = Memo::new(move |_| page.with(|p| p.draft.title.clone()));
    let text = Memo::new(move |_| page.with(|p| p.draft.text.clone()));
    let enhanced = Memo::new(move |_| page.with(|p| p.draft.enhanced.clone()));
    let busy = Memo::new(move |_| page.with(|p| p.busy));

    view! {
        <div class="editor">
            <div class="form-group">
                <label for="entry-title">"Title"</label>
                <input
                    type="text"
                    id="entry-title"
                    placeholder="Give today a title..."
                    prop:value=move || title.get()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        page.update(|p| p.draft.title = value);
                    }
                />
            </div>

            <div class="form-group">
                <label for="journal-text">"Dear diary..."</label>
                <textarea
                    id="journal-text"
                    rows="10"
                    placeholder="What happened today?"
                    prop:value=move || text.get()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        page.update(|p| p.draft.text = value);
                    }
                ></textarea>
            </div>

            <ImagePicker page=page />

            <div class="editor-actions">
                <button
                    class="btn btn-secondary"
                    disabled=move || busy.get().enhancing
                    on:click={
                        let on_enhance = on_enhance.clone();
                        move |_| on_enhance(())
                    }
                >
                    {move || if busy.get().enhancing { "Enhancing..." } else { "✨ Enhance with AI" }}
                </button>
                <span class="spinner" class:hidden=move || !busy.get().enhancing></span>
            </div>

            <div class="enhanced-output" class:placeholder=move || enhanced.get().is_placeholder()>
                {move || enhanced.get().display().to_string()}
            </div>

            <div class="editor-actions">
                <button
                    class="btn btn-primary"
                    disabled=move || busy.get().saving
                    on:click={
                        let on_save = on_save.clone();
                        move |_| on_save(())
                    }
                >
                    {move || if busy.get().saving { "Saving..." } else { "💾 Save Memory" }}
                </button>
                <span class="spinner" class:hidden=move || !busy.get().saving></span>

                <button
                    class="btn btn-tertiary"
                    on:click={
                        let on_show_memories = on_show_memories.clone();
                        move |_| on_show_memories(())
                    }
                >
                    "📚 My Memories"
                </button>
            </div>
        </div>
    }
}
