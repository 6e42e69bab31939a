//! 画像添付コンポーネント

use journal_common::Page;
use leptos::html;
use leptos::logging::warn;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{File, FileReader, HtmlInputElement};

#[component]
pub fn ImagePicker(page: RwSignal<Page>) -> impl IntoView {
    let input_ref: NodeRef<html::Input> = NodeRef::new();
    let preview = Memo::new(move |_| {
        page.with(|p| p.draft.attachment.data_url().map(str::to_string))
    });

    let on_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        match input.files().and_then(|files| files.get(0)) {
            Some(file) => read_file(file, move |data_url| {
                page.update(|p| p.attach_image(data_url));
            }),
            None => page.update(|p| p.clear_image()),
        }
    };

    let on_clear = move |_| {
        if let Some(input) = input_ref.get() {
            input.set_value("");
        }
        page.update(|p| p.clear_image());
    };

    view! {
        <div class="image-picker">
            <label for="image-upload" class="btn btn-small btn-secondary">"📷 Add a photo"</label>
            <input
                type="file"
                id="image-upload"
                accept="image/*"
                class="hidden"
                node_ref=input_ref
                on:change=on_change
            />
            <img
                class="image-preview"
                class:hidden=move || preview.get().is_none()
                src=move || preview.get().unwrap_or_default()
                alt="Selected photo preview"
            />
            <button
                class="btn btn-small btn-tertiary"
                class:hidden=move || preview.get().is_none()
                on:click=on_clear
            >
                "✖ Remove photo"
            </button>
        </div>
    }
}

/// ファイルをData URLとして読み込む
///
/// 読み込み失敗時は何もしない（前の状態を維持）。
fn read_file<F>(file: File, on_loaded: F)
where
    F: Fn(String) + 'static,
{
    let reader = match FileReader::new() {
        Ok(reader) => reader,
        Err(e) => {
            warn!("FileReader unavailable: {:?}", e);
            return;
        }
    };

    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Ok(result) = reader_clone.result() {
            if let Some(data_url) = result.as_string() {
                on_loaded(data_url);
            }
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    if let Err(e) = reader.read_as_data_url(&file) {
        warn!("failed to read {}: {:?}", file.name(), e);
    }
}
