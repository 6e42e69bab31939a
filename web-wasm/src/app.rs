//! メインアプリケーションコンポーネント

use journal_common::{messages, Command, NavEvent, Page};
use leptos::logging::warn;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{
    chapter_details::ChapterDetails,
    editor::Editor,
    hero::Hero,
    memory_list::MemoryList,
    message_modal::MessageModal,
};
use crate::config::API_BASE;
use crate::dom;

/// 通信コマンドを実行し、結果をページ状態に反映する
///
/// 保存・全削除の成功後は一覧の再取得が続けて実行される。
fn run(page: RwSignal<Page>, command: Command) {
    spawn_local(async move {
        let next = match command {
            Command::Enhance(request) => {
                let result = api::enhance(&request).await;
                page.update(|p| p.finish_enhance(result));
                None
            }
            Command::Save(request) => {
                let result = api::save_entry(&request).await;
                page.try_update(|p| p.finish_save(result)).flatten()
            }
            Command::LoadEntries => {
                page.update(|p| p.begin_load());
                let result = api::get_entries().await;
                if let Err(e) = &result {
                    warn!("failed to load memories: {}", e);
                }
                if let Some(target) = page.try_update(|p| p.finish_load(result)).flatten() {
                    dom::scroll_to(target);
                }
                None
            }
            Command::DeleteAll => {
                let result = api::delete_all_entries().await;
                page.try_update(|p| p.finish_delete_all(result)).flatten()
            }
        };

        if let Some(next) = next {
            run(page, next);
        }
    });
}

/// 状態を更新し、コマンドが返れば実行
fn dispatch(page: RwSignal<Page>, action: impl FnOnce(&mut Page) -> Option<Command>) {
    if let Some(command) = page.try_update(action).flatten() {
        run(page, command);
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // ページ状態（リロード時は常にHomeから）
    let page = RwSignal::new(Page::default());
    let layout = Memo::new(move |_| page.with(|p| p.layout()));

    let navigate = move |event: NavEvent| {
        let scroll = page.try_update(|p| p.navigate(event)).and_then(|l| l.scroll);
        if let Some(target) = scroll {
            dom::scroll_to(target);
        }
    };

    // 初回の一覧取得
    run(page, Command::LoadEntries);

    let on_begin = move |_| navigate(NavEvent::BeginJournal);
    let on_show_memories = move |_| navigate(NavEvent::ShowMemories);
    let on_back = move |_| navigate(NavEvent::BackToEditor);

    let on_enhance = move |_| dispatch(page, |p| p.request_enhance());
    let on_save = move |_| dispatch(page, |p| p.request_save());

    let on_delete_all = move |_| {
        let confirmed = dom::confirm(messages::DELETE_CONFIRM);
        dispatch(page, |p| p.request_delete_all(confirmed));
    };

    let on_open = move |index: usize| {
        let scroll = page
            .try_update(|p| p.open_chapter(index, API_BASE))
            .flatten()
            .and_then(|l| l.scroll);
        if let Some(target) = scroll {
            dom::scroll_to(target);
        }
    };

    view! {
        <main class="journal">
            <Hero on_begin=on_begin />

            <section
                id="app-section"
                class="app-section"
                class:hidden=move || !layout.get().app_visible
            >
                <h2 class="section-heading">
                    {move || layout.get().heading.unwrap_or_default()}
                </h2>

                <div class="editor-view" class:hidden=move || !layout.get().editor_visible>
                    <Editor
                        page=page
                        on_enhance=on_enhance
                        on_save=on_save
                        on_show_memories=on_show_memories
                    />
                </div>

                <div class="details-view" class:hidden=move || !layout.get().details_visible>
                    <ChapterDetails page=page on_back=on_back />
                </div>

                <MemoryList
                    page=page
                    on_open=on_open
                    on_delete_all=on_delete_all
                    show_delete_all=true
                />
            </section>

            <MessageModal page=page />
        </main>
    }
}
