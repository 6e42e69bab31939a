//! DOM操作ヘルパー

use journal_common::ScrollTarget;
use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// 描画反映後に対象要素までスムーズスクロール
pub fn scroll_to(target: ScrollTarget) {
    request_animation_frame(move || {
        let Some(element) = document().get_element_by_id(target.element_id()) else {
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    });
}

/// 確認ダイアログ
pub fn confirm(message: &str) -> bool {
    gloo::dialogs::confirm(message)
}
