//! バックエンドAPI呼び出し
//!
//! 全リクエストは [`request_json`] を通り、失敗の分類は
//! `journal_common::api::interpret_response` に集約する。

use leptos::logging::error;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use journal_common::api::{
    endpoint, interpret_response, DELETE_ALL_ENTRIES_PATH, ENHANCE_PATH, GET_ENTRIES_PATH,
    SAVE_ENTRY_PATH,
};
use journal_common::{
    ClientError, EnhanceRequest, EnhanceResponse, JournalEntry, MessageResponse,
    SaveEntryRequest, SaveEntryResponse,
};

use crate::config::API_BASE;

/// fetch 実行（ステータスと本文テキストを返す）
async fn fetch_text(method: &str, url: &str, body: Option<String>) -> Result<(u16, String), JsValue> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);

    let has_body = body.is_some();
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(&body));
    }

    let request = Request::new_with_str_and_init(url, &opts)?;
    if has_body {
        request.headers().set("Content-Type", "application/json")?;
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is unavailable"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let text = JsFuture::from(resp.text()?).await?;
    Ok((resp.status(), text.as_string().unwrap_or_default()))
}

/// JSONリクエスト共通処理
async fn request_json<T: DeserializeOwned>(
    method: &str,
    path: &str,
    body: Option<String>,
) -> Result<T, ClientError> {
    let url = endpoint(API_BASE, path);
    let (status, text) = fetch_text(method, &url, body).await.map_err(|e| {
        error!("{} {} failed: {:?}", method, url, e);
        ClientError::Network
    })?;
    interpret_response(status, &text)
}

fn to_body<B: Serialize>(body: &B) -> Result<String, ClientError> {
    serde_json::to_string(body).map_err(|e| ClientError::Validation(e.to_string()))
}

/// POST /enhance
pub async fn enhance(request: &EnhanceRequest) -> Result<EnhanceResponse, ClientError> {
    request_json("POST", ENHANCE_PATH, Some(to_body(request)?)).await
}

/// POST /save_entry
pub async fn save_entry(request: &SaveEntryRequest) -> Result<SaveEntryResponse, ClientError> {
    request_json("POST", SAVE_ENTRY_PATH, Some(to_body(request)?)).await
}

/// GET /get_entries
pub async fn get_entries() -> Result<Vec<JournalEntry>, ClientError> {
    request_json("GET", GET_ENTRIES_PATH, None).await
}

/// DELETE /delete_all_entries
pub async fn delete_all_entries() -> Result<MessageResponse, ClientError> {
    request_json("DELETE", DELETE_ALL_ENTRIES_PATH, None).await
}
