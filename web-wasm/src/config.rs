//! ビルド時設定

/// APIのベースURL（未指定なら同一オリジン）
///
/// `JOURNAL_API_BASE=http://127.0.0.1:5000 trunk build` のように指定する。
pub const API_BASE: &str = match option_env!("JOURNAL_API_BASE") {
    Some(base) => base,
    None => "",
};
