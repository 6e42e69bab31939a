use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "journal")]
#[command(about = "Memory Journal: AI-enhanced diary server", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// データディレクトリ（エントリと日記ファイルの保存先）
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// APIサーバーを起動
    Serve {
        /// 待ち受けポート
        #[arg(short, long)]
        port: Option<u16>,

        /// ビルド済みフロントエンドのディレクトリ
        #[arg(long)]
        static_dir: Option<PathBuf>,

        /// Ollamaモデル名
        #[arg(short, long)]
        model: Option<String>,

        /// OllamaのURL
        #[arg(long)]
        ollama_url: Option<String>,

        /// 起動時のモデル確認を省略
        #[arg(long)]
        skip_model_check: bool,
    },

    /// 保存済みの思い出を一覧表示
    List,

    /// 保存済みの思い出をすべて削除
    Purge {
        /// 確認を省略
        #[arg(short, long)]
        yes: bool,
    },

    /// 設定の表示・変更
    Config {
        /// Ollamaモデル名を設定
        #[arg(long)]
        set_model: Option<String>,

        /// OllamaのURLを設定
        #[arg(long)]
        set_ollama_url: Option<String>,

        /// 待ち受けポートを設定
        #[arg(long)]
        set_port: Option<u16>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}
