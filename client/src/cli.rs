//! CLI定義
//!
//! 統合ランをコマンドラインから実行するためのインターフェース。

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Vision client - 固定フィクスチャによるビジョンAPI統合ラン
#[derive(Parser, Debug)]
#[command(name = "vision-client")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    VISION_STORAGE_ENDPOINT      Object store endpoint (default: http://localhost:4566)
    VISION_API_ENDPOINT          Vision API endpoint (default: http://localhost:4566)
    VISION_BUCKET                Fixture bucket (default: vision-fixtures)
    VISION_DEFAULT_FOLDER        Upload folder prefix (default: fixtures)
    VISION_AUTH_TOKEN            Static Authorization header value (optional)
    VISION_REQUEST_TIMEOUT_SECS  Per-request timeout (default: 30)
    VISION_RUN_TIMEOUT_SECS      Whole-run timeout (default: 300)
    VISION_TEARDOWN              Delete run resources afterwards (default: false)
    VISION_LOG_LEVEL             Log level (default: info)
"#)]
pub struct Cli {
    /// 実行するサブコマンド
    #[command(subcommand)]
    pub command: Commands,
}

/// サブコマンド一覧
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 統合ランを実行する
    Run(RunArgs),
}

/// `run` サブコマンドの引数
#[derive(Args, Debug)]
pub struct RunArgs {
    /// フィクスチャ画像ディレクトリ
    /// （scene.jpg / face_a.jpg / face_a_pair.jpg / face_b.jpg / beach.jpg）
    #[arg(long)]
    pub fixtures_dir: PathBuf,

    /// ラン識別子（未指定時は時刻ベースで生成）
    #[arg(long)]
    pub run_id: Option<String>,

    /// ラン終了後にコレクションとアップロード済みオブジェクトを削除する
    #[arg(long)]
    pub teardown: bool,

    /// ラン全体のタイムアウト秒数（設定値を上書き）
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}
