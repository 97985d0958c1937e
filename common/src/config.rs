//! 設定管理
//!
//! プロバイダー接続設定（エンドポイント、バケット、タイムアウト等）。
//! 認証情報の解決はエンドポイント側（ローカルエミュレーターまたは
//! 署名プロキシ）に委ねる。

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 環境変数を取得する（未設定・空文字ならNone）
pub fn get_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// 環境変数を取得し、未設定ならデフォルト値を返す
pub fn get_env_or(name: &str, default: &str) -> String {
    get_env(name).unwrap_or_else(|| default.to_string())
}

/// 環境変数をパースして取得し、未設定・パース失敗ならデフォルト値を返す
pub fn get_env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    get_env(name).and_then(|s| s.parse().ok()).unwrap_or(default)
}

/// 環境変数をbool解釈する（`true/1/yes/on` を真とみなす）
pub fn get_env_flag(name: &str) -> bool {
    get_env(name)
        .map(|v| matches!(v.to_ascii_lowercase().as_str(), "true" | "1" | "yes" | "on"))
        .unwrap_or(false)
}

/// プロバイダー接続設定
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// オブジェクトストアのエンドポイント (デフォルト: "http://localhost:4566")
    #[serde(default = "default_storage_endpoint")]
    pub storage_endpoint: String,

    /// ビジョンAPIのエンドポイント (デフォルト: "http://localhost:4566")
    #[serde(default = "default_vision_endpoint")]
    pub vision_endpoint: String,

    /// フィクスチャ用バケット名 (デフォルト: "vision-fixtures")
    #[serde(default = "default_bucket")]
    pub bucket: String,

    /// デフォルトのアップロード先フォルダ (デフォルト: "fixtures")
    #[serde(default = "default_folder")]
    pub default_folder: String,

    /// 静的認証トークン（任意。Authorizationヘッダーとして送信）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,

    /// リクエスト単位のタイムアウト（秒）(デフォルト: 30)
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// ラン全体のタイムアウト（秒）(デフォルト: 300)
    #[serde(default = "default_run_timeout")]
    pub run_timeout_secs: u64,

    /// ラン終了後にコレクション・オブジェクトを削除するか (デフォルト: false)
    #[serde(default)]
    pub teardown: bool,
}

fn default_storage_endpoint() -> String {
    "http://localhost:4566".to_string()
}

fn default_vision_endpoint() -> String {
    "http://localhost:4566".to_string()
}

fn default_bucket() -> String {
    "vision-fixtures".to_string()
}

fn default_folder() -> String {
    "fixtures".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_run_timeout() -> u64 {
    300
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            storage_endpoint: default_storage_endpoint(),
            vision_endpoint: default_vision_endpoint(),
            bucket: default_bucket(),
            default_folder: default_folder(),
            auth_token: None,
            request_timeout_secs: default_request_timeout(),
            run_timeout_secs: default_run_timeout(),
            teardown: false,
        }
    }
}

impl ProviderConfig {
    /// 環境変数（`VISION_*`）から設定を読み込む
    pub fn from_env() -> Self {
        Self {
            storage_endpoint: get_env_or("VISION_STORAGE_ENDPOINT", &default_storage_endpoint()),
            vision_endpoint: get_env_or("VISION_API_ENDPOINT", &default_vision_endpoint()),
            bucket: get_env_or("VISION_BUCKET", &default_bucket()),
            default_folder: get_env_or("VISION_DEFAULT_FOLDER", &default_folder()),
            auth_token: get_env("VISION_AUTH_TOKEN"),
            request_timeout_secs: get_env_parse(
                "VISION_REQUEST_TIMEOUT_SECS",
                default_request_timeout(),
            ),
            run_timeout_secs: get_env_parse("VISION_RUN_TIMEOUT_SECS", default_run_timeout()),
            teardown: get_env_flag("VISION_TEARDOWN"),
        }
    }

    /// リクエストタイムアウトを`Duration`で返す
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// ランタイムアウトを`Duration`で返す
    pub fn run_timeout(&self) -> Duration {
        Duration::from_secs(self.run_timeout_secs)
    }
}
