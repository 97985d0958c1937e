//! ロギング初期化ユーティリティ

use tracing_subscriber::EnvFilter;

/// トレーシングサブスクライバーを初期化する
///
/// フィルターは環境変数 `VISION_LOG_LEVEL`（未設定時は "info"）から読む。
/// 既に初期化済みの場合は何もしない（テストからの多重呼び出し対策）。
pub fn init() {
    let filter = EnvFilter::try_from_env("VISION_LOG_LEVEL")
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
