//! エラー型定義
//!
//! 統一エラー型（thiserror使用）
//!
//! エラー分類はリモートコラボレーターから継承する: アップロード失敗
//! （ファイル不可読・ネットワーク/認証失敗）、リクエスト失敗（不正入力・
//! リモートエラー）、アサーション失敗（レスポンス形状不一致）。
//! ローカルでのリカバリーは行わない。

use thiserror::Error;

/// Common layer error type
#[derive(Debug, Error)]
pub enum CommonError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Object store client error type
#[derive(Debug, Error)]
pub enum StorageError {
    /// Common layer error
    #[error(transparent)]
    Common(#[from] CommonError),

    /// Local fixture file could not be read
    #[error("Failed to read fixture file '{path}': {source}")]
    FixtureRead {
        /// 読み込みに失敗したローカルパス
        path: String,
        /// 元のI/Oエラー
        #[source]
        source: std::io::Error,
    },

    /// Fixture path has no usable file name
    #[error("Fixture path has no file name: {0}")]
    InvalidPath(String),

    /// HTTP transport error
    #[error("HTTP client error: {0}")]
    Http(String),

    /// Remote store rejected the request
    #[error("Object store returned HTTP {status} for key '{key}': {message}")]
    Status {
        /// 対象オブジェクトキー
        key: String,
        /// HTTPステータスコード
        status: u16,
        /// レスポンスボディ（切り詰め済み）
        message: String,
    },
}

/// Vision provider client error type
#[derive(Debug, Error)]
pub enum VisionError {
    /// Common layer error
    #[error(transparent)]
    Common(#[from] CommonError),

    /// HTTP transport error
    #[error("HTTP client error: {0}")]
    Http(String),

    /// Provider returned a structured error
    #[error("Provider error on {operation}: {code}: {message}")]
    Provider {
        /// 失敗したオペレーション名
        operation: &'static str,
        /// プロバイダーのエラー種別（`__type`）
        code: String,
        /// エラーメッセージ
        message: String,
    },

    /// Response body did not match the expected shape
    #[error("Failed to decode {operation} response: {message}")]
    Decode {
        /// 失敗したオペレーション名
        operation: &'static str,
        /// デコードエラーの詳細
        message: String,
    },
}

/// Single check failure
#[derive(Debug, Error)]
pub enum CheckError {
    /// Object store call failed
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Vision provider call failed
    #[error(transparent)]
    Vision(#[from] VisionError),

    /// Response shape or cardinality did not match expectations
    #[error("Assertion failed: {0}")]
    Assertion(String),
}

/// Suite-level failure (setup or run control)
#[derive(Debug, Error)]
pub enum SuiteError {
    /// Client construction failed before any remote call
    #[error("Client initialization failed: {0}")]
    Init(String),

    /// Fixture upload phase failed; no checks were run
    #[error("Fixture setup failed: {0}")]
    Setup(#[from] StorageError),
}

/// Result type alias (Common)
pub type CommonResult<T> = Result<T, CommonError>;

/// Result type alias (Storage)
pub type StorageResult<T> = Result<T, StorageError>;

/// Result type alias (Vision)
pub type VisionResult<T> = Result<T, VisionError>;

/// Result type alias (Check)
pub type CheckResult = Result<(), CheckError>;
