//! Vision Client 共通クレート
//!
//! StorageClient / VisionClient / スイートオーケストレーターで共有する
//! 型定義・プロトコル定義・設定・エラー型を提供する。

#![warn(missing_docs)]

/// 設定管理
pub mod config;

/// エラー型定義
pub mod error;

/// プロバイダーAPIのリクエスト/レスポンスボディ
pub mod protocol;

/// 共通レコード型（ラベル、顔詳細、マッチ結果等）
pub mod types;
