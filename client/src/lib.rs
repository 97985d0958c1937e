//! クラウドビジョンAPIクライアント
//!
//! リモートのビジョン解析サービスとオブジェクトストアに対する薄い
//! ファサード、およびフィクスチャ画像を使った統合テストランを組み立てる
//! スイートオーケストレーターを提供する。検出・比較・インデックスの
//! ロジックはすべてリモート側で実行され、ローカルはリクエストの組み立てと
//! レスポンス形状の検証のみを行う。

#![warn(missing_docs)]

/// CLI定義
pub mod cli;

/// ロギング初期化ユーティリティ
pub mod logging;

/// オブジェクトストアクライアント
pub mod storage;

/// スイートオーケストレーター
pub mod suite;

/// ビジョンAPIクライアント
pub mod vision;
