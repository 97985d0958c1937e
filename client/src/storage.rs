//! オブジェクトストアクライアント
//!
//! フィクスチャ画像をリモートストアにステージするための薄いファサード。
//! S3互換のREST API（PUT/DELETE）を前提とし、署名はエンドポイント側
//! （ローカルエミュレーターまたは署名プロキシ）に委ねる。

use std::path::Path;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use tracing::debug;

use vision_client_common::config::ProviderConfig;
use vision_client_common::error::{CommonError, StorageError, StorageResult};

/// アップロード結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedObject {
    /// ストア上のオブジェクトキー
    pub key: String,
    /// ストアが返したETag（返されない場合はNone）
    pub etag: Option<String>,
}

/// オブジェクトストアクライアント
pub struct StorageClient {
    http_client: Client,
    endpoint: String,
    bucket: String,
    auth_token: Option<String>,
}

impl StorageClient {
    /// 設定から新しいStorageClientを作成する
    pub fn new(config: &ProviderConfig) -> StorageResult<Self> {
        let http_client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| StorageError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            endpoint: config.storage_endpoint.trim_end_matches('/').to_string(),
            bucket: config.bucket.clone(),
            auth_token: config.auth_token.clone(),
        })
    }

    /// バケット名を返す
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// ローカルファイルを1つアップロードし、割り当てられたキーを返す
    ///
    /// キーは `{folder}/{ファイル名}` になる。ラン間の分離はフォルダを
    /// ラン単位にスコープすることで行う（[`crate::suite::RunPlan`]参照）。
    pub async fn upload(&self, path: &Path, folder: &str) -> StorageResult<UploadedObject> {
        let key = object_key(path, folder)?;

        let body = tokio::fs::read(path).await.map_err(|e| StorageError::FixtureRead {
            path: path.display().to_string(),
            source: e,
        })?;

        let content_type = mime_guess::from_path(path).first_or_octet_stream();
        let url = self.object_url(&key);
        debug!(key = %key, bytes = body.len(), "uploading fixture");

        let mut request = self
            .http_client
            .put(&url)
            .header(CONTENT_TYPE, content_type.as_ref())
            .body(body);
        if let Some(token) = &self.auth_token {
            request = request.header(AUTHORIZATION, token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| StorageError::Http(format!("Failed to upload '{}': {}", key, e)))?;

        let status = response.status();
        if !status.is_success() {
            let message = truncated_body(response).await;
            return Err(StorageError::Status {
                key,
                status: status.as_u16(),
                message,
            });
        }

        let etag = response
            .headers()
            .get(reqwest::header::ETAG)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.trim_matches('"').to_string());

        Ok(UploadedObject { key, etag })
    }

    /// 複数ファイルを一括アップロードする（1回限りの並列ファンアウト）
    ///
    /// 結果は入力パスと同じ順序で返る。後段のチェックは位置インデックスで
    /// 「n番目にアップロードした画像」を参照するため、この順序保証が
    /// 契約の一部である。1件でも失敗するとバッチ全体が失敗し、部分成功の
    /// 巻き戻しは行わない。
    pub async fn upload_multiple(
        &self,
        paths: &[&Path],
        folder: &str,
    ) -> StorageResult<Vec<UploadedObject>> {
        if paths.is_empty() {
            return Err(CommonError::Validation("upload_multiple requires at least one path".to_string()).into());
        }

        let uploads = paths.iter().map(|path| self.upload(path, folder));
        futures::future::try_join_all(uploads).await
    }

    /// オブジェクトを削除する（ティアダウン用）
    ///
    /// 既に存在しないオブジェクト（404）は成功扱いにする。
    pub async fn delete_object(&self, key: &str) -> StorageResult<()> {
        let url = self.object_url(key);
        debug!(key = %key, "deleting object");

        let mut request = self.http_client.delete(&url);
        if let Some(token) = &self.auth_token {
            request = request.header(AUTHORIZATION, token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| StorageError::Http(format!("Failed to delete '{}': {}", key, e)))?;

        let status = response.status();
        if !status.is_success() && status != reqwest::StatusCode::NOT_FOUND {
            let message = truncated_body(response).await;
            return Err(StorageError::Status {
                key: key.to_string(),
                status: status.as_u16(),
                message,
            });
        }

        Ok(())
    }

    fn object_url(&self, key: &str) -> String {
        format!("{}/{}/{}", self.endpoint, self.bucket, key)
    }
}

/// ローカルパスとフォルダからオブジェクトキーを導出する
fn object_key(path: &Path, folder: &str) -> StorageResult<String> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| StorageError::InvalidPath(path.display().to_string()))?;

    Ok(format!("{}/{}", folder.trim_matches('/'), file_name))
}

/// エラーレスポンスのボディをログ向けに切り詰めて読む
async fn truncated_body(response: reqwest::Response) -> String {
    const MAX_LEN: usize = 200;
    let text = response.text().await.unwrap_or_default();
    truncate_utf8(&text, MAX_LEN)
}

/// UTF-8の文字境界を保ったままバイト長上限で切り詰める
fn truncate_utf8(text: &str, max_len: usize) -> String {
    if text.len() <= max_len {
        return text.to_string();
    }
    // 上限がマルチバイト文字の途中に落ちた場合は直前の境界まで戻す
    let mut cut = max_len;
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &text[..cut])
}
