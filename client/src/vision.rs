//! ビジョンAPIクライアント
//!
//! リモートのビジョン解析サービスに対する1:1のファサード。各メソッドは
//! バケット/キー（コレクション系はコレクションID）を受け取り、プロバイダーの
//! 構造化レスポンスを型付きのまま無加工で返す。キャッシュ・リトライ・
//! ページネーションはここでは行わない。
//!
//! ワイヤはプロバイダーの `x-amz-json-1.1` ダイアレクト: エンドポイント
//! ルートへのPOSTで、オペレーションは `X-Amz-Target` ヘッダーで指定する。

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use vision_client_common::config::ProviderConfig;
use vision_client_common::error::{VisionError, VisionResult};
use vision_client_common::protocol::{
    CompareFacesRequest, CompareFacesResponse, CreateCollectionRequest, CreateCollectionResponse,
    DeleteCollectionRequest, DeleteCollectionResponse, DetectFacesRequest, DetectFacesResponse,
    DetectLabelsRequest, DetectLabelsResponse, DetectModerationLabelsRequest,
    DetectModerationLabelsResponse, ImageSpec, IndexFacesRequest, IndexFacesResponse,
    ListFacesRequest, ListFacesResponse, SearchFacesByImageRequest, SearchFacesByImageResponse,
    SearchFacesRequest, SearchFacesResponse,
};

/// `X-Amz-Target` ヘッダーのサービスプレフィックス
const TARGET_PREFIX: &str = "RekognitionService";

/// プロバイダーのコンテンツタイプ
const AMZ_JSON: &str = "application/x-amz-json-1.1";

/// プロバイダーが返す構造化エラーボディ
#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    #[serde(rename = "__type")]
    code: Option<String>,
    #[serde(alias = "Message")]
    message: Option<String>,
}

/// ビジョンAPIクライアント
pub struct VisionClient {
    http_client: Client,
    endpoint: String,
    auth_token: Option<String>,
}

impl VisionClient {
    /// 設定から新しいVisionClientを作成する
    pub fn new(config: &ProviderConfig) -> VisionResult<Self> {
        let http_client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| VisionError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            endpoint: config.vision_endpoint.trim_end_matches('/').to_string(),
            auth_token: config.auth_token.clone(),
        })
    }

    /// 画像からラベルを検出する
    pub async fn detect_labels(&self, bucket: &str, key: &str) -> VisionResult<DetectLabelsResponse> {
        let request = DetectLabelsRequest {
            image: ImageSpec::new(bucket, key),
            max_labels: None,
            min_confidence: None,
        };
        self.call("DetectLabels", &request).await
    }

    /// 画像から顔を検出する
    pub async fn detect_faces(&self, bucket: &str, key: &str) -> VisionResult<DetectFacesResponse> {
        let request = DetectFacesRequest {
            image: ImageSpec::new(bucket, key),
            attributes: Vec::new(),
        };
        self.call("DetectFaces", &request).await
    }

    /// ソース画像の最大の顔をターゲット画像の顔と比較する
    pub async fn compare_faces(
        &self,
        bucket: &str,
        source_key: &str,
        target_key: &str,
    ) -> VisionResult<CompareFacesResponse> {
        let request = CompareFacesRequest {
            source_image: ImageSpec::new(bucket, source_key),
            target_image: ImageSpec::new(bucket, target_key),
            similarity_threshold: None,
        };
        self.call("CompareFaces", &request).await
    }

    /// 画像からモデレーションラベルを検出する
    pub async fn detect_moderation_labels(
        &self,
        bucket: &str,
        key: &str,
    ) -> VisionResult<DetectModerationLabelsResponse> {
        let request = DetectModerationLabelsRequest {
            image: ImageSpec::new(bucket, key),
            min_confidence: None,
        };
        self.call("DetectModerationLabels", &request).await
    }

    /// 顔コレクションを作成する
    pub async fn create_collection(
        &self,
        collection_id: &str,
    ) -> VisionResult<CreateCollectionResponse> {
        let request = CreateCollectionRequest {
            collection_id: collection_id.to_string(),
        };
        self.call("CreateCollection", &request).await
    }

    /// 顔コレクションを削除する（ティアダウン用）
    pub async fn delete_collection(
        &self,
        collection_id: &str,
    ) -> VisionResult<DeleteCollectionResponse> {
        let request = DeleteCollectionRequest {
            collection_id: collection_id.to_string(),
        };
        self.call("DeleteCollection", &request).await
    }

    /// 画像内の顔をコレクションにインデックスする
    pub async fn index_faces(
        &self,
        bucket: &str,
        collection_id: &str,
        key: &str,
    ) -> VisionResult<IndexFacesResponse> {
        let request = IndexFacesRequest {
            collection_id: collection_id.to_string(),
            image: ImageSpec::new(bucket, key),
            external_image_id: None,
            detection_attributes: Vec::new(),
        };
        self.call("IndexFaces", &request).await
    }

    /// インデックス済みの顔IDでコレクションを検索する
    ///
    /// 検索キーに指定した顔自身はマッチ一覧に含まれない。
    pub async fn search_faces_by_face_id(
        &self,
        collection_id: &str,
        face_id: &str,
    ) -> VisionResult<SearchFacesResponse> {
        let request = SearchFacesRequest {
            collection_id: collection_id.to_string(),
            face_id: face_id.to_string(),
            face_match_threshold: None,
            max_faces: None,
        };
        self.call("SearchFaces", &request).await
    }

    /// 画像内の最大の顔でコレクションを検索する
    pub async fn search_faces_by_image(
        &self,
        bucket: &str,
        collection_id: &str,
        key: &str,
    ) -> VisionResult<SearchFacesByImageResponse> {
        let request = SearchFacesByImageRequest {
            collection_id: collection_id.to_string(),
            image: ImageSpec::new(bucket, key),
            face_match_threshold: None,
            max_faces: None,
        };
        self.call("SearchFacesByImage", &request).await
    }

    /// コレクション内の顔を一覧する（単一ページ）
    pub async fn list_faces(&self, collection_id: &str) -> VisionResult<ListFacesResponse> {
        let request = ListFacesRequest {
            collection_id: collection_id.to_string(),
            max_results: None,
            next_token: None,
        };
        self.call("ListFaces", &request).await
    }

    /// プロバイダーのオペレーションを1回呼び出す
    async fn call<B, R>(&self, operation: &'static str, body: &B) -> VisionResult<R>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        debug!(operation, "calling vision provider");

        let mut request = self
            .http_client
            .post(&self.endpoint)
            .header("X-Amz-Target", format!("{}.{}", TARGET_PREFIX, operation))
            .header(CONTENT_TYPE, AMZ_JSON)
            .json(body);
        if let Some(token) = &self.auth_token {
            request = request.header(AUTHORIZATION, token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| VisionError::Http(format!("{} request failed: {}", operation, e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| VisionError::Http(format!("{} response read failed: {}", operation, e)))?;

        if !status.is_success() {
            let parsed: Option<ProviderErrorBody> = serde_json::from_str(&text).ok();
            let (code, message) = match parsed {
                Some(body) => (
                    body.code.unwrap_or_else(|| format!("HTTP {}", status.as_u16())),
                    body.message.unwrap_or_default(),
                ),
                None => (format!("HTTP {}", status.as_u16()), text),
            };
            return Err(VisionError::Provider {
                operation,
                code,
                message,
            });
        }

        serde_json::from_str(&text).map_err(|e| VisionError::Decode {
            operation,
            message: e.to_string(),
        })
    }
}
