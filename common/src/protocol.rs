//! プロバイダーAPIのリクエスト/レスポンスボディ
//!
//! ビジョンプロバイダーの `x-amz-json-1.1` ダイアレクトに準拠した
//! オペレーション別メッセージ定義。スキーマはすべてプロバイダー側の
//! ものであり、このクレートが独自に定義するワイヤ形式はない。
//!
//! レスポンス側は仕様上必須のフィールドを非defaultで宣言しており、
//! フィールド欠落はデコードエラー＝形状検証の失敗として扱われる。

use serde::{Deserialize, Serialize};

use crate::types::{
    BoundingBox, CompareMatch, ComparedFace, Face, FaceDetail, FaceMatch, FaceRecord, Label,
    ModerationLabel,
};

/// オブジェクトストア上の画像参照
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct S3ObjectSpec {
    /// バケット名
    pub bucket: String,
    /// オブジェクトキー
    pub name: String,
}

/// オペレーション入力画像（ストア参照のみサポート）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImageSpec {
    /// ストア上のオブジェクト参照
    #[serde(rename = "S3Object")]
    pub s3_object: S3ObjectSpec,
}

impl ImageSpec {
    /// バケット名とキーから画像参照を作る
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            s3_object: S3ObjectSpec {
                bucket: bucket.into(),
                name: key.into(),
            },
        }
    }
}

/// DetectLabelsリクエスト
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectLabelsRequest {
    /// 入力画像
    pub image: ImageSpec,
    /// 返却ラベル数の上限（任意）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_labels: Option<u32>,
    /// 信頼度の下限（任意）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_confidence: Option<f32>,
}

/// DetectLabelsレスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectLabelsResponse {
    /// 検出されたラベル一覧
    pub labels: Vec<Label>,
}

/// DetectFacesリクエスト
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectFacesRequest {
    /// 入力画像
    pub image: ImageSpec,
    /// 返却属性の指定（例: ["ALL"]）
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<String>,
}

/// DetectFacesレスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectFacesResponse {
    /// 検出された顔詳細一覧
    pub face_details: Vec<FaceDetail>,
}

/// CompareFacesリクエスト
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CompareFacesRequest {
    /// ソース画像（比較元の顔を含む）
    pub source_image: ImageSpec,
    /// ターゲット画像
    pub target_image: ImageSpec,
    /// マッチとみなす類似度の下限（任意）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity_threshold: Option<f32>,
}

/// CompareFacesレスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CompareFacesResponse {
    /// マッチした顔一覧
    pub face_matches: Vec<CompareMatch>,
    /// マッチしなかった顔一覧
    pub unmatched_faces: Vec<ComparedFace>,
}

/// DetectModerationLabelsリクエスト
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectModerationLabelsRequest {
    /// 入力画像
    pub image: ImageSpec,
    /// 信頼度の下限（任意）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_confidence: Option<f32>,
}

/// DetectModerationLabelsレスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectModerationLabelsResponse {
    /// モデレーションラベル一覧
    pub moderation_labels: Vec<ModerationLabel>,
}

/// CreateCollectionリクエスト
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateCollectionRequest {
    /// コレクションID
    pub collection_id: String,
}

/// CreateCollectionレスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateCollectionResponse {
    /// 作成されたコレクションのARN
    pub collection_arn: String,
    /// HTTPステータスコード相当の結果コード
    pub status_code: u16,
}

/// DeleteCollectionリクエスト
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteCollectionRequest {
    /// コレクションID
    pub collection_id: String,
}

/// DeleteCollectionレスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteCollectionResponse {
    /// HTTPステータスコード相当の結果コード
    pub status_code: u16,
}

/// IndexFacesリクエスト
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IndexFacesRequest {
    /// 対象コレクションID
    pub collection_id: String,
    /// 入力画像
    pub image: ImageSpec,
    /// 呼び出し側が付与する外部画像ID（任意）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_image_id: Option<String>,
    /// 返却属性の指定（任意）
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub detection_attributes: Vec<String>,
}

/// IndexFacesレスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IndexFacesResponse {
    /// インデックスされた顔レコード一覧
    pub face_records: Vec<FaceRecord>,
}

/// SearchFaces（顔ID検索）リクエスト
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchFacesRequest {
    /// 対象コレクションID
    pub collection_id: String,
    /// 検索キーとなる顔ID
    pub face_id: String,
    /// マッチとみなす類似度の下限（任意）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub face_match_threshold: Option<f32>,
    /// 返却マッチ数の上限（任意）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_faces: Option<u32>,
}

/// SearchFacesレスポンス
///
/// 検索キーに指定した顔自身はマッチ一覧に含まれない（自己マッチ除外）。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchFacesResponse {
    /// 検索キーとして使われた顔ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub searched_face_id: Option<String>,
    /// マッチした顔一覧
    pub face_matches: Vec<FaceMatch>,
}

/// SearchFacesByImage（画像検索）リクエスト
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchFacesByImageRequest {
    /// 対象コレクションID
    pub collection_id: String,
    /// 入力画像（最大の顔が検索キーになる）
    pub image: ImageSpec,
    /// マッチとみなす類似度の下限（任意）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub face_match_threshold: Option<f32>,
    /// 返却マッチ数の上限（任意）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_faces: Option<u32>,
}

/// SearchFacesByImageレスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchFacesByImageResponse {
    /// マッチした顔一覧
    pub face_matches: Vec<FaceMatch>,
    /// 検索キーに使われた顔のバウンディングボックス
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub searched_face_bounding_box: Option<BoundingBox>,
    /// 検索キーに使われた顔の検出信頼度
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub searched_face_confidence: Option<f32>,
}

/// ListFacesリクエスト
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListFacesRequest {
    /// 対象コレクションID
    pub collection_id: String,
    /// 返却件数の上限（任意）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
    /// ページネーショントークン（任意）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// ListFacesレスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListFacesResponse {
    /// コレクション内の顔一覧（単一ページ）
    pub faces: Vec<Face>,
    /// 続きがある場合のページネーショントークン
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}
