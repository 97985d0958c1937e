//! 共通型定義
//!
//! プロバイダーが返すレコード型（ラベル、顔詳細、マッチ結果等）。
//! ワイヤ表現はプロバイダー準拠のPascalCase。動的マップではなく
//! 明示的な構造体にマッピングし、形状検証をデシリアライズに寄せる。

use serde::{Deserialize, Serialize};

/// 顔やラベルの位置を示すバウンディングボックス（画像に対する比率）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BoundingBox {
    /// 幅（0.0-1.0）
    pub width: f32,
    /// 高さ（0.0-1.0）
    pub height: f32,
    /// 左端位置（0.0-1.0）
    pub left: f32,
    /// 上端位置（0.0-1.0）
    pub top: f32,
}

/// 顔のランドマーク（目・鼻・口等の特徴点）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Landmark {
    /// ランドマーク種別（例: "eyeLeft"）
    #[serde(rename = "Type")]
    pub kind: String,
    /// X座標（画像に対する比率）
    pub x: f32,
    /// Y座標（画像に対する比率）
    pub y: f32,
}

/// 顔の向き（角度）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Pose {
    /// ロール角
    pub roll: f32,
    /// ヨー角
    pub yaw: f32,
    /// ピッチ角
    pub pitch: f32,
}

/// 画像品質指標
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImageQuality {
    /// 明るさ
    pub brightness: f32,
    /// シャープネス
    pub sharpness: f32,
}

/// 検出された顔の詳細メタデータ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FaceDetail {
    /// バウンディングボックス
    pub bounding_box: BoundingBox,
    /// ランドマーク一覧
    pub landmarks: Vec<Landmark>,
    /// 顔の向き
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pose: Option<Pose>,
    /// 画像品質
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<ImageQuality>,
    /// 検出信頼度（0.0-100.0）
    pub confidence: f32,
}

/// 検出されたラベル
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Label {
    /// ラベル名
    pub name: String,
    /// 信頼度（0.0-100.0）
    pub confidence: f32,
}

/// モデレーションラベル（不適切コンテンツ分類）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModerationLabel {
    /// ラベル名
    pub name: String,
    /// 信頼度（0.0-100.0）
    pub confidence: f32,
    /// 親カテゴリ名（トップレベルの場合は空文字）
    #[serde(default)]
    pub parent_name: String,
}

/// 比較オペレーションで参照される顔（コレクション未登録）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ComparedFace {
    /// バウンディングボックス
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,
    /// 検出信頼度
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
}

/// 顔比較のマッチ結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CompareMatch {
    /// 類似度（0.0-100.0）
    pub similarity: f32,
    /// ターゲット画像側でマッチした顔
    pub face: ComparedFace,
}

/// コレクションにインデックス済みの顔
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Face {
    /// 顔ID（プロバイダー採番）
    pub face_id: String,
    /// ソース画像ID（プロバイダー採番）
    pub image_id: String,
    /// バウンディングボックス
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,
    /// 検出信頼度
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
    /// 呼び出し側が付与した外部画像ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_image_id: Option<String>,
}

/// インデックスオペレーションが返す顔レコード
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FaceRecord {
    /// インデックスされた顔
    pub face: Face,
    /// 顔詳細メタデータ
    pub face_detail: FaceDetail,
}

/// 顔検索のマッチ結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FaceMatch {
    /// 類似度（0.0-100.0）
    pub similarity: f32,
    /// マッチしたインデックス済みの顔
    pub face: Face,
}
