//! ビジョンプロバイダーのモック
//!
//! 固定フィクスチャに対する決定的なレスポンス一式をマウントする。
//! オペレーションは `X-Amz-Target` ヘッダーで振り分け、キー依存の
//! オペレーション（比較・インデックス）はボディの部分一致で分岐する。

use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, header, method};
use wiremock::{Mock, MockBuilder, MockServer, ResponseTemplate};

/// ペア画像からインデックスされる人物Aの顔ID
#[allow(dead_code)]
pub const FACE_A_PAIR: &str = "face-a-pair";
/// ペア画像からインデックスされる同伴者の顔ID
#[allow(dead_code)]
pub const PARTNER_PAIR: &str = "partner-pair";
/// ポートレートからインデックスされる人物Aの顔ID
#[allow(dead_code)]
pub const FACE_A_PORTRAIT: &str = "face-a-portrait";

/// 指定オペレーション宛てのPOSTにマッチするモックビルダー
#[allow(dead_code)]
pub fn given_operation(operation: &str) -> MockBuilder {
    Mock::given(method("POST")).and(header(
        "x-amz-target",
        format!("RekognitionService.{}", operation),
    ))
}

/// フォルダ配下のオブジェクトキーを返す
#[allow(dead_code)]
pub fn key(folder: &str, name: &str) -> String {
    format!("{}/{}", folder, name)
}

fn bounding_box() -> Value {
    json!({"Width": 0.24, "Height": 0.45, "Left": 0.31, "Top": 0.12})
}

fn face_detail() -> Value {
    json!({
        "BoundingBox": bounding_box(),
        "Landmarks": [
            {"Type": "eyeLeft", "X": 0.38, "Y": 0.30},
            {"Type": "eyeRight", "X": 0.47, "Y": 0.29},
            {"Type": "nose", "X": 0.42, "Y": 0.35}
        ],
        "Pose": {"Roll": -1.2, "Yaw": 4.6, "Pitch": 8.1},
        "Quality": {"Brightness": 61.3, "Sharpness": 92.2},
        "Confidence": 99.99
    })
}

fn face(face_id: &str, image_id: &str) -> Value {
    json!({
        "FaceId": face_id,
        "ImageId": image_id,
        "BoundingBox": bounding_box(),
        "Confidence": 99.9
    })
}

fn face_record(face_id: &str, image_id: &str) -> Value {
    json!({"Face": face(face_id, image_id), "FaceDetail": face_detail()})
}

fn face_match(similarity: f64, face_id: &str, image_id: &str) -> Value {
    json!({"Similarity": similarity, "Face": face(face_id, image_id)})
}

/// 全オペレーションの決定的レスポンスをマウントする
///
/// `folder` はラン単位のアップロード先（[`vision_client::suite::RunPlan::folder`]）、
/// `collection_id` はランのコレクションID。
#[allow(dead_code)]
pub async fn mount_provider(server: &MockServer, folder: &str, collection_id: &str) {
    let portrait = key(folder, "face_a.jpg");
    let pair = key(folder, "face_a_pair.jpg");
    let second = key(folder, "face_b.jpg");

    given_operation("DetectLabels")
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Labels": [
                {"Name": "Running", "Confidence": 98.2},
                {"Name": "Person", "Confidence": 97.1}
            ]
        })))
        .mount(server)
        .await;

    given_operation("DetectFaces")
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "FaceDetails": [face_detail()]
        })))
        .mount(server)
        .await;

    // 同一人物: 1マッチ＋同伴者1アンマッチ
    given_operation("CompareFaces")
        .and(body_partial_json(
            json!({"TargetImage": {"S3Object": {"Name": pair}}}),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "FaceMatches": [
                {"Similarity": 97.3, "Face": {"BoundingBox": bounding_box(), "Confidence": 99.9}}
            ],
            "UnmatchedFaces": [
                {"BoundingBox": bounding_box(), "Confidence": 99.5}
            ]
        })))
        .mount(server)
        .await;

    // 別人物: マッチなし
    given_operation("CompareFaces")
        .and(body_partial_json(
            json!({"TargetImage": {"S3Object": {"Name": second}}}),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "FaceMatches": [],
            "UnmatchedFaces": [
                {"BoundingBox": bounding_box(), "Confidence": 99.5}
            ]
        })))
        .mount(server)
        .await;

    given_operation("DetectModerationLabels")
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ModerationLabels": [
                {"Name": "Suggestive", "Confidence": 82.0, "ParentName": ""}
            ]
        })))
        .mount(server)
        .await;

    given_operation("CreateCollection")
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "CollectionArn": format!(
                "aws:rekognition:us-east-1:000000000000:collection/{}",
                collection_id
            ),
            "StatusCode": 200
        })))
        .mount(server)
        .await;

    // ペア画像: 顔2つ
    given_operation("IndexFaces")
        .and(body_partial_json(
            json!({"Image": {"S3Object": {"Name": pair}}}),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "FaceRecords": [
                face_record(FACE_A_PAIR, "img-pair"),
                face_record(PARTNER_PAIR, "img-pair")
            ]
        })))
        .mount(server)
        .await;

    // ポートレート: 顔1つ
    given_operation("IndexFaces")
        .and(body_partial_json(
            json!({"Image": {"S3Object": {"Name": portrait}}}),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "FaceRecords": [face_record(FACE_A_PORTRAIT, "img-portrait")]
        })))
        .mount(server)
        .await;

    // 検索キーの顔自身は除外されるため、マッチはペア画像側の1件
    given_operation("SearchFaces")
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "SearchedFaceId": FACE_A_PORTRAIT,
            "FaceMatches": [face_match(97.8, FACE_A_PAIR, "img-pair")]
        })))
        .mount(server)
        .await;

    given_operation("SearchFacesByImage")
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "FaceMatches": [
                face_match(99.1, FACE_A_PORTRAIT, "img-portrait"),
                face_match(97.8, FACE_A_PAIR, "img-pair")
            ],
            "SearchedFaceBoundingBox": bounding_box(),
            "SearchedFaceConfidence": 99.9
        })))
        .mount(server)
        .await;

    given_operation("ListFaces")
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Faces": [
                face(FACE_A_PAIR, "img-pair"),
                face(PARTNER_PAIR, "img-pair"),
                face(FACE_A_PORTRAIT, "img-portrait")
            ]
        })))
        .mount(server)
        .await;

    given_operation("DeleteCollection")
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"StatusCode": 200})))
        .mount(server)
        .await;
}
