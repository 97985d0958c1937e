//! 標準チェック一覧
//!
//! 各チェックはVisionClientのオペレーションを1回呼び出し、必須フィールドの
//! 存在（型付きデコードで担保）と、固定フィクスチャに対して決定的な
//! 件数・値を検証する。チェック同士は独立で、共有するのはフィクスチャの
//! キーと追記専用のインデックス済み顔IDリストのみ。

use std::collections::HashSet;

use vision_client_common::error::{CheckError, CheckResult};

use super::CheckContext;

fn ensure(condition: bool, message: impl Into<String>) -> CheckResult {
    if condition {
        Ok(())
    } else {
        Err(CheckError::Assertion(message.into()))
    }
}

fn ensure_count(what: &str, actual: usize, expected: usize) -> CheckResult {
    ensure(
        actual == expected,
        format!("expected {} {}, got {}", expected, what, actual),
    )
}

/// 風景画像のラベル検出: 各ラベルに名前と信頼度が入っている
pub async fn scene_labels(ctx: &mut CheckContext<'_>) -> CheckResult {
    let response = ctx.vision.detect_labels(ctx.bucket, &ctx.keys.scene).await?;
    for label in &response.labels {
        ensure(!label.name.is_empty(), "label with empty name")?;
    }
    Ok(())
}

/// 風景画像の顔検出: 各顔詳細にバウンディングボックス・ランドマーク・
/// 向き・品質・信頼度が揃っている
pub async fn scene_face_details(ctx: &mut CheckContext<'_>) -> CheckResult {
    let response = ctx.vision.detect_faces(ctx.bucket, &ctx.keys.scene).await?;
    for detail in &response.face_details {
        ensure(detail.pose.is_some(), "face detail without pose")?;
        ensure(detail.quality.is_some(), "face detail without quality")?;
    }
    Ok(())
}

/// 同一人物の2枚を比較: ちょうど1マッチ＋1アンマッチ
///
/// ターゲット画像には人物Aと同伴者の2つの顔が写っているため、
/// Aがマッチし同伴者がアンマッチになる。
pub async fn same_identity_compare(ctx: &mut CheckContext<'_>) -> CheckResult {
    let response = ctx
        .vision
        .compare_faces(ctx.bucket, &ctx.keys.portrait, &ctx.keys.portrait_pair)
        .await?;
    ensure_count("face matches", response.face_matches.len(), 1)?;
    ensure_count("unmatched faces", response.unmatched_faces.len(), 1)
}

/// 別人物同士を比較: マッチ0件
pub async fn different_identity_compare(ctx: &mut CheckContext<'_>) -> CheckResult {
    let response = ctx
        .vision
        .compare_faces(ctx.bucket, &ctx.keys.portrait, &ctx.keys.second_portrait)
        .await?;
    ensure_count("face matches", response.face_matches.len(), 0)?;
    ensure_count("unmatched faces", response.unmatched_faces.len(), 1)
}

/// モデレーションラベル検出: 形状検証（件数は画像内容に依存するため
/// デコード成功のみを要求する）
pub async fn moderation_labels(ctx: &mut CheckContext<'_>) -> CheckResult {
    let response = ctx
        .vision
        .detect_moderation_labels(ctx.bucket, &ctx.keys.moderation)
        .await?;
    for label in &response.moderation_labels {
        ensure(!label.name.is_empty(), "moderation label with empty name")?;
    }
    Ok(())
}

/// コレクション作成: StatusCode 200とARNが返る
pub async fn collection_created(ctx: &mut CheckContext<'_>) -> CheckResult {
    let response = ctx.vision.create_collection(&ctx.collection_id).await?;
    ensure(
        response.status_code == 200,
        format!("collection status code {}", response.status_code),
    )?;
    ensure(!response.collection_arn.is_empty(), "empty collection ARN")
}

/// 顔2つの画像をインデックス: レコード2件・顔IDは一意
pub async fn pair_faces_indexed(ctx: &mut CheckContext<'_>) -> CheckResult {
    let response = ctx
        .vision
        .index_faces(ctx.bucket, &ctx.collection_id, &ctx.keys.portrait_pair)
        .await?;
    ensure_count("face records", response.face_records.len(), 2)?;

    let ids: HashSet<&str> = response
        .face_records
        .iter()
        .map(|r| r.face.face_id.as_str())
        .collect();
    ensure(ids.len() == response.face_records.len(), "duplicate face ids in index result")?;

    for record in &response.face_records {
        ctx.indexed_face_ids.push(record.face.face_id.clone());
    }
    Ok(())
}

/// ポートレートをインデックスし、その顔IDで検索: マッチ1件
///
/// 検索キーの顔自身は結果から除外されるため、唯一のマッチは
/// ペア画像側にある同一人物の顔になる。
pub async fn search_by_face_id(ctx: &mut CheckContext<'_>) -> CheckResult {
    let indexed = ctx
        .vision
        .index_faces(ctx.bucket, &ctx.collection_id, &ctx.keys.portrait)
        .await?;
    let face_id = indexed
        .face_records
        .first()
        .map(|r| r.face.face_id.clone())
        .ok_or_else(|| CheckError::Assertion("indexing portrait returned no face records".to_string()))?;

    let response = ctx
        .vision
        .search_faces_by_face_id(&ctx.collection_id, &face_id)
        .await?;
    ensure_count("face matches", response.face_matches.len(), 1)
}

/// ポートレート画像でコレクションを検索: マッチ2件
/// （ペア画像の人物Aと、直前にインデックスしたポートレート自身）
pub async fn search_by_image(ctx: &mut CheckContext<'_>) -> CheckResult {
    let response = ctx
        .vision
        .search_faces_by_image(ctx.bucket, &ctx.collection_id, &ctx.keys.portrait)
        .await?;
    ensure_count("face matches", response.face_matches.len(), 2)
}

/// コレクション一覧: ここまでで計3つの顔が登録されている
pub async fn collection_inventory(ctx: &mut CheckContext<'_>) -> CheckResult {
    let response = ctx.vision.list_faces(&ctx.collection_id).await?;
    ensure_count("faces", response.faces.len(), 3)?;
    for face in &response.faces {
        ensure(!face.face_id.is_empty(), "face without id")?;
        ensure(!face.image_id.is_empty(), "face without image id")?;
    }
    Ok(())
}
