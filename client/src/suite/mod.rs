//! スイートオーケストレーター
//!
//! 固定のフィクスチャ画像セットを1回アップロードし（Setupフェーズ）、
//! 相互に独立したチェック列を順番に実行する（Runningフェーズ）。
//! チェックごとの結果は明示的な[`CheckReport`]として集計され、
//! アサーション失敗で残りのチェックが中断されることはない。
//! Setupの失敗とラン全体のタイムアウトのみがランを打ち切る。

use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use vision_client_common::config::ProviderConfig;
use vision_client_common::error::{CheckResult, CommonError, StorageError, SuiteError};

use crate::storage::{StorageClient, UploadedObject};
use crate::vision::VisionClient;

pub mod checks;

/// チェック名の一覧（実行順）
///
/// タイムアウトで未到達だったチェックのスキップ集計にも使う。
pub const CHECK_NAMES: [&str; 10] = [
    "scene_labels",
    "scene_face_details",
    "same_identity_compare",
    "different_identity_compare",
    "moderation_labels",
    "collection_created",
    "pair_faces_indexed",
    "search_by_face_id",
    "search_by_image",
    "collection_inventory",
];

/// フィクスチャ画像のローカルパス一式
///
/// 役割ベースの固定5枚: 人物を含む風景（scene）、人物Aの単独ポートレート
/// （face_a）、人物Aともう1人が写った写真（face_a_pair）、別人物Bの
/// ポートレート（face_b）、モデレーション判定用のビーチ写真（beach）。
#[derive(Debug, Clone)]
pub struct FixturePaths {
    /// 風景画像（ラベル・顔検出用）
    pub scene: PathBuf,
    /// 人物Aのポートレート
    pub portrait: PathBuf,
    /// 人物A＋同伴者の写真（顔2つ）
    pub portrait_pair: PathBuf,
    /// 別人物Bのポートレート
    pub second_portrait: PathBuf,
    /// モデレーション判定用画像
    pub moderation: PathBuf,
}

impl FixturePaths {
    /// 規約ファイル名（`scene.jpg` 等）でディレクトリからパス一式を組み立てる
    pub fn from_dir(dir: &Path) -> Self {
        Self {
            scene: dir.join("scene.jpg"),
            portrait: dir.join("face_a.jpg"),
            portrait_pair: dir.join("face_a_pair.jpg"),
            second_portrait: dir.join("face_b.jpg"),
            moderation: dir.join("beach.jpg"),
        }
    }

    /// アップロード順のパス配列を返す
    ///
    /// [`FixtureKeys`]はアップロード結果をこの順序で位置対応させる。
    pub fn ordered(&self) -> [&Path; 5] {
        [
            &self.scene,
            &self.portrait,
            &self.portrait_pair,
            &self.second_portrait,
            &self.moderation,
        ]
    }
}

/// アップロード後に割り当てられたリモートキー一式
#[derive(Debug, Clone)]
pub struct FixtureKeys {
    /// 風景画像のキー
    pub scene: String,
    /// 人物Aポートレートのキー
    pub portrait: String,
    /// 人物A＋同伴者写真のキー
    pub portrait_pair: String,
    /// 人物Bポートレートのキー
    pub second_portrait: String,
    /// モデレーション判定用画像のキー
    pub moderation: String,
}

impl FixtureKeys {
    /// アップロード結果（入力順保証あり）から位置対応でキーを取り出す
    fn from_uploads(uploads: &[UploadedObject]) -> Result<Self, SuiteError> {
        match uploads {
            [scene, portrait, pair, second, moderation] => Ok(Self {
                scene: scene.key.clone(),
                portrait: portrait.key.clone(),
                portrait_pair: pair.key.clone(),
                second_portrait: second.key.clone(),
                moderation: moderation.key.clone(),
            }),
            other => Err(SuiteError::Setup(StorageError::Common(
                CommonError::Validation(format!(
                    "expected 5 upload results, got {}",
                    other.len()
                )),
            ))),
        }
    }
}

/// ランの実行計画
///
/// ラン識別子は明示的なパラメーターであり、アップロード先フォルダと
/// コレクションIDの両方をスコープする。プロセス全体で共有される
/// 暗黙の時刻ベースIDは持たない。
#[derive(Debug, Clone)]
pub struct RunPlan {
    /// ラン識別子
    pub run_id: String,
    /// ラン終了後にリモートリソースを削除するか
    pub teardown: bool,
}

impl RunPlan {
    /// 指定したラン識別子で計画を作る
    pub fn new(run_id: impl Into<String>) -> Self {
        Self {
            run_id: run_id.into(),
            teardown: false,
        }
    }

    /// 現在時刻ベースのラン識別子で計画を作る（衝突回避の便宜のみ）
    ///
    /// 同時実行ランが同一ミリ秒で衝突しないよう、短いランダムサフィックスを
    /// 付ける。決定的なIDが必要な場合は[`RunPlan::new`]を使うこと。
    pub fn generate() -> Self {
        let suffix = Uuid::new_v4().simple().to_string();
        Self::new(format!(
            "run-{}-{}",
            Utc::now().timestamp_millis(),
            &suffix[..8]
        ))
    }

    /// ティアダウンの有効/無効を設定する
    pub fn with_teardown(mut self, teardown: bool) -> Self {
        self.teardown = teardown;
        self
    }

    /// このランのコレクションIDを返す
    pub fn collection_id(&self) -> String {
        format!("{}-faces", self.run_id)
    }

    /// このランのアップロード先フォルダを返す
    pub fn folder(&self, default_folder: &str) -> String {
        format!("{}/{}", default_folder.trim_matches('/'), self.run_id)
    }
}

/// チェックの実行結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    /// 成功
    Passed,
    /// 失敗（エラー内容付き）
    Failed(String),
    /// タイムアウトにより未実行
    Skipped,
}

/// 1チェック分のレポート
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// チェック名
    pub name: &'static str,
    /// 実行結果
    pub status: CheckStatus,
}

impl CheckReport {
    /// 成功したかどうか
    pub fn passed(&self) -> bool {
        self.status == CheckStatus::Passed
    }
}

/// ラン全体のレポート
#[derive(Debug, Clone)]
pub struct RunReport {
    /// ラン識別子
    pub run_id: String,
    /// このランで使ったコレクションID
    pub collection_id: String,
    /// チェックごとの結果（実行順）
    pub checks: Vec<CheckReport>,
}

impl RunReport {
    /// 成功したチェック数
    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|c| c.passed()).count()
    }

    /// 失敗したチェック数
    pub fn failed_count(&self) -> usize {
        self.checks
            .iter()
            .filter(|c| matches!(c.status, CheckStatus::Failed(_)))
            .count()
    }

    /// スキップされたチェック数
    pub fn skipped_count(&self) -> usize {
        self.checks
            .iter()
            .filter(|c| c.status == CheckStatus::Skipped)
            .count()
    }

    /// 全チェックが成功したか
    pub fn is_success(&self) -> bool {
        self.checks.iter().all(|c| c.passed())
    }
}

/// チェック間で共有されるコンテキスト
///
/// 唯一の可変共有状態は`indexed_face_ids`（追記専用）で、
/// 読み取るのは高々1つの後続チェックのみ。
pub struct CheckContext<'a> {
    /// ビジョンAPIクライアント
    pub vision: &'a VisionClient,
    /// フィクスチャ用バケット名
    pub bucket: &'a str,
    /// アップロード済みフィクスチャのキー一式
    pub keys: &'a FixtureKeys,
    /// このランのコレクションID
    pub collection_id: String,
    /// インデックス済み顔IDの蓄積リスト（追記専用）
    pub indexed_face_ids: Vec<String>,
}

/// スイートオーケストレーター
pub struct SuiteRunner {
    storage: StorageClient,
    vision: VisionClient,
    config: ProviderConfig,
}

impl SuiteRunner {
    /// 設定からランナーを作る
    pub fn new(config: ProviderConfig) -> Result<Self, SuiteError> {
        let storage = StorageClient::new(&config).map_err(|e| SuiteError::Init(e.to_string()))?;
        let vision = VisionClient::new(&config).map_err(|e| SuiteError::Init(e.to_string()))?;
        Ok(Self {
            storage,
            vision,
            config,
        })
    }

    /// ランを実行する
    ///
    /// Setup（全フィクスチャの並列アップロード＋完了バリア）に成功した
    /// 場合のみチェック列に進む。チェックは逐次実行され、個々の失敗は
    /// レポートに記録されて後続は継続する。ラン全体のタイムアウト超過で
    /// 未到達のチェックは`Skipped`として集計される。
    pub async fn run(
        &self,
        plan: &RunPlan,
        fixtures: &FixturePaths,
    ) -> Result<RunReport, SuiteError> {
        let folder = plan.folder(&self.config.default_folder);
        info!(run_id = %plan.run_id, folder = %folder, "uploading fixture images");

        let uploaded = self.storage.upload_multiple(&fixtures.ordered(), &folder).await?;
        let keys = FixtureKeys::from_uploads(&uploaded)?;
        info!(count = uploaded.len(), "fixture upload complete");

        let mut ctx = CheckContext {
            vision: &self.vision,
            bucket: &self.config.bucket,
            keys: &keys,
            collection_id: plan.collection_id(),
            indexed_face_ids: Vec::new(),
        };

        let mut reports: Vec<CheckReport> = Vec::new();
        let timed_out = tokio::time::timeout(
            self.config.run_timeout(),
            execute_checks(&mut ctx, &mut reports),
        )
        .await
        .is_err();
        if timed_out {
            warn!(
                timeout_secs = self.config.run_timeout_secs,
                "run timeout exceeded; remaining checks skipped"
            );
        }
        for name in CHECK_NAMES.iter().skip(reports.len()) {
            reports.push(CheckReport {
                name,
                status: CheckStatus::Skipped,
            });
        }

        if plan.teardown {
            self.teardown(&plan.collection_id(), &uploaded).await;
        }

        Ok(RunReport {
            run_id: plan.run_id.clone(),
            collection_id: plan.collection_id(),
            checks: reports,
        })
    }

    /// ランが作成したリモートリソースを削除する（ベストエフォート）
    ///
    /// ティアダウンの失敗は警告ログのみで、ラン結果には影響しない。
    async fn teardown(&self, collection_id: &str, uploaded: &[UploadedObject]) {
        info!(collection_id = %collection_id, "tearing down run resources");

        if let Err(e) = self.vision.delete_collection(collection_id).await {
            warn!(error = %e, "failed to delete collection");
        }
        for object in uploaded {
            if let Err(e) = self.storage.delete_object(&object.key).await {
                warn!(key = %object.key, error = %e, "failed to delete object");
            }
        }
    }
}

/// チェック列を順番に実行し、結果を逐次レポートに積む
async fn execute_checks(ctx: &mut CheckContext<'_>, reports: &mut Vec<CheckReport>) {
    reports.push(record(CHECK_NAMES[0], checks::scene_labels(ctx).await));
    reports.push(record(CHECK_NAMES[1], checks::scene_face_details(ctx).await));
    reports.push(record(CHECK_NAMES[2], checks::same_identity_compare(ctx).await));
    reports.push(record(CHECK_NAMES[3], checks::different_identity_compare(ctx).await));
    reports.push(record(CHECK_NAMES[4], checks::moderation_labels(ctx).await));
    reports.push(record(CHECK_NAMES[5], checks::collection_created(ctx).await));
    reports.push(record(CHECK_NAMES[6], checks::pair_faces_indexed(ctx).await));
    reports.push(record(CHECK_NAMES[7], checks::search_by_face_id(ctx).await));
    reports.push(record(CHECK_NAMES[8], checks::search_by_image(ctx).await));
    reports.push(record(CHECK_NAMES[9], checks::collection_inventory(ctx).await));
}

fn record(name: &'static str, result: CheckResult) -> CheckReport {
    match result {
        Ok(()) => {
            info!(check = name, "check passed");
            CheckReport {
                name,
                status: CheckStatus::Passed,
            }
        }
        Err(e) => {
            warn!(check = name, error = %e, "check failed");
            CheckReport {
                name,
                status: CheckStatus::Failed(e.to_string()),
            }
        }
    }
}
