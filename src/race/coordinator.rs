// RaceCoordinator - 最初の完了のみを採用するレース実行

use crate::core::error::{OrchestrationError, OrchestrationResult, WorkError};
use crate::core::traits::{ProgressReporter, WorkItem};
use crate::core::types::{Outcome, WorkItemId};
use crate::signal::CancellationSignal;
use std::sync::Arc;
use tokio::sync::mpsc;

/// 複数の作業項目を並列度上限なしで競争させるコーディネーター
///
/// 最初にCompletedまたはFailedに到達した項目が勝者となり、
/// その時点で共有キャンセルシグナルが要求される。
/// 敗者の終端状態は戻り値からは破棄されるが、失敗は診断チャンネル
/// （ProgressReporter）へ報告される。呼び出しが戻る前に全ての競争参加者の
/// 終了を待機するため、作業のリークは発生しない。
pub struct RaceCoordinator<R> {
    reporter: Arc<R>,
}

impl<R> RaceCoordinator<R>
where
    R: ProgressReporter + 'static,
{
    /// 新しいコーディネーターを作成
    pub fn new(reporter: Arc<R>) -> Self {
        Self { reporter }
    }

    /// 全ての項目を同時に起動し、最初の完了を勝者として返す
    ///
    /// 空の入力は`EmptyRace`で即座に失敗する。
    /// 勝者の決定は単一の結果チャンネルの受信順で行われるため、
    /// 同時完了時も勝者はちょうど1つであり、コーディネーター自身が
    /// ランダム性を持ち込むことはない。
    pub async fn race<T: Send + Sync + 'static>(
        &self,
        items: Vec<Arc<dyn WorkItem<T>>>,
    ) -> OrchestrationResult<(WorkItemId, Outcome<T>)> {
        if items.is_empty() {
            return Err(OrchestrationError::EmptyRace);
        }

        // シグナルの生存期間はこの呼び出しに限定される
        let signal = CancellationSignal::new();
        let (result_tx, mut result_rx) = mpsc::channel(items.len());

        let mut handles = Vec::with_capacity(items.len());
        for item in items {
            let result_tx = result_tx.clone();
            let signal = signal.clone();
            handles.push(tokio::spawn(async move {
                let item_id = item.id();
                let outcome = match item.run(signal).await {
                    Ok(value) => Outcome::Success { value },
                    Err(WorkError::Cancelled) => Outcome::Cancelled,
                    Err(WorkError::Failed(error)) => Outcome::Failure {
                        error: error.to_string(),
                    },
                };
                // 受信側が閉じることはない（容量 = 参加者数）
                let _ = result_tx.send((item_id, outcome)).await;
            }));
        }
        drop(result_tx);

        let mut winner: Option<(WorkItemId, Outcome<T>)> = None;

        // 勝者確定後もチャンネルが閉じるまで受信を続け、
        // 全ての競争参加者の終了を確認してから戻る
        while let Some((item_id, outcome)) = result_rx.recv().await {
            if winner.is_none() && !outcome.is_cancelled() {
                signal.request_cancellation();
                self.reporter.report_race_settled(&item_id).await;
                winner = Some((item_id, outcome));
                continue;
            }

            // 敗者の結果は破棄するが、失敗とキャンセルは診断用に報告する
            match outcome {
                Outcome::Failure { error } => {
                    self.reporter.report_item_failed(&item_id, &error).await;
                }
                Outcome::Cancelled => {
                    self.reporter.report_item_cancelled(&item_id).await;
                }
                Outcome::Success { .. } => {}
            }
        }

        for handle in handles {
            handle.await?;
        }

        winner.ok_or_else(|| {
            OrchestrationError::channel("全ての競争参加者が勝者なしで終了しました")
        })
    }
}
