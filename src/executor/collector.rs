// Collector - 結果収集とアグリゲーターへの記録

use crate::aggregator::ResultAggregator;
use crate::core::error::OrchestrationResult;
use crate::core::traits::ProgressReporter;
use crate::core::types::{Outcome, WorkItemId};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Collector: ワーカーからの終端状態をアグリゲーターに記録
///
/// 完了順で最初に観測された失敗の識別子と理由を返す
/// （fail-fast構成で`AggregateFailure`を組み立てるために使用される）
pub fn spawn_result_collector<T, R>(
    mut result_rx: mpsc::Receiver<(WorkItemId, Outcome<T>)>,
    total_items: usize,
    aggregator: ResultAggregator<T>,
    reporter: Arc<R>,
) -> tokio::task::JoinHandle<OrchestrationResult<Option<(WorkItemId, String)>>>
where
    T: Send + Sync + 'static,
    R: ProgressReporter + 'static,
{
    tokio::spawn(async move {
        let mut completed = 0;
        let mut first_failure: Option<(WorkItemId, String)> = None;

        while let Some((item_id, outcome)) = result_rx.recv().await {
            match &outcome {
                Outcome::Failure { error } => {
                    reporter.report_item_failed(&item_id, error).await;
                    if first_failure.is_none() {
                        first_failure = Some((item_id.clone(), error.clone()));
                    }
                }
                Outcome::Cancelled => {
                    reporter.report_item_cancelled(&item_id).await;
                }
                Outcome::Success { .. } => {}
            }

            // 同じ識別子の二重記録は呼び出し側の誤用としてここで失敗する
            aggregator.record(item_id, outcome)?;

            completed += 1;
            reporter.report_progress(completed, total_items).await;
        }

        Ok(first_failure)
    })
}
