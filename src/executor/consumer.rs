// Consumer - セマフォで並列度を制御するワーカープール

use crate::core::error::{OrchestrationError, OrchestrationResult, WorkError};
use crate::core::traits::WorkItem;
use crate::core::types::{Outcome, WorkItemId};
use crate::signal::CancellationSignal;
use std::sync::Arc;
use tokio::sync::mpsc;

/// 単一Consumerワーカー
///
/// 共有キューから作業項目を取り出し、セマフォ許可の下で実行する。
/// キャンセル要求後に取り出された項目は実行せず`Cancelled`として報告する。
pub fn spawn_single_consumer<T: Send + Sync + 'static>(
    work_rx: Arc<tokio::sync::Mutex<mpsc::Receiver<Arc<dyn WorkItem<T>>>>>,
    result_tx: mpsc::Sender<(WorkItemId, Outcome<T>)>,
    semaphore: Arc<tokio::sync::Semaphore>,
    signal: CancellationSignal,
    stop_on_first_failure: bool,
) -> tokio::task::JoinHandle<OrchestrationResult<()>> {
    tokio::spawn(async move {
        loop {
            // 次の作業を取得
            let item = {
                let mut rx = work_rx.lock().await;
                match rx.recv().await {
                    Some(item) => item,
                    None => break, // チャンネル終了
                }
            };

            // セマフォで同時実行数制御
            let _permit = semaphore
                .acquire()
                .await
                .map_err(|e| OrchestrationError::channel(format!("セマフォエラー: {e}")))?;

            let item_id = item.id();

            // キャンセル要求後は未開始の項目を実行しない
            let outcome = if signal.is_requested() {
                Outcome::Cancelled
            } else {
                match item.run(signal.clone()).await {
                    Ok(value) => Outcome::Success { value },
                    Err(WorkError::Cancelled) => Outcome::Cancelled,
                    Err(WorkError::Failed(error)) => {
                        if stop_on_first_failure {
                            // 以降の未開始項目の実行を止める
                            signal.request_cancellation();
                        }
                        Outcome::Failure {
                            error: error.to_string(),
                        }
                    }
                }
            };

            // 結果送信
            if (result_tx.send((item_id, outcome)).await).is_err() {
                // 結果チャンネルが閉じられた場合は終了
                break;
            }
        }
        Ok(())
    })
}

/// Consumers: 並列ワーカープール
///
/// ワーカー数と許可数をどちらも最大並列度に合わせることで、
/// どの時点でもRunning状態の項目数が上限を超えないことを保証する
pub fn spawn_consumers<T: Send + Sync + 'static>(
    work_rx: mpsc::Receiver<Arc<dyn WorkItem<T>>>,
    result_tx: mpsc::Sender<(WorkItemId, Outcome<T>)>,
    semaphore: Arc<tokio::sync::Semaphore>,
    worker_count: usize,
    signal: CancellationSignal,
    stop_on_first_failure: bool,
) -> Vec<tokio::task::JoinHandle<OrchestrationResult<()>>> {
    let work_rx = Arc::new(tokio::sync::Mutex::new(work_rx));
    let mut handles = Vec::new();

    for _ in 0..worker_count {
        let handle = spawn_single_consumer(
            Arc::clone(&work_rx),
            result_tx.clone(),
            Arc::clone(&semaphore),
            signal.clone(),
            stop_on_first_failure,
        );
        handles.push(handle);
    }

    handles
}
