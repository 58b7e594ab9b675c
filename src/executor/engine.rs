// BoundedExecutor - 有界並列ファンアウト/ファンイン実行エンジン

use super::collector::spawn_result_collector;
use super::consumer::spawn_consumers;
use super::producer::spawn_producer;
use crate::aggregator::ResultAggregator;
use crate::core::error::{OrchestrationError, OrchestrationResult};
use crate::core::traits::{OrchestratorConfig, ProgressReporter, WorkItem};
use crate::signal::CancellationSignal;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

/// 並列度上限の下で作業項目の集合を実行するエンジン
///
/// 投入は入力順（FIFO）、完了順は不定。どの時点でも
/// Running状態の項目数が`max_concurrent_tasks()`を超えないことを保証する。
pub struct BoundedExecutor<C, R> {
    config: C,
    reporter: Arc<R>,
}

impl<C, R> BoundedExecutor<C, R>
where
    C: OrchestratorConfig,
    R: ProgressReporter + 'static,
{
    /// 新しい実行エンジンを作成（コンストラクタインジェクション）
    pub fn new(config: C, reporter: Arc<R>) -> Self {
        Self { config, reporter }
    }

    /// 設定への参照を取得（読み取り専用アクセス）
    pub fn config(&self) -> &C {
        &self.config
    }

    /// 全ての作業項目を実行し、終端状態のアグリゲーターを返す
    ///
    /// デフォルト構成では項目単位の失敗は記録されるのみで
    /// 残りの項目の実行は継続される（continue-and-record）。
    /// `stop_on_first_failure`構成では最初の失敗で残りをキャンセルし、
    /// `AggregateFailure`を返す。
    pub async fn run_all<T: Send + Sync + 'static>(
        &self,
        items: Vec<Arc<dyn WorkItem<T>>>,
    ) -> OrchestrationResult<ResultAggregator<T>> {
        self.run_all_with_signal(items, CancellationSignal::new())
            .await
    }

    /// 外部のキャンセルシグナルの下で全ての作業項目を実行する
    ///
    /// シグナルが要求された後は未開始の項目を実行せず`Cancelled`として記録する
    pub async fn run_all_with_signal<T: Send + Sync + 'static>(
        &self,
        items: Vec<Arc<dyn WorkItem<T>>>,
        signal: CancellationSignal,
    ) -> OrchestrationResult<ResultAggregator<T>> {
        let max_concurrent = self.config.max_concurrent_tasks();
        if max_concurrent == 0 {
            return Err(OrchestrationError::configuration(
                "並列タスク数は1以上である必要があります",
            ));
        }
        if self.config.channel_buffer_size() == 0 {
            return Err(OrchestrationError::configuration(
                "チャンネルバッファサイズは1以上である必要があります",
            ));
        }

        let aggregator = ResultAggregator::new();
        let total_items = items.len();
        if total_items == 0 {
            // 空の入力は即座に空のアグリゲーターを返す
            return Ok(aggregator);
        }

        let start_time = Instant::now();
        self.reporter.report_started(total_items).await;

        // Producer-Consumerチャンネル構築
        let (work_tx, work_rx) = mpsc::channel(self.config.channel_buffer_size());
        let (result_tx, result_rx) = mpsc::channel(self.config.channel_buffer_size());

        // 同時実行数の上限はワーカー数とセマフォの両方で保証する
        let semaphore = Arc::new(tokio::sync::Semaphore::new(max_concurrent));

        // Producer起動
        let producer_handle = spawn_producer(items, work_tx);

        // Consumer Pool起動
        let consumer_handles = spawn_consumers(
            work_rx,
            result_tx.clone(),
            semaphore,
            max_concurrent,
            signal.clone(),
            self.config.stop_on_first_failure(),
        );

        // Result Collector起動
        let collector_handle = spawn_result_collector(
            result_rx,
            total_items,
            aggregator.clone(),
            Arc::clone(&self.reporter),
        );

        // Producer完了を待機
        producer_handle.await??;

        // Consumer完了を待機
        for handle in consumer_handles {
            handle.await??;
        }

        // result_txを閉じてCollectorに完了を通知
        drop(result_tx);

        // Collector完了を待機
        let first_failure = collector_handle.await??;

        let summary = aggregator.summary(start_time.elapsed().as_millis() as u64);
        self.reporter
            .report_completed(summary.succeeded, summary.failed, summary.cancelled)
            .await;

        if self.config.stop_on_first_failure() {
            if let Some((item_id, message)) = first_failure {
                return Err(OrchestrationError::aggregate(item_id, message));
            }
        }

        Ok(aggregator)
    }
}
