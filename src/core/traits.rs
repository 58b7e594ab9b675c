// オーケストレーションシステムのトレイト定義
// 全ての抽象化インターフェースを定義

use super::error::WorkResult;
use super::types::WorkItemId;
use crate::signal::CancellationSignal;
use async_trait::async_trait;
use mockall::automock;

/// 作業単位の抽象化トレイト
///
/// 実行は中断点（await）を持ってよく、キャンセルシグナルを
/// 自身が制御する全ての中断点で監視する契約を負う。
/// キャンセルを観測した場合は`WorkError::Cancelled`で速やかに終了する。
/// シグナルは強制的な中断手段ではなく、協調のための契約である。
#[automock]
#[async_trait]
pub trait WorkItem<T: Send + Sync + 'static>: Send + Sync {
    /// 作業項目の識別子を取得
    fn id(&self) -> WorkItemId;

    /// 作業を実行する（各項目につき一度だけ呼ばれる）
    async fn run(&self, signal: CancellationSignal) -> WorkResult<T>;
}

/// オーケストレーションの設定を抽象化するトレイト
#[automock]
pub trait OrchestratorConfig: Send + Sync {
    /// 最大同時実行タスク数を取得
    fn max_concurrent_tasks(&self) -> usize;

    /// チャンネルバッファサイズを取得
    fn channel_buffer_size(&self) -> usize;

    /// 最初の失敗で残りの実行を中断するかどうか
    fn stop_on_first_failure(&self) -> bool;

    /// 進捗報告を有効にするかどうか
    fn enable_progress_reporting(&self) -> bool;
}

// OrchestratorConfig for Box<dyn OrchestratorConfig>
impl OrchestratorConfig for Box<dyn OrchestratorConfig> {
    fn max_concurrent_tasks(&self) -> usize {
        self.as_ref().max_concurrent_tasks()
    }

    fn channel_buffer_size(&self) -> usize {
        self.as_ref().channel_buffer_size()
    }

    fn stop_on_first_failure(&self) -> bool {
        self.as_ref().stop_on_first_failure()
    }

    fn enable_progress_reporting(&self) -> bool {
        self.as_ref().enable_progress_reporting()
    }
}

/// 進捗報告の抽象化トレイト
///
/// レースで敗者の失敗を握り潰さず観測可能にする診断チャンネルを兼ねる
#[automock]
#[async_trait]
pub trait ProgressReporter: Send + Sync {
    /// 処理開始時の報告
    async fn report_started(&self, total_items: usize);

    /// 進捗更新の報告
    async fn report_progress(&self, completed: usize, total: usize);

    /// 作業項目の失敗報告
    async fn report_item_failed(&self, item_id: &str, error: &str);

    /// 作業項目のキャンセル報告
    async fn report_item_cancelled(&self, item_id: &str);

    /// レースの勝者決定報告
    async fn report_race_settled(&self, winner_id: &str);

    /// 処理完了時の報告
    async fn report_completed(&self, succeeded: usize, failed: usize, cancelled: usize);
}

// ProgressReporter for Box<dyn ProgressReporter>
#[async_trait]
impl ProgressReporter for Box<dyn ProgressReporter> {
    async fn report_started(&self, total_items: usize) {
        self.as_ref().report_started(total_items).await
    }

    async fn report_progress(&self, completed: usize, total: usize) {
        self.as_ref().report_progress(completed, total).await
    }

    async fn report_item_failed(&self, item_id: &str, error: &str) {
        self.as_ref().report_item_failed(item_id, error).await
    }

    async fn report_item_cancelled(&self, item_id: &str) {
        self.as_ref().report_item_cancelled(item_id).await
    }

    async fn report_race_settled(&self, winner_id: &str) {
        self.as_ref().report_race_settled(winner_id).await
    }

    async fn report_completed(&self, succeeded: usize, failed: usize, cancelled: usize) {
        self.as_ref()
            .report_completed(succeeded, failed, cancelled)
            .await
    }
}
