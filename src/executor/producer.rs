// Producer - 作業項目の投入機能

use crate::core::error::OrchestrationResult;
use crate::core::traits::WorkItem;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Producer: 作業項目を入力順（FIFO）に配信
pub fn spawn_producer<T: Send + Sync + 'static>(
    items: Vec<Arc<dyn WorkItem<T>>>,
    work_tx: mpsc::Sender<Arc<dyn WorkItem<T>>>,
) -> tokio::task::JoinHandle<OrchestrationResult<()>> {
    tokio::spawn(async move {
        for item in items {
            if (work_tx.send(item).await).is_err() {
                // チャンネルが閉じられた場合は正常終了
                break;
            }
        }
        // work_txをドロップしてチャンネル終了シグナル
        Ok(())
    })
}
