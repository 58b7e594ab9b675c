// テスト用の作業項目実装
// 遅延・失敗・非協調などの振る舞いを再現する

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use task_orchestrator::core::traits::WorkItem;
use task_orchestrator::core::types::WorkItemId;
use task_orchestrator::{CancellationSignal, WorkError, WorkResult};

/// 作業項目が到達した終端状態を記録する共有ボード
#[derive(Debug, Clone, Default)]
pub struct StateBoard {
    states: Arc<Mutex<HashMap<String, &'static str>>>,
}

impl StateBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, item_id: &str, state: &'static str) {
        self.states
            .lock()
            .unwrap()
            .insert(item_id.to_string(), state);
    }

    pub fn get(&self, item_id: &str) -> Option<&'static str> {
        self.states.lock().unwrap().get(item_id).copied()
    }

    /// 終端状態に到達した項目数
    pub fn terminal_count(&self) -> usize {
        self.states.lock().unwrap().len()
    }
}

/// 協調的な遅延項目
///
/// 模擬遅延の間、中断点ごとにキャンセルシグナルを監視する
pub struct DelayItem {
    id: String,
    delay: Duration,
    board: StateBoard,
}

impl DelayItem {
    pub fn new(id: impl Into<String>, delay_ms: u64, board: StateBoard) -> Self {
        Self {
            id: id.into(),
            delay: Duration::from_millis(delay_ms),
            board,
        }
    }
}

#[async_trait]
impl WorkItem<String> for DelayItem {
    fn id(&self) -> WorkItemId {
        self.id.clone()
    }

    async fn run(&self, signal: CancellationSignal) -> WorkResult<String> {
        let started = Instant::now();
        while started.elapsed() < self.delay {
            if signal.is_requested() {
                self.board.set(&self.id, "cancelled");
                return Err(WorkError::Cancelled);
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        self.board.set(&self.id, "completed");
        Ok(format!("{} 完了", self.id))
    }
}

/// 即座に失敗する項目
pub struct FailingItem {
    id: String,
    message: String,
    board: StateBoard,
}

impl FailingItem {
    pub fn new(id: impl Into<String>, message: impl Into<String>, board: StateBoard) -> Self {
        Self {
            id: id.into(),
            message: message.into(),
            board,
        }
    }
}

#[async_trait]
impl WorkItem<String> for FailingItem {
    fn id(&self) -> WorkItemId {
        self.id.clone()
    }

    async fn run(&self, _signal: CancellationSignal) -> WorkResult<String> {
        self.board.set(&self.id, "failed");
        Err(WorkError::failed(self.message.clone()))
    }
}

/// キャンセルシグナルを無視して完走する非協調的な項目
pub struct NonCooperativeItem {
    id: String,
    delay: Duration,
    board: StateBoard,
}

impl NonCooperativeItem {
    pub fn new(id: impl Into<String>, delay_ms: u64, board: StateBoard) -> Self {
        Self {
            id: id.into(),
            delay: Duration::from_millis(delay_ms),
            board,
        }
    }
}

#[async_trait]
impl WorkItem<String> for NonCooperativeItem {
    fn id(&self) -> WorkItemId {
        self.id.clone()
    }

    async fn run(&self, _signal: CancellationSignal) -> WorkResult<String> {
        tokio::time::sleep(self.delay).await;
        self.board.set(&self.id, "completed");
        Ok(format!("{} 完了", self.id))
    }
}

/// 同時実行数を計測する項目
///
/// 実行中の項目数をカウンターで追跡し、観測された最大値を記録する
pub struct GaugeItem {
    id: String,
    running: Arc<AtomicUsize>,
    max_running: Arc<AtomicUsize>,
}

impl GaugeItem {
    pub fn new(
        id: impl Into<String>,
        running: Arc<AtomicUsize>,
        max_running: Arc<AtomicUsize>,
    ) -> Self {
        Self {
            id: id.into(),
            running,
            max_running,
        }
    }
}

#[async_trait]
impl WorkItem<String> for GaugeItem {
    fn id(&self) -> WorkItemId {
        self.id.clone()
    }

    async fn run(&self, _signal: CancellationSignal) -> WorkResult<String> {
        let current = self.running.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_running.fetch_max(current, Ordering::SeqCst);

        tokio::time::sleep(Duration::from_millis(20)).await;

        self.running.fetch_sub(1, Ordering::SeqCst);
        Ok(self.id.clone())
    }
}

/// 実行開始順を記録する項目
pub struct OrderItem {
    id: String,
    order: Arc<Mutex<Vec<String>>>,
}

impl OrderItem {
    pub fn new(id: impl Into<String>, order: Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            id: id.into(),
            order,
        }
    }
}

#[async_trait]
impl WorkItem<String> for OrderItem {
    fn id(&self) -> WorkItemId {
        self.id.clone()
    }

    async fn run(&self, _signal: CancellationSignal) -> WorkResult<String> {
        self.order.lock().unwrap().push(self.id.clone());
        tokio::task::yield_now().await;
        Ok(self.id.clone())
    }
}
