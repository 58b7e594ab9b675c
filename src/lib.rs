pub mod aggregator;
pub mod core;
pub mod executor;
pub mod race;
pub mod services;
pub mod signal;

use crate::core::error::OrchestrationResult;
use crate::core::traits::{OrchestratorConfig, ProgressReporter, WorkItem};
use crate::core::types::WorkItemId;
use executor::BoundedExecutor;
use race::RaceCoordinator;
use services::{ConsoleProgressReporter, DefaultOrchestratorConfig, NoOpProgressReporter};
use std::sync::Arc;

pub use crate::core::error::{OrchestrationError, WorkError, WorkResult};
pub use crate::core::types::{Outcome, RunSummary};
pub use aggregator::ResultAggregator;
pub use services::ClosureWorkItem;
pub use signal::CancellationSignal;

// エントリーポイントの役割を果たすジェネリックなオーケストレーター
// 設定と報告先を直接所有し、必要に応じてArc<Orchestrator>で共有する設計
pub struct Orchestrator<C, R>
where
    C: OrchestratorConfig,
    R: ProgressReporter + 'static,
{
    executor: BoundedExecutor<C, R>,
    coordinator: RaceCoordinator<R>,
}

impl<C, R> Orchestrator<C, R>
where
    C: OrchestratorConfig,
    R: ProgressReporter + 'static,
{
    /// 新しいオーケストレーターを作成（コンストラクタインジェクション）
    pub fn new(config: C, reporter: R) -> Self {
        let reporter = Arc::new(reporter);
        Self {
            executor: BoundedExecutor::new(config, Arc::clone(&reporter)),
            coordinator: RaceCoordinator::new(reporter),
        }
    }

    /// 設定への参照を取得（読み取り専用アクセス）
    pub fn config(&self) -> &C {
        self.executor.config()
    }

    /// 全ての作業項目を並列度上限の下で実行する
    pub async fn run_all<T: Send + Sync + 'static>(
        &self,
        items: Vec<Arc<dyn WorkItem<T>>>,
    ) -> OrchestrationResult<ResultAggregator<T>> {
        self.executor.run_all(items).await
    }

    /// 外部のキャンセルシグナルの下で全ての作業項目を実行する
    pub async fn run_all_with_signal<T: Send + Sync + 'static>(
        &self,
        items: Vec<Arc<dyn WorkItem<T>>>,
        signal: CancellationSignal,
    ) -> OrchestrationResult<ResultAggregator<T>> {
        self.executor.run_all_with_signal(items, signal).await
    }

    /// 作業項目を競争させ、最初の完了のみを採用する
    pub async fn race<T: Send + Sync + 'static>(
        &self,
        items: Vec<Arc<dyn WorkItem<T>>>,
    ) -> OrchestrationResult<(WorkItemId, Outcome<T>)> {
        self.coordinator.race(items).await
    }
}

impl Orchestrator<DefaultOrchestratorConfig, ConsoleProgressReporter> {
    /// デフォルト設定のオーケストレーターを作成（コンソール報告付き）
    pub fn with_defaults() -> Self {
        Self::new(
            DefaultOrchestratorConfig::default(),
            ConsoleProgressReporter::new(),
        )
    }
}

impl Orchestrator<DefaultOrchestratorConfig, NoOpProgressReporter> {
    /// 静音版のオーケストレーターを作成（バックグラウンド処理用）
    pub fn quiet() -> Self {
        Self::new(
            DefaultOrchestratorConfig::default(),
            NoOpProgressReporter::new(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::OrchestratorConfig;

    #[test]
    fn test_with_defaults_uses_cpu_based_concurrency() {
        let orchestrator = Orchestrator::with_defaults();

        assert_eq!(
            orchestrator.config().max_concurrent_tasks(),
            num_cpus::get().max(1) * 2
        );
        assert!(orchestrator.config().enable_progress_reporting());
    }

    #[tokio::test]
    async fn test_quiet_orchestrator_run_all_empty() {
        let orchestrator = Orchestrator::quiet();
        let items: Vec<Arc<dyn WorkItem<String>>> = vec![];

        let aggregator = orchestrator.run_all(items).await.unwrap();

        assert!(aggregator.is_empty());
    }

    #[tokio::test]
    async fn test_orchestrator_run_all_with_closures() {
        let orchestrator = Orchestrator::new(
            DefaultOrchestratorConfig::default().with_max_concurrent(2),
            NoOpProgressReporter::new(),
        );

        let items: Vec<Arc<dyn WorkItem<u32>>> = vec![
            Arc::new(ClosureWorkItem::new("a", |_signal| async { Ok(1u32) })),
            Arc::new(ClosureWorkItem::new("b", |_signal| async { Ok(2u32) })),
        ];

        let aggregator = orchestrator.run_all(items).await.unwrap();

        let snapshot = aggregator.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot["a"], Outcome::Success { value: 1 });
        assert_eq!(snapshot["b"], Outcome::Success { value: 2 });
    }

    #[tokio::test]
    async fn test_orchestrator_race_with_closures() {
        let orchestrator = Orchestrator::quiet();

        let items: Vec<Arc<dyn WorkItem<&'static str>>> = vec![Arc::new(ClosureWorkItem::new(
            "only",
            |_signal| async { Ok("勝者") },
        ))];

        let (winner_id, outcome) = orchestrator.race(items).await.unwrap();

        assert_eq!(winner_id, "only");
        assert_eq!(outcome, Outcome::Success { value: "勝者" });
    }

    #[tokio::test]
    async fn test_orchestrator_race_empty_fails() {
        let orchestrator = Orchestrator::quiet();
        let items: Vec<Arc<dyn WorkItem<String>>> = vec![];

        let result = orchestrator.race(items).await;
        assert!(matches!(result, Err(OrchestrationError::EmptyRace)));
    }
}
