// 作業項目の具象実装

use crate::core::error::WorkResult;
use crate::core::traits::WorkItem;
use crate::core::types::WorkItemId;
use crate::signal::CancellationSignal;
use async_trait::async_trait;
use std::future::Future;

/// 非同期クロージャーを作業項目として扱うアダプター
///
/// クロージャーは渡されたシグナルを自身の中断点で監視する契約を引き継ぐ
pub struct ClosureWorkItem<F> {
    id: WorkItemId,
    operation: F,
}

impl<F> ClosureWorkItem<F> {
    pub fn new(id: impl Into<WorkItemId>, operation: F) -> Self {
        Self {
            id: id.into(),
            operation,
        }
    }
}

#[async_trait]
impl<T, F, Fut> WorkItem<T> for ClosureWorkItem<F>
where
    T: Send + Sync + 'static,
    F: Fn(CancellationSignal) -> Fut + Send + Sync,
    Fut: Future<Output = WorkResult<T>> + Send,
{
    fn id(&self) -> WorkItemId {
        self.id.clone()
    }

    async fn run(&self, signal: CancellationSignal) -> WorkResult<T> {
        (self.operation)(signal).await
    }
}
