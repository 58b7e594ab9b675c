// ResultAggregator - 並行ワーカーが共有する結果収集構造

use crate::core::error::{OrchestrationError, OrchestrationResult};
use crate::core::types::{Outcome, RunSummary, WorkItemId};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// 作業項目の識別子から終端状態への追記専用マッピング
///
/// 複数のワーカーから並行に書き込まれる唯一の共有可変構造。
/// キー単位で線形化可能であり、同じ識別子への記録は一度しか成功しない。
/// クローンされたハンドルは同じ内部マップを共有する。
#[derive(Debug, Default)]
pub struct ResultAggregator<T> {
    outcomes: Arc<Mutex<HashMap<WorkItemId, Outcome<T>>>>,
}

impl<T> Clone for ResultAggregator<T> {
    fn clone(&self) -> Self {
        Self {
            outcomes: Arc::clone(&self.outcomes),
        }
    }
}

impl<T> ResultAggregator<T> {
    /// 空のアグリゲーターを作成
    pub fn new() -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// 作業項目の終端状態を記録する
    ///
    /// 同じ識別子が二度記録された場合は`DuplicateKey`で失敗する。
    /// これは実行時に想定される状況ではなく呼び出し側の誤用シグナル。
    pub fn record(
        &self,
        item_id: impl Into<WorkItemId>,
        outcome: Outcome<T>,
    ) -> OrchestrationResult<()> {
        let item_id = item_id.into();
        let mut outcomes = self.outcomes.lock().unwrap();
        match outcomes.entry(item_id) {
            Entry::Occupied(entry) => Err(OrchestrationError::duplicate_key(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(outcome);
                Ok(())
            }
        }
    }

    /// 記録された項目数を取得
    pub fn len(&self) -> usize {
        self.outcomes.lock().unwrap().len()
    }

    /// 記録が空かどうか
    pub fn is_empty(&self) -> bool {
        self.outcomes.lock().unwrap().is_empty()
    }

    /// 指定した識別子が記録済みかどうか
    pub fn contains(&self, item_id: &str) -> bool {
        self.outcomes.lock().unwrap().contains_key(item_id)
    }

    /// 記録済みの終端状態からサマリーを作成
    pub fn summary(&self, total_time_ms: u64) -> RunSummary {
        let outcomes = self.outcomes.lock().unwrap();
        let mut succeeded = 0;
        let mut failed = 0;
        let mut cancelled = 0;
        for outcome in outcomes.values() {
            match outcome {
                Outcome::Success { .. } => succeeded += 1,
                Outcome::Failure { .. } => failed += 1,
                Outcome::Cancelled => cancelled += 1,
            }
        }
        RunSummary {
            total_items: outcomes.len(),
            succeeded,
            failed,
            cancelled,
            total_time_ms,
        }
    }
}

impl<T: Clone> ResultAggregator<T> {
    /// 指定した識別子の終端状態を取得
    pub fn get(&self, item_id: &str) -> Option<Outcome<T>> {
        self.outcomes.lock().unwrap().get(item_id).cloned()
    }

    /// 呼び出し時点までに完了した全記録の一貫したビューを取得
    ///
    /// 部分的なエントリは含まれない（ロック下でのコピー）
    pub fn snapshot(&self) -> HashMap<WorkItemId, Outcome<T>> {
        self.outcomes.lock().unwrap().clone()
    }
}
