// オーケストレーションに関連するデータ型定義

use serde::{Deserialize, Serialize};

/// 作業項目の識別子（呼び出し側が付与する不透明なキー）
pub type WorkItemId = String;

/// 作業項目の終端状態
///
/// 一度記録された`Outcome`は上書きされない
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Outcome<T> {
    /// 正常完了（生成された値を保持）
    Success { value: T },
    /// 失敗（失敗理由を保持）
    Failure { error: String },
    /// 協調的キャンセルによる終了（エラーではない）
    Cancelled,
}

impl<T> Outcome<T> {
    /// 正常完了かどうか
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// 失敗かどうか
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }

    /// キャンセルされたかどうか
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// 実行全体のサマリー
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub total_items: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub cancelled: usize,
    pub total_time_ms: u64,
}
