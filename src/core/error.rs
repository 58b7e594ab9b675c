// Custom error types for task orchestration
// 並行オーケストレーション専用のカスタムエラー型定義

use super::types::WorkItemId;
use thiserror::Error;

/// オーケストレーション固有のエラー型
#[derive(Error, Debug)]
pub enum OrchestrationError {
    #[error("設定エラー: {message}")]
    ConfigurationError { message: String },

    #[error("レースエラー: 競争対象の作業項目がありません")]
    EmptyRace,

    #[error("重複キーエラー: {item_id} は既に記録されています")]
    DuplicateKey { item_id: WorkItemId },

    #[error("作業項目エラー: {item_id} - {message}")]
    ItemFailure {
        item_id: WorkItemId,
        message: String,
    },

    #[error("集約エラー: 最初の失敗で実行を中断しました")]
    AggregateFailure {
        #[source]
        source: Box<OrchestrationError>,
    },

    #[error("チャンネルエラー: {message}")]
    ChannelError { message: String },

    #[error("タスクエラー: {source}")]
    TaskError {
        #[source]
        source: tokio::task::JoinError,
    },
}

impl OrchestrationError {
    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    /// 重複キーエラーの作成
    pub fn duplicate_key(item_id: impl Into<WorkItemId>) -> Self {
        Self::DuplicateKey {
            item_id: item_id.into(),
        }
    }

    /// 作業項目エラーの作成
    pub fn item_failure(item_id: impl Into<WorkItemId>, message: impl Into<String>) -> Self {
        Self::ItemFailure {
            item_id: item_id.into(),
            message: message.into(),
        }
    }

    /// 集約エラーの作成（最初に観測された作業項目エラーをラップする）
    pub fn aggregate(item_id: impl Into<WorkItemId>, message: impl Into<String>) -> Self {
        Self::AggregateFailure {
            source: Box::new(Self::item_failure(item_id, message)),
        }
    }

    /// チャンネルエラーの作成
    pub fn channel(message: impl Into<String>) -> Self {
        Self::ChannelError {
            message: message.into(),
        }
    }

    /// タスクエラーの作成
    pub fn task(source: tokio::task::JoinError) -> Self {
        Self::TaskError { source }
    }

    /// エラーの重要度を取得
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::EmptyRace | Self::DuplicateKey { .. } => ErrorSeverity::Critical,
            Self::ConfigurationError { .. } => ErrorSeverity::High,
            Self::AggregateFailure { .. } => ErrorSeverity::High,
            Self::ItemFailure { .. } => ErrorSeverity::Medium,
            Self::ChannelError { .. } | Self::TaskError { .. } => ErrorSeverity::Medium,
        }
    }

    /// エラーが回復可能かどうかを判定
    pub fn is_recoverable(&self) -> bool {
        match self {
            // プログラマーの誤用は回復不能として即座に失敗させる
            Self::EmptyRace | Self::DuplicateKey { .. } => false,
            Self::ConfigurationError { .. } => false,
            Self::ItemFailure { .. } | Self::AggregateFailure { .. } => true,
            Self::ChannelError { .. } | Self::TaskError { .. } => true,
        }
    }
}

/// エラーの重要度レベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// 低重要度 - ログ出力程度
    Low,
    /// 中重要度 - 警告レベル
    Medium,
    /// 高重要度 - 要対応
    High,
    /// 致命的 - 呼び出し側の修正が必要
    Critical,
}

impl ErrorSeverity {
    /// 重要度の数値表現を取得
    pub const fn as_level(&self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Critical => 4,
        }
    }

    /// 重要度の文字列表現を取得
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// オーケストレーションの結果型
pub type OrchestrationResult<T> = std::result::Result<T, OrchestrationError>;

/// 作業項目の実行中に発生するエラー型
///
/// キャンセルは例外的な制御フローではなく終端状態として扱う。
/// `WorkError::Cancelled`は`Outcome::Cancelled`に変換され、
/// 失敗（`ItemFailure`）とは明確に区別される。
#[derive(Error, Debug)]
pub enum WorkError {
    #[error("キャンセル要求を観測して終了しました")]
    Cancelled,

    #[error(transparent)]
    Failed(#[from] anyhow::Error),
}

impl WorkError {
    /// 失敗エラーの作成
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(anyhow::anyhow!(message.into()))
    }
}

/// 作業項目の結果型
pub type WorkResult<T> = std::result::Result<T, WorkError>;

impl From<tokio::task::JoinError> for OrchestrationError {
    fn from(error: tokio::task::JoinError) -> Self {
        OrchestrationError::TaskError { source: error }
    }
}
