// レース実行 - 最初の勝者のみを採用し残りを協調的にキャンセル

pub mod coordinator;

// 公開API
pub use coordinator::RaceCoordinator;
