// 進捗監視の具象実装

use crate::core::ProgressReporter;
use async_trait::async_trait;

/// コンソール出力による進捗報告実装
#[derive(Debug, Default, Clone)]
pub struct ConsoleProgressReporter {
    quiet: bool,
}

impl ConsoleProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

#[async_trait]
impl ProgressReporter for ConsoleProgressReporter {
    async fn report_started(&self, total_items: usize) {
        if !self.quiet {
            println!("🚀 Starting {total_items} work items...");
        }
    }

    async fn report_progress(&self, completed: usize, total: usize) {
        if !self.quiet && (completed % 10 == 0 || completed == total) {
            let percentage = (completed as f64 / total as f64) * 100.0;
            println!("📊 Progress: {completed}/{total} ({percentage:.1}%)");
        }
    }

    async fn report_item_failed(&self, item_id: &str, error: &str) {
        if !self.quiet {
            eprintln!("❌ Item {item_id} failed: {error}");
        }
    }

    async fn report_item_cancelled(&self, item_id: &str) {
        if !self.quiet {
            println!("🚫 Item {item_id} was cancelled");
        }
    }

    async fn report_race_settled(&self, winner_id: &str) {
        if !self.quiet {
            println!("🏁 Race settled, winner: {winner_id}");
        }
    }

    async fn report_completed(&self, succeeded: usize, failed: usize, cancelled: usize) {
        if !self.quiet {
            println!(
                "✅ Completed! Succeeded: {succeeded}, Failed: {failed}, Cancelled: {cancelled}"
            );
        }
    }
}

/// 何もしない進捗報告実装（テスト・ベンチマーク用）
#[derive(Debug, Default, Clone)]
pub struct NoOpProgressReporter;

impl NoOpProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProgressReporter for NoOpProgressReporter {
    async fn report_started(&self, _total_items: usize) {
        // 何もしない
    }

    async fn report_progress(&self, _completed: usize, _total: usize) {
        // 何もしない
    }

    async fn report_item_failed(&self, _item_id: &str, _error: &str) {
        // 何もしない
    }

    async fn report_item_cancelled(&self, _item_id: &str) {
        // 何もしない
    }

    async fn report_race_settled(&self, _winner_id: &str) {
        // 何もしない
    }

    async fn report_completed(&self, _succeeded: usize, _failed: usize, _cancelled: usize) {
        // 何もしない
    }
}
