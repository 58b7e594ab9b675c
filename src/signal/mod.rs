// CancellationSignal - 協調的キャンセルの共有フラグ

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// 協調的キャンセルを要求する一方向フラグ
///
/// 「未要求」から「要求済み」へ一度だけ遷移し、戻ることはない。
/// クローンされた全てのハンドルが同じフラグを共有する。
/// あるオブザーバーが「要求済み」を観測した後、別のオブザーバーが
/// 古い「未要求」を観測することはない（SeqCstによる即時一貫性）。
#[derive(Debug, Clone, Default)]
pub struct CancellationSignal {
    requested: Arc<AtomicBool>,
}

impl CancellationSignal {
    /// 新しいシグナルを作成（初期状態は「未要求」）
    pub fn new() -> Self {
        Self::default()
    }

    /// キャンセルを要求する
    ///
    /// 冪等であり、複数回・並行に呼び出しても安全
    pub fn request_cancellation(&self) {
        self.requested.store(true, Ordering::SeqCst);
    }

    /// キャンセルが要求されたかどうかを確認する
    ///
    /// 作業項目は自身が制御する全ての中断点でこれを確認する契約を負う
    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }
}
