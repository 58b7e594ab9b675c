// 作業項目アダプター

pub mod implementations;

// 公開API
pub use implementations::ClosureWorkItem;
