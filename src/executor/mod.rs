// 有界並列実行 - Producer/Consumer/Collectorパイプライン

pub mod collector;
pub mod consumer;
pub mod engine;
pub mod producer;

// 公開API
pub use collector::spawn_result_collector;
pub use consumer::{spawn_consumers, spawn_single_consumer};
pub use engine::BoundedExecutor;
pub use producer::spawn_producer;
