// 統合テスト用の共有フィクスチャ
#![allow(dead_code)]

pub mod mocks;

pub use mocks::{DelayItem, FailingItem, GaugeItem, NonCooperativeItem, OrderItem, StateBoard};
