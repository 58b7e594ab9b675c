// 設定管理の具象実装

use crate::core::OrchestratorConfig;

/// デフォルト設定実装
#[derive(Debug, Clone)]
pub struct DefaultOrchestratorConfig {
    max_concurrent: usize,
    buffer_size: usize,
    stop_on_first_failure: bool,
    enable_progress: bool,
}

impl DefaultOrchestratorConfig {
    pub fn new(cpu_count: usize) -> Self {
        Self {
            max_concurrent: cpu_count.max(1) * 2,
            buffer_size: 100,
            stop_on_first_failure: false,
            enable_progress: true,
        }
    }

    pub fn with_max_concurrent(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent;
        self
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    pub fn with_stop_on_first_failure(mut self, stop: bool) -> Self {
        self.stop_on_first_failure = stop;
        self
    }

    pub fn with_progress_reporting(mut self, enable: bool) -> Self {
        self.enable_progress = enable;
        self
    }
}

impl Default for DefaultOrchestratorConfig {
    fn default() -> Self {
        Self {
            max_concurrent: num_cpus::get().max(1) * 2,
            buffer_size: 100,
            stop_on_first_failure: false,
            enable_progress: true,
        }
    }
}

impl OrchestratorConfig for DefaultOrchestratorConfig {
    fn max_concurrent_tasks(&self) -> usize {
        self.max_concurrent
    }

    fn channel_buffer_size(&self) -> usize {
        self.buffer_size
    }

    fn stop_on_first_failure(&self) -> bool {
        self.stop_on_first_failure
    }

    fn enable_progress_reporting(&self) -> bool {
        self.enable_progress
    }
}
