//! 日志基础设施

use tracing_subscriber::EnvFilter;

pub struct Logger;

impl Logger {
    /// 优先使用 `RUST_LOG`，否则使用配置中的级别
    pub fn init(level: &str) {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        // 测试中可能重复初始化，忽略已设置的全局订阅者
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }
}
