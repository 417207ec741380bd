//! 日志工具模块
//!
//! 提供日志初始化和格式化输出的辅助函数
use crate::config::Config;
use crate::orchestrator::RunSummary;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化 tracing 订阅者
///
/// 默认级别 info，可通过 `RUST_LOG` 覆盖。重复调用无副作用。
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 投票站地址抓取");
    info!("🗺️ 县数量: {}", config.county_count);
    info!("📄 输出文件: {}", config.output_path);
    info!(
        "⏱️ 限速: 每秒 {} 个请求 (间隔 {:?})",
        config.requests_per_second,
        config.throttle_delay()
    );
    if config.max_retries > 0 {
        info!("🔁 最大重试次数: {}", config.max_retries);
    }
    if config.validate_addresses {
        info!("🔎 已启用地址校验");
    }
    info!("{}", "=".repeat(60));
}

/// 打印最终统计信息
pub fn print_final_stats(summary: &RunSummary, output_path: &str, elapsed: Duration) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("耗时: {:.1} 秒", elapsed.as_secs_f64());
    info!("{}", "=".repeat(60));
    info!("🗺️ 已处理县: {}", summary.counties_processed);
    info!("✅ 写入选区: {}", summary.precincts_written);
    info!("🚫 丢弃占位项: {}", summary.placeholders_skipped);
    info!("{}", "=".repeat(60));
    info!("\n结果已保存至: {}", output_path);
}

/// 截断长文本用于日志显示
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
