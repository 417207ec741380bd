//! 单个县处理器 - 编排层
//!
//! ## 职责
//!
//! 处理一个县的全部选区，是县级别的编排器。
//!
//! 1. **枚举选区**：一次请求拿到本县选区列表（已去掉占位项）
//! 2. **逐个处理**：按接口返回顺序把每个选区交给 `PrecinctFlow`
//! 3. **统计输出**：记录写入行数与丢弃的占位项数
//!
//! 任何错误都直接向上返回，不做单县隔离。

use std::io::Write;

use tracing::info;

use crate::error::AppResult;
use crate::infrastructure::LookupClient;
use crate::services::{PrecinctEnumerator, RecordWriter};
use crate::workflow::PrecinctFlow;

/// 单县统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CountyStats {
    pub written: usize,
    pub placeholders: usize,
}

/// 处理单个县
pub async fn process_county<W: Write>(
    client: &LookupClient,
    enumerator: &PrecinctEnumerator,
    flow: &PrecinctFlow,
    writer: &mut RecordWriter<W>,
    county_id: u32,
) -> AppResult<CountyStats> {
    let county = enumerator.enumerate(client, county_id).await?;
    let total = county.precincts.len();

    log_county_start(county_id, total, county.placeholders);

    let mut stats = CountyStats {
        placeholders: county.placeholders,
        ..Default::default()
    };

    for (index, descriptor) in county.precincts.into_iter().enumerate() {
        info!("[县 {}] 处理第 {}/{} 个选区", county_id, index + 1, total);
        flow.run(client, writer, descriptor).await?;
        stats.written += 1;
    }

    log_county_complete(county_id, &stats);

    Ok(stats)
}

// ========== 日志辅助函数 ==========

fn log_county_start(county_id: u32, total: usize, placeholders: usize) {
    info!("\n[县 {}] {}", county_id, "─".repeat(30));
    info!(
        "[县 {}] 找到 {} 个选区 (丢弃占位项 {} 个)",
        county_id, total, placeholders
    );
}

fn log_county_complete(county_id: u32, stats: &CountyStats) {
    info!("[县 {}] ✅ 完成，写入 {} 行", county_id, stats.written);
}
