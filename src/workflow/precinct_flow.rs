//! 选区处理流程 - 流程层
//!
//! 核心职责：定义"一个选区"的完整处理流程
//!
//! 流程顺序：
//! 1. 请求投票站详情页并提取地址
//! 2. 与选区描述连接成一条记录
//! 3. 写入 CSV
//! 4. 固定节流等待

use std::io::Write;
use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::AppResult;
use crate::infrastructure::LookupClient;
use crate::models::{PrecinctDescriptor, ResolvedRecord};
use crate::services::{PollingPlaceResolver, RecordWriter};

/// 选区处理流程
///
/// - 编排单个选区的 解析 → 写入 → 节流
/// - 不持有任何资源（client / writer 由编排层传入）
pub struct PrecinctFlow {
    resolver: PollingPlaceResolver,
    throttle: Duration,
}

impl PrecinctFlow {
    pub fn new(config: &Config) -> Self {
        Self {
            resolver: PollingPlaceResolver::new(
                config.polling_place_url.clone(),
                config.validate_addresses,
            ),
            throttle: config.throttle_delay(),
        }
    }

    pub async fn run<W: Write>(
        &self,
        client: &LookupClient,
        writer: &mut RecordWriter<W>,
        descriptor: PrecinctDescriptor,
    ) -> AppResult<()> {
        debug!("{} 🔍 查询投票站地址...", descriptor);

        let address = self
            .resolver
            .resolve(client, descriptor.county_id, descriptor.polling_place_id)
            .await?;

        info!(
            "{} ✓ {} | {}",
            descriptor, descriptor.polling_place_name, address
        );

        let record = ResolvedRecord::new(descriptor, address);
        writer.write(&record)?;

        // 每个成功解析的选区之后固定等待，避免触发站点限流
        sleep(self.throttle).await;

        Ok(())
    }
}
