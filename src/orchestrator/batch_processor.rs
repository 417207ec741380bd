//! 全州处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责资源管理和县循环。
//!
//! 1. **应用初始化**：创建 HTTP 客户端、打开（截断）输出文件
//! 2. **县循环**：严格按 1..=county_count 顺序逐县处理，不跳号不重复
//! 3. **资源管理**：唯一持有 LookupClient 和 RecordWriter；
//!    `run` 消耗 App，无论成功还是出错 writer 都会被 drop 并 flush
//! 4. **全局统计**：汇总写入行数

use std::time::Instant;

use tracing::info;

use crate::config::Config;
use crate::error::AppResult;
use crate::infrastructure::LookupClient;
use crate::orchestrator::county_processor::process_county;
use crate::services::{PrecinctEnumerator, RecordWriter};
use crate::utils::logging;
use crate::workflow::PrecinctFlow;

/// 整次运行的统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub counties_processed: u32,
    pub precincts_written: usize,
    pub placeholders_skipped: usize,
}

/// 应用主结构
pub struct App {
    config: Config,
    client: LookupClient,
    writer: RecordWriter,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> AppResult<Self> {
        config.validate()?;
        logging::log_startup(&config);

        let client = LookupClient::new(&config)?;
        let writer = RecordWriter::create(config.output_path.clone())?;

        Ok(Self {
            config,
            client,
            writer,
        })
    }

    /// 运行主逻辑
    pub async fn run(mut self) -> AppResult<RunSummary> {
        let started = Instant::now();

        let enumerator = PrecinctEnumerator::new(
            self.config.precinct_list_url.clone(),
            self.config.county_count,
        );
        let flow = PrecinctFlow::new(&self.config);

        let mut summary = RunSummary::default();

        for county_id in 1..=self.config.county_count {
            let stats = process_county(
                &self.client,
                &enumerator,
                &flow,
                &mut self.writer,
                county_id,
            )
            .await?;

            summary.counties_processed += 1;
            summary.precincts_written += stats.written;
            summary.placeholders_skipped += stats.placeholders;
        }

        info!("共写入 {} 行", self.writer.rows_written());
        logging::print_final_stats(&summary, self.writer.path(), started.elapsed());

        Ok(summary)
    }
}
