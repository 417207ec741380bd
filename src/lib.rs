//! # NC Polling Places
//!
//! 逐县抓取北卡各选区及其投票站地址，输出为一张扁平 CSV 表
//!
//! ## 架构设计
//!
//! 与题目提交工具相同的四层架构，全程单线程顺序执行：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `LookupClient` - 唯一的 HTTP client owner，只提供"发请求拿响应体"能力
//!
//! ### ② 业务能力层（Services）
//! - `PrecinctEnumerator` - 列出一个县的选区（去掉占位项）
//! - `PollingPlaceResolver` - 请求详情页并提取投票站地址
//! - `RecordWriter` - 写 CSV 能力
//!
//! ### ③ 流程层（Workflow）
//! - `PrecinctFlow` - 单个选区：解析 → 写入 → 节流
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator::county_processor` - 单个县
//! - `orchestrator::batch_processor` - 县 1..=N，持有资源并汇总统计
//!
//! 任何错误都是致命的，已写入的行保留在输出文件中。

pub mod config;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::LookupClient;
pub use models::{PrecinctDescriptor, ResolvedRecord};
pub use orchestrator::{App, RunSummary};
pub use workflow::PrecinctFlow;
