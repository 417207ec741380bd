//! 编排层（Orchestration Layer）
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 1..=county_count)
//!     ↓
//! county_processor (处理一个县的 Vec<PrecinctDescriptor>)
//!     ↓
//! workflow::PrecinctFlow (处理单个选区)
//!     ↓
//! services (能力层：enumerate / resolve / write)
//!     ↓
//! infrastructure (基础设施：LookupClient)
//! ```
//!
//! 编排层只做调度和统计，不做具体业务判断。

pub mod batch_processor;
pub mod county_processor;

pub use batch_processor::{App, RunSummary};
pub use county_processor::{process_county, CountyStats};
