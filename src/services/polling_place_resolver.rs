//! 投票站地址解析服务 - 业务能力层
//!
//! 只负责"拿到一个投票站的地址"，不关心流程

use crate::error::{AppError, AppResult};
use crate::infrastructure::LookupClient;
use crate::services::address::{extract_address, validate_address};
use crate::utils::logging::truncate_text;
use tracing::debug;

/// 投票站地址解析服务
///
/// 每次调用恰好请求一次详情页，不缓存页面。
pub struct PollingPlaceResolver {
    detail_url: String,
    validate_addresses: bool,
}

impl PollingPlaceResolver {
    pub fn new(detail_url: impl Into<String>, validate_addresses: bool) -> Self {
        Self {
            detail_url: detail_url.into(),
            validate_addresses,
        }
    }

    /// 解析 (county_id, polling_place_id) 对应的投票站地址
    pub async fn resolve(
        &self,
        client: &LookupClient,
        county_id: u32,
        polling_place_id: u32,
    ) -> AppResult<String> {
        let page = client
            .get_with_query(
                &self.detail_url,
                &[
                    ("CountyID", county_id.to_string()),
                    ("PollingPlaceID", polling_place_id.to_string()),
                ],
            )
            .await?;

        let address = extract_address(&page).map_err(|e| {
            debug!("页面片段: {}", truncate_text(&page, 300));
            AppError::structure(county_id, polling_place_id, e)
        })?;

        if self.validate_addresses {
            validate_address(&address)
                .map_err(|e| AppError::structure(county_id, polling_place_id, e))?;
        }

        Ok(address)
    }
}
