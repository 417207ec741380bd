//! 查询站点客户端 - 基础设施层
//!
//! 持有唯一的 HTTP 客户端，只暴露"发请求、拿响应体"的能力

use crate::config::Config;
use crate::error::{AppError, AppResult, TransportError};
use reqwest::{Client, RequestBuilder};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("nc_polling_places/", env!("CARGO_PKG_VERSION"));

/// 查询站点客户端
///
/// 职责：
/// - 持有唯一的 reqwest Client
/// - 检查响应状态，非 2xx 视为传输错误
/// - 按配置对可重试的传输错误做有限次退避重试
/// - 不认识选区 / 投票站，不解析响应内容
pub struct LookupClient {
    client: Client,
    max_retries: u32,
    retry_backoff: Duration,
}

impl LookupClient {
    /// 根据配置创建客户端
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.request_timeout())
            .build()
            .map_err(TransportError::ClientBuildFailed)?;

        Ok(Self {
            client,
            max_retries: config.max_retries,
            retry_backoff: config.retry_backoff(),
        })
    }

    /// 以表单方式 POST，返回响应体文本
    pub async fn post_form(&self, url: &str, form: &[(&str, String)]) -> AppResult<String> {
        self.execute(url, || self.client.post(url).form(form)).await
    }

    /// 带查询参数 GET，返回响应体文本
    pub async fn get_with_query(&self, url: &str, query: &[(&str, String)]) -> AppResult<String> {
        self.execute(url, || self.client.get(url).query(query)).await
    }

    async fn execute<F>(&self, url: &str, build: F) -> AppResult<String>
    where
        F: Fn() -> RequestBuilder,
    {
        let mut attempt = 0;
        loop {
            match self.send_once(url, build()).await {
                Ok(body) => return Ok(body),
                Err(e) if e.is_retryable() && attempt < self.max_retries => {
                    let wait = self.retry_backoff.saturating_mul(2u32.saturating_pow(attempt));
                    attempt += 1;
                    warn!(
                        "⚠️ 请求失败 (尝试 {}/{}): {}，等待 {:?} 后重试...",
                        attempt, self.max_retries, e, wait
                    );
                    sleep(wait).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn send_once(&self, url: &str, request: RequestBuilder) -> AppResult<String> {
        let response = request
            .send()
            .await
            .map_err(|e| AppError::request_failed(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::BadStatus {
                url: url.to_string(),
                status,
            }
            .into());
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::request_failed(url, e))?;

        debug!("{} 返回 {} 字节", url, body.len());
        Ok(body)
    }
}
