use std::time::Duration;

use crate::error::{AppResult, ConfigError};

/// 程序配置
///
/// 默认值即北卡选举委员会查询站点的固定常量；环境变量只做可选覆盖。
#[derive(Clone, Debug)]
pub struct Config {
    /// 县的数量，县 ID 取值 1..=county_count
    pub county_count: u32,
    /// 选区列表接口（POST 表单）
    pub precinct_list_url: String,
    /// 投票站详情页（GET 查询参数）
    pub polling_place_url: String,
    /// 输出 CSV 文件
    pub output_path: String,
    /// 每秒请求数，决定每个选区处理完后的等待时间
    pub requests_per_second: f64,
    /// 传输错误的最大重试次数，0 表示不重试
    pub max_retries: u32,
    /// 首次重试前的等待毫秒数，之后指数递增
    pub retry_backoff_ms: u64,
    /// 单次请求超时
    pub request_timeout_secs: u64,
    /// 是否校验提取出的地址
    pub validate_addresses: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            county_count: 100,
            precinct_list_url: "https://vt.ncsbe.gov/PPLkup/LoadPrecincts/".to_string(),
            polling_place_url: "https://vt.ncsbe.gov/PPLkup/PollingPlaceResult/".to_string(),
            output_path: "nc_polling_places.csv".to_string(),
            requests_per_second: 1.0,
            max_retries: 0,
            retry_backoff_ms: 2000,
            request_timeout_secs: 30,
            validate_addresses: false,
        }
    }
}

impl Config {
    /// 从环境变量加载，未设置的字段使用默认值
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 通过任意查找函数加载配置（便于测试）
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = Self::default();
        let config = Self {
            county_count: parse_var(&lookup, "COUNTY_COUNT", "u32")?
                .unwrap_or(default.county_count),
            precinct_list_url: lookup("PRECINCT_LIST_URL").unwrap_or(default.precinct_list_url),
            polling_place_url: lookup("POLLING_PLACE_URL").unwrap_or(default.polling_place_url),
            output_path: lookup("OUTPUT_PATH").unwrap_or(default.output_path),
            requests_per_second: parse_var(&lookup, "REQUESTS_PER_SECOND", "f64")?
                .unwrap_or(default.requests_per_second),
            max_retries: parse_var(&lookup, "MAX_RETRIES", "u32")?.unwrap_or(default.max_retries),
            retry_backoff_ms: parse_var(&lookup, "RETRY_BACKOFF_MS", "u64")?
                .unwrap_or(default.retry_backoff_ms),
            request_timeout_secs: parse_var(&lookup, "REQUEST_TIMEOUT_SECS", "u64")?
                .unwrap_or(default.request_timeout_secs),
            validate_addresses: parse_var(&lookup, "VALIDATE_ADDRESSES", "bool")?
                .unwrap_or(default.validate_addresses),
        };
        config.validate()?;
        Ok(config)
    }

    /// 检查取值范围
    pub fn validate(&self) -> AppResult<()> {
        if self.county_count == 0 {
            return Err(invalid("county_count", "必须至少为 1"));
        }
        if !self.requests_per_second.is_finite() || self.requests_per_second <= 0.0 {
            return Err(invalid("requests_per_second", "必须为正数"));
        }
        if Duration::try_from_secs_f64(1.0 / self.requests_per_second).is_err() {
            return Err(invalid("requests_per_second", "过小，等待间隔超出范围"));
        }
        if self.request_timeout_secs == 0 {
            return Err(invalid("request_timeout_secs", "必须大于 0"));
        }
        Ok(())
    }

    /// 每个选区处理完后的等待时间
    ///
    /// 未经 `validate` 的取值不会 panic，超出范围时取 `Duration::MAX`
    pub fn throttle_delay(&self) -> Duration {
        Duration::try_from_secs_f64(1.0 / self.requests_per_second).unwrap_or(Duration::MAX)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_ms)
    }
}

fn parse_var<F, T>(lookup: &F, var_name: &str, expected_type: &str) -> AppResult<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var_name) {
        None => Ok(None),
        Some(value) => value.trim().parse().map(Some).map_err(|_| {
            ConfigError::EnvVarParseFailed {
                var_name: var_name.to_string(),
                value,
                expected_type: expected_type.to_string(),
            }
            .into()
        }),
    }
}

fn invalid(field: &str, reason: &str) -> crate::error::AppError {
    ConfigError::Invalid {
        field: field.to_string(),
        reason: reason.to_string(),
    }
    .into()
}
