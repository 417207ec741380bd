use thiserror::Error;

/// 应用程序错误类型
///
/// 所有错误都是致命的：任何一步失败都会终止整个运行。
#[derive(Debug, Error)]
pub enum AppError {
    /// 网络请求错误
    #[error("传输错误: {0}")]
    Transport(#[from] TransportError),
    /// 响应体解析错误
    #[error("解析错误: {0}")]
    Decode(#[from] DecodeError),
    /// 投票站页面结构错误
    #[error("页面结构错误 (县 {county_id}, 投票站 {polling_place_id}): {source}")]
    Structure {
        county_id: u32,
        polling_place_id: u32,
        #[source]
        source: StructureError,
    },
    /// 输出文件错误
    #[error("文件错误: {0}")]
    Io(#[from] IoError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 县 ID 超出范围
    #[error("县 ID {county_id} 超出范围 [1, {max}]")]
    CountyOutOfRange { county_id: u32, max: u32 },
}

/// 网络请求错误
#[derive(Debug, Error)]
pub enum TransportError {
    /// 请求未能完成（连接失败、超时、读取响应体失败）
    #[error("请求 {url} 失败: {source}")]
    RequestFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// 服务端返回非 2xx 状态
    #[error("请求 {url} 返回状态 {status}")]
    BadStatus {
        url: String,
        status: reqwest::StatusCode,
    },
    /// HTTP 客户端创建失败
    #[error("创建 HTTP 客户端失败: {0}")]
    ClientBuildFailed(#[source] reqwest::Error),
}

impl TransportError {
    /// 是否值得重试：连接/超时失败，或 429 / 5xx
    pub fn is_retryable(&self) -> bool {
        match self {
            TransportError::RequestFailed { source, .. } => {
                source.is_connect() || source.is_timeout()
            }
            TransportError::BadStatus { status, .. } => {
                *status == reqwest::StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
            }
            TransportError::ClientBuildFailed(_) => false,
        }
    }
}

/// 响应体解析错误
#[derive(Debug, Error)]
pub enum DecodeError {
    /// 不是预期的 JSON 结构
    #[error("{url} 返回的内容无法解析为选区列表: {source}")]
    InvalidPayload {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    /// 返回的选区属于其他县
    #[error("{url} 返回了县 {found} 的选区，请求的是县 {expected}")]
    CountyMismatch {
        url: String,
        expected: u32,
        found: u32,
    },
}

/// 地址提取失败的具体位置
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    #[error("找不到投票站容器元素 #{container_id}")]
    MissingContainer { container_id: &'static str },
    #[error("容器内没有 <p> 段落")]
    MissingParagraph,
    #[error("段落内没有 <a> 链接")]
    MissingLink,
    #[error("提取到的地址为空")]
    EmptyAddress,
    #[error("地址格式无法识别: {address}")]
    UnparseableAddress { address: String },
}

/// 输出文件错误
#[derive(Debug, Error)]
pub enum IoError {
    /// 打开（创建/截断）输出文件失败
    #[error("无法创建输出文件 {path}: {source}")]
    OpenFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 写入或刷新失败
    #[error("写入输出文件 {path} 失败: {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: csv::Error,
    },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// 取值不合法
    #[error("配置项 {field} 不合法: {reason}")]
    Invalid { field: String, reason: String },
}

impl AppError {
    /// 创建请求失败错误
    pub fn request_failed(url: impl Into<String>, source: reqwest::Error) -> Self {
        AppError::Transport(TransportError::RequestFailed {
            url: url.into(),
            source,
        })
    }

    /// 创建页面结构错误
    pub fn structure(county_id: u32, polling_place_id: u32, source: StructureError) -> Self {
        AppError::Structure {
            county_id,
            polling_place_id,
            source,
        }
    }

    /// 是否属于可重试的传输错误
    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::Transport(e) if e.is_retryable())
    }
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
