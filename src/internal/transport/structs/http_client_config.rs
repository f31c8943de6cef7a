use std::time::Duration;

/// 默认连接超时：30 秒
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// 默认读取超时：60 秒（两次读到数据之间的最长间隔）
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(60);

/// reqwest 客户端配置。
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            read_timeout: DEFAULT_READ_TIMEOUT,
            user_agent: format!("fetch_progress/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
