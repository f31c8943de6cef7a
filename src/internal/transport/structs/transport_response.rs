use reqwest::header::HeaderMap;

use crate::internal::transport::traits::http_client::ByteStream;

/// 传输层返回的原始响应。响应体只能被消费一次。
pub struct TransportResponse {
    pub status: u16,
    pub status_text: String,
    pub headers: HeaderMap,
    /// 可读的响应体；为 `None` 表示响应没有可读取的 body。
    pub body: Option<ByteStream>,
}

impl std::fmt::Debug for TransportResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransportResponse")
            .field("status", &self.status)
            .field("status_text", &self.status_text)
            .field("headers", &self.headers)
            .field("body", &self.body.as_ref().map(|_| "<stream>"))
            .finish()
    }
}
