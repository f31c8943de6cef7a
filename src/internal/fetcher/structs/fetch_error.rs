//! fetch 相关错误类型。

use thiserror::Error;

use crate::internal::transport::traits::http_client::TransportFault;

#[derive(Debug, Error)]
pub enum FetchError {
    /// 请求或响应体读取失败；内部为传输层的原始错误，不做包装。
    #[error("传输失败: {0}")]
    Transport(#[source] TransportFault),

    /// 请求已发出，但响应不可用。
    #[error("{0}")]
    Protocol(#[from] ProtocolFault),

    /// 读取结束后的数据校验失败。
    #[error("{0}")]
    Integrity(#[from] IntegrityFault),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolFault {
    #[error("response is null")]
    NullResponse,

    #[error("response body is null")]
    NullBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityFault {
    #[error("data is null after fetch")]
    NoData,

    /// 实际收到的字节数超过 content-length 声明的长度。
    #[error("收到 {received} 字节，超过声明长度 {declared}")]
    Overflow { declared: u64, received: u64 },
}

impl FetchError {
    /// 传输层的原始错误，可 downcast 为具体类型（如 `reqwest::Error`）。
    pub fn transport_source(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            FetchError::Transport(fault) => Some(fault.as_ref()),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Transport(_))
    }

    pub fn is_protocol(&self) -> bool {
        matches!(self, FetchError::Protocol(_))
    }

    pub fn is_integrity(&self) -> bool {
        matches!(self, FetchError::Integrity(_))
    }
}
