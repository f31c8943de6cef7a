//! 流式 HTTP 下载：逐块读取响应体拼成完整字节，读取过程中发出进度、完成、失败事件。
//!
//! 入口为 [`fetcher::StreamingFetcher`]。

/// 内部模块
mod internal;

#[cfg(test)]
mod tests;

/// 请求描述与传输层能力；默认实现基于 reqwest，也可自行实现 [`transport::HttpClient`]
pub mod transport {
    use crate::internal;
    pub use internal::transport::structs::*;
    pub use internal::transport::traits::*;
}

pub mod fetcher {
    use crate::internal;
    pub use internal::fetcher::structs::*;
}

/// 事件接收端：回调、通道、watch 进度状态
pub mod events {
    use crate::internal;
    pub use internal::events::structs::*;
    pub use internal::events::traits::*;
}

pub use fetcher::{FetchError, FetchResponse, StreamingFetcher};
pub use transport::FetchRequest;
