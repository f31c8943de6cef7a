//! 传输层能力：发出请求，返回状态、响应头与分块字节流。
//!
//! 下载器只依赖本 trait；默认实现为 [`ReqwestHttpClient`](crate::transport::ReqwestHttpClient)，
//! 测试或其它运行时可自行实现。

use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::Stream;

use crate::internal::transport::structs::fetch_request::FetchRequest;
use crate::internal::transport::structs::transport_response::TransportResponse;

/// 传输层原始错误，原样向调用方传递，便于 downcast 检查底层原因。
pub type TransportFault = Box<dyn std::error::Error + Send + Sync + 'static>;

/// 响应体字节流：按到达顺序逐块产出。
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, TransportFault>> + Send + 'static>>;

#[async_trait]
pub trait HttpClient: Send + Sync {
    /// 发出请求。
    ///
    /// - `Err`：请求未能完成（网络错误、主机不可达等）；
    /// - `Ok(None)`：传输层结束但没有拿到响应。
    async fn execute(
        &self,
        request: &FetchRequest,
    ) -> Result<Option<TransportResponse>, TransportFault>;
}

#[async_trait]
impl<C> HttpClient for std::sync::Arc<C>
where
    C: HttpClient + ?Sized,
{
    async fn execute(
        &self,
        request: &FetchRequest,
    ) -> Result<Option<TransportResponse>, TransportFault> {
        (**self).execute(request).await
    }
}
