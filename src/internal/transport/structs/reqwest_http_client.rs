//! 基于 reqwest 的默认传输实现。

use async_trait::async_trait;
use futures_util::TryStreamExt;
use reqwest::Client;
use tracing::debug;

use crate::internal::transport::structs::fetch_request::FetchRequest;
use crate::internal::transport::structs::http_client_config::HttpClientConfig;
use crate::internal::transport::structs::transport_response::TransportResponse;
use crate::internal::transport::traits::http_client::{HttpClient, TransportFault};

/// reqwest 传输层。`Client` 内部是 Arc，克隆开销很小。
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// 按配置创建客户端。
    pub fn new(config: &HttpClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .read_timeout(config.read_timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self { client })
    }

    /// 复用已有的 reqwest 客户端（如带默认认证头的客户端）。
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::with_client(Client::new())
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn execute(
        &self,
        request: &FetchRequest,
    ) -> Result<Option<TransportResponse>, TransportFault> {
        let options = request.options();
        let mut builder = self
            .client
            .request(options.method.clone(), request.url().clone())
            .headers(options.headers.clone());
        if let Some(body) = &options.body {
            builder = builder.body(body.clone());
        }

        let resp = builder.send().await?;
        let status = resp.status();
        debug!(url = %request.url(), status = status.as_u16(), "收到响应");

        let headers = resp.headers().clone();
        let body = resp
            .bytes_stream()
            .map_err(|e| Box::new(e) as TransportFault);

        Ok(Some(TransportResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            headers,
            body: Some(Box::pin(body)),
        }))
    }
}
