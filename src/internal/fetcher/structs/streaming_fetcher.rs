//! 流式下载器
//!
//! 发出请求后逐块读取响应体，拼成一块连续的字节数据，同时按块发出进度事件。
//!
//! ## 流程
//!
//! 1. 通过注入的 [`HttpClient`] 发出请求；
//! 2. 拷贝响应元数据（状态、响应头），之后响应体被消费，原始响应不再可查；
//! 3. 根据 `content-length` 选择读取策略：
//!    - **已知长度**：按声明长度一次性预留缓冲区，超出声明长度立即报错；
//!    - **未知长度**：缓冲区随数据块增长；
//! 4. 成功时发出完成事件并返回 [`FetchResponse`]；任何失败都先发出一次失败事件，再把错误返回给调用方。
//!
//! ## 使用示例
//!
//! ```rust,no_run
//! # use fetch_progress::fetcher::StreamingFetcher;
//! # use fetch_progress::transport::FetchRequest;
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let fetcher = StreamingFetcher::default().with_on_progress_hook(|p| {
//!     println!("{} / {:?}", p.bytes_received, p.declared_length);
//! });
//!
//! let request = FetchRequest::new("https://example.com/large.db")?;
//! let response = fetcher.fetch(&request).await?;
//! println!("{} {} 共 {} 字节", response.status(), response.status_text(), response.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## 说明
//!
//! - 不支持取消：一旦开始，会一直运行到完成或失败；
//! - 不重试，失败时不返回部分数据；
//! - 响应状态码不是 2xx 时照常读取响应体，由调用方检查 [`FetchResponse::status`]。

mod known_length;
mod unknown_length;

use reqwest::header::CONTENT_LENGTH;
use tracing::{debug, error, info};

use crate::internal::events::structs::fetch_events_container::FetchEventsContainer;
use crate::internal::events::structs::hook_adapters::{
    OnDoneHookAdapter, OnErrorHookAdapter, OnProgressHookAdapter,
};
use crate::internal::events::structs::progress_event::ProgressEvent;
use crate::internal::events::traits::fetch_event_sink::FetchEventSink;
use crate::internal::transport::structs::fetch_request::FetchRequest;
use crate::internal::transport::structs::http_client_config::HttpClientConfig;
use crate::internal::transport::structs::reqwest_http_client::ReqwestHttpClient;
use crate::internal::transport::structs::transport_response::TransportResponse;
use crate::internal::transport::traits::http_client::HttpClient;

use super::fetch_config::FetchConfig;
use super::fetch_error::{FetchError, IntegrityFault, ProtocolFault};
use super::fetch_response::FetchResponse;
use super::response_meta::ResponseMeta;
use known_length::read_known_length;
use unknown_length::read_unknown_length;

/// 流式下载器。
///
/// 除注入的传输层、事件接收端与配置外不持有任何状态，同一实例可被并发调用，
/// 每次调用的缓冲区只属于该次调用。
pub struct StreamingFetcher<C = ReqwestHttpClient> {
    client: C,
    config: FetchConfig,
    events: FetchEventsContainer,
}

impl StreamingFetcher<ReqwestHttpClient> {
    /// 使用按配置创建的 reqwest 客户端。
    pub fn with_reqwest(config: &HttpClientConfig) -> Result<Self, reqwest::Error> {
        Ok(Self::new(ReqwestHttpClient::new(config)?))
    }
}

impl Default for StreamingFetcher<ReqwestHttpClient> {
    fn default() -> Self {
        Self::new(ReqwestHttpClient::default())
    }
}

impl<C> StreamingFetcher<C>
where
    C: HttpClient,
{
    pub fn new(client: C) -> Self {
        Self {
            client,
            config: FetchConfig::default(),
            events: FetchEventsContainer::default(),
        }
    }

    pub fn with_config(mut self, config: FetchConfig) -> Self {
        self.config = config;
        self
    }

    /// 设置已知长度时预分配缓冲区的上限（字节）。
    pub fn max_preallocate(mut self, bytes: usize) -> Self {
        self.config.max_preallocate = bytes;
        self
    }

    /// 注册完整的事件接收端；可多次调用，按注册顺序依次通知。
    pub fn with_sink(mut self, sink: impl FetchEventSink + 'static) -> Self {
        self.events.add(sink);
        self
    }

    /// 注册「进度」回调；每收到一块数据调用一次。
    pub fn with_on_progress_hook<F>(mut self, f: F) -> Self
    where
        F: Fn(&ProgressEvent<'_>) + Send + Sync + 'static,
    {
        self.events.add(OnProgressHookAdapter(f));
        self
    }

    /// 注册「失败」回调；参数为原始请求与错误。
    pub fn with_on_error_hook<F>(mut self, f: F) -> Self
    where
        F: Fn(&FetchRequest, &FetchError) + Send + Sync + 'static,
    {
        self.events.add(OnErrorHookAdapter(f));
        self
    }

    /// 注册「完成」回调；参数为原始请求与结果。
    pub fn with_on_done_hook<F>(mut self, f: F) -> Self
    where
        F: Fn(&FetchRequest, &FetchResponse) + Send + Sync + 'static,
    {
        self.events.add(OnDoneHookAdapter(f));
        self
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// 执行 fetch。成功与失败二者必居其一：成功时发出一次完成事件，失败时发出一次失败事件。
    pub async fn fetch(&self, request: &FetchRequest) -> Result<FetchResponse, FetchError> {
        info!(url = %request.url(), method = %request.options().method, "开始 fetch");

        match self.run(request).await {
            Ok(response) => {
                info!(url = %request.url(), bytes = response.len(), "fetch 完成");
                self.events.on_done(request, &response);
                Ok(response)
            }
            Err(err) => {
                error!(url = %request.url(), error = %err, "fetch 失败");
                self.events.on_error(request, &err);
                Err(err)
            }
        }
    }

    async fn run(&self, request: &FetchRequest) -> Result<FetchResponse, FetchError> {
        let resp = self
            .client
            .execute(request)
            .await
            .map_err(FetchError::Transport)?
            .ok_or(ProtocolFault::NullResponse)?;

        let TransportResponse {
            status,
            status_text,
            headers,
            body,
        } = resp;
        let meta = ResponseMeta::new(status, status_text, &headers);

        debug!(status = meta.status(), status_text = meta.status_text(), "响应状态");
        for (name, value) in meta.headers() {
            debug!(header = %name, value = %value, "响应头");
        }

        let body = body.ok_or(ProtocolFault::NullBody)?;

        let data = match declared_length(&meta) {
            Some(declared) => {
                read_known_length(body, declared, self.config.max_preallocate, &self.events)
                    .await?
            }
            None => read_unknown_length(body, &self.events).await?,
        };
        let data = data.ok_or(IntegrityFault::NoData)?;

        Ok(FetchResponse::new(meta, data))
    }
}

/// 解析 content-length；缺失、无法解析或为负数时视为未知。
fn declared_length(meta: &ResponseMeta) -> Option<u64> {
    meta.header(CONTENT_LENGTH.as_str())
        .and_then(|v| v.trim().parse::<u64>().ok())
}

impl<C> std::fmt::Debug for StreamingFetcher<C>
where
    C: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamingFetcher")
            .field("client", &self.client)
            .field("config", &self.config)
            .field("events", &self.events)
            .finish()
    }
}

