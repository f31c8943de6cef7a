//! 事件接收端：fetch 过程中的进度、完成、失败通知。

use crate::internal::events::structs::progress_event::ProgressEvent;
use crate::internal::fetcher::structs::fetch_error::FetchError;
use crate::internal::fetcher::structs::fetch_response::FetchResponse;
use crate::internal::transport::structs::fetch_request::FetchRequest;

/// fetch 事件接收端。三个方法都有空的默认实现，只订阅关心的事件即可。
///
/// 同一个下载器可以被并发调用，所以回调只拿到 `&self`；需要可变状态请自行加锁或用原子类型。
/// 回调在读取数据流的同一任务中同步执行，不要在其中做耗时操作。
///
/// 使用方式二选一（可混用）：
/// - **单事件**：用下载器的 `with_on_progress_hook` / `with_on_error_hook` / `with_on_done_hook` 传入闭包；
/// - **完整接收端**：实现本 trait，通过 `with_sink` 注册。
pub trait FetchEventSink: Send + Sync {
    /// 每收到一块数据调用一次。
    fn on_progress(&self, _event: &ProgressEvent<'_>) {}

    /// 失败时调用一次，之后错误会返回给调用方。
    fn on_error(&self, _request: &FetchRequest, _error: &FetchError) {}

    /// 成功时调用一次，之后结果会返回给调用方。
    fn on_done(&self, _request: &FetchRequest, _response: &FetchResponse) {}
}

/// 不做任何事的接收端，下载器的默认值。
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEventSink;

impl FetchEventSink for NoopEventSink {}

impl<S> FetchEventSink for std::sync::Arc<S>
where
    S: FetchEventSink + ?Sized,
{
    fn on_progress(&self, event: &ProgressEvent<'_>) {
        (**self).on_progress(event);
    }

    fn on_error(&self, request: &FetchRequest, error: &FetchError) {
        (**self).on_error(request, error);
    }

    fn on_done(&self, request: &FetchRequest, response: &FetchResponse) {
        (**self).on_done(request, response);
    }
}
