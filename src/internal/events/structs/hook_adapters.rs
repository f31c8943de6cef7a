//! 单事件适配器：将闭包包装成 [`FetchEventSink`]，供 `with_on_xx_hook` 使用。

use crate::internal::events::structs::progress_event::ProgressEvent;
use crate::internal::events::traits::fetch_event_sink::FetchEventSink;
use crate::internal::fetcher::structs::fetch_error::FetchError;
use crate::internal::fetcher::structs::fetch_response::FetchResponse;
use crate::internal::transport::structs::fetch_request::FetchRequest;

/// 仅实现「进度」的适配器。
pub(crate) struct OnProgressHookAdapter<F>(pub(crate) F);

impl<F> FetchEventSink for OnProgressHookAdapter<F>
where
    F: Fn(&ProgressEvent<'_>) + Send + Sync + 'static,
{
    fn on_progress(&self, event: &ProgressEvent<'_>) {
        (self.0)(event);
    }
}

/// 仅实现「失败」的适配器。
pub(crate) struct OnErrorHookAdapter<F>(pub(crate) F);

impl<F> FetchEventSink for OnErrorHookAdapter<F>
where
    F: Fn(&FetchRequest, &FetchError) + Send + Sync + 'static,
{
    fn on_error(&self, request: &FetchRequest, error: &FetchError) {
        (self.0)(request, error);
    }
}

/// 仅实现「完成」的适配器。
pub(crate) struct OnDoneHookAdapter<F>(pub(crate) F);

impl<F> FetchEventSink for OnDoneHookAdapter<F>
where
    F: Fn(&FetchRequest, &FetchResponse) + Send + Sync + 'static,
{
    fn on_done(&self, request: &FetchRequest, response: &FetchResponse) {
        (self.0)(request, response);
    }
}
