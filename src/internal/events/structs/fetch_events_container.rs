use crate::internal::events::structs::progress_event::ProgressEvent;
use crate::internal::events::traits::fetch_event_sink::FetchEventSink;
use crate::internal::fetcher::structs::fetch_error::FetchError;
use crate::internal::fetcher::structs::fetch_response::FetchResponse;
use crate::internal::transport::structs::fetch_request::FetchRequest;

/// 接收端容器：按注册顺序依次分发事件。没有注册任何接收端时什么也不做。
#[derive(Default)]
pub struct FetchEventsContainer {
    sinks: Vec<Box<dyn FetchEventSink>>,
}

impl FetchEventsContainer {
    /// 添加一个接收端；可多次调用。
    pub fn add(&mut self, sink: impl FetchEventSink + 'static) {
        self.sinks.push(Box::new(sink));
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl FetchEventSink for FetchEventsContainer {
    fn on_progress(&self, event: &ProgressEvent<'_>) {
        for s in &self.sinks {
            s.on_progress(event);
        }
    }

    fn on_error(&self, request: &FetchRequest, error: &FetchError) {
        for s in &self.sinks {
            s.on_error(request, error);
        }
    }

    fn on_done(&self, request: &FetchRequest, response: &FetchResponse) {
        for s in &self.sinks {
            s.on_done(request, response);
        }
    }
}

impl std::fmt::Debug for FetchEventsContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchEventsContainer")
            .field("sinks", &self.sinks.len())
            .finish()
    }
}
