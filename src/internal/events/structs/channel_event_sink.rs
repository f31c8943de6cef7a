//! 通道接收端：把事件转成自有数据，经 `tokio::sync::mpsc` 发给另一个任务消费。

use bytes::Bytes;
use tokio::sync::mpsc;

use crate::internal::events::structs::progress_event::ProgressEvent;
use crate::internal::events::traits::fetch_event_sink::FetchEventSink;
use crate::internal::fetcher::structs::fetch_error::FetchError;
use crate::internal::fetcher::structs::fetch_response::FetchResponse;
use crate::internal::transport::structs::fetch_request::FetchRequest;

/// 通道中传递的事件。进度事件中的数据是发送时的拷贝，不会随后续数据块变化。
#[derive(Debug, Clone)]
pub enum FetchEvent {
    Progress {
        declared_length: Option<u64>,
        bytes_received: u64,
        chunk: Bytes,
        buffer: Bytes,
    },
    Error {
        request: FetchRequest,
        /// 错误信息（原始错误保留在返回给调用方的 `FetchError` 中）
        message: String,
    },
    Done {
        request: FetchRequest,
        response: FetchResponse,
    },
}

/// 基于无界通道的接收端。
///
/// 每个进度事件都会拷贝一次累积缓冲区，大文件下载时开销与 数据量 × 块数 成正比；
/// 只需要进度数字时请用 [`ProgressWatchSink`](super::progress_watch_sink::ProgressWatchSink)。
#[derive(Debug, Clone)]
pub struct ChannelEventSink {
    sender: mpsc::UnboundedSender<FetchEvent>,
}

impl ChannelEventSink {
    /// 返回 (接收端, 事件消费者)。
    pub fn new() -> (Self, mpsc::UnboundedReceiver<FetchEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    // 消费者已关闭时直接丢弃事件，不影响 fetch 本身
    fn send(&self, event: FetchEvent) {
        let _ = self.sender.send(event);
    }
}

impl FetchEventSink for ChannelEventSink {
    fn on_progress(&self, event: &ProgressEvent<'_>) {
        self.send(FetchEvent::Progress {
            declared_length: event.declared_length,
            bytes_received: event.bytes_received,
            chunk: Bytes::copy_from_slice(event.chunk),
            buffer: Bytes::copy_from_slice(event.buffer),
        });
    }

    fn on_error(&self, request: &FetchRequest, error: &FetchError) {
        self.send(FetchEvent::Error {
            request: request.clone(),
            message: error.to_string(),
        });
    }

    fn on_done(&self, request: &FetchRequest, response: &FetchResponse) {
        self.send(FetchEvent::Done {
            request: request.clone(),
            response: response.clone(),
        });
    }
}
