//! 进度状态接收端：基于 [`tokio::sync::watch`]，只保留最新的进度，读写不阻塞，适合驱动进度条。

use tokio::sync::watch;

use crate::internal::events::structs::progress_event::{ProgressEvent, pct};
use crate::internal::events::traits::fetch_event_sink::FetchEventSink;
use crate::internal::fetcher::structs::fetch_error::FetchError;
use crate::internal::fetcher::structs::fetch_response::FetchResponse;
use crate::internal::transport::structs::fetch_request::FetchRequest;

/// fetch 状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Pending,
    Running,
    Finished,
    Failed,
}

/// 最新进度：已收到字节数、声明总长度与状态。
#[derive(Debug, Clone, Default)]
pub struct FetchProgress {
    pub bytes_received: u64,
    /// content-length 声明的总长度，未知时为 `None`
    pub declared_length: Option<u64>,
    pub status: FetchStatus,
}

impl FetchProgress {
    /// 进度百分比（0～100）；总长度为 0 或未知时返回 `f64::NAN`。
    pub fn pct(&self) -> f64 {
        pct(self.bytes_received, self.declared_length)
    }
}

/// 进度状态接收端。一个实例对应一次 fetch；并发的多次 fetch 请各用一个。
///
/// 克隆得到的句柄共享同一份状态，`watch()` 后 `changed().await` 即可监听。
#[derive(Debug, Clone)]
pub struct ProgressWatchSink {
    sender: std::sync::Arc<watch::Sender<FetchProgress>>,
}

impl ProgressWatchSink {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(FetchProgress::default());
        Self {
            sender: std::sync::Arc::new(sender),
        }
    }

    pub fn watch(&self) -> watch::Receiver<FetchProgress> {
        self.sender.subscribe()
    }

    /// 当前进度的快照。
    pub fn current(&self) -> FetchProgress {
        self.sender.borrow().clone()
    }
}

impl Default for ProgressWatchSink {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchEventSink for ProgressWatchSink {
    fn on_progress(&self, event: &ProgressEvent<'_>) {
        self.sender.send_replace(FetchProgress {
            bytes_received: event.bytes_received,
            declared_length: event.declared_length,
            status: FetchStatus::Running,
        });
    }

    fn on_error(&self, _request: &FetchRequest, _error: &FetchError) {
        self.sender.send_modify(|p| p.status = FetchStatus::Failed);
    }

    fn on_done(&self, _request: &FetchRequest, response: &FetchResponse) {
        self.sender.send_modify(|p| {
            p.bytes_received = response.len() as u64;
            p.status = FetchStatus::Finished;
        });
    }
}
