//! 已知长度读取：按 content-length 预留缓冲区，数据块依次写入。

use futures_util::StreamExt;
use tracing::{trace, warn};

use crate::internal::events::structs::progress_event::ProgressEvent;
use crate::internal::events::traits::fetch_event_sink::FetchEventSink;
use crate::internal::fetcher::structs::fetch_error::{FetchError, IntegrityFault};
use crate::internal::transport::traits::http_client::ByteStream;

/// 读取声明长度为 `declared` 的响应体。
///
/// 缓冲区容量一次性预留为 `min(declared, max_preallocate)`；
/// 累计字节数一旦会超过 `declared`，在写入该块之前返回 [`IntegrityFault::Overflow`]。
/// 服务器实际发送的少于声明长度时，按实际收到的数据返回。
pub(super) async fn read_known_length(
    mut body: ByteStream,
    declared: u64,
    max_preallocate: usize,
    events: &impl FetchEventSink,
) -> Result<Option<Vec<u8>>, FetchError> {
    let capacity = usize::try_from(declared).map_or(max_preallocate, |n| n.min(max_preallocate));
    let mut buffer: Vec<u8> = Vec::with_capacity(capacity);
    let mut received: u64 = 0;

    while let Some(chunk_result) = body.next().await {
        let chunk = chunk_result.map_err(FetchError::Transport)?;

        let next = received + chunk.len() as u64;
        if next > declared {
            return Err(IntegrityFault::Overflow {
                declared,
                received: next,
            }
            .into());
        }

        buffer.extend_from_slice(&chunk);
        received = next;
        trace!(received, declared, "收到数据块");

        events.on_progress(&ProgressEvent {
            declared_length: Some(declared),
            bytes_received: received,
            chunk: &chunk,
            buffer: &buffer,
        });
    }

    if received < declared {
        warn!(received, declared, "响应体短于 content-length 声明的长度");
    }

    Ok(Some(buffer))
}
