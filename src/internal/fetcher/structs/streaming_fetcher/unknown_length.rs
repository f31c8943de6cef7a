//! 未知长度读取：缓冲区随数据块增长。

use futures_util::StreamExt;
use tracing::trace;

use crate::internal::events::structs::progress_event::ProgressEvent;
use crate::internal::events::traits::fetch_event_sink::FetchEventSink;
use crate::internal::fetcher::structs::fetch_error::FetchError;
use crate::internal::transport::traits::http_client::ByteStream;

/// 读取未声明长度的响应体。没有任何数据块时返回空缓冲区，不视为错误。
pub(super) async fn read_unknown_length(
    mut body: ByteStream,
    events: &impl FetchEventSink,
) -> Result<Option<Vec<u8>>, FetchError> {
    let mut buffer: Option<Vec<u8>> = None;

    while let Some(chunk_result) = body.next().await {
        let chunk = chunk_result.map_err(FetchError::Transport)?;

        // 缓冲区长度始终等于已收到数据块长度之和
        match buffer.as_mut() {
            Some(data) => data.extend_from_slice(&chunk),
            None => buffer = Some(chunk.to_vec()),
        }
        let data: &[u8] = buffer.as_deref().unwrap_or_default();
        trace!(received = data.len(), "收到数据块");

        events.on_progress(&ProgressEvent {
            declared_length: None,
            bytes_received: data.len() as u64,
            chunk: &chunk,
            buffer: data,
        });
    }

    Ok(Some(buffer.unwrap_or_default()))
}
