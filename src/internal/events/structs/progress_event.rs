/// 进度事件：每收到一块数据发出一次，只在回调期间有效。
///
/// `buffer` 借用的是正在累积的缓冲区本身，而不是拷贝；回调返回后缓冲区会继续增长，
/// 需要保留数据的观察者请自行拷贝（如 `buffer.to_vec()`）。
#[derive(Debug, Clone, Copy)]
pub struct ProgressEvent<'a> {
    /// content-length 声明的总长度，未知时为 `None`
    pub declared_length: Option<u64>,
    /// 累计已收到的字节数
    pub bytes_received: u64,
    /// 本次收到的数据块
    pub chunk: &'a [u8],
    /// 截至本块的全部数据
    pub buffer: &'a [u8],
}

impl ProgressEvent<'_> {
    /// 进度百分比（0～100）；总长度为 0 或未知时返回 `f64::NAN`。
    pub fn pct(&self) -> f64 {
        pct(self.bytes_received, self.declared_length)
    }
}

pub(crate) fn pct(bytes_received: u64, declared_length: Option<u64>) -> f64 {
    declared_length
        .filter(|&t| t > 0)
        .map(|t| (bytes_received as f64 / t as f64) * 100.0)
        .unwrap_or(f64::NAN)
}
