/// 已知长度时预分配缓冲区的上限：64MB
pub const DEFAULT_MAX_PREALLOCATE: usize = 64 * 1024 * 1024;

/// 下载器配置。
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// content-length 已知时，按声明长度一次性预留容量，但不超过该值；
    /// 超出部分随数据到达再增长。长度越界校验始终以声明长度为准。
    pub max_preallocate: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            max_preallocate: DEFAULT_MAX_PREALLOCATE,
        }
    }
}
