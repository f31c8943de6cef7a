use std::collections::HashMap;

use super::response_meta::ResponseMeta;

/// 单次 fetch 的结果：响应元数据 + 完整的字节数据。
///
/// 成功时创建一次，所有权交给调用方。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    meta: ResponseMeta,
    data: Vec<u8>,
}

impl FetchResponse {
    pub fn new(meta: ResponseMeta, data: Vec<u8>) -> Self {
        Self { meta, data }
    }

    pub fn meta(&self) -> &ResponseMeta {
        &self.meta
    }

    pub fn status(&self) -> u16 {
        self.meta.status()
    }

    pub fn status_text(&self) -> &str {
        self.meta.status_text()
    }

    pub fn is_success(&self) -> bool {
        self.meta.is_success()
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        self.meta.headers()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.meta.header(name)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// 取出字节数据，丢弃元数据。
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    pub fn into_parts(self) -> (ResponseMeta, Vec<u8>) {
        (self.meta, self.data)
    }
}
