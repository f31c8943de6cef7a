//! 响应元数据：在开始读取 body 之前一次性拷贝出来，之后不可变。

use std::collections::HashMap;

use reqwest::header::HeaderMap;

/// 状态码、状态文本与全部响应头的快照。
///
/// 响应头名称统一存为小写，查找时不区分大小写；同名响应头按出现顺序以 `", "` 合并。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseMeta {
    status: u16,
    status_text: String,
    headers: HashMap<String, String>,
}

impl ResponseMeta {
    pub fn new(status: u16, status_text: impl Into<String>, header_map: &HeaderMap) -> Self {
        let mut headers: HashMap<String, String> = HashMap::with_capacity(header_map.keys_len());
        for (name, value) in header_map {
            let value = String::from_utf8_lossy(value.as_bytes());
            headers
                .entry(name.as_str().to_owned())
                .and_modify(|v| {
                    v.push_str(", ");
                    v.push_str(&value);
                })
                .or_insert_with(|| value.into_owned());
        }

        Self {
            status,
            status_text: status_text.into(),
            headers,
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    /// 状态码是否为 2xx。
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// 全部响应头（键为小写名称）。
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// 按名称查找响应头，不区分大小写。
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name.to_ascii_lowercase().as_str())
            .map(String::as_str)
    }
}
