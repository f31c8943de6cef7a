//! 传输层：请求描述、原始响应与 HTTP 客户端能力。

pub mod structs;
pub mod traits;
