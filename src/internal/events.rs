//! 事件模块：进度、完成、失败三类通知及其接收端。
//!
//! 下载器只依赖 [`traits::fetch_event_sink::FetchEventSink`]；回调列表、通道、watch 状态都是它的实现。

pub mod structs;
pub mod traits;
