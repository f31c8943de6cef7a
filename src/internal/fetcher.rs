//! 下载器模块：流式 fetch、结果包装与错误类型。

pub mod structs;
