pub mod fetch_config;
pub mod fetch_error;
pub mod fetch_response;
pub mod response_meta;
pub mod streaming_fetcher;

// 重导出公共类型
pub use fetch_config::FetchConfig;
pub use fetch_error::{FetchError, IntegrityFault, ProtocolFault};
pub use fetch_response::FetchResponse;
pub use response_meta::ResponseMeta;
pub use streaming_fetcher::StreamingFetcher;
