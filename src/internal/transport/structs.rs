pub mod fetch_request;
pub mod http_client_config;
pub mod reqwest_http_client;
pub mod transport_response;

pub use fetch_request::{FetchRequest, RequestBuildError, RequestOptions};
pub use http_client_config::HttpClientConfig;
pub use reqwest_http_client::ReqwestHttpClient;
pub use transport_response::TransportResponse;
