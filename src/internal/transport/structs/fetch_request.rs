//! 请求描述：一次 fetch 的目标地址与请求参数。
//!
//! 调用方持有 [`FetchRequest`]，以引用方式传给下载器；一次 fetch 期间不可变。

use bytes::Bytes;
use reqwest::Method;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use thiserror::Error;
use url::Url;

/// 构建请求描述时的错误。
#[derive(Debug, Error)]
pub enum RequestBuildError {
    #[error("URL 格式错误: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("请求头名称非法: {0}")]
    InvalidHeaderName(#[from] reqwest::header::InvalidHeaderName),

    #[error("请求头值非法: {0}")]
    InvalidHeaderValue(#[from] reqwest::header::InvalidHeaderValue),
}

/// 请求参数：方法、请求头、请求体，原样透传给传输层。
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: HeaderMap::new(),
            body: None,
        }
    }
}

/// 请求描述：绝对地址 + 可选请求参数。
#[derive(Debug, Clone)]
pub struct FetchRequest {
    url: Url,
    options: RequestOptions,
}

impl FetchRequest {
    /// 由绝对地址创建 GET 请求。
    pub fn new(url: &str) -> Result<Self, RequestBuildError> {
        Ok(Self::from(Url::parse(url)?))
    }

    /// 以 `base` 为基准解析相对地址（如 `./files/a.db`）。
    pub fn resolve(base: &Url, reference: &str) -> Result<Self, RequestBuildError> {
        Ok(Self::from(base.join(reference)?))
    }

    pub fn method(mut self, method: Method) -> Self {
        self.options.method = method;
        self
    }

    /// 追加一个请求头；同名请求头会保留多个值。
    pub fn header(mut self, name: &str, value: &str) -> Result<Self, RequestBuildError> {
        let name = HeaderName::from_bytes(name.as_bytes())?;
        let value = HeaderValue::from_str(value)?;
        self.options.headers.append(name, value);
        Ok(self)
    }

    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.options.body = Some(body.into());
        self
    }

    /// 整体替换请求参数。
    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn options(&self) -> &RequestOptions {
        &self.options
    }
}

impl From<Url> for FetchRequest {
    fn from(url: Url) -> Self {
        Self {
            url,
            options: RequestOptions::default(),
        }
    }
}
