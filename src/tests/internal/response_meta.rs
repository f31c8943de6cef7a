//! 响应元数据测试：大小写不敏感查找、同名响应头合并、快照不可变。

use reqwest::header::{HeaderMap, HeaderValue};

use crate::fetcher::{FetchResponse, ResponseMeta};

fn sample_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert("content-type", HeaderValue::from_static("application/octet-stream"));
    headers.insert("etag", HeaderValue::from_static("\"63fbd35f-4d00000\""));
    headers.append("set-cookie", HeaderValue::from_static("a=1"));
    headers.append("set-cookie", HeaderValue::from_static("b=2"));
    headers
}

#[test]
fn header_lookup_ignores_case() {
    let meta = ResponseMeta::new(200, "OK", &sample_headers());

    assert_eq!(meta.header("Content-Type"), Some("application/octet-stream"));
    assert_eq!(meta.header("CONTENT-TYPE"), Some("application/octet-stream"));
    assert_eq!(meta.header("ETag"), Some("\"63fbd35f-4d00000\""));
    assert_eq!(meta.header("content-length"), None);
}

#[test]
fn repeated_headers_are_joined() {
    let meta = ResponseMeta::new(200, "OK", &sample_headers());

    assert_eq!(meta.header("set-cookie"), Some("a=1, b=2"));
    assert_eq!(meta.headers().len(), 3);
}

/// 元数据是构造时的拷贝，原始响应头之后的修改不会影响它。
#[test]
fn meta_is_a_snapshot() {
    let mut headers = sample_headers();
    let meta = ResponseMeta::new(206, "Partial Content", &headers);
    let before = meta.clone();

    headers.insert("content-type", HeaderValue::from_static("text/plain"));
    headers.clear();

    assert_eq!(meta, before);
    assert_eq!(meta.status(), 206);
    assert_eq!(meta.status_text(), "Partial Content");
    assert!(meta.is_success());
    assert_eq!(meta.header("content-type"), Some("application/octet-stream"));
}

#[test]
fn non_utf8_header_value_is_lossy() {
    let mut headers = HeaderMap::new();
    headers.insert("x-raw", HeaderValue::from_bytes(&[b'a', 0xFF, b'b']).unwrap());

    let meta = ResponseMeta::new(200, "OK", &headers);

    assert_eq!(meta.header("x-raw"), Some("a\u{FFFD}b"));
}

#[test]
fn fetch_response_exposes_meta_and_data() {
    let meta = ResponseMeta::new(500, "Internal Server Error", &sample_headers());
    let response = FetchResponse::new(meta.clone(), vec![9, 8, 7]);

    assert_eq!(response.meta(), &meta);
    assert_eq!(response.status(), 500);
    assert!(!response.is_success());
    assert_eq!(response.header("Etag"), meta.header("etag"));
    assert_eq!(response.headers(), meta.headers());
    assert_eq!(response.len(), 3);
    assert!(!response.is_empty());

    let (meta_back, data) = response.clone().into_parts();
    assert_eq!(meta_back, meta);
    assert_eq!(data, vec![9, 8, 7]);
    assert_eq!(response.into_data(), vec![9, 8, 7]);
}
