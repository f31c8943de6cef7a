//! 请求描述测试：绝对地址、相对地址解析、请求参数。

use reqwest::Method;
use url::Url;

use crate::transport::{FetchRequest, RequestBuildError, RequestOptions};

#[test]
fn absolute_url_defaults_to_get() {
    let request = FetchRequest::new("https://example.com/grammalecte/db.db").unwrap();

    assert_eq!(request.url().as_str(), "https://example.com/grammalecte/db.db");
    assert_eq!(request.options().method, Method::GET);
    assert!(request.options().headers.is_empty());
    assert!(request.options().body.is_none());
}

#[test]
fn relative_url_is_rejected_without_base() {
    let err = FetchRequest::new("./files/a.db").unwrap_err();
    assert!(matches!(err, RequestBuildError::InvalidUrl(_)));
}

#[test]
fn relative_url_resolves_against_base() {
    let base = Url::parse("http://localhost:8080/dav/").unwrap();

    let request = FetchRequest::resolve(&base, "./files/a.db").unwrap();
    assert_eq!(request.url().as_str(), "http://localhost:8080/dav/files/a.db");

    let request = FetchRequest::resolve(&base, "https://cdn.example.com/b.db").unwrap();
    assert_eq!(request.url().as_str(), "https://cdn.example.com/b.db");
}

#[test]
fn options_are_kept_verbatim() {
    let request = FetchRequest::new("http://localhost/upload")
        .unwrap()
        .method(Method::POST)
        .header("X-Trace", "1")
        .unwrap()
        .header("x-trace", "2")
        .unwrap()
        .body("payload");

    let options = request.options();
    assert_eq!(options.method, Method::POST);
    let values: Vec<_> = options.headers.get_all("x-trace").iter().collect();
    assert_eq!(values, vec!["1", "2"]);
    assert_eq!(options.body.as_deref(), Some(&b"payload"[..]));
}

#[test]
fn invalid_header_is_rejected() {
    let request = FetchRequest::new("http://localhost/").unwrap();
    assert!(matches!(
        request.clone().header("bad header", "v"),
        Err(RequestBuildError::InvalidHeaderName(_))
    ));
    assert!(matches!(
        request.header("x-ok", "line\nbreak"),
        Err(RequestBuildError::InvalidHeaderValue(_))
    ));
}

#[test]
fn with_options_replaces_everything() {
    let request = FetchRequest::new("http://localhost/")
        .unwrap()
        .method(Method::DELETE)
        .with_options(RequestOptions::default());

    assert_eq!(request.options().method, Method::GET);
}
