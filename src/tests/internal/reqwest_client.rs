//! reqwest 传输层测试：用 wiremock 起本地 HTTP 服务，走真实的网络读取流程。

use reqwest::Method;
use wiremock::matchers::{body_bytes, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::fetcher::{FetchError, StreamingFetcher};
use crate::tests::{Recorded, RecordingSink, init_tracing};
use crate::transport::{FetchRequest, HttpClientConfig, ReqwestHttpClient};

fn fetcher() -> (StreamingFetcher<ReqwestHttpClient>, RecordingSink) {
    init_tracing();
    let sink = RecordingSink::default();
    let fetcher = StreamingFetcher::with_reqwest(&HttpClientConfig::default())
        .unwrap()
        .with_sink(sink.clone());
    (fetcher, sink)
}

#[tokio::test]
async fn downloads_body_with_content_length() {
    let server = MockServer::start().await;
    let body: Vec<u8> = (0..=255u8).cycle().take(64 * 1024).collect();
    Mock::given(method("GET"))
        .and(path("/grammalecte/db.db"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(body.clone())
                .insert_header("content-type", "application/octet-stream"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (fetcher, sink) = fetcher();
    let request = FetchRequest::new(&format!("{}/grammalecte/db.db", server.uri())).unwrap();

    let response = fetcher.fetch(&request).await.unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.status_text(), "OK");
    assert_eq!(response.header("Content-Type"), Some("application/octet-stream"));
    assert_eq!(response.data(), body.as_slice());

    let values = sink.progress_values();
    assert!(!values.is_empty());
    assert_eq!(*values.last().unwrap(), body.len() as u64);
    for event in sink.events() {
        if let Recorded::Progress {
            declared_length, ..
        } = event
        {
            assert_eq!(declared_length, Some(body.len() as u64));
        }
    }
    assert_eq!(sink.done_count(), 1);
}

#[tokio::test]
async fn not_found_is_a_regular_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("missing"))
        .mount(&server)
        .await;

    let (fetcher, sink) = fetcher();
    let request = FetchRequest::new(&format!("{}/nope", server.uri())).unwrap();

    let response = fetcher.fetch(&request).await.unwrap();

    assert_eq!(response.status(), 404);
    assert_eq!(response.status_text(), "Not Found");
    assert_eq!(response.data(), b"missing");
    assert_eq!(sink.error_count(), 0);
}

/// 请求方法、请求头与请求体原样透传。
#[tokio::test]
async fn request_options_are_passed_through() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .and(header("x-token", "abc"))
        .and(body_bytes(b"hello".to_vec()))
        .respond_with(ResponseTemplate::new(201).set_body_bytes(b"created".to_vec()))
        .expect(1)
        .mount(&server)
        .await;

    let (fetcher, _sink) = fetcher();
    let base = url::Url::parse(&format!("{}/", server.uri())).unwrap();
    let request = FetchRequest::resolve(&base, "./upload")
        .unwrap()
        .method(Method::POST)
        .header("X-Token", "abc")
        .unwrap()
        .body("hello");

    let response = fetcher.fetch(&request).await.unwrap();

    assert_eq!(response.status(), 201);
    assert_eq!(response.data(), b"created");
}

/// 连接被拒绝：失败事件一次，原始 reqwest 错误可取回。
#[tokio::test]
async fn connection_refused_is_transport_error() {
    // 先占用一个端口再释放，保证该端口上没有服务
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let (fetcher, sink) = fetcher();
    let request = FetchRequest::new(&format!("http://127.0.0.1:{}/file", port)).unwrap();

    let err = fetcher.fetch(&request).await.unwrap_err();

    assert!(matches!(err, FetchError::Transport(_)));
    let source = err
        .transport_source()
        .and_then(|e| e.downcast_ref::<reqwest::Error>())
        .expect("应为 reqwest::Error");
    assert!(source.is_connect());

    assert_eq!(
        sink.events(),
        vec![Recorded::Error {
            url: request.url().to_string(),
            message: err.to_string(),
        }]
    );
}

#[test]
fn client_config_defaults() {
    let config = HttpClientConfig::default();
    assert!(config.user_agent.starts_with("fetch_progress/"));
    assert!(ReqwestHttpClient::new(&config).is_ok());
}
