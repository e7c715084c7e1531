use crate::common::{config_for, COOKIE, LISTING_PATH, TWO_RESULTS};
use find_dentist::listing::build_http_client;
use find_dentist::{DentistError, HttpListingSource, ListingSource};
use std::io::{Read, Write};
use std::net::TcpListener;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_fetch_sends_cookie_and_no_cache() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(LISTING_PATH))
        .and(query_param("ioutput", "ajax"))
        .and(header("Cookie", COOKIE))
        .and(header("Cache-Control", "no-cache"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(TWO_RESULTS)
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = config_for(&mock_server);
    let client = build_http_client().expect("Failed to build client");
    let source = HttpListingSource::new(client, &config.listing_url, &config.cookie);

    let body = source.fetch_listing().await.expect("Fetch failed");
    assert_eq!(body, TWO_RESULTS);
}

#[tokio::test]
async fn test_fetch_error_status_is_fatal() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(LISTING_PATH))
        .respond_with(ResponseTemplate::new(403).set_body_string("Access denied"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = config_for(&mock_server);
    let client = build_http_client().expect("Failed to build client");
    let source = HttpListingSource::new(client, &config.listing_url, &config.cookie);

    let result = source.fetch_listing().await;
    match result {
        Err(DentistError::Http { url, source: err }) => {
            assert_eq!(url, config.listing_url);
            assert_eq!(err.status().map(|s| s.as_u16()), Some(403));
        }
        other => panic!("expected Http error, got {:?}", other),
    }
}

/// Serves one connection with a hand-written response and returns the listing URL
///
/// wiremock only produces well-formed responses, so the directory server's
/// header quirks are reproduced on a bare socket.
fn serve_raw_once(head: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind listener");
    let addr = listener.local_addr().expect("Failed to read local address");

    std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("Failed to accept connection");

        // Drain the request head before answering
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            match stream.read(&mut buf) {
                Ok(0) | Err(_) => break,
                Ok(n) => request.extend_from_slice(&buf[..n]),
            }
        }

        let response = format!(
            "HTTP/1.1 200 OK\r\n{}Content-Length: 2\r\nConnection: close\r\n\r\nok",
            head
        );
        let _ = stream.write_all(response.as_bytes());
        let _ = stream.flush();
    });

    format!("http://{}{}", addr, LISTING_PATH)
}

async fn fetch_from_raw(head: &'static str) -> Result<String, DentistError> {
    let url = serve_raw_once(head);
    let client = build_http_client().expect("Failed to build client");
    HttpListingSource::new(client, url, COOKIE)
        .fetch_listing()
        .await
}

#[tokio::test]
async fn test_fetch_tolerates_space_before_colon() {
    let body = fetch_from_raw("X-Bad : x\r\n").await.expect("Fetch failed");
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn test_fetch_tolerates_folded_header() {
    let body = fetch_from_raw("X-Folded: first\r\n second\r\n")
        .await
        .expect("Fetch failed");
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn test_fetch_tolerates_invalid_header_name() {
    let body = fetch_from_raw("X{Bad}: x\r\n").await.expect("Fetch failed");
    assert_eq!(body, "ok");
}
