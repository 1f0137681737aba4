//! End-to-end tests against a live listener.
//!
//! These exercise the real accept loop over TCP rather than calling the
//! router in-process. Each test binds its own ephemeral port so tests run
//! in parallel without colliding; the fixed production port is only a
//! constant, never bound here.

use std::net::SocketAddr;

use scratch_hello::config::GREETING;
use scratch_hello::http::{bind, serve, ServerError};
use scratch_hello::routes::create_router;

/// Start the service on an ephemeral port and return its address.
async fn spawn_server() -> SocketAddr {
    let listener = bind("127.0.0.1:0").await.expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(serve(listener, create_router()));
    addr
}

#[tokio::test]
async fn serves_greeting_over_tcp() {
    let addr = spawn_server().await;

    let response = reqwest::get(format!("http://{addr}/"))
        .await
        .expect("request");

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.expect("body"), GREETING);
}

#[tokio::test]
async fn deep_path_gets_greeting() {
    let addr = spawn_server().await;

    let response = reqwest::get(format!("http://{addr}/anything/at/all"))
        .await
        .expect("request");

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.expect("body"), GREETING);
}

#[tokio::test]
async fn post_payload_is_ignored() {
    let addr = spawn_server().await;

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/"))
        .body("payload the service never reads")
        .send()
        .await
        .expect("request");

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.expect("body"), GREETING);
}

#[tokio::test]
async fn concurrent_requests_all_get_greeting() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();

    let requests = (0..100).map(|i| {
        let client = client.clone();
        let url = format!("http://{addr}/client/{i}");
        async move {
            let response = client.get(&url).send().await.expect("request");
            assert_eq!(response.status(), 200);
            response.text().await.expect("body")
        }
    });

    for body in futures::future::join_all(requests).await {
        assert_eq!(body, GREETING);
    }
}

#[tokio::test]
async fn occupied_port_fails_startup() {
    let occupied = bind("127.0.0.1:0").await.expect("bind first listener");
    let addr = occupied.local_addr().expect("local addr").to_string();

    let err = bind(&addr).await.expect_err("second bind must fail");
    assert!(matches!(err, ServerError::Bind { .. }));
}
