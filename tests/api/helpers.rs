use reqwest::Response;
use serde_json::{
    json,
    Value,
};
use wiremock::MockServer;

use offer_relay::app::{
    load_configuration,
    setup_tracing,
    OfferRelayApp,
};

// ensure the `tracing` is instantiated only once
lazy_static::lazy_static! {
 static ref TRACING: () = setup_tracing("test".into(),"debug".into());
}

pub struct TestApp {
    pub address: String,
    pub email_server: MockServer,
    pub port: u16,
}

/// When a `tokio` runtime is shut down all tasks spawned on it are dropped.
///
/// `actix_rt::test` spins up a new runtime at the beginning of each test case
/// and they shut down at the end of each test case.
pub async fn spawn_app() -> TestApp {
    lazy_static::initialize(&TRACING);
    let email_server = MockServer::start().await;

    let configuration = {
        let mut c = load_configuration().unwrap();
        c.application.port = 0;
        c.email_client.base_url = email_server.uri();
        c
    };

    let app = OfferRelayApp::from(configuration).expect("error building app");
    let port = app.port;

    tokio::spawn(app.server.expect("error building server"));

    TestApp {
        // the request is done with the protocol:ip:port
        address: format!("http://127.0.0.1:{}", port),
        email_server,
        port,
    }
}

pub fn valid_offer_body() -> Value {
    json!({
        "email": "a@b.com",
        "subject": "Hi",
        "message": "Test",
        "offer": 500,
        "currency": "USD",
        "domain": "x.com"
    })
}

pub async fn send_json_post_request(endpoint: &str, body: &Value) -> Response {
    reqwest::Client::new()
        .post(endpoint)
        .json(&body)
        .send()
        .await
        .expect("Fail to execute post request")
}

pub async fn send_get_request(endpoint: &str) -> Response {
    reqwest::Client::new()
        .get(endpoint)
        .send()
        .await
        .expect("Fail to execute get request")
}

pub async fn send_request(method: reqwest::Method, endpoint: &str) -> Response {
    reqwest::Client::new()
        .request(method, endpoint)
        .send()
        .await
        .expect("Fail to execute request")
}

pub fn assert_cors_headers(response: &Response) {
    let headers = response.headers();
    assert_eq!("application/json", headers.get("Content-Type").unwrap());
    assert_eq!("*", headers.get("Access-Control-Allow-Origin").unwrap());
    assert_eq!(
        "OPTIONS,POST",
        headers.get("Access-Control-Allow-Methods").unwrap()
    );
    assert_eq!(
        "Content-Type,Authorization",
        headers.get("Access-Control-Allow-Headers").unwrap()
    );
    assert_eq!("86400", headers.get("Access-Control-Max-Age").unwrap());
}
