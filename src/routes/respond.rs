use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde_json::Value;

// The offer form is served from the parked domain itself, so every caller is
// cross-origin: CORS headers go on every single response shape.
const CORS_HEADERS: [(&str, &str); 4] = [
    ("Access-Control-Allow-Headers", "Content-Type,Authorization"),
    ("Access-Control-Allow-Methods", "OPTIONS,POST"),
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Max-Age", "86400"),
];

/// Shape the final HTTP response.
///
/// The status code is the explicit one when given, otherwise 200 with a body
/// and 204 without; the body is serialized JSON (empty when absent).
pub fn respond(body: Option<Value>, status_code: Option<StatusCode>) -> HttpResponse {
    let status = status_code.unwrap_or(if body.is_some() {
        StatusCode::OK
    } else {
        StatusCode::NO_CONTENT
    });
    let mut response = HttpResponse::build(status);
    response.insert_header(("Content-Type", "application/json"));
    for (name, value) in CORS_HEADERS.iter().copied() {
        response.insert_header((name, value));
    }
    match body {
        Some(body) => response.body(body.to_string()),
        None => response.finish(),
    }
}
