use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{
    HttpResponse,
    ResponseError,
};
use custom_error::custom_error;
use serde_json::json;

use crate::domain::MalformedInput;
use crate::email_client::EmailClientError;
use crate::routes::respond;

custom_error! {
///! Error inside route handler
pub RouteError
    InvalidBody{source:MalformedInput} = "Invalid body data: {source}",
    InvalidJson{source:JsonPayloadError} = "Invalid body data: {source}",
    EmailError{source:EmailClientError} = "{source}",
}

impl ResponseError for RouteError {
    fn status_code(&self) -> StatusCode {
        match self {
            RouteError::InvalidBody { .. } | RouteError::InvalidJson { .. } => {
                StatusCode::BAD_REQUEST
            }
            RouteError::EmailError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            RouteError::InvalidBody { .. } | RouteError::InvalidJson { .. } => respond(
                Some(json!({ "error": self.to_string() })),
                Some(StatusCode::BAD_REQUEST),
            ),
            // the underlying delivery error is logged, never exposed
            RouteError::EmailError { .. } => respond(
                Some(json!(
                    "Error: relaying the offer email failed, please look at your logs."
                )),
                Some(StatusCode::INTERNAL_SERVER_ERROR),
            ),
        }
    }
}
