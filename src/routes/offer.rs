use std::convert::TryInto;

use actix_web::web::Data;
use actix_web::{
    web,
    HttpResponse,
};
use serde::Deserialize;
use serde_json::json;

use crate::domain::{
    Currency,
    MalformedInput,
    OfferRequest,
};
use crate::email_client::{
    EmailClient,
    EmailClientError,
};
use crate::routes::respond;
use crate::routes::RouteError;

#[derive(Deserialize)]
pub struct OfferPayload {
    email: String,
    subject: String,
    message: String,
    offer: f64,
    currency: Currency,
    domain: String,
}

#[tracing::instrument(
    name = "relaying domain offer",
    skip(payload, email_client),
    fields(
        email = %payload.email,
        domain = %payload.domain
    )
)]
pub async fn send_offer(
    payload: web::Json<OfferPayload>,
    email_client: web::Data<EmailClient>,
) -> Result<HttpResponse, RouteError> {
    let offer_request = build_offer_request(payload)?;

    relay_offer_email(email_client, &offer_request).await?;

    Ok(respond(None, None))
}

/// Catch-all for non-POST methods on the relay endpoint.
pub async fn method_not_allowed() -> HttpResponse {
    respond(
        Some(json!("Method not allowed")),
        Some(actix_web::http::StatusCode::METHOD_NOT_ALLOWED),
    )
}

#[tracing::instrument(name = "validating offer payload", skip(payload))]
fn build_offer_request(payload: web::Json<OfferPayload>) -> Result<OfferRequest, MalformedInput> {
    let payload = payload.into_inner();
    Ok(OfferRequest {
        email: payload.email.try_into().map_err(|e| {
            tracing::error!("{:?}", e);
            e
        })?,
        subject: payload.subject.try_into().map_err(|e| {
            tracing::error!("{:?}", e);
            e
        })?,
        message: payload.message,
        offer: payload.offer,
        currency: payload.currency,
        domain: payload.domain,
    })
}

#[tracing::instrument(name = "sending offer email", skip(email_client, offer_request))]
async fn relay_offer_email(
    email_client: Data<EmailClient>,
    offer_request: &OfferRequest,
) -> Result<(), EmailClientError> {
    email_client
        .send(
            &offer_request.email_subject(),
            &offer_request.email_body(),
        )
        .await
        .map_err(|e| {
            tracing::error!("{:?}", e);
            e
        })?;
    Ok(())
}
