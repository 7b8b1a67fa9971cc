use std::time::Duration;

use derivative::Derivative;
use reqwest::{
    Client,
    Url,
};

use crate::domain::ContactEmail;
use crate::email_client::errors::EmailClientError;
use crate::email_client::request::EmailRequest;

#[derive(Derivative)]
#[derivative(Debug)]
pub struct EmailClient {
    http_client: Client,
    base_url: Url,
    mailbox: ContactEmail,
    #[derivative(Debug = "ignore")]
    token: String,
}

impl EmailClient {
    pub fn new(
        base_url: Url,
        mailbox: ContactEmail,
        token: String,
        timeout_secs: u64,
    ) -> Result<Self, EmailClientError> {
        Ok(Self {
            http_client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()?,
            base_url,
            mailbox,
            token,
        })
    }

    /// Deliver a plain-text email to the configured mailbox.
    pub async fn send(&self, subject: &str, text_body: &str) -> Result<(), EmailClientError> {
        let response = self
            .http_client
            .post(self.base_url.join("send")?)
            .header("Content-Type", "application/json")
            .header("Authorization", self.token.as_str())
            .json(&EmailRequest::new(self.mailbox.as_ref(), subject, text_body))
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(EmailClientError::ErrorResponse {
                canonical_reason: status.canonical_reason().unwrap_or("unknown").to_string(),
                code: status.as_str().to_string(),
                is_client_error: status.is_client_error(),
                is_server_error: status.is_server_error(),
            })
        }
    }
}
