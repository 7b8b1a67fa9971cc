use crate::domain::contact_email::ContactEmail;
use crate::domain::currency::Currency;
use crate::domain::offer_subject::OfferSubject;

/// A validated domain-offer form submission.
///
/// It is built from an incoming request body, turned into an email payload
/// and then discarded: it has no identity and is never persisted.
#[derive(Debug)]
pub struct OfferRequest {
    pub email: ContactEmail,
    pub subject: OfferSubject,
    pub message: String,
    pub offer: f64,
    pub currency: Currency,
    pub domain: String,
}

impl OfferRequest {
    pub fn email_subject(&self) -> String {
        format!("DOMAIN REQUEST: {}", self.subject.as_ref())
    }

    pub fn email_body(&self) -> String {
        format!(
            "Email: {}\nSubject: {}\nOffer: {} {}\nDomain: {}\n\n\nMessage:\n{}",
            self.email.as_ref(),
            self.subject.as_ref(),
            self.offer,
            self.currency,
            self.domain,
            self.message
        )
    }
}
