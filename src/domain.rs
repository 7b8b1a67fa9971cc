pub use contact_email::ContactEmail;
pub use currency::Currency;
pub use errors::MalformedInput;
pub use offer_request::OfferRequest;
pub use offer_subject::OfferSubject;

mod contact_email;
mod currency;
mod errors;
mod offer_request;
mod offer_subject;
