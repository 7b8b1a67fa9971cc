pub use client::EmailClient;
pub use errors::EmailClientError;

mod client;
mod errors;
mod request;
