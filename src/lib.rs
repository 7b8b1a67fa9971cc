//! `offer-relay` receives domain-offer form submissions over HTTP and
//! relays them as plain-text emails through an external email-sending API.

pub mod app;
pub mod domain;
pub mod email_client;
pub mod routes;
