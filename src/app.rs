pub use configuration::*;
pub use startup::OfferRelayApp;
pub use telemetry::setup_tracing;

mod configuration;
mod startup;
mod telemetry;
