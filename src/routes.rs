pub use errors::RouteError;
pub use health_check::health_check;
pub use offer::{
    method_not_allowed,
    send_offer,
};
pub use respond::respond;

mod errors;
mod health_check;
mod offer;
mod respond;
