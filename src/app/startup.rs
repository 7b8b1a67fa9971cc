use std::convert::TryInto;
use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::{
    web,
    App,
    HttpServer,
};
use tracing_actix_web::TracingLogger;
use url::Url;

use crate::app::configuration::{
    EmailClientSettings,
    Settings,
};
use crate::domain::ContactEmail;
use crate::email_client::EmailClient;
use crate::routes::*;

pub struct OfferRelayApp {
    pub server: Result<Server, std::io::Error>,
    pub port: u16,
}

impl OfferRelayApp {
    pub fn from(configuration: Settings) -> Result<OfferRelayApp, std::io::Error> {
        let tcp_listener = TcpListener::bind(configuration.application.binding_address())?;
        let port = tcp_listener.local_addr().unwrap().port();
        let email_client = web::Data::new(OfferRelayApp::email_client(configuration.email_client));

        // HttpServer handles all transport level concerns
        let server = HttpServer::new(move || {
            // App is where all the application logic lives: routing, middlewares, request
            // handlers, etc.
            App::new()
                .wrap(TracingLogger::default())
                // the browser form posts with whatever content type `fetch` picks,
                // so the JSON extractor must not insist on `application/json`;
                // its payload errors are shaped by `RouteError` to keep the
                // CORS headers on 400 responses.
                .app_data(
                    web::JsonConfig::default()
                        .content_type(|_mime| true)
                        .error_handler(|error, _request| RouteError::from(error).into()),
                )
                .route("/health_check", web::get().to(health_check))
                // any non-POST method on the relay endpoint falls through the
                // post guard into the catch-all 405 route, without ever
                // touching the payload.
                .service(
                    web::resource("/")
                        .route(web::post().to(send_offer))
                        .route(web::route().to(method_not_allowed)),
                )
                .app_data(email_client.clone())
        })
        .backlog(configuration.application.max_pending_connections)
        .listen(tcp_listener)
        .map(HttpServer::run);
        Ok(OfferRelayApp { port, server })
    }

    fn email_client(client_config: EmailClientSettings) -> EmailClient {
        let base_url = Url::parse(&client_config.base_url).unwrap_or_else(|e| {
            panic!(
                "invalid base url: {} for email client: {}",
                client_config.base_url, e
            )
        });

        let mailbox: ContactEmail = client_config
            .mailbox
            .try_into()
            .unwrap_or_else(|e| panic!("invalid mailbox address: {}", e));

        EmailClient::new(
            base_url,
            mailbox,
            client_config.token,
            client_config.timeout_secs,
        )
        .unwrap_or_else(|e| panic!("error building the email client: {}", e))
    }
}
