use offer_relay::app::{
    load_configuration,
    setup_tracing,
    OfferRelayApp,
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing("offer-relay".into(), "info".into());
    let configuration = load_configuration()?;
    let app = OfferRelayApp::from(configuration)?;
    app.server?.await?;
    Ok(())
}
