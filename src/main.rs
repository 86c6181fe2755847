use std::net::TcpListener;

use actix_web::web;
use anyhow::Context;
use burger_express::{contact_client::ContactClient, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 遥测初始化
    telemetry::init_subscriber(telemetry::get_subscriber(
        "burger-express",
        "info",
        std::io::stdout,
    ));

    let config = burger_express::config::config();
    let listener = TcpListener::bind(config.web.server_address())
        .with_context(|| format!("failed to bind {}.", config.web.server_address()))?;
    let contact_client = web::Data::new(ContactClient::from_config(&config.contact_client)?);

    tracing::info!(
        address = %config.web.server_address(),
        contact_base_url = %config.contact_client.base_url,
        "starting web server."
    );
    burger_express::run(listener, contact_client)?.await?;

    Ok(())
}
