use std::net::TcpListener;

use actix_web::{dev::Server, web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::{contact_client::ContactClient, routes};

pub fn run(
    listener: TcpListener,
    contact_client: web::Data<ContactClient>,
) -> Result<Server, std::io::Error> {
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(contact_client.clone())
            .route("/", web::get().to(routes::home))
            .route("/contact", web::post().to(routes::contact))
            .route("/health_check", web::get().to(routes::health_check))
    })
    .listen(listener)?
    .run();

    Ok(server)
}
