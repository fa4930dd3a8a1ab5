//! HTTP login frontend.
//!
//! Thin actix-web glue around [`crate::auth::Authenticator`]: a login form,
//! the POST handler that runs the composite flow, and cookie issuance for
//! the granted session values.
//!
//! ## Submodules
//!
//! - [`handlers`] — routes for `/`, `/login`, `/home`, `/health`
//! - [`cookies`] — session cookie construction
//! - [`dto`] — form payloads

pub mod cookies;
pub mod dto;
pub mod handlers;

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;

/// Connect to storage, ensure the schema, and serve the login flow.
///
/// Binds `BIND_ADDR` when set, `0.0.0.0:8080` otherwise.
pub async fn run() -> Result<(), std::io::Error> {
    let client = crate::database::db().await;
    crate::database::migrate(&client)
        .await
        .expect("schema migration failed");
    let client = web::Data::new(client);
    log::info!("starting login server");
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(client.clone())
            .route("/", web::get().to(handlers::index))
            .route("/health", web::get().to(handlers::health))
            .route("/login", web::get().to(handlers::form))
            .route("/login", web::post().to(handlers::login))
            .route("/home", web::get().to(handlers::home))
    })
    .bind(std::env::var("BIND_ADDR").unwrap_or_else(|_| String::from("0.0.0.0:8080")))?
    .run()
    .await
}
