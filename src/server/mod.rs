//! Server construction and middleware wiring.

mod config;

pub use config::{ConfigError, ServerConfig};

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use crate::Trace;
#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::{AccountService, FileRegistryService, PrivilegedCode, ProfileService};
use crate::inbound::http::auth::{login, register};
use crate::inbound::http::files::{create, list, record_download};
use crate::inbound::http::health::{live, ready};
use crate::inbound::http::profiles::{get_profile, update_profile};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::uploads::upload;
use crate::outbound::persistence::{DbPool, DieselFileStore, DieselUserStore};
use crate::outbound::storage::HttpContentStore;

/// Wire the services and adapters into handler state.
pub fn build_http_state(pool: DbPool, config: &ServerConfig) -> HttpState {
    let users = Arc::new(DieselUserStore::new(pool.clone()));
    let files = Arc::new(DieselFileStore::new(pool));
    let content = Arc::new(HttpContentStore::new(config.storage_base_url.clone()));

    HttpState::new(
        Arc::new(AccountService::new(
            users.clone(),
            PrivilegedCode::new(config.special_code.clone()),
        )),
        Arc::new(FileRegistryService::new(
            files.clone(),
            users.clone(),
            content,
        )),
        Arc::new(ProfileService::new(users, files)),
    )
}

/// Build the Actix application with every route and middleware attached.
pub fn build_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api/v1")
        .service(register)
        .service(login)
        .service(list)
        .service(create)
        .service(record_download)
        .service(upload)
        .service(get_profile)
        .service(update_profile);

    let app = App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .service(api)
        .service(live)
        .service(ready);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server for the given configuration and pool.
///
/// # Errors
///
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(pool: DbPool, config: ServerConfig) -> std::io::Result<Server> {
    let state = build_http_state(pool, &config);
    let server = HttpServer::new(move || build_app(state.clone()))
        .bind(config.bind_addr)?
        .run();
    Ok(server)
}
