use actix_cors::Cors;
use actix_files::Files;
use actix_identity::IdentityMiddleware;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware as actix_middleware, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use tera::Tera;

use crate::auth_api::HttpAuthApi;
use crate::middleware::RedirectUnauthorized;
use crate::models::config::ServerConfig;
use crate::repository::store::JsonStoreRepository;
use crate::routes::api::api_v1_users;
use crate::routes::auth::{
    forgot_password, forgot_password_page, logout, not_assigned, reset_password,
    reset_password_page, signin, signin_page, verify_otp, verify_otp_page,
};
use crate::routes::earnings::{show_earnings, upgrade_user};
use crate::routes::subscriptions::{
    create_subscription, create_subscription_page, delete_subscription, edit_subscription_page,
    save_subscription, show_index,
};

pub mod auth_api;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod middleware;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod routes;
pub mod services;

/// Role required to access the admin panel.
pub const SERVICE_ACCESS_ROLE: &str = "admin";

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let repo = JsonStoreRepository::open(&server_config.store_path)
        .map_err(|e| std::io::Error::other(format!("Failed to open store: {e}")))?;

    let auth_api = HttpAuthApi::new(&server_config.auth_service_url);

    // Keys and stores for identity, sessions, and flash messages.
    let secret_key = Key::from(server_config.secret.as_bytes());

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(message_framework.clone())
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .cookie_domain(Some(format!(".{}", server_config.domain)))
                    .build(),
            )
            .wrap(actix_middleware::Compress::default())
            .wrap(actix_middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(signin_page)
            .service(signin)
            .service(forgot_password_page)
            .service(forgot_password)
            .service(verify_otp_page)
            .service(verify_otp)
            .service(reset_password_page)
            .service(reset_password)
            .service(not_assigned)
            .service(web::scope("/api").service(api_v1_users))
            .service(
                web::scope("")
                    .wrap(RedirectUnauthorized)
                    .service(show_index)
                    .service(create_subscription_page)
                    .service(create_subscription)
                    .service(edit_subscription_page)
                    .service(save_subscription)
                    .service(delete_subscription)
                    .service(show_earnings)
                    .service(upgrade_user)
                    .service(logout),
            )
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(auth_api.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
