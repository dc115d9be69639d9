use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use log::error;
use serde::Deserialize;
use tera::{Context, Tera};

use crate::dto::earnings::EarningsQuery;
use crate::forms::earnings::UpgradeUserForm;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::store::JsonStoreRepository;
use crate::routes::{alert_level_to_str, redirect, render_template};
use crate::services::ServiceError;
use crate::services::earnings as earnings_service;

#[derive(Deserialize)]
struct EarningsQueryParams {
    q: Option<String>,
    page: Option<usize>,
}

#[get("/earnings")]
pub async fn show_earnings(
    params: web::Query<EarningsQueryParams>,
    user: AuthenticatedUser,
    repo: web::Data<JsonStoreRepository>,
    tera: web::Data<Tera>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let params = params.into_inner();
    let data = match earnings_service::load_earnings_page(
        repo.get_ref(),
        &user,
        EarningsQuery {
            q: params.q,
            page: params.page,
        },
    ) {
        Ok(data) => data,
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => {
            error!("Failed to load earnings page: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_user", &user);
    context.insert("current_page", "earnings");
    context.insert("home_url", &server_config.auth_service_url);
    context.insert("users", &data.users);
    context.insert("total", &data.total);
    if let Some(q) = &data.search_query {
        context.insert("search_query", q);
    }

    render_template(&tera, "earnings/index.html", &context)
}

#[post("/earnings/upgrade")]
pub async fn upgrade_user(
    user: AuthenticatedUser,
    repo: web::Data<JsonStoreRepository>,
    web::Form(form): web::Form<UpgradeUserForm>,
) -> impl Responder {
    match earnings_service::upgrade_to_premium(repo.get_ref(), &user, form.user_id) {
        Ok(upgraded) => {
            FlashMessage::success(format!("{} now has premium access.", upgraded.name)).send();
        }
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(ServiceError::NotFound) => {
            FlashMessage::error("User not found.".to_string()).send();
        }
        Err(err) => {
            error!("Failed to upgrade user: {err}");
            FlashMessage::error("Failed to upgrade user.".to_string()).send();
        }
    }
    redirect("/earnings")
}
