use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use log::error;
use tera::{Context, Tera};

use crate::forms::subscriptions::SaveSubscriptionForm;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::store::JsonStoreRepository;
use crate::routes::{alert_level_to_str, redirect, render_template};
use crate::services::ServiceError;
use crate::services::subscriptions as subscription_service;

fn page_context(
    user: &AuthenticatedUser,
    flash_messages: &IncomingFlashMessages,
    server_config: &ServerConfig,
) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();
    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_user", user);
    context.insert("current_page", "subscriptions");
    context.insert("home_url", &server_config.auth_service_url);
    context
}

#[get("/")]
pub async fn show_index(
    user: AuthenticatedUser,
    repo: web::Data<JsonStoreRepository>,
    tera: web::Data<Tera>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let subscriptions = match subscription_service::list_subscriptions(repo.get_ref(), &user) {
        Ok(subscriptions) => subscriptions,
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(err) => {
            error!("Failed to list subscriptions: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = page_context(&user, &flash_messages, &server_config);
    context.insert("subscriptions", &subscriptions);

    render_template(&tera, "subscriptions/index.html", &context)
}

#[get("/subscriptions/create")]
pub async fn create_subscription_page(
    user: AuthenticatedUser,
    tera: web::Data<Tera>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let mut context = page_context(&user, &flash_messages, &server_config);
    context.insert("billing_period", "/month");
    render_template(&tera, "subscriptions/form.html", &context)
}

#[post("/subscriptions/create")]
pub async fn create_subscription(
    user: AuthenticatedUser,
    repo: web::Data<JsonStoreRepository>,
    body: String,
) -> impl Responder {
    let form: SaveSubscriptionForm = match serde_html_form::from_str(&body) {
        Ok(form) => form,
        Err(err) => {
            error!("Failed to parse subscription form: {err}");
            FlashMessage::error("Invalid form submission.".to_string()).send();
            return redirect("/subscriptions/create");
        }
    };

    match subscription_service::create_subscription(repo.get_ref(), &user, form) {
        Ok(subscription) => {
            FlashMessage::success(format!("Subscription \"{}\" created.", subscription.name))
                .send();
            redirect("/")
        }
        Err(ServiceError::Unauthorized) => redirect("/na"),
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/subscriptions/create")
        }
        Err(err) => {
            error!("Failed to create subscription: {err}");
            FlashMessage::error("Failed to create subscription.".to_string()).send();
            redirect("/subscriptions/create")
        }
    }
}

#[get("/subscriptions/edit/{id}")]
pub async fn edit_subscription_page(
    path: web::Path<String>,
    user: AuthenticatedUser,
    repo: web::Data<JsonStoreRepository>,
    tera: web::Data<Tera>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let id = path.into_inner();
    let subscription = match subscription_service::get_subscription(repo.get_ref(), &user, &id) {
        Ok(subscription) => subscription,
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Subscription not found.".to_string()).send();
            return redirect("/");
        }
        Err(err) => {
            error!("Failed to load subscription {id}: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = page_context(&user, &flash_messages, &server_config);
    context.insert("billing_period", {
        if subscription.billing_period.is_empty() {
            "/month"
        } else {
            subscription.billing_period.as_str()
        }
    });
    context.insert("subscription", &subscription);

    render_template(&tera, "subscriptions/form.html", &context)
}

#[post("/subscriptions/save/{id}")]
pub async fn save_subscription(
    path: web::Path<String>,
    user: AuthenticatedUser,
    repo: web::Data<JsonStoreRepository>,
    body: String,
) -> impl Responder {
    let id = path.into_inner();
    let form: SaveSubscriptionForm = match serde_html_form::from_str(&body) {
        Ok(form) => form,
        Err(err) => {
            error!("Failed to parse subscription form: {err}");
            FlashMessage::error("Invalid form submission.".to_string()).send();
            return redirect(&format!("/subscriptions/edit/{id}"));
        }
    };

    match subscription_service::update_subscription(repo.get_ref(), &user, &id, form) {
        Ok(subscription) => {
            FlashMessage::success(format!("Subscription \"{}\" updated.", subscription.name))
                .send();
            redirect("/")
        }
        Err(ServiceError::Unauthorized) => redirect("/na"),
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Subscription not found.".to_string()).send();
            redirect("/")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect(&format!("/subscriptions/edit/{id}"))
        }
        Err(err) => {
            error!("Failed to update subscription {id}: {err}");
            FlashMessage::error("Failed to update subscription.".to_string()).send();
            redirect(&format!("/subscriptions/edit/{id}"))
        }
    }
}

#[post("/subscriptions/delete/{id}")]
pub async fn delete_subscription(
    path: web::Path<String>,
    user: AuthenticatedUser,
    repo: web::Data<JsonStoreRepository>,
) -> impl Responder {
    let id = path.into_inner();
    match subscription_service::delete_subscription(repo.get_ref(), &user, &id) {
        Ok(()) => {
            FlashMessage::success("Subscription deleted.".to_string()).send();
        }
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Subscription not found.".to_string()).send();
        }
        Err(err) => {
            error!("Failed to delete subscription {id}: {err}");
            FlashMessage::error("Failed to delete subscription.".to_string()).send();
        }
    }
    redirect("/")
}
