use actix_identity::Identity;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use log::error;
use tera::{Context, Tera};
use validator::Validate;

use crate::auth_api::HttpAuthApi;
use crate::forms::auth::{ForgotPasswordForm, LoginForm, ResetPasswordForm, VerifyOtpForm};
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::routes::{alert_level_to_str, redirect, render_template};
use crate::services::auth as auth_service;

fn auth_context(flash_messages: &IncomingFlashMessages) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();
    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context
}

/// Redirect to an auth page carrying the email in the query string.
pub fn email_redirect(path: &str, email: &str) -> HttpResponse {
    redirect(&format!("{path}?email={}", urlencoding::encode(email)))
}

#[get("/auth/signin")]
pub async fn signin_page(
    tera: web::Data<Tera>,
    flash_messages: IncomingFlashMessages,
) -> impl Responder {
    let context = auth_context(&flash_messages);
    render_template(&tera, "auth/signin.html", &context)
}

#[post("/auth/signin")]
pub async fn signin(
    req: HttpRequest,
    auth: web::Data<HttpAuthApi>,
    web::Form(form): web::Form<LoginForm>,
) -> impl Responder {
    if form.validate().is_err() {
        FlashMessage::error("Please enter a valid email address and password.".to_string()).send();
        return redirect("/auth/signin");
    }

    match auth_service::login(auth.get_ref(), &form.email, &form.password).await {
        Ok(token) => {
            if let Err(err) = Identity::login(&req.extensions(), token) {
                error!("Failed to create identity session: {err}");
                return HttpResponse::InternalServerError().finish();
            }
            redirect("/")
        }
        Err(err) => {
            error!("Failed to sign in {}: {err}", form.email);
            FlashMessage::error("Invalid email or password.".to_string()).send();
            redirect("/auth/signin")
        }
    }
}

#[get("/auth/forgot")]
pub async fn forgot_password_page(
    tera: web::Data<Tera>,
    flash_messages: IncomingFlashMessages,
) -> impl Responder {
    let context = auth_context(&flash_messages);
    render_template(&tera, "auth/forgot_password.html", &context)
}

#[post("/auth/forgot")]
pub async fn forgot_password(
    auth: web::Data<HttpAuthApi>,
    web::Form(form): web::Form<ForgotPasswordForm>,
) -> impl Responder {
    if form.validate().is_err() {
        FlashMessage::error("Please enter a valid email address.".to_string()).send();
        return redirect("/auth/forgot");
    }

    match auth_service::send_otp(auth.get_ref(), &form.email).await {
        Ok(message) => {
            FlashMessage::success(message).send();
            email_redirect("/auth/verify", &form.email)
        }
        Err(err) => {
            error!("Failed to send OTP to {}: {err}", form.email);
            FlashMessage::error("Failed to send reset email. Please try again.".to_string()).send();
            redirect("/auth/forgot")
        }
    }
}

#[derive(serde::Deserialize)]
struct VerifyQueryParams {
    email: Option<String>,
}

#[get("/auth/verify")]
pub async fn verify_otp_page(
    params: web::Query<VerifyQueryParams>,
    tera: web::Data<Tera>,
    flash_messages: IncomingFlashMessages,
) -> impl Responder {
    let mut context = auth_context(&flash_messages);
    if let Some(email) = &params.email {
        context.insert("email", email);
    }
    render_template(&tera, "auth/verify_otp.html", &context)
}

#[post("/auth/verify")]
pub async fn verify_otp(
    auth: web::Data<HttpAuthApi>,
    web::Form(form): web::Form<VerifyOtpForm>,
) -> impl Responder {
    if form.validate().is_err() {
        FlashMessage::error("Please enter the code sent to your email.".to_string()).send();
        return email_redirect("/auth/verify", &form.email);
    }

    match auth_service::verify_otp(auth.get_ref(), &form.email, &form.otp).await {
        Ok(message) => {
            FlashMessage::success(message).send();
            email_redirect("/auth/reset", &form.email)
        }
        Err(err) => {
            error!("Failed to verify OTP for {}: {err}", form.email);
            FlashMessage::error("Invalid or expired code.".to_string()).send();
            email_redirect("/auth/verify", &form.email)
        }
    }
}

#[get("/auth/reset")]
pub async fn reset_password_page(
    params: web::Query<VerifyQueryParams>,
    tera: web::Data<Tera>,
    flash_messages: IncomingFlashMessages,
) -> impl Responder {
    let mut context = auth_context(&flash_messages);
    if let Some(email) = &params.email {
        context.insert("email", email);
    }
    render_template(&tera, "auth/reset_password.html", &context)
}

#[post("/auth/reset")]
pub async fn reset_password(
    auth: web::Data<HttpAuthApi>,
    web::Form(form): web::Form<ResetPasswordForm>,
) -> impl Responder {
    if form.validate().is_err() {
        FlashMessage::error("Password must be at least 8 characters.".to_string()).send();
        return email_redirect("/auth/reset", &form.email);
    }

    match auth_service::reset_password(auth.get_ref(), &form.email, &form.otp, &form.new_password)
        .await
    {
        Ok(message) => {
            FlashMessage::success(message).send();
            redirect("/auth/signin")
        }
        Err(err) => {
            error!("Failed to reset password for {}: {err}", form.email);
            FlashMessage::error("Failed to reset password. Please try again.".to_string()).send();
            email_redirect("/auth/reset", &form.email)
        }
    }
}

#[post("/logout")]
pub async fn logout(user: Identity) -> impl Responder {
    user.logout();
    redirect("/auth/signin")
}

#[get("/na")]
pub async fn not_assigned(
    user: AuthenticatedUser,
    tera: web::Data<Tera>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let mut context = auth_context(&flash_messages);
    context.insert("current_user", &user);
    context.insert("current_page", "na");
    context.insert("home_url", &server_config.auth_service_url);

    render_template(&tera, "main/not_assigned.html", &context)
}
