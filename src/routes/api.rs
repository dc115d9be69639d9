use actix_web::{HttpResponse, Responder, get, web};
use log::error;
use serde::Deserialize;

use crate::models::auth::AuthenticatedUser;
use crate::repository::store::JsonStoreRepository;
use crate::services::ServiceError;
use crate::services::earnings as earnings_service;

#[derive(Deserialize)]
struct ApiV1UsersQueryParams {
    query: String,
}

#[get("/v1/users")]
pub async fn api_v1_users(
    params: web::Query<ApiV1UsersQueryParams>,
    user: AuthenticatedUser,
    repo: web::Data<JsonStoreRepository>,
) -> impl Responder {
    match earnings_service::search_users(repo.get_ref(), &user, &params.query) {
        Ok(users) => HttpResponse::Ok().json(users),
        Err(ServiceError::Unauthorized) => HttpResponse::Unauthorized().finish(),
        Err(err) => {
            error!("Failed to list users: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
