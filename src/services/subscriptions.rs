//! Subscription plan management.

use validator::Validate;

use crate::SERVICE_ACCESS_ROLE;
use crate::domain::subscription::Subscription;
use crate::forms::subscriptions::SaveSubscriptionForm;
use crate::models::auth::AuthenticatedUser;
use crate::repository::{SubscriptionReader, SubscriptionWriter};
use crate::routes::check_role;
use crate::services::{ServiceError, ServiceResult};

pub fn list_subscriptions<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<Vec<Subscription>>
where
    R: SubscriptionReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    repo.list_subscriptions().map_err(ServiceError::from)
}

pub fn get_subscription<R>(
    repo: &R,
    user: &AuthenticatedUser,
    id: &str,
) -> ServiceResult<Subscription>
where
    R: SubscriptionReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    repo.get_subscription_by_id(id)?
        .ok_or(ServiceError::NotFound)
}

/// Validates the form and persists a new plan.
pub fn create_subscription<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: SaveSubscriptionForm,
) -> ServiceResult<Subscription>
where
    R: SubscriptionWriter + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    validate_form(&form)?;

    repo.create_subscription(&form.to_new_subscription())
        .map_err(|err| {
            log::error!("Failed to create subscription: {err}");
            ServiceError::from(err)
        })
}

/// Validates the form and applies it to an existing plan.
pub fn update_subscription<R>(
    repo: &R,
    user: &AuthenticatedUser,
    id: &str,
    form: SaveSubscriptionForm,
) -> ServiceResult<Subscription>
where
    R: SubscriptionWriter + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    validate_form(&form)?;

    repo.update_subscription(id, &form.to_update_subscription())
        .map_err(|err| {
            log::error!("Failed to update subscription {id}: {err}");
            ServiceError::from(err)
        })
}

pub fn delete_subscription<R>(repo: &R, user: &AuthenticatedUser, id: &str) -> ServiceResult<()>
where
    R: SubscriptionWriter + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    repo.delete_subscription(id).map_err(|err| {
        log::error!("Failed to delete subscription {id}: {err}");
        ServiceError::from(err)
    })
}

fn validate_form(form: &SaveSubscriptionForm) -> ServiceResult<()> {
    if let Err(err) = form.validate() {
        log::error!("Failed to validate subscription form: {err}");
        return Err(ServiceError::Form(
            "Subscription name and price are required".to_string(),
        ));
    }
    if !form.has_features() {
        return Err(ServiceError::Form(
            "At least one feature is required".to_string(),
        ));
    }
    Ok(())
}
