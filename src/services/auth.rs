//! Sign-in and password recovery flows, delegated to the auth service.

use crate::auth_api::AuthApi;
use crate::services::{ServiceError, ServiceResult};

/// Exchanges credentials for the JWT stored in the identity cookie.
pub async fn login<A>(auth: &A, email: &str, password: &str) -> ServiceResult<String>
where
    A: AuthApi + ?Sized,
{
    let response = auth.login(email, password).await?;
    Ok(response.access_token)
}

/// Asks the auth service to email a one-time code to `email`.
pub async fn send_otp<A>(auth: &A, email: &str) -> ServiceResult<String>
where
    A: AuthApi + ?Sized,
{
    let status = auth.send_otp(email).await?;
    if status.status {
        Ok(status.message)
    } else {
        Err(ServiceError::Auth(status.message))
    }
}

/// Confirms the one-time code previously sent to `email`.
pub async fn verify_otp<A>(auth: &A, email: &str, otp: &str) -> ServiceResult<String>
where
    A: AuthApi + ?Sized,
{
    let status = auth.verify_email(email, otp).await?;
    if status.status {
        Ok(status.message)
    } else {
        Err(ServiceError::Auth(status.message))
    }
}

/// Sets a new password after OTP verification.
pub async fn reset_password<A>(
    auth: &A,
    email: &str,
    otp: &str,
    new_password: &str,
) -> ServiceResult<String>
where
    A: AuthApi + ?Sized,
{
    let status = auth.reset_password(email, otp, new_password).await?;
    if status.status {
        Ok(status.message)
    } else {
        Err(ServiceError::Auth(status.message))
    }
}
