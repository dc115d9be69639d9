use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate)]
/// Sign-in credentials.
pub struct LoginForm {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Deserialize, Validate)]
/// Email address the one-time code is sent to.
pub struct ForgotPasswordForm {
    #[validate(email)]
    pub email: String,
}

#[derive(Deserialize, Validate)]
/// One-time code confirmation.
pub struct VerifyOtpForm {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 4))]
    pub otp: String,
}

#[derive(Deserialize, Validate)]
/// New password submitted after OTP verification.
pub struct ResetPasswordForm {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 4))]
    pub otp: String,
    #[validate(length(min = 8))]
    pub new_password: String,
}
