pub mod auth;
pub mod earnings;
pub mod subscriptions;
