//! Domain entities exposed by the admin panel service layer.

pub mod subscription;
pub mod user;
