use crate::domain::subscription::{NewSubscription, Subscription, UpdateSubscription};
use crate::domain::user::{AppUser, NewAppUser};
use crate::repository::errors::RepositoryResult;

pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod store;

pub trait UserReader {
    fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<AppUser>>;
    /// Returns a snapshot of all users; searching and paging happen in memory.
    fn list_users(&self) -> RepositoryResult<Vec<AppUser>>;
}

pub trait UserWriter {
    fn create_users(&self, new_users: &[NewAppUser]) -> RepositoryResult<usize>;
    fn set_premium(&self, user_id: i32, premium: bool) -> RepositoryResult<AppUser>;
}

pub trait SubscriptionReader {
    fn get_subscription_by_id(&self, id: &str) -> RepositoryResult<Option<Subscription>>;
    fn list_subscriptions(&self) -> RepositoryResult<Vec<Subscription>>;
}

pub trait SubscriptionWriter {
    fn create_subscription(&self, new: &NewSubscription) -> RepositoryResult<Subscription>;
    fn update_subscription(
        &self,
        id: &str,
        updates: &UpdateSubscription,
    ) -> RepositoryResult<Subscription>;
    fn delete_subscription(&self, id: &str) -> RepositoryResult<()>;
}
