//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::subscription::{NewSubscription, Subscription, UpdateSubscription};
use crate::domain::user::{AppUser, NewAppUser};
use crate::repository::errors::RepositoryResult;
use crate::repository::{SubscriptionReader, SubscriptionWriter, UserReader, UserWriter};

mock! {
    pub Repository {}

    impl UserReader for Repository {
        fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<AppUser>>;
        fn list_users(&self) -> RepositoryResult<Vec<AppUser>>;
    }

    impl UserWriter for Repository {
        fn create_users(&self, new_users: &[NewAppUser]) -> RepositoryResult<usize>;
        fn set_premium(&self, user_id: i32, premium: bool) -> RepositoryResult<AppUser>;
    }

    impl SubscriptionReader for Repository {
        fn get_subscription_by_id(&self, id: &str) -> RepositoryResult<Option<Subscription>>;
        fn list_subscriptions(&self) -> RepositoryResult<Vec<Subscription>>;
    }

    impl SubscriptionWriter for Repository {
        fn create_subscription(&self, new: &NewSubscription) -> RepositoryResult<Subscription>;
        fn update_subscription(
            &self,
            id: &str,
            updates: &UpdateSubscription,
        ) -> RepositoryResult<Subscription>;
        fn delete_subscription(&self, id: &str) -> RepositoryResult<()>;
    }
}
