//! JSON-file backed repository.
//!
//! The whole store is a single JSON document loaded at startup and rewritten
//! on every mutation. A missing store file is seeded with the default
//! subscription plans so a fresh deployment has something to show.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::subscription::{NewSubscription, Subscription, UpdateSubscription};
use crate::domain::user::{AppUser, NewAppUser};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{SubscriptionReader, SubscriptionWriter, UserReader, UserWriter};

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreState {
    next_user_id: i32,
    users: Vec<AppUser>,
    subscriptions: Vec<Subscription>,
}

/// Shared handle over the on-disk JSON store.
#[derive(Clone)]
pub struct JsonStoreRepository {
    path: PathBuf,
    state: Arc<RwLock<StoreState>>,
}

impl JsonStoreRepository {
    /// Opens the store at `path`, seeding defaults when the file is missing.
    pub fn open(path: impl AsRef<Path>) -> RepositoryResult<Self> {
        let path = path.as_ref().to_path_buf();

        let state = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            serde_json::from_str(&contents)?
        } else {
            StoreState {
                next_user_id: 1,
                users: Vec::new(),
                subscriptions: default_subscriptions(),
            }
        };

        let repo = Self {
            path,
            state: Arc::new(RwLock::new(state)),
        };
        repo.persist(&*repo.read()?)?;

        Ok(repo)
    }

    fn read(&self) -> RepositoryResult<RwLockReadGuard<'_, StoreState>> {
        self.state
            .read()
            .map_err(|_| RepositoryError::Unexpected("store lock poisoned".to_string()))
    }

    fn write(&self) -> RepositoryResult<RwLockWriteGuard<'_, StoreState>> {
        self.state
            .write()
            .map_err(|_| RepositoryError::Unexpected("store lock poisoned".to_string()))
    }

    /// Writes the state to a sibling temp file and renames it into place.
    fn persist(&self, state: &StoreState) -> RepositoryResult<()> {
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, serde_json::to_string_pretty(state)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl UserReader for JsonStoreRepository {
    fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<AppUser>> {
        let state = self.read()?;
        Ok(state.users.iter().find(|u| u.id == id).cloned())
    }

    fn list_users(&self) -> RepositoryResult<Vec<AppUser>> {
        let state = self.read()?;
        Ok(state.users.clone())
    }
}

impl UserWriter for JsonStoreRepository {
    fn create_users(&self, new_users: &[NewAppUser]) -> RepositoryResult<usize> {
        let mut state = self.write()?;
        let now = Utc::now().naive_utc();

        for new_user in new_users {
            let id = state.next_user_id;
            state.next_user_id += 1;
            state.users.push(AppUser {
                id,
                sl_no: format!("#BI{id:05}"),
                name: new_user.name.clone(),
                email: new_user.email.clone(),
                contact_number: new_user.contact_number.clone(),
                country: new_user.country.clone(),
                profile_image: new_user.profile_image.clone(),
                premium: false,
                created_at: now,
            });
        }

        self.persist(&state)?;
        Ok(new_users.len())
    }

    fn set_premium(&self, user_id: i32, premium: bool) -> RepositoryResult<AppUser> {
        let mut state = self.write()?;
        let user = state
            .users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(RepositoryError::NotFound)?;
        user.premium = premium;
        let updated = user.clone();

        self.persist(&state)?;
        Ok(updated)
    }
}

impl SubscriptionReader for JsonStoreRepository {
    fn get_subscription_by_id(&self, id: &str) -> RepositoryResult<Option<Subscription>> {
        let state = self.read()?;
        Ok(state.subscriptions.iter().find(|s| s.id == id).cloned())
    }

    fn list_subscriptions(&self) -> RepositoryResult<Vec<Subscription>> {
        let state = self.read()?;
        Ok(state.subscriptions.clone())
    }
}

impl SubscriptionWriter for JsonStoreRepository {
    fn create_subscription(&self, new: &NewSubscription) -> RepositoryResult<Subscription> {
        let mut state = self.write()?;
        let subscription = Subscription {
            id: Uuid::new_v4().to_string(),
            name: new.name.clone(),
            price: new.price.clone(),
            billing_period: new.billing_period.clone(),
            features: new.features.clone(),
        };
        state.subscriptions.push(subscription.clone());

        self.persist(&state)?;
        Ok(subscription)
    }

    fn update_subscription(
        &self,
        id: &str,
        updates: &UpdateSubscription,
    ) -> RepositoryResult<Subscription> {
        let mut state = self.write()?;
        let subscription = state
            .subscriptions
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(RepositoryError::NotFound)?;

        subscription.name = updates.name.clone();
        subscription.price = updates.price.clone();
        subscription.billing_period = updates.billing_period.clone();
        subscription.features = updates.features.clone();
        let updated = subscription.clone();

        self.persist(&state)?;
        Ok(updated)
    }

    fn delete_subscription(&self, id: &str) -> RepositoryResult<()> {
        let mut state = self.write()?;
        let before = state.subscriptions.len();
        state.subscriptions.retain(|s| s.id != id);
        if state.subscriptions.len() == before {
            return Err(RepositoryError::NotFound);
        }

        self.persist(&state)?;
        Ok(())
    }
}

/// The two plans every fresh deployment starts with.
fn default_subscriptions() -> Vec<Subscription> {
    vec![
        Subscription {
            id: Uuid::new_v4().to_string(),
            name: "Basic Plan".to_string(),
            price: "Free".to_string(),
            billing_period: String::new(),
            features: vec![
                "Create 1 carpool team".to_string(),
                "Includes ads".to_string(),
                "Standard features".to_string(),
            ],
        },
        Subscription {
            id: Uuid::new_v4().to_string(),
            name: "Premium Plan".to_string(),
            price: "$49".to_string(),
            billing_period: "/month".to_string(),
            features: vec![
                "Multiple carpool teams".to_string(),
                "No ads".to_string(),
                "Live GPS tracking & notifications".to_string(),
                "AI-optimized routing".to_string(),
                "Temporary pickup/dropoff locations".to_string(),
                "Substitute driver approval".to_string(),
                "Drive history & rewards".to_string(),
            ],
        },
    ]
}
