use serde::{Deserialize, Serialize};

/// A subscription plan card offered to carpool users.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Subscription {
    pub id: String,
    pub name: String,
    /// Free-form price label, e.g. `$49` or `Free`.
    pub price: String,
    /// Billing period suffix (`/month`, `/year`, `/week`); empty for free plans.
    pub billing_period: String,
    pub features: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewSubscription {
    pub name: String,
    pub price: String,
    pub billing_period: String,
    pub features: Vec<String>,
}

impl NewSubscription {
    /// Trims all fields, drops blank features and blanks the billing period
    /// for free plans.
    #[must_use]
    pub fn new(name: String, price: String, billing_period: String, features: Vec<String>) -> Self {
        let price = price.trim().to_string();
        let billing_period = if price == "Free" {
            String::new()
        } else {
            billing_period.trim().to_string()
        };
        Self {
            name: name.trim().to_string(),
            price,
            billing_period,
            features: normalize_features(features),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateSubscription {
    pub name: String,
    pub price: String,
    pub billing_period: String,
    pub features: Vec<String>,
}

impl UpdateSubscription {
    #[must_use]
    pub fn new(name: String, price: String, billing_period: String, features: Vec<String>) -> Self {
        let price = price.trim().to_string();
        let billing_period = if price == "Free" {
            String::new()
        } else {
            billing_period.trim().to_string()
        };
        Self {
            name: name.trim().to_string(),
            price,
            billing_period,
            features: normalize_features(features),
        }
    }
}

fn normalize_features(features: Vec<String>) -> Vec<String> {
    features
        .into_iter()
        .map(|f| f.trim().to_string())
        .filter(|f| !f.is_empty())
        .collect()
}
