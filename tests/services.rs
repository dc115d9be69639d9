use async_trait::async_trait;
use chrono::Utc;
use mockall::predicate::eq;

use carpool_admin::auth_api::{AuthApi, AuthResult, AuthStatus, LoginResponse};
use carpool_admin::domain::subscription::Subscription;
use carpool_admin::domain::user::AppUser;
use carpool_admin::dto::earnings::EarningsQuery;
use carpool_admin::forms::subscriptions::SaveSubscriptionForm;
use carpool_admin::models::auth::AuthenticatedUser;
use carpool_admin::repository::mock::MockRepository;
use carpool_admin::services::{ServiceError, auth, earnings, subscriptions};

fn admin() -> AuthenticatedUser {
    AuthenticatedUser {
        email: "root@example.com".to_string(),
        name: "Root".to_string(),
        roles: vec!["admin".to_string()],
        exp: 4_000_000_000,
    }
}

fn visitor() -> AuthenticatedUser {
    AuthenticatedUser {
        roles: Vec::new(),
        ..admin()
    }
}

fn make_user(id: i32) -> AppUser {
    AppUser {
        id,
        sl_no: format!("#BI{id:05}"),
        name: format!("User {id}"),
        email: format!("user{id}@example.com"),
        contact_number: format!("+626-445-{id:04}"),
        country: "Indonesia".to_string(),
        profile_image: None,
        premium: false,
        created_at: Utc::now().naive_utc(),
    }
}

#[test]
fn earnings_page_slices_the_requested_page() {
    let users: Vec<AppUser> = (1..=25).map(make_user).collect();
    let mut repo = MockRepository::new();
    repo.expect_list_users()
        .returning(move || Ok(users.clone()));

    let data = earnings::load_earnings_page(
        &repo,
        &admin(),
        EarningsQuery {
            q: None,
            page: Some(3),
        },
    )
    .unwrap();

    assert_eq!(data.total, 25);
    assert_eq!(data.users.page, 3);
    assert_eq!(data.users.items.len(), 5);
    assert_eq!(data.users.items[0].id, 21);
    assert_eq!(data.users.pages, vec![Some(1), Some(2), Some(3)]);
}

#[test]
fn earnings_page_filters_and_clamps_stale_pages() {
    let mut users: Vec<AppUser> = (1..=25).map(make_user).collect();
    users[4].name = "Hazel Janis".to_string();
    let mut repo = MockRepository::new();
    repo.expect_list_users()
        .returning(move || Ok(users.clone()));

    // A narrowing search with a stale page number falls back to the last page.
    let data = earnings::load_earnings_page(
        &repo,
        &admin(),
        EarningsQuery {
            q: Some("hazel".to_string()),
            page: Some(3),
        },
    )
    .unwrap();

    assert_eq!(data.total, 1);
    assert_eq!(data.users.page, 1);
    assert_eq!(data.users.items[0].name, "Hazel Janis");
    assert_eq!(data.search_query.as_deref(), Some("hazel"));
}

#[test]
fn earnings_page_requires_the_admin_role() {
    let repo = MockRepository::new();
    let err = earnings::load_earnings_page(&repo, &visitor(), EarningsQuery::default()).unwrap_err();
    assert!(matches!(err, ServiceError::Unauthorized));
}

#[test]
fn blank_search_is_treated_as_no_search() {
    let users: Vec<AppUser> = (1..=3).map(make_user).collect();
    let mut repo = MockRepository::new();
    repo.expect_list_users()
        .returning(move || Ok(users.clone()));

    let data = earnings::load_earnings_page(
        &repo,
        &admin(),
        EarningsQuery {
            q: Some("   ".to_string()),
            page: None,
        },
    )
    .unwrap();

    assert_eq!(data.total, 3);
    assert!(data.search_query.is_none());
}

#[test]
fn upgrade_grants_premium_access() {
    let mut repo = MockRepository::new();
    repo.expect_set_premium()
        .with(eq(7), eq(true))
        .returning(|id, _| {
            let mut user = make_user(id);
            user.premium = true;
            Ok(user)
        });

    let upgraded = earnings::upgrade_to_premium(&repo, &admin(), 7).unwrap();
    assert!(upgraded.premium);

    let repo = MockRepository::new();
    let err = earnings::upgrade_to_premium(&repo, &visitor(), 7).unwrap_err();
    assert!(matches!(err, ServiceError::Unauthorized));
}

fn plan_form(name: &str, price: &str, features: Vec<&str>) -> SaveSubscriptionForm {
    SaveSubscriptionForm {
        name: name.to_string(),
        price: price.to_string(),
        billing_period: "/month".to_string(),
        features: features.into_iter().map(String::from).collect(),
    }
}

#[test]
fn create_subscription_persists_a_valid_form() {
    let mut repo = MockRepository::new();
    repo.expect_create_subscription().returning(|new| {
        Ok(Subscription {
            id: "abc".to_string(),
            name: new.name.clone(),
            price: new.price.clone(),
            billing_period: new.billing_period.clone(),
            features: new.features.clone(),
        })
    });

    let created = subscriptions::create_subscription(
        &repo,
        &admin(),
        plan_form("Family Plan", "$19", vec!["Shared teams"]),
    )
    .unwrap();

    assert_eq!(created.name, "Family Plan");
    assert_eq!(created.billing_period, "/month");
}

#[test]
fn create_subscription_rejects_incomplete_forms() {
    let repo = MockRepository::new();

    let err =
        subscriptions::create_subscription(&repo, &admin(), plan_form("", "$19", vec!["Feature"]))
            .unwrap_err();
    assert!(matches!(err, ServiceError::Form(_)));

    let err = subscriptions::create_subscription(
        &repo,
        &admin(),
        plan_form("Family Plan", "$19", vec!["  ", ""]),
    )
    .unwrap_err();
    assert!(matches!(err, ServiceError::Form(_)));
}

#[test]
fn free_plans_lose_their_billing_period() {
    let mut repo = MockRepository::new();
    repo.expect_create_subscription().returning(|new| {
        Ok(Subscription {
            id: "abc".to_string(),
            name: new.name.clone(),
            price: new.price.clone(),
            billing_period: new.billing_period.clone(),
            features: new.features.clone(),
        })
    });

    let created = subscriptions::create_subscription(
        &repo,
        &admin(),
        plan_form("Starter", "Free", vec!["One team"]),
    )
    .unwrap();

    assert_eq!(created.billing_period, "");
}

#[test]
fn get_subscription_maps_missing_plans_to_not_found() {
    let mut repo = MockRepository::new();
    repo.expect_get_subscription_by_id()
        .with(eq("missing"))
        .returning(|_| Ok(None));

    let err = subscriptions::get_subscription(&repo, &admin(), "missing").unwrap_err();
    assert!(matches!(err, ServiceError::NotFound));
}

struct StubAuthApi {
    accept: bool,
}

#[async_trait(?Send)]
impl AuthApi for StubAuthApi {
    async fn login(&self, _email: &str, _password: &str) -> AuthResult<LoginResponse> {
        Ok(LoginResponse {
            access_token: "jwt-token".to_string(),
        })
    }

    async fn send_otp(&self, _email: &str) -> AuthResult<AuthStatus> {
        Ok(AuthStatus {
            status: self.accept,
            message: if self.accept {
                "OTP sent".to_string()
            } else {
                "Unknown email".to_string()
            },
        })
    }

    async fn verify_email(&self, _email: &str, otp: &str) -> AuthResult<AuthStatus> {
        Ok(AuthStatus {
            status: otp == "1234",
            message: "Verified".to_string(),
        })
    }

    async fn reset_password(
        &self,
        _email: &str,
        _otp: &str,
        _new_password: &str,
    ) -> AuthResult<AuthStatus> {
        Ok(AuthStatus {
            status: self.accept,
            message: "Password updated".to_string(),
        })
    }
}

#[actix_web::test]
async fn login_returns_the_access_token() {
    let api = StubAuthApi { accept: true };
    let token = auth::login(&api, "root@example.com", "secret123").await.unwrap();
    assert_eq!(token, "jwt-token");
}

#[actix_web::test]
async fn rejected_otp_requests_surface_as_auth_errors() {
    let api = StubAuthApi { accept: false };
    let err = auth::send_otp(&api, "nobody@example.com").await.unwrap_err();
    assert!(matches!(err, ServiceError::Auth(_)));

    let api = StubAuthApi { accept: true };
    assert!(auth::verify_otp(&api, "root@example.com", "1234").await.is_ok());
    assert!(auth::verify_otp(&api, "root@example.com", "9999").await.is_err());
}
