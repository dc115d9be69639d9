use carpool_admin::domain::subscription::{NewSubscription, UpdateSubscription};
use carpool_admin::domain::user::NewAppUser;
use carpool_admin::repository::errors::RepositoryError;
use carpool_admin::repository::store::JsonStoreRepository;
use carpool_admin::repository::{SubscriptionReader, SubscriptionWriter, UserReader, UserWriter};

fn new_user(name: &str, email: &str) -> NewAppUser {
    NewAppUser::new(
        name.to_string(),
        email.to_string(),
        "+626-445-4928".to_string(),
        "Indonesia".to_string(),
        None,
    )
}

#[test]
fn fresh_store_is_seeded_with_default_plans() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonStoreRepository::open(dir.path().join("store.json")).unwrap();

    let plans = repo.list_subscriptions().unwrap();
    assert_eq!(plans.len(), 2);
    assert_eq!(plans[0].name, "Basic Plan");
    assert_eq!(plans[0].price, "Free");
    assert_eq!(plans[0].billing_period, "");
    assert_eq!(plans[1].name, "Premium Plan");
    assert_eq!(plans[1].billing_period, "/month");
    assert_eq!(plans[1].features.len(), 7);
}

#[test]
fn subscription_crud_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonStoreRepository::open(dir.path().join("store.json")).unwrap();

    let created = repo
        .create_subscription(&NewSubscription::new(
            "  Family Plan ".to_string(),
            "$19".to_string(),
            "/month".to_string(),
            vec!["Shared teams".to_string(), "  ".to_string()],
        ))
        .unwrap();
    assert_eq!(created.name, "Family Plan");
    assert_eq!(created.features, vec!["Shared teams".to_string()]);

    let fetched = repo.get_subscription_by_id(&created.id).unwrap().unwrap();
    assert_eq!(fetched, created);

    let updated = repo
        .update_subscription(
            &created.id,
            &UpdateSubscription::new(
                "Family Plan".to_string(),
                "Free".to_string(),
                "/month".to_string(),
                vec!["Shared teams".to_string()],
            ),
        )
        .unwrap();
    assert_eq!(updated.price, "Free");
    // Free plans never carry a billing period.
    assert_eq!(updated.billing_period, "");

    repo.delete_subscription(&created.id).unwrap();
    assert!(repo.get_subscription_by_id(&created.id).unwrap().is_none());

    assert!(matches!(
        repo.delete_subscription(&created.id),
        Err(RepositoryError::NotFound)
    ));
    assert!(matches!(
        repo.update_subscription(
            &created.id,
            &UpdateSubscription::new(
                "Family Plan".to_string(),
                "$19".to_string(),
                "/month".to_string(),
                vec!["Shared teams".to_string()],
            ),
        ),
        Err(RepositoryError::NotFound)
    ));
}

#[test]
fn users_get_sequential_display_ids() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonStoreRepository::open(dir.path().join("store.json")).unwrap();

    let inserted = repo
        .create_users(&[
            new_user("Hazel Janis", "Janis202@Gmail.com "),
            new_user("Victor Okafor", "victor@example.com"),
        ])
        .unwrap();
    assert_eq!(inserted, 2);

    let users = repo.list_users().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].sl_no, "#BI00001");
    assert_eq!(users[1].sl_no, "#BI00002");
    // Emails are normalized on the way in.
    assert_eq!(users[0].email, "janis202@gmail.com");
    assert!(!users[0].premium);
}

#[test]
fn set_premium_flips_the_flag() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonStoreRepository::open(dir.path().join("store.json")).unwrap();

    repo.create_users(&[new_user("Hazel Janis", "janis202@gmail.com")])
        .unwrap();
    let user = repo.list_users().unwrap().remove(0);

    let upgraded = repo.set_premium(user.id, true).unwrap();
    assert!(upgraded.premium);
    assert!(repo.get_user_by_id(user.id).unwrap().unwrap().premium);

    assert!(matches!(
        repo.set_premium(9999, true),
        Err(RepositoryError::NotFound)
    ));
}

#[test]
fn state_survives_a_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    let created = {
        let repo = JsonStoreRepository::open(&path).unwrap();
        repo.create_users(&[new_user("Hazel Janis", "janis202@gmail.com")])
            .unwrap();
        repo.create_subscription(&NewSubscription::new(
            "Family Plan".to_string(),
            "$19".to_string(),
            "/month".to_string(),
            vec!["Shared teams".to_string()],
        ))
        .unwrap()
    };

    let reopened = JsonStoreRepository::open(&path).unwrap();
    assert_eq!(reopened.list_users().unwrap().len(), 1);
    // Seeds are not re-applied to an existing store.
    assert_eq!(reopened.list_subscriptions().unwrap().len(), 3);
    assert_eq!(
        reopened.get_subscription_by_id(&created.id).unwrap(),
        Some(created)
    );
}
