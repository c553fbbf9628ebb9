mod common;

use common::{TEST_PASSWORD, TestApp};
use userhub::{
    error::Error,
    models::users::{UserRole, UserStatus},
    services::{access, auth, password, users},
};
use uuid::Uuid;

#[tokio::test]
async fn test_require_role_accepts_active_admin() {
    let app = TestApp::new();
    let admin = app.seed_admin().await;

    let user = access::require_role(app.store.as_ref(), admin.id, UserRole::Admin)
        .await
        .expect("active admin should pass the gate");
    assert_eq!(user.id, admin.id);
}

#[tokio::test]
async fn test_require_role_rejects_regular_user() {
    let app = TestApp::new();
    let member = app
        .seed_user(
            &TestApp::unique_email("member"),
            UserRole::User,
            UserStatus::Active,
        )
        .await;

    let err = access::require_role(app.store.as_ref(), member.id, UserRole::Admin)
        .await
        .unwrap_err();

    match err {
        Error::Forbidden(msg) => assert_eq!(msg, "Not allowed"),
        other => panic!("expected forbidden, got {:?}", other),
    }
}

#[tokio::test]
async fn test_require_role_rejects_unknown_account() {
    let app = TestApp::new();

    let err = access::require_role(app.store.as_ref(), Uuid::now_v7(), UserRole::Admin)
        .await
        .unwrap_err();

    assert!(
        matches!(err, Error::Unauthorized(_)),
        "deleted account holding a token gets 401, got {:?}",
        err
    );
}

#[tokio::test]
async fn test_require_role_rejects_deactivated_admin() {
    let app = TestApp::new();
    let admin = app.seed_admin().await;

    users::set_status(app.store.as_ref(), admin.id, UserStatus::Inactive)
        .await
        .unwrap();

    // Deactivation cuts admin access even while the old token is still valid
    let err = access::require_role(app.store.as_ref(), admin.id, UserRole::Admin)
        .await
        .unwrap_err();

    match err {
        Error::Forbidden(msg) => assert_eq!(msg, "Account is inactive"),
        other => panic!("expected forbidden, got {:?}", other),
    }
}

#[tokio::test]
async fn test_set_status_is_idempotent() {
    let app = TestApp::new();
    let member = app
        .seed_user(
            &TestApp::unique_email("repeat"),
            UserRole::User,
            UserStatus::Active,
        )
        .await;

    let once = users::set_status(app.store.as_ref(), member.id, UserStatus::Inactive)
        .await
        .unwrap();
    let twice = users::set_status(app.store.as_ref(), member.id, UserStatus::Inactive)
        .await
        .unwrap();

    assert_eq!(once.status, UserStatus::Inactive);
    assert_eq!(twice.status, UserStatus::Inactive, "Second call is a no-op, not an error");
}

#[tokio::test]
async fn test_set_status_unknown_user() {
    let app = TestApp::new();

    let err = users::set_status(app.store.as_ref(), Uuid::now_v7(), UserStatus::Inactive)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_deactivation_locks_out_login() {
    let app = TestApp::new();
    let email = TestApp::unique_email("lockout");
    let member = app
        .seed_user(&email, UserRole::User, UserStatus::Active)
        .await;

    users::set_status(app.store.as_ref(), member.id, UserStatus::Inactive)
        .await
        .unwrap();

    let err = auth::login(
        app.store.as_ref(),
        &app.tokens,
        TestApp::login_request(&email, TEST_PASSWORD),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, Error::InactiveAccount), "got {:?}", err);

    users::set_status(app.store.as_ref(), member.id, UserStatus::Active)
        .await
        .unwrap();

    auth::login(
        app.store.as_ref(),
        &app.tokens,
        TestApp::login_request(&email, TEST_PASSWORD),
    )
    .await
    .expect("login should work again after activation");
}

#[tokio::test]
async fn test_list_users_pages_newest_first() {
    let app = TestApp::new();

    // One hash shared across the fixture set; hashing 25 times would dominate
    // the test's runtime without testing anything extra.
    let hash = password::hash(TEST_PASSWORD).expect("hash fixture password");
    let mut seeded = Vec::new();
    for i in 0..25 {
        let user = app
            .seed_user_with_hash(
                &TestApp::unique_email(&format!("page{i}")),
                &hash,
                UserRole::User,
                UserStatus::Active,
            )
            .await;
        seeded.push(user);
    }

    let page = users::list_users(app.store.as_ref(), 2, 10).await.unwrap();

    assert_eq!(page.page, 2);
    assert_eq!(page.limit, 10);
    assert_eq!(page.total, 25);
    assert_eq!(page.pages, 3, "25 users at 10 per page round up to 3 pages");
    assert_eq!(page.items.len(), 10);

    // Newest first: page 2 holds the 11th through 20th most recent accounts
    let expected: Vec<_> = seeded.iter().rev().skip(10).take(10).map(|u| u.id).collect();
    let got: Vec<_> = page.items.iter().map(|u| u.id).collect();
    assert_eq!(got, expected, "Ordering must be stable newest-first");
}

#[tokio::test]
async fn test_list_users_last_page_is_short() {
    let app = TestApp::new();

    let hash = password::hash(TEST_PASSWORD).expect("hash fixture password");
    for _ in 0..25 {
        app.seed_user_with_hash(
            &TestApp::unique_email("tail"),
            &hash,
            UserRole::User,
            UserStatus::Active,
        )
        .await;
    }

    let page = users::list_users(app.store.as_ref(), 3, 10).await.unwrap();
    assert_eq!(page.items.len(), 5, "Last page carries the remainder");

    let beyond = users::list_users(app.store.as_ref(), 4, 10).await.unwrap();
    assert!(beyond.items.is_empty(), "Past-the-end pages are empty, not errors");
    assert_eq!(beyond.total, 25);
    assert_eq!(beyond.pages, 3);
}

#[tokio::test]
async fn test_list_users_floors_page_and_limit() {
    let app = TestApp::new();
    app.seed_user(
        &TestApp::unique_email("floor"),
        UserRole::User,
        UserStatus::Active,
    )
    .await;

    for bad_page in [0, -1, -50] {
        let page = users::list_users(app.store.as_ref(), bad_page, 10)
            .await
            .unwrap();
        assert_eq!(page.page, 1, "page {} should floor to 1", bad_page);
        assert_eq!(page.items.len(), 1);
    }

    for bad_limit in [0, -1, -50] {
        let page = users::list_users(app.store.as_ref(), 1, bad_limit)
            .await
            .unwrap();
        assert_eq!(page.limit, 1, "limit {} should floor to 1", bad_limit);
        assert_eq!(page.items.len(), 1);
    }
}

#[tokio::test]
async fn test_list_users_caps_limit() {
    let app = TestApp::new();
    app.seed_user(
        &TestApp::unique_email("cap"),
        UserRole::User,
        UserStatus::Active,
    )
    .await;

    let page = users::list_users(app.store.as_ref(), 1, 1000).await.unwrap();
    assert_eq!(page.limit, users::MAX_PAGE_LIMIT);
    assert_eq!(page.total, 1);
    assert_eq!(page.pages, 1);
}

#[tokio::test]
async fn test_list_users_empty_store() {
    let app = TestApp::new();

    let page = users::list_users(app.store.as_ref(), 1, 10).await.unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.total, 0);
    assert_eq!(page.pages, 0);
}
