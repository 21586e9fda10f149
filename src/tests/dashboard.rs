use axum::http::StatusCode;

use crate::storage::Storage;
use crate::tests::helper;

#[tokio::test]
async fn test_dashboard_requires_a_session() {
    let (mut app, _storage) = helper::setup_test_app().await;

    // no cookie, no Authorization header
    let (status_code, location, _) = helper::get_page(&mut app, "/dashboard", None).await;

    assert_eq!(StatusCode::SEE_OTHER, status_code);
    assert_eq!(Some("/".to_string()), location);
}

#[tokio::test]
async fn test_dashboard_empty_state() {
    let (mut app, _storage) = helper::setup_test_app().await;

    let session = helper::login(&mut app).await;

    let (status_code, _, body) =
        helper::get_page(&mut app, "/dashboard", Some(&session.cookie)).await;

    assert_eq!(StatusCode::OK, status_code);
    assert!(body.contains("You have no notes yet."));

    // the creation trigger is still there
    assert!(body.contains("create-note-dialog"));

    // and no cards
    assert_eq!(0, body.matches("href=\"/notebook/").count());
}

#[tokio::test]
async fn test_dashboard_lists_only_own_notes() {
    let (mut app, storage) = helper::setup_test_app().await;

    let admin = storage
        .find_single_user_by_username("admin")
        .await
        .unwrap()
        .unwrap();

    helper::seed_note(&storage, &admin, "Trip", None).await;
    helper::seed_note(&storage, &admin, "Work", None).await;

    let somebody_else = helper::seed_user(&storage, "somebody-else", "alsosecret").await;
    let other_note = helper::seed_note(&storage, &somebody_else, "Other", None).await;

    let session = helper::login(&mut app).await;

    let (status_code, _, body) =
        helper::get_page(&mut app, "/dashboard", Some(&session.cookie)).await;

    assert_eq!(StatusCode::OK, status_code);

    assert!(body.contains("Trip"));
    assert!(body.contains("Work"));
    assert!(!body.contains("Other"));
    assert!(!body.contains(&format!("/notebook/{}", other_note.id)));

    assert_eq!(2, body.matches("href=\"/notebook/").count());
    assert!(!body.contains("You have no notes yet."));
}

#[tokio::test]
async fn test_dashboard_card_links_to_the_note() {
    let (mut app, storage) = helper::setup_test_app().await;

    let admin = storage
        .find_single_user_by_username("admin")
        .await
        .unwrap()
        .unwrap();

    let note = helper::seed_note(&storage, &admin, "Trip", None).await;

    let session = helper::login(&mut app).await;

    let (_, _, body) = helper::get_page(&mut app, "/dashboard", Some(&session.cookie)).await;

    assert!(body.contains(&format!("href=\"/notebook/{}\"", note.id)));
}

#[tokio::test]
async fn test_dashboard_renders_date_without_time() {
    let (mut app, storage) = helper::setup_test_app().await;

    let admin = storage
        .find_single_user_by_username("admin")
        .await
        .unwrap()
        .unwrap();

    let note = helper::seed_note(&storage, &admin, "Trip", None).await;

    let session = helper::login(&mut app).await;

    let (_, _, body) = helper::get_page(&mut app, "/dashboard", Some(&session.cookie)).await;

    // the display text is date-only, the full instant only lives in the
    // machine readable attribute
    let date_only = note.created_at.format("%Y-%m-%d").to_string();

    assert!(body.contains(&format!(">{date_only}</time>")));
    assert!(body.contains("<time datetime=\""));
}

#[tokio::test]
async fn test_dashboard_missing_cover_renders_placeholder() {
    let (mut app, storage) = helper::setup_test_app().await;

    let admin = storage
        .find_single_user_by_username("admin")
        .await
        .unwrap()
        .unwrap();

    helper::seed_note(&storage, &admin, "Trip", None).await;

    let session = helper::login(&mut app).await;

    let (_, _, body) = helper::get_page(&mut app, "/dashboard", Some(&session.cookie)).await;

    assert!(body.contains("note-cover-placeholder"));

    // no broken image: without a cover there is no img element at all
    assert!(!body.contains("<img class=\"note-cover\""));
    assert!(!body.contains("src=\"\""));
}

#[tokio::test]
async fn test_dashboard_with_cover_renders_image() {
    let (mut app, storage) = helper::setup_test_app().await;

    let admin = storage
        .find_single_user_by_username("admin")
        .await
        .unwrap()
        .unwrap();

    helper::seed_note(
        &storage,
        &admin,
        "Trip",
        Some("https://images.example.com/trip.png"),
    )
    .await;

    let session = helper::login(&mut app).await;

    let (_, _, body) = helper::get_page(&mut app, "/dashboard", Some(&session.cookie)).await;

    assert!(body.contains("src=\"https://images.example.com/trip.png\""));
}

#[tokio::test]
async fn test_dashboard_storage_outage_renders_error_page() {
    let mut app = helper::setup_test_app_with_broken_user_lookup().await;

    let session = helper::login(&mut app).await;

    let (status_code, location, body) =
        helper::get_page(&mut app, "/dashboard", Some(&session.cookie)).await;

    // a broken store is not "no session": no redirect to the sign-in page
    assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, status_code);
    assert_eq!(None, location);
    assert!(body.contains("Something went wrong loading your notes"));
}

#[tokio::test]
async fn test_dashboard_accepts_bearer_token() {
    let (mut app, _storage) = helper::setup_test_app().await;

    let session = helper::login(&mut app).await;

    let (status_code, body) =
        helper::get_page_with_authorization(&mut app, "/dashboard", &session.access_token).await;

    assert_eq!(StatusCode::OK, status_code);
    assert!(body.contains("My Notes"));
}
