use axum::http::StatusCode;

use crate::tests::helper;

#[tokio::test]
async fn test_login() {
    let (mut app, _storage) = helper::setup_test_app().await;

    let session = helper::login(&mut app).await;

    assert!(session.access_token.len() > 10);
    assert!(session.cookie.starts_with("session="));
}

#[tokio::test]
async fn test_login_with_wrong_password() {
    let (mut app, _storage) = helper::setup_test_app().await;

    let (status_code, session) = helper::maybe_login(&mut app, "admin", "not-the-password").await;

    assert_eq!(StatusCode::BAD_REQUEST, status_code);
    assert!(session.is_none());
}

#[tokio::test]
async fn test_login_with_unknown_user() {
    let (mut app, _storage) = helper::setup_test_app().await;

    let (status_code, session) = helper::maybe_login(&mut app, "nobody", "verysecret").await;

    assert_eq!(StatusCode::BAD_REQUEST, status_code);
    assert!(session.is_none());
}

#[tokio::test]
async fn test_signout_clears_session_cookie() {
    let (mut app, _storage) = helper::setup_test_app().await;

    let session = helper::login(&mut app).await;

    let (status_code, location, _) =
        helper::get_page(&mut app, "/signout", Some(&session.cookie)).await;

    assert_eq!(StatusCode::SEE_OTHER, status_code);
    assert_eq!(Some("/".to_string()), location);
}
