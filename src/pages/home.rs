//! Sign-in page and sign-out

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use axum::response::Redirect;
use axum::response::Response;
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::Cookie;

use crate::api::SESSION_COOKIE;
use crate::storage::Storage;

use super::MaybeUser;

/// Template for the sign-in page
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {}

/// The sign-in page
///
/// Visitors with a live session have nothing to do here, they go straight to
/// their notes
pub async fn home<S: Storage>(MaybeUser(user): MaybeUser<S>) -> Response {
    if user.is_some() {
        Redirect::to("/dashboard").into_response()
    } else {
        HomeTemplate {}.into_response()
    }
}

/// Drop the session cookie and go back to the sign-in page
pub async fn signout(jar: CookieJar) -> (CookieJar, Redirect) {
    let cookie = Cookie::build((SESSION_COOKIE, "")).path("/").build();

    (jar.remove(cookie), Redirect::to("/"))
}
