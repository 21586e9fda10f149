//! Session management
//!
//! Sign in with username/password, get a token back. The token is served both
//! as a JSON payload (for `Authorization: Bearer` use) and as an `HttpOnly`
//! cookie so plain page navigation stays signed in.

use axum::Extension;
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::Cookie;
use axum_extra::extract::cookie::SameSite;
use serde::Deserialize;

use crate::password::verify;
use crate::storage::Storage;

use super::Error;
use super::Form;
use super::JwtKeys;
use super::SESSION_COOKIE;
use super::Success;
use super::current_user::Token;
use super::current_user::generate_token;

/// Sign-in form
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    /// Username of the user
    username: String,
    /// Password of the user
    password: String,
}

/// Create a "session" for a user
///
/// Request:
/// ```sh
/// curl -v -H 'Content-Type: application/json' \
///     -d '{ "username": "admin", "password": "verysecret" }' \
///     http://localhost:6000/api/session
/// ```
///
/// Response
/// ```json
/// { "data": { "token_type": "Bearer", "access_token": "some token" } }
/// ```
///
/// Also sets the `session` cookie used by the pages.
pub async fn create<S: Storage>(
    Extension(jwt_keys): Extension<JwtKeys>,
    Extension(storage): Extension<S>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<(CookieJar, Success<Token>), Error> {
    let user = storage
        .find_single_user_by_username(&form.username)
        .await
        .map_err(Error::internal_server_error)?;

    if let Some(user) = user {
        if verify(&user.hashed_password, &form.password) {
            let token = generate_token(&jwt_keys, &user)?;

            tracing::debug!("Session created for {}", user.username);

            let cookie = Cookie::build((SESSION_COOKIE, token.access_token().to_string()))
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax)
                .build();

            return Ok((jar.add(cookie), Success::ok(token)));
        }
    }

    // same response for unknown user and wrong password
    Err(Error::bad_request("Invalid credentials"))
}
