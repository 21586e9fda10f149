//! All API endpoint setup

use axum::Router;
use axum::routing::post;

pub use current_user::CurrentUser;
pub use current_user::JwtKeys;
pub use current_user::SESSION_COOKIE;
pub use current_user::SessionRejection;
pub use request::Form;
pub use request::parse_url;
pub use response::Error;
pub use response::Success;

use crate::storage::Storage;

mod current_user;
mod notes;
mod request;
mod response;
mod session;

/// Get the Axum router for all API routes
///
/// `/session` is the sign-in endpoint for the login page, `/notes` is the
/// submit target of the dashboard's creation dialog
pub fn router<S: Storage>() -> Router {
    Router::new()
        .route("/session", post(session::create::<S>))
        .route("/notes", post(notes::create::<S>))
}
