//! Server-rendered pages
//!
//! Each page resolves the session first and only then touches storage. An
//! unresolved session never reaches a query: page handlers branch on the
//! explicit `MaybeUser` and bail with a redirect to the sign-in page.

use askama::Template;
use askama_web::WebTemplate;
use axum::Router;
use axum::extract::FromRequestParts;
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::IntoResponse;
use axum::response::Redirect;
use axum::response::Response;
use axum::routing::get;

use crate::api::CurrentUser;
use crate::api::SessionRejection;
use crate::storage;
use crate::storage::Storage;

mod dashboard;
mod home;
mod notebook;

/// Get the Axum router for all pages
pub fn router<S: Storage>() -> Router {
    Router::new()
        .route("/", get(home::home::<S>))
        .route("/signout", get(home::signout))
        .route("/dashboard", get(dashboard::dashboard::<S>))
        .route("/notebook/{id}", get(notebook::notebook::<S>))
}

/// Optional session resolution for pages
///
/// `None` when no valid session travels with the request, in any way it
/// could have. A storage failure during resolution is not "no session"
/// and rejects with the rendered error view instead
pub struct MaybeUser<S>(pub Option<CurrentUser<S>>);

impl<B, S> FromRequestParts<B> for MaybeUser<S>
where
    B: Send + Sync,
    S: Storage,
{
    type Rejection = PageError;

    async fn from_request_parts(parts: &mut Parts, state: &B) -> Result<Self, Self::Rejection> {
        match CurrentUser::<S>::from_request_parts(parts, state).await {
            Ok(user) => Ok(Self(Some(user))),
            Err(SessionRejection::Invalid(_)) => Ok(Self(None)),
            Err(SessionRejection::Storage(err)) => Err(PageError::Storage(err)),
        }
    }
}

/// Things that can go wrong while producing a page
pub enum PageError {
    /// No session resolved, the visitor has to sign in first
    SignInRequired,

    /// The requested page does not exist (or is not theirs to see)
    NotFound,

    /// The storage gave up on us
    Storage(storage::Error),
}

impl From<storage::Error> for PageError {
    fn from(err: storage::Error) -> Self {
        Self::Storage(err)
    }
}

/// Template for the rendered error view
///
/// Storage failures and missing pages get this instead of a bare framework
/// error response
#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    /// Human readable description of what happened
    message: String,
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            Self::SignInRequired => Redirect::to("/").into_response(),
            Self::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorTemplate {
                    message: "Page not found".to_string(),
                },
            )
                .into_response(),
            Self::Storage(err) => {
                tracing::error!("Storage failure while rendering page: {err}");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorTemplate {
                        message: "Something went wrong loading your notes, please try again"
                            .to_string(),
                    },
                )
                    .into_response()
            }
        }
    }
}
