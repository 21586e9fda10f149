//! Note creation
//!
//! Submit target of the dashboard's creation dialog. The dialog posts a plain
//! HTML form, so the response is a redirect to the new note's page rather
//! than a JSON envelope.

use axum::Extension;
use axum::Form;
use axum::response::Redirect;
use serde::Deserialize;
use url::Url;

use crate::storage::CreateNoteValues;
use crate::storage::Storage;

use super::CurrentUser;
use super::Error;
use super::parse_url;

/// Creation dialog form
#[derive(Debug, Deserialize)]
pub struct CreateNoteForm {
    /// Display title of the note
    name: String,

    /// Optional cover image URL
    #[serde(default)]
    image_url: Option<String>,
}

/// Create a note for the current user
///
/// Redirects to `/notebook/{id}` of the freshly created note
pub async fn create<S: Storage>(
    Extension(storage): Extension<S>,
    current_user: CurrentUser<S>,
    Form(form): Form<CreateNoteForm>,
) -> Result<Redirect, Error> {
    let name = form.name.trim();

    if name.is_empty() {
        return Err(Error::bad_request("Name can not be empty"));
    }

    let image_url = parse_image_url(form.image_url.as_deref())?;

    let values = CreateNoteValues {
        user: &current_user,
        name,
        image_url: image_url.as_ref().map(Url::as_str),
    };

    let note = storage
        .create_note(&values)
        .await
        .map_err(Error::internal_server_error)?;

    tracing::debug!("Note {} created for {}", note.id, current_user.username);

    Ok(Redirect::to(&format!("/notebook/{}", note.id)))
}

/// An empty cover image field means "no cover", anything else must be a
/// well-formed URL
fn parse_image_url(image_url: Option<&str>) -> Result<Option<Url>, Error> {
    match image_url.map(str::trim) {
        Some(image_url) if !image_url.is_empty() => parse_url(image_url).map(Some),
        _ => Ok(None),
    }
}
