//! Per-note detail page
//!
//! Target of every dashboard card link. A note that does not exist and a
//! note owned by somebody else are indistinguishable: both are a 404.

use askama::Template;
use askama_web::WebTemplate;
use axum::Extension;
use axum::extract::Path;

use crate::storage::Storage;

use super::MaybeUser;
use super::PageError;
use super::dashboard::NoteCard;

/// Template for the note detail page
#[derive(Template, WebTemplate)]
#[template(path = "notebook.html")]
pub struct NotebookTemplate {
    /// Username shown in the account widget
    username: String,

    /// The note, shaped like a dashboard card
    note: NoteCard,
}

/// The note detail page
pub async fn notebook<S: Storage>(
    Extension(storage): Extension<S>,
    MaybeUser(user): MaybeUser<S>,
    Path(id): Path<i32>,
) -> Result<NotebookTemplate, PageError> {
    let Some(user) = user else {
        return Err(PageError::SignInRequired);
    };

    let note = storage.find_single_note_by_id(id).await?;

    match note {
        Some(note) if note.user_id == user.id => Ok(NotebookTemplate {
            username: user.username.clone(),
            note: NoteCard::from_note(note),
        }),
        Some(_) => {
            tracing::debug!("Note {id} belongs to another user");

            Err(PageError::NotFound)
        }
        None => Err(PageError::NotFound),
    }
}
