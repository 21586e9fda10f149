//! The dashboard!
//!
//! The page this app exists for: every note the signed-in user owns, as a
//! grid of cards, with the creation dialog as the first cell.

use askama::Template;
use askama_web::WebTemplate;
use axum::Extension;
use chrono::SecondsFormat;

use crate::notes::Note;
use crate::storage::Storage;

use super::MaybeUser;
use super::PageError;

/// Template for the dashboard page
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    /// Username shown in the account widget
    username: String,

    /// One card per owned note; empty renders the empty state
    notes: Vec<NoteCard>,
}

/// A note, shaped for rendering
///
/// Timestamps leave the loader as strings: the full instant as ISO-8601 for
/// the `datetime` attribute, plus a date-only form for display
pub struct NoteCard {
    pub id: i32,
    pub name: String,
    pub image_url: Option<String>,
    pub created_at: String,
    pub created_on: String,
}

impl NoteCard {
    pub fn from_note(note: Note) -> Self {
        let created_at = note.created_at.and_utc();

        Self {
            id: note.id,
            name: note.name,
            image_url: note.image_url,
            created_at: created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            created_on: created_at.format("%Y-%m-%d").to_string(),
        }
    }

    fn from_note_multiple(mut notes: Vec<Note>) -> Vec<Self> {
        notes.drain(..).map(Self::from_note).collect::<Vec<Self>>()
    }
}

/// The dashboard page
///
/// Loads the owner-filtered note list and hands it to the template. Without
/// a session this bails before any query is built.
pub async fn dashboard<S: Storage>(
    Extension(storage): Extension<S>,
    MaybeUser(user): MaybeUser<S>,
) -> Result<DashboardTemplate, PageError> {
    let Some(user) = user else {
        tracing::debug!("No session resolved, redirecting to sign-in");

        return Err(PageError::SignInRequired);
    };

    let notes = storage.find_all_notes_by_owner(&user.id).await?;

    tracing::debug!("Rendering {} notes for {}", notes.len(), user.username);

    Ok(DashboardTemplate {
        username: user.username.clone(),
        notes: NoteCard::from_note_multiple(notes),
    })
}
