use chrono::naive::NaiveDateTime;
use uuid::Uuid;

/// A user-owned note
///
/// Created through the dashboard's creation dialog, listed on the dashboard,
/// shown in full on its `/notebook/{id}` page
#[derive(Clone, Debug)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Note {
    /// Stable identifier, also the `/notebook/{id}` path segment
    pub id: i32,

    /// The owner of the note
    pub user_id: Uuid,

    /// Display title
    pub name: String,

    /// Optional cover image reference
    pub image_url: Option<String>,

    /// Creation instant, UTC
    pub created_at: NaiveDateTime,
}
