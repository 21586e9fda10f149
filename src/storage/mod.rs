//! All things related to the storage of users and notes

use async_trait::async_trait;
use thiserror::Error as ThisError;
use uuid::Uuid;

use crate::notes::Note;
use crate::users::User;

#[cfg(not(feature = "postgres"))]
pub use memory::Memory;
#[cfg(feature = "postgres")]
pub use postgres::Postgres;

#[cfg(not(feature = "postgres"))]
mod memory;
#[cfg(feature = "postgres")]
mod postgres;

/// Setup the storage
#[cfg(not(feature = "postgres"))]
#[allow(clippy::unused_async)]
pub async fn setup() -> Memory {
    Memory::new()
}

/// Setup the storage
#[cfg(feature = "postgres")]
pub async fn setup() -> Postgres {
    Postgres::new().await
}

/// Storage errors
#[derive(Debug, ThisError)]
pub enum Error {
    /// A connection error with the storage
    #[error("Connection error: {0}")]
    Connection(String),
}

/// Result type for all storage interactions
pub type Result<T> = core::result::Result<T, Error>;

/// Values to create a User
pub struct CreateUserValues<'a> {
    /// The initial session ID for the user
    pub session_id: &'a Uuid,

    /// The username
    pub username: &'a str,

    /// The hashed password
    pub hashed_password: &'a str,
}

/// Values to create a Note
pub struct CreateNoteValues<'a> {
    /// The user owning the note
    pub user: &'a User,

    /// Display title of the note
    pub name: &'a str,

    /// Optional cover image reference, already validated as a URL
    pub image_url: Option<&'a str>,
}

/// Storage with all supported operations
#[async_trait]
pub trait Storage: Clone + Send + Sync + 'static {
    /// Find any single user
    async fn find_any_single_user(&self) -> Result<Option<User>>;

    /// Finds a single user by its username
    async fn find_single_user_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Finds a single user by its ID
    async fn find_single_user_by_id(&self, id: &Uuid) -> Result<Option<User>>;

    /// Create a single user
    async fn create_user(&self, values: &CreateUserValues) -> Result<User>;

    /// Find all notes owned by a user
    ///
    /// The owner filter is the only predicate; no ordering or limit is
    /// applied
    async fn find_all_notes_by_owner(&self, owner_id: &Uuid) -> Result<Vec<Note>>;

    /// Find a single note by its ID, regardless of owner
    ///
    /// Callers decide what to do with somebody else's note
    async fn find_single_note_by_id(&self, id: i32) -> Result<Option<Note>>;

    /// Create a note
    async fn create_note(&self, values: &CreateNoteValues) -> Result<Note>;
}
