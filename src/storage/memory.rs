//! Memory storage
//!
//! Will be destroyed on system shutdown

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::AtomicI32;
use std::sync::atomic::Ordering;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::notes::Note;
use crate::users::User;

use super::CreateNoteValues;
use super::CreateUserValues;
use super::Result;
use super::Storage;

/// An in-memory storage
///
/// Will be destroyed on system shutdown
#[derive(Clone, Debug)]
pub struct Memory {
    /// All users in storage
    users: Arc<Mutex<HashMap<Uuid, User>>>,

    /// All notes in storage
    notes: Arc<Mutex<HashMap<i32, Note>>>,

    /// Stand-in for the database sequence behind note IDs
    next_note_id: Arc<AtomicI32>,
}

impl Memory {
    /// Create a new empty Memory storage
    pub fn new() -> Self {
        Self {
            users: Arc::new(Mutex::new(HashMap::new())),
            notes: Arc::new(Mutex::new(HashMap::new())),
            next_note_id: Arc::new(AtomicI32::new(1)),
        }
    }
}

#[async_trait]
impl Storage for Memory {
    async fn find_any_single_user(&self) -> Result<Option<User>> {
        Ok(self.users.lock().await.values().next().cloned())
    }

    async fn find_single_user_by_username(&self, username: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .lock()
            .await
            .values()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn find_single_user_by_id(&self, id: &Uuid) -> Result<Option<User>> {
        Ok(self.users.lock().await.get(id).cloned())
    }

    async fn create_user(&self, values: &CreateUserValues) -> Result<User> {
        let user = User {
            id: Uuid::new_v4(),
            session_id: *values.session_id,
            username: values.username.to_string(),
            hashed_password: values.hashed_password.to_string(),
            created_at: Utc::now().naive_utc(),
        };

        self.users.lock().await.insert(user.id, user.clone());

        Ok(user)
    }

    async fn find_all_notes_by_owner(&self, owner_id: &Uuid) -> Result<Vec<Note>> {
        Ok(self
            .notes
            .lock()
            .await
            .values()
            .filter(|note| &note.user_id == owner_id)
            .cloned()
            .collect())
    }

    async fn find_single_note_by_id(&self, id: i32) -> Result<Option<Note>> {
        Ok(self.notes.lock().await.get(&id).cloned())
    }

    async fn create_note(&self, values: &CreateNoteValues) -> Result<Note> {
        let note = Note {
            id: self.next_note_id.fetch_add(1, Ordering::Relaxed),
            user_id: values.user.id,
            name: values.name.to_string(),
            image_url: values.image_url.map(ToString::to_string),
            created_at: Utc::now().naive_utc(),
        };

        self.notes.lock().await.insert(note.id, note.clone());

        Ok(note)
    }
}
