//! Pet entity.

use serde::{Deserialize, Serialize};

/// Store-assigned pet identifier.
pub type PetId = i64;

/// One row of the `pet` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    /// `None` until the first save.
    pub id: Option<PetId>,
    /// Serialized as `type` to match the column and wire naming.
    #[serde(rename = "type")]
    pub kind: String,
}

impl Pet {
    /// Creates an unsaved pet.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            id: None,
            kind: kind.into(),
        }
    }

    /// Returns whether the store has assigned an id to this pet.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
