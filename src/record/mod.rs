use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::form::{FieldId, FormSnapshot};

/// Fixed directory template for the per-initial letter artwork.
const LETTER_IMAGE_DIR: &str = "images/letters";

pub type RecordResult<T> = std::result::Result<T, RecordError>;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RecordError {
    /// The "last" field is empty or still showing its placeholder, so the
    /// letter image path cannot be derived. Persisting or rendering with
    /// this state would hand malformed input to the collaborators.
    #[error("last name is empty; fill in the Last field before creating labels")]
    MissingLastName,
}

/// The structured record handed to the persistence and rendering
/// collaborators. Derived fresh from a full form snapshot on every commit
/// and fully replaces any previously persisted record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipientRecord {
    pub first: String,
    pub last: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub image: String,
}

impl RecipientRecord {
    /// Builds the record from a six-field snapshot. Fields other than
    /// "last" may be empty; that partial state is persisted as-is (the
    /// form commits eagerly, field by field).
    pub fn from_snapshot(snapshot: &FormSnapshot) -> RecordResult<Self> {
        let image =
            letter_image_path(snapshot.value(FieldId::Last)).ok_or(RecordError::MissingLastName)?;

        Ok(Self {
            first: snapshot.value(FieldId::First).to_string(),
            last: snapshot.value(FieldId::Last).to_string(),
            address: snapshot.value(FieldId::Address).to_string(),
            city: snapshot.value(FieldId::City).to_string(),
            state: snapshot.value(FieldId::State).to_string(),
            zip: snapshot.value(FieldId::Zip).to_string(),
            image,
        })
    }
}

/// `images/letters/{C}.jpg` where `C` is the upper-cased first character
/// of the last name; `None` when there is no character to index.
fn letter_image_path(last: &str) -> Option<String> {
    let initial = last.chars().next()?;
    let upper: String = initial.to_uppercase().collect();
    Some(format!("{LETTER_IMAGE_DIR}/{upper}.jpg"))
}
