/*
    user.rs - User record entity and its input shapes

    Defines:
    - UserRecord: the persisted entity as the backend returns it
    - NewUser: create input, before the backend assigns id/timestamps
    - UserPatch: partial update input
*/

use crate::core_roster::model::types::{Gender, RecordId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user record as stored in the remote document store.
///
/// Every record that leaves the store boundary carries a backend-assigned
/// id and server timestamps; `created_at <= updated_at` holds for the
/// record's whole lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Backend-assigned identifier, unique within the collection
    pub id: RecordId,

    /// Display name
    pub name: String,

    /// Contact email address
    pub email: String,

    /// Date of birth
    pub date_of_birth: DateTime<Utc>,

    /// Gender
    pub gender: Gender,

    /// Optional profile picture URL; blank values count as absent
    pub profile_picture: Option<String>,

    /// Set by the backend on creation, immutable afterwards
    pub created_at: DateTime<Utc>,

    /// Refreshed by the backend on every update
    pub updated_at: DateTime<Utc>,
}

impl UserRecord {
    /// The profile picture with surrounding whitespace stripped, or None
    /// when the field is missing or blank
    pub fn picture_trimmed(&self) -> Option<&str> {
        self.profile_picture
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Whether the record has a usable profile picture
    pub fn has_picture(&self) -> bool {
        self.picture_trimmed().is_some()
    }
}

/// Input for creating a record. The backend assigns id and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub date_of_birth: DateTime<Utc>,
    pub gender: Gender,
    pub profile_picture: Option<String>,
}

/// Partial update input. `None` fields are left unchanged; a present but
/// blank profile picture clears the stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<DateTime<Utc>>,
    pub gender: Option<Gender>,
    pub profile_picture: Option<String>,
}

impl UserPatch {
    /// True when the patch carries no fields at all
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.date_of_birth.is_none()
            && self.gender.is_none()
            && self.profile_picture.is_none()
    }

    /// Apply the present fields to a record. Timestamps are the backend's
    /// responsibility and are not touched here.
    pub fn apply_to(&self, record: &mut UserRecord) {
        if let Some(name) = &self.name {
            record.name = name.clone();
        }
        if let Some(email) = &self.email {
            record.email = email.clone();
        }
        if let Some(dob) = self.date_of_birth {
            record.date_of_birth = dob;
        }
        if let Some(gender) = self.gender {
            record.gender = gender;
        }
        if let Some(picture) = &self.profile_picture {
            if picture.trim().is_empty() {
                record.profile_picture = None;
            } else {
                record.profile_picture = Some(picture.clone());
            }
        }
    }
}
