/*
    criteria.rs - Filter and sort criteria for the query engine

    Ephemeral, UI-driven values. Each filter stage has its own predicate
    so callers and tests can apply stages independently; the combined
    `matches` is the AND of all five.
*/

use crate::core_roster::model::{Gender, UserRecord};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Gender filter stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenderFilter {
    All,
    Only(Gender),
}

impl Default for GenderFilter {
    fn default() -> Self {
        GenderFilter::All
    }
}

/// Profile-picture presence filter stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PictureFilter {
    All,
    With,
    Without,
}

impl Default for PictureFilter {
    fn default() -> Self {
        PictureFilter::All
    }
}

/// Active filters. Date filters compare at calendar-day granularity in
/// UTC, ignoring the time component of the stored instant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub gender: GenderFilter,
    pub picture: PictureFilter,
    pub date_of_birth: Option<NaiveDate>,
    pub created_at: Option<NaiveDate>,
    pub updated_at: Option<NaiveDate>,
}

impl FilterCriteria {
    /// Criteria that match every record
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = GenderFilter::Only(gender);
        self
    }

    pub fn with_picture(mut self, picture: PictureFilter) -> Self {
        self.picture = picture;
        self
    }

    pub fn with_date_of_birth(mut self, day: NaiveDate) -> Self {
        self.date_of_birth = Some(day);
        self
    }

    pub fn with_created_at(mut self, day: NaiveDate) -> Self {
        self.created_at = Some(day);
        self
    }

    pub fn with_updated_at(mut self, day: NaiveDate) -> Self {
        self.updated_at = Some(day);
        self
    }

    pub fn matches_gender(&self, record: &UserRecord) -> bool {
        match self.gender {
            GenderFilter::All => true,
            GenderFilter::Only(gender) => record.gender == gender,
        }
    }

    pub fn matches_picture(&self, record: &UserRecord) -> bool {
        match self.picture {
            PictureFilter::All => true,
            PictureFilter::With => record.has_picture(),
            PictureFilter::Without => !record.has_picture(),
        }
    }

    pub fn matches_date_of_birth(&self, record: &UserRecord) -> bool {
        same_day(self.date_of_birth, record.date_of_birth)
    }

    pub fn matches_created_at(&self, record: &UserRecord) -> bool {
        same_day(self.created_at, record.created_at)
    }

    pub fn matches_updated_at(&self, record: &UserRecord) -> bool {
        same_day(self.updated_at, record.updated_at)
    }

    /// AND of all five stages
    pub fn matches(&self, record: &UserRecord) -> bool {
        self.matches_gender(record)
            && self.matches_picture(record)
            && self.matches_date_of_birth(record)
            && self.matches_created_at(record)
            && self.matches_updated_at(record)
    }
}

fn same_day(filter: Option<NaiveDate>, value: DateTime<Utc>) -> bool {
    match filter {
        None => true,
        Some(day) => value.date_naive() == day,
    }
}

/// Sorting direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Sortable record fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    Name,
    Email,
    DateOfBirth,
    Gender,
    ProfilePicture,
    CreatedAt,
    UpdatedAt,
}

impl SortKey {
    /// Parse a displayable column key. Unrecognized keys yield None,
    /// which the engine treats as "leave the order unchanged".
    pub fn parse(s: &str) -> Option<SortKey> {
        match s {
            "name" => Some(SortKey::Name),
            "email" => Some(SortKey::Email),
            "dateOfBirth" => Some(SortKey::DateOfBirth),
            "gender" => Some(SortKey::Gender),
            "profilePicture" => Some(SortKey::ProfilePicture),
            "createdAt" => Some(SortKey::CreatedAt),
            "updatedAt" => Some(SortKey::UpdatedAt),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Email => "email",
            SortKey::DateOfBirth => "dateOfBirth",
            SortKey::Gender => "gender",
            SortKey::ProfilePicture => "profilePicture",
            SortKey::CreatedAt => "createdAt",
            SortKey::UpdatedAt => "updatedAt",
        }
    }
}

/// A column key as the UI supplies it, plus direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortCriteria {
    pub key: String,
    pub order: SortOrder,
}

impl SortCriteria {
    pub fn new(key: impl Into<String>, order: SortOrder) -> Self {
        SortCriteria { key: key.into(), order }
    }

    pub fn ascending(key: impl Into<String>) -> Self {
        Self::new(key, SortOrder::Ascending)
    }

    pub fn descending(key: impl Into<String>) -> Self {
        Self::new(key, SortOrder::Descending)
    }
}

impl Default for SortCriteria {
    fn default() -> Self {
        // Matches the backend's listing order
        SortCriteria::descending(SortKey::CreatedAt.as_str())
    }
}
