//! Record and input fixtures
//!
//! Deterministic timestamps and a record builder keep test data short to
//! spell and stable across runs.

use crate::core_roster::model::{Gender, NewUser, RecordId, UserRecord};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Timestamp helper for fixed test instants
pub fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

/// Calendar-day helper for filter criteria
pub fn day(y: i32, mo: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, mo, d).unwrap()
}

/// A valid create input derived from a name
pub fn new_user(name: &str) -> NewUser {
    NewUser {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        date_of_birth: ts(1990, 5, 1, 0, 0, 0),
        gender: Gender::Male,
        profile_picture: None,
    }
}

/// A record with a generated id and fixed timestamps
pub fn record(name: &str, gender: Gender, picture: Option<&str>) -> UserRecord {
    TestRecordBuilder::new(name)
        .with_gender(gender)
        .with_picture_option(picture.map(String::from))
        .build()
}

/// Builder for creating test records
pub struct TestRecordBuilder {
    name: String,
    email: Option<String>,
    gender: Gender,
    date_of_birth: DateTime<Utc>,
    profile_picture: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TestRecordBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
            gender: Gender::Male,
            date_of_birth: ts(1990, 5, 1, 0, 0, 0),
            profile_picture: None,
            created_at: ts(2024, 1, 1, 12, 0, 0),
            updated_at: ts(2024, 1, 1, 12, 0, 0),
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_picture(mut self, picture: impl Into<String>) -> Self {
        self.profile_picture = Some(picture.into());
        self
    }

    pub fn with_picture_option(mut self, picture: Option<String>) -> Self {
        self.profile_picture = picture;
        self
    }

    pub fn born(mut self, y: i32, mo: u32, d: u32) -> Self {
        self.date_of_birth = ts(y, mo, d, 0, 0, 0);
        self
    }

    pub fn born_at(mut self, instant: DateTime<Utc>) -> Self {
        self.date_of_birth = instant;
        self
    }

    pub fn created(mut self, instant: DateTime<Utc>) -> Self {
        self.created_at = instant;
        self
    }

    pub fn updated(mut self, instant: DateTime<Utc>) -> Self {
        self.updated_at = instant;
        self
    }

    pub fn build(self) -> UserRecord {
        let email = self.email.unwrap_or_else(|| {
            format!("{}@example.com", self.name.to_lowercase().replace(' ', "."))
        });
        UserRecord {
            id: RecordId::generate(),
            name: self.name,
            email,
            date_of_birth: self.date_of_birth,
            gender: self.gender,
            profile_picture: self.profile_picture,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// The two-record collection used across query and export scenarios:
/// Bob has a blank picture, Ann a real one
pub fn ann_and_bob() -> Vec<UserRecord> {
    vec![
        TestRecordBuilder::new("Bob")
            .with_gender(Gender::Male)
            .with_picture("")
            .born(1990, 5, 1)
            .build(),
        TestRecordBuilder::new("Ann")
            .with_gender(Gender::Female)
            .with_picture("http://x")
            .born(1985, 1, 1)
            .build(),
    ]
}
