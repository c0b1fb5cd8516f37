/*
    validate.rs - Input validation schema for user records

    Checks create and update inputs against the field rules before they
    reach the backend. Failures are reported per field so form layers can
    attach messages to the offending inputs.
*/

use crate::core_roster::model::user::{NewUser, UserPatch};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::fmt;
use url::Url;

/// Field-keyed validation messages. The first message recorded for a
/// field wins; fields are reported in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for a field unless one is already present
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The message recorded for a field, if any
    pub fn message(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Fields that failed validation, in name order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Validate input for record creation
pub fn validate_new_user(input: &NewUser) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    check_name(&input.name, &mut errors);
    check_email(&input.email, &mut errors);
    check_date_of_birth(input.date_of_birth, &mut errors);
    check_picture(input.profile_picture.as_deref(), &mut errors);

    errors.into_result()
}

/// Validate a partial update. An empty patch is rejected; present fields
/// are held to the same rules as on creation.
pub fn validate_patch(patch: &UserPatch) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if patch.is_empty() {
        errors.add("patch", "At least one field must be provided");
        return errors.into_result();
    }

    if let Some(name) = &patch.name {
        check_name(name, &mut errors);
    }
    if let Some(email) = &patch.email {
        check_email(email, &mut errors);
    }
    if let Some(dob) = patch.date_of_birth {
        check_date_of_birth(dob, &mut errors);
    }
    // A blank picture is a deliberate clear, so only non-blank values are
    // checked as URLs
    check_picture(patch.profile_picture.as_deref(), &mut errors);

    errors.into_result()
}

fn check_name(name: &str, errors: &mut ValidationErrors) {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        errors.add("name", "Name is required");
        return;
    }
    let allowed = |c: char| c.is_alphabetic() || c == ' ' || c == '-' || c == '\'';
    if !trimmed.chars().all(allowed) {
        errors.add(
            "name",
            "Name may only contain letters, spaces, hyphens, and apostrophes",
        );
    }
}

fn check_email(email: &str, errors: &mut ValidationErrors) {
    if !email_shape_ok(email) {
        errors.add("email", "Email address is not valid");
    }
}

fn email_shape_ok(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return false;
    }
    true
}

fn check_date_of_birth(dob: DateTime<Utc>, errors: &mut ValidationErrors) {
    let today = Utc::now().date_naive();
    match today.years_since(dob.date_naive()) {
        None => errors.add("dateOfBirth", "Date of birth cannot be in the future"),
        Some(age) if age < 1 => errors.add("dateOfBirth", "Age must be at least 1 year"),
        Some(age) if age > 100 => errors.add("dateOfBirth", "Age must be at most 100 years"),
        Some(_) => {}
    }
}

fn check_picture(picture: Option<&str>, errors: &mut ValidationErrors) {
    let Some(picture) = picture else {
        return;
    };
    let trimmed = picture.trim();
    if trimmed.is_empty() {
        return;
    }
    if Url::parse(trimmed).is_err() {
        errors.add("profilePicture", "Profile picture must be a valid URL");
    }
}
