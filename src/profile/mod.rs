// ABOUTME: Profile storage contract, in-memory store, and required-field validation
// ABOUTME: Produces the guidance message shown when a profile is too incomplete to plan from
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Health Profiles
//!
//! Plans are generated from a [`HealthProfile`] supplied by a [`ProfileStore`].
//! Before any call to the text service the profile must carry a usable age,
//! weight and height; otherwise [`validate_required_fields`] returns a
//! [`ProfileGuidance`] telling the user what to fill in.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::{HealthProfile, RequiredField};

// ============================================================================
// Required fields
// ============================================================================

/// What the user must add before a plan can be generated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileGuidance {
    /// Missing fields in age, weight, height order
    pub missing_fields: Vec<RequiredField>,
    /// Message to show the user
    pub user_message: String,
}

impl ProfileGuidance {
    /// Build guidance for the given missing fields
    #[must_use]
    pub fn for_missing(missing_fields: Vec<RequiredField>) -> Self {
        let user_message = missing_fields_message(&missing_fields);
        Self {
            missing_fields,
            user_message,
        }
    }
}

/// Ask the user to complete their profile
#[must_use]
pub fn missing_fields_message(missing_fields: &[RequiredField]) -> String {
    let fields = missing_fields
        .iter()
        .map(RequiredField::request_phrase)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Please complete your profile by providing {fields} before we can generate your \
         personalized plan. These details are essential for creating an accurate fitness \
         and nutrition plan tailored to your needs."
    )
}

/// Check that age, weight and height are present, finite and positive
///
/// # Errors
///
/// Returns the guidance to show when any required field is unusable.
pub fn validate_required_fields(profile: &HealthProfile) -> Result<(), ProfileGuidance> {
    let missing = profile.missing_required_fields();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ProfileGuidance::for_missing(missing))
    }
}

/// Parse a profile update document
///
/// # Errors
///
/// Returns `InvalidInput` when the document is not an object, does not match
/// the profile fields, or carries negative or non-finite measurements.
pub fn profile_from_json(value: Value) -> AppResult<HealthProfile> {
    if !value.is_object() {
        return Err(AppError::invalid_input(
            "Profile update must be a JSON object",
        ));
    }

    let profile: HealthProfile = serde_json::from_value(value)
        .map_err(|e| AppError::invalid_input(format!("Invalid profile: {e}")))?;
    validate_measurements(&profile)?;
    Ok(profile)
}

/// Read a profile document from a JSON file
///
/// # Errors
///
/// Returns `InvalidInput` when the file cannot be read or does not hold a valid profile.
pub async fn load_profile_file(path: impl AsRef<Path>) -> AppResult<HealthProfile> {
    let path = path.as_ref();
    let contents = tokio::fs::read_to_string(path).await.map_err(|e| {
        AppError::invalid_input(format!("Cannot read profile file {}: {e}", path.display()))
            .with_source(e)
    })?;
    let value: Value = serde_json::from_str(&contents).map_err(|e| {
        AppError::invalid_input(format!("Profile file {} is not JSON: {e}", path.display()))
    })?;
    profile_from_json(value).map_err(|e| e.with_resource_id(path.display().to_string()))
}

/// Reject negative or non-finite age, weight or height; zero stays allowed
///
/// # Errors
///
/// Returns `InvalidInput` naming the offending field.
pub fn validate_measurements(profile: &HealthProfile) -> AppResult<()> {
    for field in [RequiredField::Age, RequiredField::Weight, RequiredField::Height] {
        if let Some(value) = profile.required_value(field) {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::invalid_input(format!(
                    "{field} must be a non-negative number, got {value}"
                )));
            }
        }
    }
    Ok(())
}

// ============================================================================
// Store
// ============================================================================

/// Registered user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    /// User ID
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Normalized (trimmed, lowercase) email
    pub email: String,
    /// Registration time
    pub created_at: DateTime<Utc>,
    /// Stored health profile
    pub profile: HealthProfile,
}

/// Source of health profiles
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Register a user and seed their profile with registration defaults
    async fn create_user(&self, name: &str, email: &str) -> AppResult<Uuid>;

    /// Load a user's profile
    async fn get_profile(&self, user_id: Uuid) -> AppResult<HealthProfile>;

    /// Replace a user's profile
    async fn update_profile(&self, user_id: Uuid, profile: HealthProfile) -> AppResult<()>;
}

/// Process-local store for tests and the driver binary
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    users: RwLock<HashMap<Uuid, UserAccount>>,
}

impl InMemoryProfileStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    /// Whether no user is registered
    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }

    /// Look up a user account
    pub async fn get_user(&self, user_id: Uuid) -> Option<UserAccount> {
        self.users.read().await.get(&user_id).cloned()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn create_user(&self, name: &str, email: &str) -> AppResult<Uuid> {
        let name = name.trim();
        let email = email.trim().to_lowercase();
        if name.is_empty() {
            return Err(AppError::invalid_input("Name is required"));
        }
        if !email.contains('@') {
            return Err(AppError::invalid_input(format!("Invalid email: {email}")));
        }

        let mut users = self.users.write().await;
        if users.values().any(|user| user.email == email) {
            return Err(AppError::already_exists(format!("User with email {email}")));
        }

        let id = Uuid::new_v4();
        users.insert(
            id,
            UserAccount {
                id,
                name: name.to_owned(),
                email,
                created_at: Utc::now(),
                profile: HealthProfile::registration_defaults(),
            },
        );
        info!(user_id = %id, "Registered user");
        Ok(id)
    }

    async fn get_profile(&self, user_id: Uuid) -> AppResult<HealthProfile> {
        self.users
            .read()
            .await
            .get(&user_id)
            .map(|user| user.profile.clone())
            .ok_or_else(|| AppError::not_found("User").with_user_id(user_id))
    }

    async fn update_profile(&self, user_id: Uuid, profile: HealthProfile) -> AppResult<()> {
        validate_measurements(&profile).map_err(|e| e.with_user_id(user_id))?;

        let mut users = self.users.write().await;
        let user = users
            .get_mut(&user_id)
            .ok_or_else(|| AppError::not_found("User").with_user_id(user_id))?;
        user.profile = profile;
        debug!(user_id = %user_id, "Updated profile");
        Ok(())
    }
}
