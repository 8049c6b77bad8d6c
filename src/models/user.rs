//! User profile model for storage and API.

use serde::{Deserialize, Serialize};

/// The signed-in user's profile, persisted locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub email: String,
    pub display_name: String,
    pub bio: String,
    pub profile_image_url: Option<String>,
    pub followers: u32,
    pub following: u32,
    /// When the account was created (RFC3339)
    pub created_at: String,
}

/// Partial profile update. Absent fields are untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileUpdate {
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub profile_image_url: Option<String>,
}
