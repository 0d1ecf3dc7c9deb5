//! User profile entity model.

use parkbook_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `profiles` table.
///
/// The `password_hash` is intentionally not serialized; handlers that return
/// profile data use [`ProfileInfo`].
#[derive(Debug, Clone, FromRow)]
pub struct Profile {
    pub id: DbId,
    pub email: String,
    pub password_hash: String,
    pub nickname: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<String>,
    pub age_group: Option<String>,
    pub area: Option<String>,
    pub role: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Public projection of a profile, safe to return to clients.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileInfo {
    pub id: DbId,
    pub email: String,
    pub nickname: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<String>,
    pub age_group: Option<String>,
    pub area: Option<String>,
    pub role: String,
}

impl From<Profile> for ProfileInfo {
    fn from(p: Profile) -> Self {
        ProfileInfo {
            id: p.id,
            email: p.email,
            nickname: p.nickname,
            phone: p.phone,
            gender: p.gender,
            age_group: p.age_group,
            area: p.area,
            role: p.role,
        }
    }
}

/// Input for `ProfileRepo::create`.
#[derive(Debug, Clone)]
pub struct CreateProfile {
    pub email: String,
    pub password_hash: String,
    pub nickname: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<String>,
    pub age_group: Option<String>,
    pub area: Option<String>,
    pub role: String,
}

/// Input for `ProfileRepo::update`. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProfile {
    pub nickname: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<String>,
    pub age_group: Option<String>,
    pub area: Option<String>,
}
