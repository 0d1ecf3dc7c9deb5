//! Repository for the `profiles` table.

use parkbook_core::types::DbId;
use sqlx::PgPool;

use crate::models::profile::{CreateProfile, Profile, UpdateProfile};

/// Column list for `profiles` queries.
const PROFILE_COLUMNS: &str = "id, email, password_hash, nickname, phone, gender, age_group, \
     area, role, created_at, updated_at";

pub struct ProfileRepo;

impl ProfileRepo {
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {PROFILE_COLUMNS} FROM profiles WHERE id = $1");
        sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Look up a profile by email, case-insensitively.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {PROFILE_COLUMNS} FROM profiles WHERE lower(email) = lower($1)");
        sqlx::query_as::<_, Profile>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &PgPool, input: &CreateProfile) -> Result<Profile, sqlx::Error> {
        let query = format!(
            "INSERT INTO profiles \
                (email, password_hash, nickname, phone, gender, age_group, area, role) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {PROFILE_COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.nickname)
            .bind(&input.phone)
            .bind(&input.gender)
            .bind(&input.age_group)
            .bind(&input.area)
            .bind(&input.role)
            .fetch_one(pool)
            .await
    }

    /// Partial update of the caller-editable profile fields.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProfile,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!(
            "UPDATE profiles SET \
                nickname = COALESCE($2, nickname), \
                phone = COALESCE($3, phone), \
                gender = COALESCE($4, gender), \
                age_group = COALESCE($5, age_group), \
                area = COALESCE($6, area), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {PROFILE_COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .bind(&input.nickname)
            .bind(&input.phone)
            .bind(&input.gender)
            .bind(&input.age_group)
            .bind(&input.area)
            .fetch_optional(pool)
            .await
    }
}
