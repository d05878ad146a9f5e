//! Gift wish database queries.
//!
//! One row per submitted wish. Rows are only ever inserted and read.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::DbPool;
use crate::Result;

// ============================================================================
// Types
// ============================================================================

/// Gift wish record from the database.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftWish {
    /// Generated by SQLite on insert.
    pub id: String,
    pub name: String,
    pub class: String,
    pub age: i64,
    pub gift_wish: String,
    pub gift_link: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input for inserting a wish. Already validated.
#[derive(Debug, Clone)]
pub struct CreateGiftWish {
    pub name: String,
    pub class: String,
    pub age: i64,
    pub gift_wish: String,
    pub gift_link: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Queries
// ============================================================================

/// Insert a wish and return the stored row.
pub async fn create_gift_wish(pool: &DbPool, input: CreateGiftWish) -> Result<GiftWish> {
    let wish = sqlx::query_as::<_, GiftWish>(
        r#"
        INSERT INTO gift_wishes (name, class, age, gift_wish, gift_link, created_at)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(&input.name)
    .bind(&input.class)
    .bind(input.age)
    .bind(&input.gift_wish)
    .bind(&input.gift_link)
    .bind(input.created_at)
    .fetch_one(pool)
    .await?;

    Ok(wish)
}

/// List every wish ordered by class, then name.
///
/// `created_at` and `id` break ties so the order is stable across calls.
pub async fn list_gift_wishes(pool: &DbPool) -> Result<Vec<GiftWish>> {
    let wishes = sqlx::query_as::<_, GiftWish>(
        r#"
        SELECT * FROM gift_wishes
        ORDER BY class ASC, name ASC, created_at ASC, id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(wishes)
}

/// Count stored wishes.
pub async fn count_gift_wishes(pool: &DbPool) -> Result<i64> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM gift_wishes")
        .fetch_one(pool)
        .await?;
    Ok(count)
}
