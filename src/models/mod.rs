//! Data models for wishbox.
//!
//! The stored record lives in [`crate::db`]; this module holds the
//! submission DTO and the grouped view used by the admin page.

mod wish;

pub use crate::db::GiftWish;
pub use wish::*;

use chrono::{DateTime, Utc};

/// Current UTC timestamp
pub fn now() -> DateTime<Utc> {
    Utc::now()
}
