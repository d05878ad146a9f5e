//! Wish store service.
//!
//! Validates submissions, writes them through [`crate::db`] and builds the
//! per-class view for the admin page. Store failures are logged here and
//! replaced by a localized message before they reach the caller.

use tracing::{debug, error, info};

use crate::db::{self, DbPool, GiftWish};
use crate::error::{Error, Result, CREATE_FAILED_MESSAGE, LIST_FAILED_MESSAGE};
use crate::models::{group_by_class, WishSubmission, WishesByClass};

/// Service for creating and listing gift wishes.
#[derive(Clone)]
pub struct WishStore {
    db: DbPool,
}

impl WishStore {
    /// Create a new wish store over an existing pool.
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    /// Validate and persist a submission, returning the stored record.
    pub async fn create(&self, submission: WishSubmission) -> Result<GiftWish> {
        let input = submission.validate()?;

        let wish = db::create_gift_wish(&self.db, input).await.map_err(|e| {
            error!(error = %e, "Error creating gift wish");
            Error::Persistence(CREATE_FAILED_MESSAGE)
        })?;

        info!(id = %wish.id, class = %wish.class, "Gift wish created");
        Ok(wish)
    }

    /// All wishes grouped by class; classes ascending, names ascending within a class.
    pub async fn list_grouped_by_class(&self) -> Result<WishesByClass> {
        let wishes = db::list_gift_wishes(&self.db).await.map_err(|e| {
            error!(error = %e, "Error fetching gift wishes");
            Error::Persistence(LIST_FAILED_MESSAGE)
        })?;

        debug!(count = wishes.len(), "Fetched gift wishes");
        Ok(group_by_class(wishes))
    }

    /// Number of stored wishes.
    pub async fn count(&self) -> Result<i64> {
        db::count_gift_wishes(&self.db).await.map_err(|e| {
            error!(error = %e, "Error counting gift wishes");
            Error::Persistence(LIST_FAILED_MESSAGE)
        })
    }
}
