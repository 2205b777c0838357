//! Content Scheduling
//!
//! Month windows and future feeds over date-bound events. Both queries
//! share one ordering, (`datetime`, `from_date`) ascending, so timed and
//! all-day events interleave consistently.

use crate::models::{Event, ValidationError};
use crate::services::error::ServiceError;
use crate::store::ContentStore;
use chrono::NaiveDate;
use std::sync::Arc;

/// Default bound on a future-events feed
pub const DEFAULT_FUTURE_LIMIT: i64 = 30;

/// Scheduling-window queries over events.
#[derive(Clone)]
pub struct ScheduleService {
    store: Arc<dyn ContentStore>,
}

impl ScheduleService {
    /// Create a new ScheduleService over a store
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    /// Events of a page intersecting the given month.
    ///
    /// An event intersects when its `datetime` falls between the first of
    /// the month and the first of the next month, or its
    /// `from_date..to_date` span overlaps that window; a span crossing one
    /// or both month boundaries is included in every month it touches.
    /// December wraps to January of the following year.
    pub async fn current_month_events(
        &self,
        year: i32,
        month: u32,
        page_id: &str,
    ) -> Result<Vec<Event>, ServiceError> {
        let from = first_of_month(year, month)?;
        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        let to = first_of_month(next_year, next_month)?;

        Ok(self.store.events_overlapping(page_id, from, to).await?)
    }

    /// Events anywhere in the site from the first of the given month
    /// onward, bounded by `limit` (default 30).
    pub async fn future_events(
        &self,
        year: i32,
        month: u32,
        limit: Option<i64>,
    ) -> Result<Vec<Event>, ServiceError> {
        let from = first_of_month(year, month)?;
        Ok(self
            .store
            .events_from(from, limit.unwrap_or(DEFAULT_FUTURE_LIMIT))
            .await?)
    }
}

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate, ServiceError> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        ServiceError::ValidationFailed(ValidationError::InvalidDateRange(format!(
            "invalid calendar month {year}-{month}"
        )))
    })
}
