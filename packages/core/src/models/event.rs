//! Calendar Events
//!
//! An event is date-bound content owned by a page. Events come in two
//! shapes: timed (a single `datetime`) and all-day (a `from_date`/`to_date`
//! pair covering whole calendar days). The scheduling model resolves month
//! windows and future feeds over both shapes with one ordering:
//! (`datetime`, `from_date`) ascending.

use crate::models::ValidationError;
use crate::utils::slug::slugify;
use chrono::{Days, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Date-bound content owned by exactly one page.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use pagetree_core::models::Event;
///
/// let from = NaiveDate::from_ymd_opt(2010, 1, 1).unwrap();
/// let to = NaiveDate::from_ymd_opt(2010, 1, 3).unwrap();
/// let event = Event::all_day("page-1", "Winter fair", from, Some(to));
///
/// assert_eq!(event.duration(), 3);
/// assert_eq!(event.range().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique identifier (UUID)
    pub id: String,

    /// Owning page
    pub page_id: String,

    /// Event name (required)
    pub name: String,

    /// Whether the event spans whole calendar days
    pub all_day: bool,

    /// Timestamp for timed events
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datetime: Option<NaiveDateTime>,

    /// First covered day for all-day events
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_date: Option<NaiveDate>,

    /// Last covered day for all-day events; unset means a one-day span
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_date: Option<NaiveDate>,
}

impl Event {
    /// Create a timed event
    pub fn timed(
        page_id: impl Into<String>,
        name: impl Into<String>,
        datetime: NaiveDateTime,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            page_id: page_id.into(),
            name: name.into(),
            all_day: false,
            datetime: Some(datetime),
            from_date: None,
            to_date: None,
        }
    }

    /// Create an all-day event.
    ///
    /// A `to_date` of `None` or equal to `from_date` both mean a one-day
    /// span; the two render identically.
    pub fn all_day(
        page_id: impl Into<String>,
        name: impl Into<String>,
        from_date: NaiveDate,
        to_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            page_id: page_id.into(),
            name: name.into(),
            all_day: true,
            datetime: None,
            from_date: Some(from_date),
            to_date,
        }
    }

    /// Validate required fields and the date-range invariant
    ///
    /// # Errors
    ///
    /// - `MissingField` when the name is empty, an all-day event has no
    ///   `from_date`, or a timed event has no `datetime`
    /// - `InvalidDateRange` when `from_date > to_date`
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()));
        }
        if self.all_day {
            let from = self
                .from_date
                .ok_or_else(|| ValidationError::MissingField("from_date".to_string()))?;
            if let Some(to) = self.to_date {
                if from > to {
                    return Err(ValidationError::InvalidDateRange(format!(
                        "from_date {} is after to_date {}",
                        from, to
                    )));
                }
            }
        } else if self.datetime.is_none() {
            return Err(ValidationError::MissingField("datetime".to_string()));
        }
        Ok(())
    }

    /// The calendar day this event effectively starts on.
    ///
    /// `from_date` for all-day events, the date part of `datetime` for
    /// timed ones. `None` only for events that fail validation.
    pub fn effective_date(&self) -> Option<NaiveDate> {
        if self.all_day {
            self.from_date
        } else {
            self.datetime.map(|dt| dt.date())
        }
    }

    /// Inclusive day count covered by this event.
    ///
    /// Timed events and one-day all-day events both count 1.
    pub fn duration(&self) -> i64 {
        if self.all_day {
            match (self.from_date, self.to_date) {
                (Some(from), Some(to)) => (to - from).num_days() + 1,
                _ => 1,
            }
        } else {
            1
        }
    }

    /// Every calendar day this event covers, in order.
    ///
    /// Always a sequence: a one-day event yields a single-element vector.
    /// Empty only for events that fail validation.
    pub fn range(&self) -> Vec<NaiveDate> {
        let Some(start) = self.effective_date() else {
            return Vec::new();
        };
        let end = match (self.all_day, self.to_date) {
            (true, Some(to)) if to > start => to,
            _ => start,
        };

        let mut days = Vec::new();
        let mut day = start;
        while day <= end {
            days.push(day);
            match day.checked_add_days(Days::new(1)) {
                Some(next) => day = next,
                None => break,
            }
        }
        days
    }

    /// Human-readable date line for component previews.
    ///
    /// All-day events format as "%A, %d %B" (with a second line for
    /// multi-day spans); timed events append the clock time.
    pub fn preview(&self) -> String {
        if self.all_day {
            let Some(from) = self.from_date else {
                return String::new();
            };
            match self.to_date {
                Some(to) if to != from => format!(
                    "{} <br />{}",
                    from.format("%A, %d %B"),
                    to.format("%A, %d %B")
                ),
                _ => from.format("%A, %d %B").to_string(),
            }
        } else {
            self.datetime
                .map(|dt| dt.format("%A, %d %B %H:%M").to_string())
                .unwrap_or_default()
        }
    }

    /// URL-safe permalink derived from the event name
    pub fn permalink(&self) -> String {
        slugify(&self.name)
    }

    /// Route parameter: `{id}-{permalink}`
    pub fn slug(&self) -> String {
        format!("{}-{}", self.id, self.permalink())
    }

    /// Sort key implementing the canonical (datetime, from_date) ordering.
    ///
    /// `None` sorts first, matching NULLS FIRST ascending in the store.
    pub fn sort_key(&self) -> (Option<NaiveDateTime>, Option<NaiveDate>) {
        (self.datetime, self.from_date)
    }
}
