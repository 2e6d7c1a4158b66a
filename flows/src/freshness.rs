//! Age of a material entry relative to a reference date.

use serde::Serialize;
use time::Date;
use time::macros::format_description;

/// Entries younger than this many days are fresh.
pub const FRESH_DAYS: i64 = 180;
/// Entries younger than this many days (and not fresh) are aging.
pub const AGING_DAYS: i64 = 365;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateStatus {
    Fresh,
    Aging,
    Stale,
}

impl UpdateStatus {
    #[must_use]
    pub fn from_days(days: i64) -> Self {
        if days < FRESH_DAYS {
            Self::Fresh
        } else if days < AGING_DAYS {
            Self::Aging
        } else {
            Self::Stale
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Fresh => "Fresh",
            Self::Aging => "Aging",
            Self::Stale => "Stale",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fresh => "fresh",
            Self::Aging => "aging",
            Self::Stale => "stale",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct UpdateAge {
    pub updated_on: Date,
    /// Days between the update and `today`; never negative.
    pub days: i64,
    pub status: UpdateStatus,
}

/// Parse a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns the parse error for any other shape or an impossible date.
pub fn parse_update_date(raw: &str) -> Result<Date, time::error::Parse> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]"))
}

/// Age of an update date as seen on `today`; `None` when never reviewed.
///
/// Future dates count as zero days old.
#[must_use]
pub fn update_age(updated_on: Option<Date>, today: Date) -> Option<UpdateAge> {
    let updated_on = updated_on?;
    let days = (today - updated_on).whole_days().max(0);
    Some(UpdateAge {
        updated_on,
        days,
        status: UpdateStatus::from_days(days),
    })
}

#[cfg(test)]
#[path = "freshness_test.rs"]
mod tests;
