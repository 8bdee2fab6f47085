use jiff::civil::Date;
use jiff::tz::TimeZone;
use jiff::{SignedDuration, Span, Timestamp};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Length of one summary window.
pub const WEEK: SignedDuration = SignedDuration::from_hours(7 * 24);

/// A half-open time window `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TimeWindow {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl TimeWindow {
    /// The 7-day window ending (exclusive) at `end`.
    pub fn trailing_week(end: Timestamp) -> Result<Self, CoreError> {
        let start = end.checked_sub(WEEK)?;
        Ok(Self { start, end })
    }

    /// The immediately preceding window of the same length.
    ///
    /// Adjacent windows share a boundary but never overlap, since both are
    /// half-open.
    pub fn previous(&self) -> Result<Self, CoreError> {
        let length = self.start.duration_until(self.end);
        let start = self.start.checked_sub(length)?;
        Ok(Self {
            start,
            end: self.start,
        })
    }

    pub fn contains(&self, at: Timestamp) -> bool {
        self.start <= at && at < self.end
    }

    pub fn overlaps(&self, other: &TimeWindow) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Midnight UTC at the start of `date`.
pub fn start_of_day(date: Date) -> Result<Timestamp, CoreError> {
    Ok(date.to_zoned(TimeZone::UTC)?.timestamp())
}

/// Monday 00:00 UTC of the ISO week containing `at`.
///
/// Weekly runs end on this boundary so consecutive summaries abut exactly.
pub fn week_start(at: Timestamp) -> Result<Timestamp, CoreError> {
    let date = at.to_zoned(TimeZone::UTC).date();
    let offset = date.weekday().to_monday_zero_offset();
    start_of_day(date.checked_sub(Span::new().days(offset))?)
}
