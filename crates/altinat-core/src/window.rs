//! Date boundaries for the feed sections

use chrono::{DateTime, Days, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Section boundaries derived from the current instant.
///
/// `start_today` is local midnight, `start_week` is seven calendar days
/// before it, and `start_30_days` is thirty calendar days before now with
/// the time of day kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start_today: DateTime<Utc>,
    pub start_week: DateTime<Utc>,
    pub start_30_days: DateTime<Utc>,
}

impl DateWindow {
    /// Compute the boundaries in the time zone of `now`
    pub fn at<Tz: TimeZone>(now: &DateTime<Tz>) -> Self {
        let tz = now.timezone();
        let today = now.date_naive();

        let start_today = local_midnight(&tz, today);
        let start_week = today
            .checked_sub_days(Days::new(7))
            .map(|day| local_midnight(&tz, day))
            .unwrap_or(start_today);
        let start_30_days = now
            .clone()
            .checked_sub_days(Days::new(30))
            .map(|at| at.with_timezone(&Utc))
            .unwrap_or_else(|| now.with_timezone(&Utc) - Duration::days(30));

        Self {
            start_today,
            start_week,
            start_30_days,
        }
    }

    /// Calendar dates `(d1, d2)` bounding the monthly query.
    ///
    /// Taken in UTC, so in zones east of UTC they can fall one day earlier
    /// than the local calendar date.
    pub fn monthly_range(&self) -> (NaiveDate, NaiveDate) {
        (self.start_30_days.date_naive(), self.start_week.date_naive())
    }
}

/// Midnight at the start of `day` in `tz`. When midnight is skipped by a
/// DST transition, the first valid local time after it.
fn local_midnight<Tz: TimeZone>(tz: &Tz, day: NaiveDate) -> DateTime<Utc> {
    let midnight = day.and_time(chrono::NaiveTime::MIN);
    first_valid_at_or_after(tz, midnight)
}

fn first_valid_at_or_after<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> DateTime<Utc> {
    // Real DST gaps are at most a few hours
    for minutes in (0..=24 * 60).step_by(15) {
        let candidate = naive + Duration::minutes(minutes);
        if let Some(at) = tz.from_local_datetime(&candidate).earliest() {
            return at.with_timezone(&Utc);
        }
    }
    Utc.from_utc_datetime(&naive)
}
