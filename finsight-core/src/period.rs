//! Calendar-month scoping in the user's timezone.
//!
//! The summary pipeline trusts its caller to hand it one month of data; this
//! is the canonical way callers produce that window. A month spans the first
//! moment of day 1 through 23:59:59 of the last day, local time.

use anyhow::Result;
use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

/// One calendar month of one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthPeriod {
    pub year: i32,
    /// 1-12
    pub month: u32,
}

impl MonthPeriod {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            anyhow::bail!("invalid month: {month}");
        }
        Ok(Self { year, month })
    }

    /// The month containing `now` in an IANA timezone like "Asia/Bangkok".
    pub fn current(tz: &str, now: DateTime<Utc>) -> Result<Self> {
        let tz: Tz = tz
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid timezone: {tz}"))?;
        let local = now.with_timezone(&tz);
        Ok(Self {
            year: local.year(),
            month: local.month(),
        })
    }

    fn first_day(&self) -> NaiveDate {
        // month is validated at construction
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("valid month")
    }

    fn last_day(&self) -> NaiveDate {
        let (next_y, next_m) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(next_y, next_m, 1).expect("valid month") - chrono::Duration::days(1)
    }

    /// UTC bounds of the month in the given timezone (inclusive on both ends).
    pub fn window_utc(&self, tz: &str) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
        let tz: Tz = tz
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid timezone: {tz}"))?;

        let start_local = self.first_day().and_hms_opt(0, 0, 0).expect("valid time");
        let end_local = self.last_day().and_hms_opt(23, 59, 59).expect("valid time");

        let start = tz
            .from_local_datetime(&start_local)
            .earliest()
            .ok_or_else(|| anyhow::anyhow!("unresolvable month start: {start_local} {tz}"))?;
        let end = tz
            .from_local_datetime(&end_local)
            .latest()
            .ok_or_else(|| anyhow::anyhow!("unresolvable month end: {end_local} {tz}"))?;

        Ok((start.with_timezone(&Utc), end.with_timezone(&Utc)))
    }

    /// Whether a UTC instant falls inside this month in the given timezone.
    pub fn contains(&self, at: DateTime<Utc>, tz: &str) -> Result<bool> {
        let (start, end) = self.window_utc(tz)?;
        Ok(at >= start && at <= end)
    }
}
