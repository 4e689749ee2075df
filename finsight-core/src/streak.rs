//! Daily-login streak transitions, keyed on calendar-day difference only.
//!
//! Time of day is deliberately stripped before comparing so a 23:59 login
//! followed by a 00:01 login still counts as consecutive days.

use chrono::NaiveDate;

/// How `today` relates to the last recorded login.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginDay {
    /// No previous login on record.
    First,
    /// Already logged in today; streak untouched.
    SameDay,
    /// Exactly one calendar day after the last login.
    Consecutive,
    /// More than one day since the last login; streak restarts.
    Gap,
}

/// Advance a streak for a login on `today`, returning the new count and the
/// transition taken.
///
/// A `today` earlier than `last_login` (clock skew, manual edits) is treated
/// as a same-day login and leaves the streak alone.
pub fn advance(streak_count: u32, last_login: Option<NaiveDate>, today: NaiveDate) -> (u32, LoginDay) {
    let Some(last) = last_login else {
        return (1, LoginDay::First);
    };

    match (today - last).num_days() {
        d if d <= 0 => (streak_count, LoginDay::SameDay),
        1 => (streak_count + 1, LoginDay::Consecutive),
        _ => (1, LoginDay::Gap),
    }
}
