//! Subscription-history generation.

use time::{Date, Month, OffsetDateTime};
use uuid::Uuid;

/// Generated subscription-history record ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedSubscriptionHistory {
    pub id: Uuid,
    pub user_id: Uuid,
    pub start_date: OffsetDateTime,
    pub end_date: OffsetDateTime,
}

/// Generates one subscription record per user, spanning one calendar month.
pub struct SubscriptionGenerator;

impl SubscriptionGenerator {
    /// Creates a new subscription generator.
    pub fn new() -> Self {
        Self
    }

    /// Generates exactly one subscription per user, starting at `base_time`.
    pub fn generate_for_users(
        &self,
        user_ids: &[Uuid],
        base_time: OffsetDateTime,
    ) -> Vec<GeneratedSubscriptionHistory> {
        user_ids
            .iter()
            .map(|&user_id| GeneratedSubscriptionHistory {
                id: Uuid::new_v4(),
                user_id,
                start_date: base_time,
                end_date: one_month_after(base_time),
            })
            .collect()
    }
}

impl Default for SubscriptionGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Advances a timestamp by one calendar month, clamping the day to the
/// target month's length (Jan 31 becomes Feb 28 or 29).
pub fn one_month_after(moment: OffsetDateTime) -> OffsetDateTime {
    let date = moment.date();
    let (year, month) = match date.month() {
        Month::December => (date.year() + 1, Month::January),
        current => (date.year(), current.next()),
    };
    let day = date.day().min(month.length(year));
    let rolled = Date::from_calendar_date(year, month, day).expect("clamped day is valid");
    moment.replace_date(rolled)
}
