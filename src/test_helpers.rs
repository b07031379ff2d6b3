// Test helpers for integration testing

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::repository::Repository;

/// A store seeded at a fixed clock so dates in assertions are stable.
pub struct TestContext {
    pub repository: Repository,
    pub today: NaiveDate,
    pub now: DateTime<Utc>,
}

impl TestContext {
    pub fn new_for_test() -> Self {
        let now = Utc
            .with_ymd_and_hms(2024, 3, 1, 9, 0, 0)
            .single()
            .unwrap_or_else(Utc::now);
        let today = now.date_naive();
        Self {
            repository: Repository::with_sample_data(today, now),
            today,
            now,
        }
    }

    pub fn empty() -> Self {
        let mut context = Self::new_for_test();
        context.repository = Repository::new();
        context
    }
}
