use chrono::{DateTime, TimeZone};
use std::time::Duration;

pub trait Age {
    /// Time elapsed between `self` and `now`, zero if `self` lies in the future.
    fn age_at(&self, now: &Self) -> Duration;
}

impl<Tz: TimeZone> Age for DateTime<Tz> {
    fn age_at(&self, now: &Self) -> Duration {
        now.clone().signed_duration_since(self.clone()).to_std().unwrap_or(Duration::ZERO)
    }
}
