//! # Daily Scheduler
//!
//! Fires a callback once per day at a wall-clock time in a given timezone.
//! The next fire instant is a pure function of "now" so it can be tested without waiting.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use std::future::Future;

// Longest DST jump in the tz database is well under this
const MAX_GAP_MINUTES: i64 = 180;

#[derive(Debug, Clone, Copy)]
pub struct DailySchedule {
    time: NaiveTime,
    tz: Tz,
}

impl DailySchedule {
    pub fn new(time: NaiveTime, tz: Tz) -> Self {
        Self { time, tz }
    }

    /// First fire instant strictly after `now`.
    pub fn next_after(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let mut date = now.with_timezone(&self.tz).date_naive();
        loop {
            if let Some(candidate) = self.fire_on(date)
                && candidate > now
            {
                return candidate;
            }
            date = match date.succ_opt() {
                Some(next) => next,
                None => return now,
            };
        }
    }

    /// Fire instant for a local date. Ambiguous times take the earlier instant;
    /// times inside a DST gap move to the first valid minute after it.
    fn fire_on(&self, date: NaiveDate) -> Option<DateTime<Utc>> {
        let local = date.and_time(self.time);
        (0..=MAX_GAP_MINUTES).find_map(|offset| {
            self.tz
                .from_local_datetime(&(local + Duration::minutes(offset)))
                .earliest()
                .map(|dt| dt.with_timezone(&Utc))
        })
    }

    /// Runs `job` every day at the configured time. Never returns.
    pub async fn run<F, Fut>(self, mut job: F)
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = ()>,
    {
        let mut last_fired: Option<DateTime<Utc>> = None;
        loop {
            let now = match last_fired {
                Some(last) => Utc::now().max(last),
                None => Utc::now(),
            };
            let next = self.next_after(now);
            tracing::info!(
                "{}",
                crate::strings::logs::next_post(&next.with_timezone(&self.tz).to_rfc3339())
            );

            let wait = (next - Utc::now()).to_std().unwrap_or_default();
            tokio::time::sleep(wait).await;

            last_fired = Some(next);
            job().await;
        }
    }
}
