//! Simulated device status bar clock for app previews.
//!
//! Cosmetic only: preview clocks show the time at a fixed UTC-3 offset and
//! refresh once a minute; non-preview renders show a constant placeholder.
//!
//! Request-driven callers keep one [`StatusClock`] and [`StatusClock::tick`]
//! it per render. Long-lived editor previews that push updates subscribe to
//! [`spawn_clock_ticker`] instead.

use std::time::Duration;

use chrono::{FixedOffset, TimeDelta, Utc};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::types::Timestamp;

/// Time shown when not previewing.
pub const PLACEHOLDER_TIME: &str = "9:41";

/// Offset of the preview clock from UTC, in seconds (UTC-3).
pub const CLOCK_UTC_OFFSET_SECS: i32 = -3 * 3600;

/// How often a live preview clock is recomputed.
pub const CLOCK_REFRESH: Duration = Duration::from_secs(60);

/// Format `now` as `HH:MM` at the preview offset.
pub fn format_clock(now: Timestamp) -> String {
    let offset = FixedOffset::east_opt(CLOCK_UTC_OFFSET_SECS).expect("offset within one day");
    now.with_timezone(&offset).format("%H:%M").to_string()
}

/// A preview clock that remembers when it was last computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusClock {
    text: String,
    computed_at: Timestamp,
}

impl StatusClock {
    /// Compute the clock for `now` (on mount or template change).
    pub fn new(now: Timestamp) -> Self {
        Self {
            text: format_clock(now),
            computed_at: now,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Recompute if at least [`CLOCK_REFRESH`] has passed since the last
    /// computation. Returns `true` when the clock was recomputed.
    pub fn tick(&mut self, now: Timestamp) -> bool {
        let refresh = TimeDelta::from_std(CLOCK_REFRESH).unwrap_or(TimeDelta::zero());
        if now - self.computed_at < refresh {
            return false;
        }
        self.text = format_clock(now);
        self.computed_at = now;
        true
    }
}

/// Spawn a task that publishes the preview clock text every minute.
///
/// The task stops once every receiver has been dropped.
pub fn spawn_clock_ticker() -> (watch::Receiver<String>, JoinHandle<()>) {
    let (tx, rx) = watch::channel(format_clock(Utc::now()));
    let handle = tokio::spawn(async move {
        let mut interval = tokio::time::interval(CLOCK_REFRESH);
        // The first tick completes immediately; the initial value is already sent.
        interval.tick().await;
        loop {
            interval.tick().await;
            if tx.send(format_clock(Utc::now())).is_err() {
                break;
            }
        }
    });
    (rx, handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32, s: u32) -> Timestamp {
        Utc.with_ymd_and_hms(2024, 5, 1, h, m, s).unwrap()
    }

    #[test]
    fn formats_at_utc_minus_three() {
        assert_eq!(format_clock(at(15, 7, 0)), "12:07");
        assert_eq!(format_clock(at(1, 30, 0)), "22:30");
    }

    #[test]
    fn tick_waits_a_full_minute() {
        let mut clock = StatusClock::new(at(12, 0, 30));
        assert_eq!(clock.text(), "09:00");

        assert!(!clock.tick(at(12, 1, 29)));
        assert_eq!(clock.text(), "09:00");

        assert!(clock.tick(at(12, 1, 30)));
        assert_eq!(clock.text(), "09:01");
    }

    #[tokio::test(start_paused = true)]
    async fn ticker_publishes_every_minute() {
        let (mut rx, handle) = spawn_clock_ticker();
        assert!(!rx.borrow().is_empty());

        tokio::time::timeout(CLOCK_REFRESH + Duration::from_secs(1), rx.changed())
            .await
            .expect("ticker should publish within a minute")
            .unwrap();

        drop(rx);
        tokio::time::advance(CLOCK_REFRESH).await;
        tokio::time::timeout(Duration::from_secs(5), handle)
            .await
            .expect("ticker should stop after receivers are gone")
            .unwrap();
    }
}
