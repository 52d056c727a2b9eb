//! Settle-delay for rapidly changing input.
//!
//! A [`Debounce`] holds the latest pushed value and a lagged copy that only
//! catches up once no push has happened for the configured delay.

use std::time::Duration;

use tokio::time::Instant;

/// Settle interval for the search box.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
pub struct Debounce<T> {
    delay: Duration,
    current: T,
    settled: T,
    changed_at: Option<Instant>,
}

impl<T: Clone + PartialEq> Debounce<T> {
    #[must_use]
    pub fn new(initial: T, delay: Duration) -> Self {
        Self {
            delay,
            current: initial.clone(),
            settled: initial,
            changed_at: None,
        }
    }

    /// Record a new value and restart the settle timer.
    pub fn push(&mut self, value: T) {
        self.current = value;
        self.changed_at = Some(Instant::now());
    }

    /// Set both values at once, dropping any pending change.
    pub fn reset(&mut self, value: T) {
        self.current = value.clone();
        self.settled = value;
        self.changed_at = None;
    }

    /// The most recently pushed value.
    #[must_use]
    pub const fn current(&self) -> &T {
        &self.current
    }

    /// The lagged value.
    #[must_use]
    pub const fn settled(&self) -> &T {
        &self.settled
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.changed_at.is_some()
    }

    /// Promote the pending value if the delay has elapsed.
    ///
    /// Returns `true` when the settled value changed.
    pub fn poll(&mut self) -> bool {
        match self.changed_at {
            Some(at) if at.elapsed() >= self.delay => {
                self.changed_at = None;
                if self.settled == self.current {
                    return false;
                }
                self.settled = self.current.clone();
                true
            }
            _ => false,
        }
    }

    /// Wait out the remaining delay, then promote.
    ///
    /// Returns `true` when the settled value changed.
    pub async fn settle(&mut self) -> bool {
        if let Some(at) = self.changed_at {
            tokio::time::sleep_until(at + self.delay).await;
        }
        self.poll()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn value_lags_until_delay_elapses() {
        let mut search = Debounce::new(String::new(), DEFAULT_DEBOUNCE);
        search.push("pass".to_string());

        tokio::time::advance(Duration::from_millis(299)).await;
        assert!(!search.poll());
        assert_eq!(search.settled(), "");
        assert_eq!(search.current(), "pass");

        tokio::time::advance(Duration::from_millis(1)).await;
        assert!(search.poll());
        assert_eq!(search.settled(), "pass");
        assert!(!search.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn each_push_restarts_the_timer() {
        let mut search = Debounce::new(String::new(), DEFAULT_DEBOUNCE);
        search.push("p".to_string());
        tokio::time::advance(Duration::from_millis(200)).await;
        search.push("pa".to_string());
        tokio::time::advance(Duration::from_millis(200)).await;

        assert!(!search.poll());
        assert_eq!(search.settled(), "");

        tokio::time::advance(Duration::from_millis(100)).await;
        assert!(search.poll());
        assert_eq!(search.settled(), "pa");
    }

    #[tokio::test(start_paused = true)]
    async fn settle_waits_for_the_remaining_delay() {
        let mut search = Debounce::new(String::new(), DEFAULT_DEBOUNCE);
        search.push("billing".to_string());

        let start = Instant::now();
        assert!(search.settle().await);
        assert_eq!(start.elapsed(), DEFAULT_DEBOUNCE);
        assert_eq!(search.settled(), "billing");
    }

    #[tokio::test(start_paused = true)]
    async fn pushing_the_settled_value_reports_no_change() {
        let mut search = Debounce::new("a".to_string(), DEFAULT_DEBOUNCE);
        search.push("a".to_string());
        assert!(!search.settle().await);
    }

    #[test]
    fn reset_drops_pending_change() {
        let mut search = Debounce::new("old".to_string(), DEFAULT_DEBOUNCE);
        search.push("typing".to_string());
        search.reset(String::new());
        assert_eq!(search.current(), "");
        assert_eq!(search.settled(), "");
        assert!(!search.is_pending());
    }
}
