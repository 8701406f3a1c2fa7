use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Runs only the most recent of a burst of calls.
///
/// Each call waits out the window; if a newer call arrived meanwhile the
/// older one returns `None` without running its task.
#[derive(Debug)]
pub struct SearchDebouncer {
    window: Duration,
    latest: AtomicU64,
}

impl SearchDebouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            latest: AtomicU64::new(0),
        }
    }

    pub const fn window(&self) -> Duration {
        self.window
    }

    pub async fn run<F, Fut, T>(&self, task: F) -> Option<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.window).await;
        if self.latest.load(Ordering::SeqCst) != ticket {
            return None;
        }
        Some(task().await)
    }
}

impl Default for SearchDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}
