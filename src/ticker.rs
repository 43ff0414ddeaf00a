use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

const POLL_SLICE: Duration = Duration::from_millis(50);

// Fixed-period tick that can be cancelled from a signal handler:
// the handler only sets the flag, so the polling loop always exits
// through its normal control path.
pub struct Ticker {
    period: Duration,
    cancel: Arc<AtomicBool>,
}

impl Ticker {
    pub fn new(period: Duration) -> Ticker {
        Ticker {
            period,
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel)
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.load(Ordering::Relaxed)
    }

    // Sleeps for up to one period, waking early on cancellation.
    // Returns false once cancellation is observed.
    pub fn wait(&self) -> bool {
        let mut remaining = self.period;
        while !self.is_cancelled() && !remaining.is_zero() {
            let slice = remaining.min(POLL_SLICE);
            thread::sleep(slice);
            remaining -= slice;
        }
        !self.is_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;
    use std::time::{Duration, Instant};
    use super::Ticker;

    #[test]
    fn test_full_period_elapses() {
        let ticker = Ticker::new(Duration::from_millis(20));
        let start = Instant::now();
        assert!(ticker.wait());
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn test_cancelled_wait_returns_early() {
        let ticker = Ticker::new(Duration::from_secs(3600));
        ticker.cancel_flag().store(true, Ordering::Relaxed);
        let start = Instant::now();
        assert!(!ticker.wait());
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn test_cancel_flag_is_shared() {
        let ticker = Ticker::new(Duration::from_secs(1));
        let flag = ticker.cancel_flag();
        assert!(!ticker.is_cancelled());
        flag.store(true, Ordering::Relaxed);
        assert!(ticker.is_cancelled());
    }
}
