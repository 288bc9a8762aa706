use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use rand::Rng;
use tracing::{debug, warn};

/// A callback run on its own thread after every delay until cancelled.
///
/// Dropping the handle cancels the task and waits for the thread, so a
/// page that owns its timers tears them down simply by going away.
pub struct Repeating {
    name: &'static str,
    stop: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Repeating {
    /// Run `tick` every `interval`. `tick` returns `false` to stop itself.
    pub fn every<F>(name: &'static str, interval: Duration, tick: F) -> Self
    where
        F: FnMut() -> bool + Send + 'static,
    {
        Self::with_delay(name, move || interval, tick)
    }

    /// Run `tick` after each delay produced by `next_delay`, which is asked
    /// again before every wait.
    pub fn with_delay<D, F>(name: &'static str, mut next_delay: D, mut tick: F) -> Self
    where
        D: FnMut() -> Duration + Send + 'static,
        F: FnMut() -> bool + Send + 'static,
    {
        let (stop, stopped) = mpsc::channel::<()>();
        let spawned = thread::Builder::new()
            .name(format!("repeat-{name}"))
            .spawn(move || loop {
                match stopped.recv_timeout(next_delay()) {
                    Err(RecvTimeoutError::Timeout) => {
                        if !tick() {
                            break;
                        }
                    }
                    // explicit stop or the handle was dropped
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            });

        let handle = match spawned {
            Ok(handle) => Some(handle),
            Err(err) => {
                warn!(task = name, %err, "failed to spawn timer thread");
                None
            }
        };
        debug!(task = name, "timer started");

        Self {
            name,
            stop: Some(stop),
            handle,
        }
    }

    /// Stop scheduling further ticks and wait for the thread to exit.
    pub fn cancel(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
            debug!(task = self.name, "timer cancelled");
        }
    }

    /// Whether the thread is still scheduling ticks.
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for Repeating {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// A uniformly random delay in `[min, max]`, at millisecond resolution.
pub fn random_interval(min: Duration, max: Duration) -> Duration {
    let (lo, hi) = (min.as_millis() as u64, max.as_millis() as u64);
    if hi <= lo {
        return min;
    }
    Duration::from_millis(rand::thread_rng().gen_range(lo..=hi))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Instant;

    #[test]
    fn ticks_until_cancelled() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let mut task = Repeating::every("test", Duration::from_millis(5), move || {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        });

        let deadline = Instant::now() + Duration::from_secs(5);
        while count.load(Ordering::SeqCst) < 3 && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
        }
        task.cancel();
        assert!(!task.is_running());

        let after_cancel = count.load(Ordering::SeqCst);
        assert!(after_cancel >= 3);
        thread::sleep(Duration::from_millis(30));
        assert_eq!(count.load(Ordering::SeqCst), after_cancel);
    }

    #[test]
    fn callback_can_stop_itself() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let task = Repeating::every("once", Duration::from_millis(1), move || {
            counter.fetch_add(1, Ordering::SeqCst);
            false
        });

        let deadline = Instant::now() + Duration::from_secs(5);
        while task.is_running() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(2));
        }
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn drop_cancels_a_long_wait_promptly() {
        let task = Repeating::every("slow", Duration::from_secs(60), || true);
        let started = Instant::now();
        drop(task);
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn random_interval_stays_in_bounds() {
        let (min, max) = (Duration::from_millis(2000), Duration::from_millis(5000));
        for _ in 0..200 {
            let d = random_interval(min, max);
            assert!(d >= min && d <= max);
        }
        assert_eq!(random_interval(max, min), max);
    }
}
