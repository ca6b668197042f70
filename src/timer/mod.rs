use std::time::Duration;
use tokio::task::JoinHandle;


#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TimerSignal {
    Tick { remaining_secs: i64 },
    Expired,
}

/// One-second-resolution countdown for a single round. At most one countdown
/// task is alive per timer: `start` stops any previous one first.
pub struct RoundTimer {
    task: Option<JoinHandle<()>>,
}

impl RoundTimer {
    pub fn new() -> Self {
        Self { task: None }
    }

    /// Begins a countdown from `duration_secs`, emitting a `Tick` every
    /// second and a single `Expired` once the remaining time would go below
    /// zero, after which the task stops itself.
    pub fn start<F>(&mut self, duration_secs: u64, mut emit: F)
    where
        F: FnMut(TimerSignal) + Send + 'static,
    {
        self.stop();
        self.task = Some(tokio::spawn(async move {
            let mut remaining_secs = duration_secs as i64;
            loop {
                tokio::time::sleep(Duration::from_secs(1)).await;
                remaining_secs -= 1;
                if remaining_secs < 0 {
                    emit(TimerSignal::Expired);
                    break;
                }
                emit(TimerSignal::Tick { remaining_secs });
            }
        }));
    }

    /// Cancels the countdown. Calling on an already-stopped timer is a no-op.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    pub fn is_active(&self) -> bool {
        self.task.as_ref().map_or(false, |task| !task.is_finished())
    }
}

impl Default for RoundTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for RoundTimer {
    fn drop(&mut self) {
        self.stop();
    }
}

/// `M:SS` with unpadded minutes, used for elapsed times and totals.
pub fn format_time(total_secs: u64) -> String {
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

/// Zero-padded `MM:SS`, used for the live countdown display.
pub fn format_countdown(total_secs: u64) -> String {
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

/// Parses an `M:SS` string back into total seconds.
pub fn parse_time(formatted: &str) -> Option<u64> {
    let (minutes, seconds) = formatted.split_once(':')?;
    let minutes: u64 = minutes.parse().ok()?;
    let seconds: u64 = seconds.parse().ok()?;
    Some(minutes * 60 + seconds)
}
