use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    /// `submit` was called after `shutdown`.
    Stopped,
    /// The notification queue refused a request. The coalescing contract
    /// guarantees this cannot happen while the worker is alive, so callers
    /// should treat it as fatal.
    QueueClosed,
}

impl fmt::Display for SchedulerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stopped => write!(f, "render scheduler has been shut down"),
            Self::QueueClosed => write!(f, "unable to queue view state: render worker is gone"),
        }
    }
}

impl Error for SchedulerError {}
