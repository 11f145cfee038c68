use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TimerError {
    /// The elapsed seconds can not be expressed as a `Duration`
    #[error("Elapsed time out of range. {0}")]
    OutOfRange(#[from] std::time::TryFromFloatSecsError),
}
