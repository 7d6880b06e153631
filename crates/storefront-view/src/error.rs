//! View layer errors.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// Timers need a tokio runtime to schedule on.
    #[error("No tokio runtime available; create the search input inside a runtime")]
    NoRuntime,
}
