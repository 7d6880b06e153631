//! Debounced search input.
//!
//! Keystrokes update a local echo right away; the trimmed text reaches the
//! URL only after the input has been quiet for the configured delay. Each
//! keystroke aborts the scheduled commit and schedules a new one, and a
//! generation counter stops a commit that was already past its sleep when
//! it got superseded.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use serde::Serialize;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, trace};

use crate::config::ListingConfig;
use crate::error::ViewError;
use crate::location::{update_params, Navigator};
use crate::params::QUERY_PARAM;

/// Where the committed `query` parameter stands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum CommitState {
    /// Nothing typed since creation or the last cancel.
    Idle,
    /// A commit of this value is scheduled.
    Pending(String),
    /// This value was written to the URL. An empty value means the
    /// parameter was removed.
    Committed(String),
}

#[derive(Debug)]
struct Shared {
    generation: u64,
    state: CommitState,
}

/// Owns the search box text and the single scheduled URL commit.
///
/// Must be created inside a tokio runtime. Dropping it cancels any pending
/// commit, so leaving the page can never write to a stale URL.
pub struct QueryCommitter {
    navigator: Arc<dyn Navigator>,
    delay: Duration,
    echo: String,
    shared: Arc<Mutex<Shared>>,
    pending: Option<JoinHandle<()>>,
    runtime: Handle,
}

impl QueryCommitter {
    pub fn new(navigator: Arc<dyn Navigator>, config: &ListingConfig) -> Result<Self, ViewError> {
        let runtime = Handle::try_current().map_err(|_| ViewError::NoRuntime)?;
        let mut committer = Self {
            navigator,
            delay: config.debounce(),
            echo: String::new(),
            shared: Arc::new(Mutex::new(Shared {
                generation: 0,
                state: CommitState::Idle,
            })),
            pending: None,
            runtime,
        };
        committer.sync_from_location();
        Ok(committer)
    }

    /// Handle one change of the search box.
    pub fn on_input(&mut self, value: &str) {
        trace!(value, "search input");
        self.echo = value.to_string();
        self.abort_pending();

        if value.is_empty() {
            self.commit_now();
            return;
        }

        let value = value.trim().to_string();
        let generation = {
            let mut shared = lock(&self.shared);
            shared.generation += 1;
            shared.state = CommitState::Pending(value.clone());
            shared.generation
        };

        // The quiet period runs from the keystroke, not from the task's first poll.
        let deadline = Instant::now() + self.delay;
        let navigator = Arc::clone(&self.navigator);
        let shared = Arc::clone(&self.shared);
        self.pending = Some(self.runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;

            let mut shared = lock(&shared);
            if shared.generation != generation {
                return;
            }
            write_query(navigator.as_ref(), &value);
            shared.state = CommitState::Committed(value);
        }));
    }

    /// The clear button: empty the box and drop the parameter immediately.
    pub fn clear(&mut self) {
        self.echo.clear();
        self.abort_pending();
        self.commit_now();
    }

    /// Cancel the scheduled commit, if any. The echo is left as is.
    pub fn cancel(&mut self) {
        self.abort_pending();
        let mut shared = lock(&self.shared);
        if matches!(shared.state, CommitState::Pending(_)) {
            shared.state = CommitState::Idle;
        }
    }

    /// Copy the URL's `query` into the echo, e.g. after back/forward navigation.
    pub fn sync_from_location(&mut self) {
        let location = self.navigator.location();
        self.echo = location
            .params
            .get(QUERY_PARAM)
            .unwrap_or_default()
            .to_string();
    }

    /// Text currently shown in the search box.
    pub fn echo(&self) -> &str {
        &self.echo
    }

    pub fn state(&self) -> CommitState {
        lock(&self.shared).state.clone()
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state(), CommitState::Pending(_))
    }

    fn abort_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        lock(&self.shared).generation += 1;
    }

    fn commit_now(&mut self) {
        let mut shared = lock(&self.shared);
        write_query(self.navigator.as_ref(), "");
        shared.state = CommitState::Committed(String::new());
    }
}

impl Drop for QueryCommitter {
    fn drop(&mut self) {
        self.abort_pending();
    }
}

fn write_query(navigator: &dyn Navigator, value: &str) {
    debug!(query = value, "committing search query");
    update_params(navigator, |params| params.set_query(value));
}

fn lock(shared: &Mutex<Shared>) -> std::sync::MutexGuard<'_, Shared> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}
