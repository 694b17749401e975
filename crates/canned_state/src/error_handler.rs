//! Ordered queue of errors that escaped local recovery.

use canned_error::ApplicationError;
use canned_interface::ErrorSink;
use derive_getters::Getters;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, instrument};

/// Snapshot of the error queue with its derived fields.
///
/// `error_count` and `next_error` are recomputed together with every change
/// to `errors`, so a snapshot is always internally consistent.
#[derive(Debug, Clone, Default, Getters)]
pub struct ErrorState {
    errors: VecDeque<ApplicationError>,
    error_count: usize,
    next_error: Option<ApplicationError>,
}

impl ErrorState {
    fn derive(errors: VecDeque<ApplicationError>) -> Self {
        Self {
            error_count: errors.len(),
            next_error: errors.front().cloned(),
            errors,
        }
    }

    /// True when no errors are queued.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Handle to the process-wide error queue.
///
/// Create one at startup and pass clones to whatever needs to report or
/// display errors; every clone shares the same queue. The queue is FIFO:
/// [`peek_next`](Self::peek_next) is the oldest error and
/// [`dismiss_one`](Self::dismiss_one) removes it.
///
/// All mutations go through a single update path that holds the state's
/// write lock while applying the change and recomputing the derived fields,
/// so concurrent enqueues and dismissals never lose updates.
///
/// # Examples
///
/// ```
/// use canned_error::ApplicationError;
/// use canned_state::ErrorHandlerState;
///
/// let errors = ErrorHandlerState::new();
/// errors.enqueue(ApplicationError::transport(500, "first"));
/// errors.enqueue(ApplicationError::transport(502, "second"));
///
/// assert_eq!(errors.count(), 2);
/// assert_eq!(errors.peek_next().unwrap().message(), "first");
///
/// errors.dismiss_one();
/// assert_eq!(errors.peek_next().unwrap().message(), "second");
///
/// errors.dismiss_all();
/// assert_eq!(errors.count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct ErrorHandlerState {
    state: Arc<watch::Sender<ErrorState>>,
}

impl Default for ErrorHandlerState {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorHandlerState {
    /// Create an empty queue.
    pub fn new() -> Self {
        let (state, _) = watch::channel(ErrorState::default());
        Self {
            state: Arc::new(state),
        }
    }

    fn update(&self, mutation: impl FnOnce(&mut VecDeque<ApplicationError>)) {
        self.state.send_modify(|state| {
            let mut errors = std::mem::take(&mut state.errors);
            mutation(&mut errors);
            *state = ErrorState::derive(errors);
        });
    }

    /// Append an error to the tail of the queue.
    #[instrument(skip_all, fields(kind = error.kind().name()))]
    pub fn enqueue(&self, error: ApplicationError) {
        info!(error = %error, "Queueing unrecovered error");
        self.update(|errors| errors.push_back(error));
    }

    /// Same as [`enqueue`](Self::enqueue).
    pub fn handle_error(&self, error: ApplicationError) {
        self.enqueue(error);
    }

    /// Queue a custom error.
    #[track_caller]
    pub fn raise_custom_error(&self, name: impl Into<String>, message: impl Into<String>) {
        self.enqueue(ApplicationError::custom(name, message));
    }

    /// Queue an escaping error value.
    ///
    /// Values that already are an `ApplicationError` are queued as they are;
    /// anything else is wrapped as an unknown error.
    #[track_caller]
    pub fn raise_unknown_error(&self, error: Box<dyn std::error::Error + Send + Sync + 'static>) {
        self.enqueue(ApplicationError::classify(error));
    }

    /// Drop the oldest error. Does nothing on an empty queue.
    pub fn dismiss_one(&self) {
        self.update(|errors| {
            errors.pop_front();
        });
        debug!(remaining = self.count(), "Dismissed error");
    }

    /// Drop every queued error.
    pub fn dismiss_all(&self) {
        self.update(VecDeque::clear);
        debug!("Dismissed all errors");
    }

    /// Dismiss the oldest error, or all of them.
    pub fn dismiss(&self, dismiss_all: bool) {
        if dismiss_all {
            self.dismiss_all();
        } else {
            self.dismiss_one();
        }
    }

    /// The oldest queued error.
    pub fn peek_next(&self) -> Option<ApplicationError> {
        self.state.borrow().next_error.clone()
    }

    /// Number of queued errors.
    pub fn count(&self) -> usize {
        self.state.borrow().error_count
    }

    /// Queued errors, oldest first.
    pub fn errors(&self) -> Vec<ApplicationError> {
        self.state.borrow().errors.iter().cloned().collect()
    }

    /// Consistent snapshot of the whole state.
    pub fn snapshot(&self) -> ErrorState {
        self.state.borrow().clone()
    }

    /// Receiver that is notified after every change, for notification
    /// surfaces that redraw on updates.
    pub fn subscribe(&self) -> watch::Receiver<ErrorState> {
        self.state.subscribe()
    }
}

impl ErrorSink for ErrorHandlerState {
    fn report(&self, error: ApplicationError) {
        self.enqueue(error);
    }
}
