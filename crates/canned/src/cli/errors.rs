//! Error queue rendering.

use canned::ErrorHandlerState;

/// Print every queued error, oldest first, then empty the queue.
///
/// Returns how many errors were printed.
pub fn drain_error_queue(errors: &ErrorHandlerState) -> usize {
    let count = errors.count();
    if count == 0 {
        return 0;
    }

    eprintln!("{} unhandled error(s):", count);
    while let Some(error) = errors.peek_next() {
        let status = error
            .status()
            .map(|status| format!(" [{}]", status))
            .unwrap_or_default();
        eprintln!("  {}{}: {}", error.kind().name(), status, error.message());
        errors.dismiss_one();
    }

    count
}
