//! The notification delivery seam.

use tracing::info;

use crate::catalog::InterestMatch;

/// Delivery channel for interest notifications.
///
/// Implementations are fire-and-forget: delivery must not block the caller
/// meaningfully and has no way to report failure back. Registration outcomes
/// never depend on what happens here.
pub trait Notifier: Send + Sync {
    fn notify(&self, address: &str, message: &str);
}

/// Stand-in channel that writes each notification to the log instead of
/// delivering it anywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, address: &str, message: &str) {
        info!(address, "Notification sent: {message}");
    }
}

/// Render each match into its message and hand it to the notifier.
pub(crate) fn dispatch(notifier: &dyn Notifier, matches: &[InterestMatch]) {
    for interest_match in matches {
        notifier.notify(interest_match.address(), &interest_match.message());
    }
}

/// Captures notifications for assertions instead of delivering them.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingNotifier {
    pub sent: parking_lot::Mutex<Vec<(String, String)>>,
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    fn notify(&self, address: &str, message: &str) {
        self.sent.lock().push((address.into(), message.into()));
    }
}
