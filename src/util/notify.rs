//! User-facing notices raised by navigation.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use crate::gate::Notifier;

/// Shows notices with the browser's blocking `alert` dialog.
///
/// Without a browser (SSR, native tests) the notice is logged instead.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if window.alert_with_message(message).is_ok() {
                    return;
                }
            }
        }
        leptos::logging::warn!("notice: {message}");
    }
}
