//! Shared constants for the app state.

use std::time::Duration;

/// Pane ID of the single full-window page webview.
pub(super) const PAGE_PANE_ID: u32 = 1;

/// How often webview events are drained while idle.
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(50);
