//! Polling: drain webview events on a fixed interval.
//!
//! wry pushes events into a buffer from its own callbacks; winit does not
//! wake for them, so the event loop polls on a short interval.

use std::time::Instant;

use winit::event_loop::ActiveEventLoop;

use super::core::BackdropApp;
use super::types::POLL_INTERVAL;

impl BackdropApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_webview_events();
        }

        event_loop.set_control_flow(winit::event_loop::ControlFlow::WaitUntil(
            Instant::now() + POLL_INTERVAL,
        ));
    }
}
