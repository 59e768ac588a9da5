//! Showcase widget IPC handlers.
//!
//! Each interaction mutates the Rust-side widget state and pushes the full
//! `showcase_state` payload back so the page re-renders from it.

use backdrop_webview::IpcPayload;

use crate::app_state::core::BackdropApp;

use super::{extract_bool_field, extract_string_field};

impl BackdropApp {
    /// Handle `showcase_increment` — the counter button was clicked.
    pub(in crate::app_state) fn handle_showcase_increment(&mut self) {
        self.showcase.increment();
        self.push_showcase_state();
    }

    /// Handle `showcase_input` — the text input changed.
    pub(in crate::app_state) fn handle_showcase_input(&mut self, payload: &IpcPayload) {
        match extract_string_field(payload, "value") {
            Some(value) => {
                self.showcase.set_input(value);
                self.push_showcase_state();
            }
            None => tracing::warn!("showcase_input: missing value"),
        }
    }

    /// Handle `showcase_switch` — the switch was toggled.
    pub(in crate::app_state) fn handle_showcase_switch(&mut self, payload: &IpcPayload) {
        match extract_bool_field(payload, "on") {
            Some(on) => {
                self.showcase.set_switch(on);
                self.push_showcase_state();
            }
            None => tracing::warn!("showcase_switch: missing 'on'"),
        }
    }

    /// Handle `showcase_checkbox` — the checkbox was toggled.
    pub(in crate::app_state) fn handle_showcase_checkbox(&mut self, payload: &IpcPayload) {
        match extract_bool_field(payload, "on") {
            Some(on) => {
                self.showcase.set_checkbox(on);
                self.push_showcase_state();
            }
            None => tracing::warn!("showcase_checkbox: missing 'on'"),
        }
    }
}
