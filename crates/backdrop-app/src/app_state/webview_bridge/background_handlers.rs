//! Background and menu IPC handlers.
//!
//! The page posts (mode, value) selections; Rust validates them, updates
//! the background controller, and evaluates the resulting mutation script.
//! Invalid selections leave the active background unchanged — the page
//! shows no error (silent degradation).

use backdrop_common::{BackgroundMode, MenuCategory};
use backdrop_webview::page_bridge::validate_css_color;
use backdrop_webview::IpcPayload;

use crate::app_state::core::BackdropApp;

use super::extract_string_field;

impl BackdropApp {
    /// Handle `page_ready` — bring a freshly loaded page in sync with state.
    pub(in crate::app_state) fn handle_page_ready(&mut self) {
        tracing::info!("Page ready, syncing state");
        let js = self.background.current_script();
        self.eval_in_page(&js);
        self.push_menu_state();
        self.push_showcase_state();
    }

    /// Handle `menu_toggle` — open/close a category dropdown.
    pub(in crate::app_state) fn handle_menu_toggle(&mut self, payload: &IpcPayload) {
        let category = extract_string_field(payload, "category")
            .and_then(|s| MenuCategory::parse(&s));

        match category {
            Some(category) => {
                self.menu.toggle(category);
                self.push_menu_state();
            }
            None => {
                tracing::warn!("menu_toggle: missing or unknown category");
            }
        }
    }

    /// Handle `menu_dismiss` — close any open dropdown (click outside).
    pub(in crate::app_state) fn handle_menu_dismiss(&mut self) {
        if self.menu.dismiss() {
            self.push_menu_state();
        }
    }

    /// Handle `background_select` — apply a (mode, value) pair from the menu.
    pub(in crate::app_state) fn handle_background_select(&mut self, payload: &IpcPayload) {
        let mode = extract_string_field(payload, "mode").and_then(|s| BackgroundMode::parse(&s));
        let value = extract_string_field(payload, "value");

        let (mode, value) = match (mode, value) {
            (Some(m), Some(v)) => (m, v),
            _ => {
                tracing::warn!("background_select: missing mode or value");
                return;
            }
        };

        if let Err(e) = validate_selection(mode, &value) {
            tracing::warn!(%mode, error = %e, "background_select: rejected value");
            return;
        }

        self.apply_background(mode, value);
    }

    /// Handle `color_picked` — the free-form color picker applies a solid.
    pub(in crate::app_state) fn handle_color_picked(&mut self, payload: &IpcPayload) {
        let value = match extract_string_field(payload, "value") {
            Some(v) => v,
            None => {
                tracing::warn!("color_picked: missing value");
                return;
            }
        };

        if let Err(e) = validate_css_color(&value) {
            tracing::warn!(error = %e, "color_picked: rejected value");
            return;
        }

        self.apply_background(BackgroundMode::Solid, value);
    }

    /// Replace the active background and close the selection dropdown.
    pub(in crate::app_state) fn apply_background(&mut self, mode: BackgroundMode, value: String) {
        tracing::info!(%mode, "Applying background");
        let js = self.background.apply(mode, value);
        self.eval_in_page(&js);

        // Selecting any option closes the open dropdown
        self.menu.dismiss();
        self.push_menu_state();
    }
}

/// Validate a selection value against its mode before it reaches a script.
fn validate_selection(mode: BackgroundMode, value: &str) -> Result<(), String> {
    match mode {
        BackgroundMode::Solid => validate_css_color(value),
        BackgroundMode::Static | BackgroundMode::Live => {
            if value.trim().is_empty() {
                Err("empty value".to_string())
            } else {
                Ok(())
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
