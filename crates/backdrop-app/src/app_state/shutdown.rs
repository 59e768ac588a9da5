//! Graceful shutdown: destroy the page webview and release state.

use super::core::BackdropApp;

impl BackdropApp {
    /// Perform graceful shutdown.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        if let Some(ref mut registry) = self.webviews {
            registry.destroy_all();
        }
        self.webviews = None;
        self.content = None;

        tracing::info!("Graceful shutdown complete");
    }
}

#[cfg(test)]
mod tests {
    use crate::app_state::core::BackdropApp;
    use backdrop_config::BackdropConfig;

    #[test]
    fn shutdown_on_fresh_app_does_not_panic() {
        let mut app = BackdropApp::new(BackdropConfig::default());
        app.shutdown();
        assert!(app.webviews.is_none());
        assert!(app.content.is_none());
    }

    #[test]
    fn shutdown_is_idempotent() {
        let mut app = BackdropApp::new(BackdropConfig::default());
        app.shutdown();
        app.shutdown(); // second call must not panic
        assert!(app.webviews.is_none());
    }
}
