//! Background controller state.
//!
//! Holds the single active (mode, value) descriptor. Applying a new pair
//! fully replaces the prior one; the returned script carries the matching
//! page mutation.

use backdrop_common::{BackgroundDescriptor, BackgroundMode};
use backdrop_config::BackdropConfig;
use backdrop_webview::page_bridge::{apply_script, VideoOptions};

pub struct BackgroundState {
    active: BackgroundDescriptor,
    video: VideoOptions,
}

impl BackgroundState {
    /// Start from the config's startup descriptor and video flags.
    pub fn from_config(config: &BackdropConfig) -> Self {
        Self {
            active: config.startup_descriptor(),
            video: VideoOptions {
                loop_video: config.background.video.loop_video,
                muted: config.background.video.muted,
                autoplay: config.background.video.autoplay,
            },
        }
    }

    /// The currently active descriptor.
    pub fn active(&self) -> &BackgroundDescriptor {
        &self.active
    }

    /// Replace the active descriptor and return the page mutation script.
    pub fn apply(&mut self, mode: BackgroundMode, value: impl Into<String>) -> String {
        self.active = BackgroundDescriptor::new(mode, value);
        self.current_script()
    }

    /// The page mutation script for the active descriptor.
    ///
    /// Used on page load to bring a fresh page in sync with state.
    pub fn current_script(&self) -> String {
        apply_script(&self.active, &self.video)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backdrop_config::BackdropConfig;

    #[test]
    fn starts_with_default_live_wallpaper() {
        let state = BackgroundState::from_config(&BackdropConfig::default());
        assert_eq!(state.active().mode, BackgroundMode::Live);
        assert!(state.active().value.contains("pexels.com"));
        assert!(state.current_script().contains("createElement('video')"));
    }

    #[test]
    fn apply_fully_replaces_descriptor() {
        let mut state = BackgroundState::from_config(&BackdropConfig::default());

        let js = state.apply(BackgroundMode::Solid, "#3b82f6");
        assert_eq!(
            state.active(),
            &BackgroundDescriptor::new(BackgroundMode::Solid, "#3b82f6")
        );
        assert!(js.contains("backgroundColor = '#3b82f6'"));
        assert!(js.contains("old.remove()"));

        let js = state.apply(BackgroundMode::Static, "url('https://x/bg.jpg')");
        assert_eq!(state.active().mode, BackgroundMode::Static);
        assert!(js.contains("backgroundImage"));
        assert!(!js.contains("#3b82f6"));
    }

    #[test]
    fn video_flags_follow_config() {
        let mut config = BackdropConfig::default();
        config.background.video.muted = false;
        let mut state = BackgroundState::from_config(&config);
        let js = state.apply(BackgroundMode::Live, "https://x/v.mp4");
        assert!(js.contains("video.muted = false"));
    }
}
