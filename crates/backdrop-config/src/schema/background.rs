//! Startup background configuration types.

use serde::{Deserialize, Serialize};

use backdrop_common::BackgroundMode;

/// Video playback settings for live wallpapers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoSettings {
    #[serde(rename = "loop")]
    pub loop_video: bool,
    pub muted: bool,
    pub autoplay: bool,
}

impl Default for VideoSettings {
    fn default() -> Self {
        Self {
            loop_video: true,
            muted: true,
            autoplay: true,
        }
    }
}

/// Background shown when the app starts.
///
/// An empty `value` resolves to the first wallpaper catalog entry for the
/// configured mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    pub mode: BackgroundMode,
    pub value: String,
    pub video: VideoSettings,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            mode: BackgroundMode::Live,
            value: "https://www.pexels.com/download/video/3051490/".into(),
            video: VideoSettings::default(),
        }
    }
}
