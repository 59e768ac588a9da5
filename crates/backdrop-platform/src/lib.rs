//! Platform integration: OS paths, media type classification, crash reports.

pub mod crash_report;
pub mod media;
pub mod paths;

pub use media::MediaKind;
