//! Embedded webview layer for Backdrop.
//!
//! Hosts the demo page in a `wry` webview: lifecycle management, the
//! `backdrop://` custom protocol with in-memory asset overrides, the IPC
//! bridge between page JavaScript and Rust, and generation of the
//! background mutation scripts the controller injects into the page.

pub mod content;
pub mod events;
pub mod ipc;
pub mod manager;
pub mod page_bridge;

pub use content::ContentProvider;
pub use events::{PageLoadState, WebViewEvent};
pub use ipc::{IpcMessage, IpcPayload};
pub use manager::{WebViewConfig, WebViewHandle, WebViewManager, WebViewRegistry};
