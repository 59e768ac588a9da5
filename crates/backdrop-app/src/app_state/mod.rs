//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Coordinates config, the page webview, and the background,
//! menu, and showcase state machines.

mod background;
mod core;
mod event_handler;
mod init;
mod menu;
mod polling;
mod showcase;
mod shutdown;
mod types;
mod webview_bridge;

pub use core::BackdropApp;
