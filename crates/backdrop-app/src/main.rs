mod app_state;
mod cli;
mod page;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let path = backdrop_platform::crash_report::write_crash_report(info);

        eprintln!("\n--- Backdrop crashed ---");
        if let Some(p) = &path {
            eprintln!("Crash report written to: {}", p.display());
        }
        eprintln!("Please report this issue at: https://github.com/dylan/backdrop/issues");
        eprintln!("------------------------\n");

        default_hook(info);
    }));
}

fn main() {
    // Install panic hook for crash reports
    install_panic_hook();

    // Parse CLI arguments
    let args = cli::parse();

    // Load config (CLI path override wins over the platform default)
    let config = match args.config.as_deref() {
        Some(path) => backdrop_config::load_config_from(std::path::Path::new(path)),
        None => backdrop_config::load_config(),
    }
    .unwrap_or_else(|e| {
        eprintln!("Config load failed, using defaults: {e}");
        backdrop_config::BackdropConfig::default()
    });

    // Initialize logging: CLI override > config filter
    let log_directive = args
        .log_level
        .as_deref()
        .unwrap_or(&config.logging.filter)
        .to_string();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "backdrop=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("Backdrop v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }

    // Ensure platform directories exist
    if let Err(e) = backdrop_platform::paths::ensure_dirs() {
        tracing::warn!("Failed to create directories: {e}");
    }

    // Create event loop and run
    let event_loop = EventLoop::new().expect("failed to create event loop");
    let mut app = app_state::BackdropApp::new(config);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
