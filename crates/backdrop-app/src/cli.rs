use clap::Parser;

/// Backdrop — a dynamic wallpaper demo with a component showcase.
#[derive(Parser, Debug)]
#[command(name = "backdrop", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
