use clap::Parser;

/// Hybrid: a single embedded web screen with native dialogs.
#[derive(Parser, Debug)]
#[command(name = "hybrid", version, about)]
pub struct Args {
    /// Address to open instead of the configured default.
    pub url: Option<String>,

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
