use std::path::PathBuf;

use clap::Parser;

/// Terminal quote manager with periodic server sync.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "quotes", version, about)]
pub struct Args {
    /// Config file (RON). Defaults to `<data-dir>/config.ron`.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding persisted quotes, filter and logs.
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Remote quote endpoint.
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Seconds between automatic sync cycles.
    #[arg(long, value_name = "SECS")]
    pub sync_interval: Option<u64>,

    /// Disable automatic syncing; `sync` still works.
    #[arg(long)]
    pub no_sync: bool,

    /// Never talk to the remote endpoint.
    #[arg(long)]
    pub offline: bool,

    /// trace | debug | info | warn | error | off
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// file | terminal | both
    #[arg(long, value_name = "DEST")]
    pub log_to: Option<String>,
}
