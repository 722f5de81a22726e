use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser};

pub const DEFAULT_ADDR: &str = "0.0.0.0:42069";
pub const DEFAULT_DELETE_DELAY_MS: u64 = 4000;

#[derive(Parser, Debug)]
#[command(name = "rolodex-web", version, about = "Hypermedia contact book served over HTTP")]
pub struct Cli {
    /// Address the HTTP server listens on
    #[arg(long, env = "ROLODEX_ADDR", default_value = DEFAULT_ADDR)]
    pub addr: SocketAddr,

    /// Directory holding the `images/` and `css/` folders
    #[arg(long, env = "ROLODEX_ASSETS_DIR", default_value = ".")]
    pub assets_dir: PathBuf,

    /// Milliseconds a delete request waits before removing the contact
    #[arg(long, env = "ROLODEX_DELETE_DELAY_MS", default_value_t = DEFAULT_DELETE_DELAY_MS)]
    pub delete_delay_ms: u64,

    /// Start with an empty contact list instead of the three seed contacts
    #[arg(long, env = "ROLODEX_EMPTY")]
    pub empty: bool,

    /// Log more (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Server settings resolved from the command line and environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
    pub assets_dir: PathBuf,
    pub delete_delay: Duration,
    pub seed: bool,
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Config {
            addr: cli.addr,
            assets_dir: cli.assets_dir.clone(),
            delete_delay: Duration::from_millis(cli.delete_delay_ms),
            seed: !cli.empty,
        }
    }
}
