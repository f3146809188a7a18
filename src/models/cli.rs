use clap::Parser;
use std::path::{Path, PathBuf};

use crate::configuration::Settings;

/// This program builds a json file from some random xkcd cartoons.
/// Images are base64 encoded.
#[derive(clap::Parser, Debug)]
#[command(about, version)]
pub struct Cli {
    /// Destination json file
    #[arg(value_name = "OUTPUT")]
    pub outputs: Vec<PathBuf>,

    /// Lowest xkcd to fetch [default: 1]
    #[arg(long)]
    pub low: Option<u32>,

    /// Highest xkcd to fetch [default: 1666]
    #[arg(long)]
    pub high: Option<u32>,

    /// Number of cartoons to fetch [default: 10]
    #[arg(long)]
    pub cartoons: Option<u32>,

    /// Timeout for every request, in seconds [default: 30]
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Optional configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn new() -> Self {
        Cli::parse()
    }

    /// The destination, only when exactly one was given.
    pub fn output(&self) -> Option<&Path> {
        match self.outputs.as_slice() {
            [output] => Some(output.as_path()),
            _ => None,
        }
    }

    /// Command line flags win over every other settings layer.
    pub fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(low) = self.low {
            settings.low = low;
        }
        if let Some(high) = self.high {
            settings.high = high;
        }
        if let Some(cartoons) = self.cartoons {
            settings.cartoons = cartoons;
        }
        if let Some(timeout) = self.timeout {
            settings.timeout_secs = timeout;
        }
        settings
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self::new()
    }
}
