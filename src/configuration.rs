use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_BASE_URL: &str = "http://xkcd.com/";
pub const DEFAULT_LOW: u32 = 1;
pub const DEFAULT_HIGH: u32 = 1666;
pub const DEFAULT_CARTOONS: u32 = 10;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    pub low: u32,
    pub high: u32,
    pub cartoons: u32,
    pub timeout_secs: u64,
}

impl Settings {
    /// Defaults, then the optional config file, then `XKCD_*` environment variables.
    pub fn new(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("base_url", DEFAULT_BASE_URL)?
            .set_default("low", DEFAULT_LOW)?
            .set_default("high", DEFAULT_HIGH)?
            .set_default("cartoons", DEFAULT_CARTOONS)?
            .set_default("timeout_secs", DEFAULT_TIMEOUT_SECS)?;

        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder
            .add_source(Environment::with_prefix("XKCD"))
            .build()?
            .try_deserialize()
    }
}
