use resolve_path::PathResolveExt;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use crate::configuration::Settings;
use crate::errors::{Error, Result};

/// What a single run should do, fixed once the arguments are parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    low: u32,
    high: u32,
    count: u32,
    destination: PathBuf,
}

impl FetchRequest {
    pub fn new(low: u32, high: u32, count: u32, destination: impl AsRef<Path>) -> Result<Self> {
        if low > high {
            return Err(Error::InvalidRange { low, high });
        }

        let destination = destination.as_ref();
        let resolved = destination.try_resolve().map_err(|source| Error::Write {
            path: destination.to_path_buf(),
            source,
        })?;

        Ok(Self {
            low,
            high,
            count,
            destination: resolved.into_owned(),
        })
    }

    pub fn from_settings(settings: &Settings, destination: impl AsRef<Path>) -> Result<Self> {
        Self::new(settings.low, settings.high, settings.cartoons, destination)
    }

    pub fn id_range(&self) -> RangeInclusive<u32> {
        self.low..=self.high
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }
}
