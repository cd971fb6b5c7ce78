//! Loading the travel-time and attraction tables.
//!
//! Both tables are CSV files decoded with an encoding fallback list. They
//! are read once at startup; any failure here is fatal.

mod decode;
mod error;
mod tables;

use std::path::PathBuf;

use encoding_rs::Encoding;
use tracing::info;

use crate::dataset::Dataset;

pub use decode::{decode, default_encodings, parse_encoding, read_text};
pub use error::LoadError;
pub use tables::{parse_attractions, parse_travel_times};

/// Where to find the data files and how to decode them.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Path to the station-to-station travel-time table.
    pub travel_times: PathBuf,

    /// Path to the attraction table.
    pub attractions: PathBuf,

    /// Encodings to try, in order.
    pub encodings: Vec<&'static Encoding>,
}

impl LoaderConfig {
    /// Create a configuration with the default encoding list.
    pub fn new(travel_times: impl Into<PathBuf>, attractions: impl Into<PathBuf>) -> Self {
        Self {
            travel_times: travel_times.into(),
            attractions: attractions.into(),
            encodings: default_encodings(),
        }
    }

    /// Replace the encoding list.
    pub fn with_encodings(mut self, encodings: Vec<&'static Encoding>) -> Self {
        self.encodings = encodings;
        self
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self::new("data/travel_times.csv", "data/attractions.csv")
    }
}

/// Load both tables.
pub fn load_dataset(config: &LoaderConfig) -> Result<Dataset, LoadError> {
    let (text, encoding) = read_text(&config.travel_times, &config.encodings)?;
    let travel_times = parse_travel_times(&text)?;
    info!(
        path = %config.travel_times.display(),
        encoding = encoding.name(),
        stations = travel_times.len(),
        "loaded travel times"
    );

    let (text, encoding) = read_text(&config.attractions, &config.encodings)?;
    let catalog = parse_attractions(&text)?;
    info!(
        path = %config.attractions.display(),
        encoding = encoding.name(),
        attractions = catalog.len(),
        "loaded attractions"
    );

    Ok(Dataset::new(travel_times, catalog))
}
