use crate::backend::{LocationFetchError, LocationProvider};
use crate::map::models::LatLng;
use async_trait::async_trait;
use rand::Rng;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;
use tokio::sync::Mutex;

#[derive(Debug, Error)]
pub enum LocationsFileError {
    #[error("failed to read the locations file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to deserialize a line in the locations file: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Serves locations from a newline-delimited JSON file instead of the
/// backend, picking at random without repetition until the whole pool has
/// been seen, then starting over.
pub struct FileLocationProvider {
    locations: Vec<LatLng>,
    served: Mutex<Vec<usize>>,
}

impl FileLocationProvider {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LocationsFileError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut locations = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let location: LatLng = serde_json::from_str(&line)?;
            locations.push(location);
        }
        Ok(Self {
            locations,
            served: Mutex::new(Vec::new()),
        })
    }

    pub fn locations(&self) -> &[LatLng] {
        &self.locations
    }
}

#[async_trait]
impl LocationProvider for FileLocationProvider {
    async fn next_location(&self) -> Result<LatLng, LocationFetchError> {
        if self.locations.is_empty() {
            return Err(LocationFetchError::NoLocationsAvailable);
        }
        let mut served = self.served.lock().await;
        if served.len() == self.locations.len() {
            served.clear();
        }
        let available = (0..self.locations.len())
            .filter(|index| !served.contains(index))
            .collect::<Vec<_>>();
        let mut rng = rand::thread_rng();
        let index = available[rng.gen_range(0..available.len())];
        served.push(index);
        Ok(self.locations[index])
    }
}
