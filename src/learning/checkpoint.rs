//! Weight checkpoints.
//!
//! A checkpoint is the weight vector plus the epoch it was taken at, encoded
//! with bincode. Files are named `qlearner-<unix seconds>-epoch-<epoch>.ckpt`.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::core::error::{GolfError, Result};

use super::features::Features;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub weights: Features,
    pub epoch: u64,
}

/// Read a checkpoint. Any failure is reported as `MissingModel`.
pub fn load(path: &Path) -> Result<Checkpoint> {
    let missing = |reason: String| GolfError::MissingModel {
        path: path.to_path_buf(),
        reason,
    };

    let file = File::open(path).map_err(|e| missing(e.to_string()))?;
    let checkpoint: Checkpoint =
        bincode::deserialize_from(BufReader::new(file)).map_err(|e| missing(e.to_string()))?;

    if checkpoint.weights.iter().any(|w| !w.is_finite()) {
        return Err(missing("weights are not finite".into()));
    }
    Ok(checkpoint)
}

/// Write a checkpoint, creating parent directories as needed.
pub fn save(path: &Path, checkpoint: &Checkpoint) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    bincode::serialize_into(&mut writer, checkpoint)?;
    writer.flush()?;
    Ok(())
}

#[must_use]
pub fn file_name(timestamp: u64, epoch: u64) -> String {
    format!("qlearner-{timestamp}-epoch-{epoch}.ckpt")
}

/// Seconds since the Unix epoch, 0 if the clock is before it.
#[must_use]
pub fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
