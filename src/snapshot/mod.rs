pub mod club_structs;

use std::{fs, io, path::Path};

use serde::de::DeserializeOwned;
use thiserror::Error;

pub use club_structs::{Match, Profile};

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Failed to read snapshot file: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse snapshot rows: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to serialize standings output: {0}")]
    Output(serde_json::Error)
}

/// A point-in-time export of the club tables the ladder is rebuilt from.
///
/// The processor never talks to the hosted database directly; the app's
/// export job dumps `matches` and `profiles` as JSON arrays and this is
/// their typed form.
#[derive(Debug, Clone, Default)]
pub struct ClubSnapshot {
    pub matches: Vec<Match>,
    pub profiles: Vec<Profile>
}

impl ClubSnapshot {
    pub fn load(matches_path: &Path, profiles_path: Option<&Path>) -> Result<ClubSnapshot, SnapshotError> {
        let matches = read_rows(matches_path)?;
        let profiles = match profiles_path {
            Some(path) => read_rows(path)?,
            None => Vec::new()
        };

        Ok(ClubSnapshot { matches, profiles })
    }
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, SnapshotError> {
    let raw = fs::read_to_string(path)?;

    Ok(serde_json::from_str(&raw)?)
}
