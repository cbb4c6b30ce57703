use log::{debug, warn};
use std::io::ErrorKind;
use tokio::fs;

use super::{BackupService, Snapshot};

impl BackupService {
    /// Reads and parses the current snapshot file.
    ///
    /// Missing, unreadable, or unparseable snapshots are logged and reported
    /// as `None`; callers treat that exactly like an empty snapshot.
    pub async fn load_current(&self) -> Option<Snapshot> {
        let path = self.current_path();

        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("no snapshot at {}", path.display());
                return None;
            }
            Err(err) => {
                warn!("snapshot {} is unreadable: {err}", path.display());
                return None;
            }
        };

        match serde_json::from_slice::<Snapshot>(&bytes) {
            Ok(snapshot) => Some(snapshot),
            Err(err) => {
                warn!("snapshot {} failed to parse: {err}", path.display());
                None
            }
        }
    }
}
