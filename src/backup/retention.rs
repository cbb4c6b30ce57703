use log::{info, warn};
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;

use super::BackupService;
use crate::core::Result;

impl BackupService {
    /// Historical snapshot files, sorted oldest-first by filename (filename
    /// order equals chronological order). A missing directory is an empty
    /// list.
    pub async fn list_backups(&self) -> Result<Vec<PathBuf>> {
        let mut entries = match fs::read_dir(self.dir()).await {
            Ok(entries) => entries,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let mut backups = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if Self::is_backup_file_name(name) {
                backups.push(entry.path());
            }
        }

        backups.sort();
        Ok(backups)
    }

    /// Deletes all but the newest `retention()` historical snapshots.
    ///
    /// Best-effort, unlike export: a file that cannot be deleted is logged
    /// and skipped, and cleaning continues with the rest. Returns the number
    /// of files actually deleted.
    pub async fn clean(&self) -> Result<usize> {
        let backups = self.list_backups().await?;
        if backups.len() <= self.retention() {
            return Ok(0);
        }

        let excess = backups.len() - self.retention();
        let mut deleted = 0;

        for path in backups.into_iter().take(excess) {
            match fs::remove_file(&path).await {
                Ok(()) => deleted += 1,
                Err(err) => {
                    warn!("retention: skipping {} ({err})", path.display());
                }
            }
        }

        info!("retention: deleted {deleted} of {excess} excess snapshots");
        Ok(deleted)
    }
}
