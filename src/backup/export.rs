use chrono::Utc;
use log::{info, warn};
use std::path::Path;
use tokio::fs;

use super::{BackupService, Snapshot, SNAPSHOT_VERSION};
use crate::core::{Result, StoreError};
use crate::store::ContentStore;

impl BackupService {
    /// Produces one fresh, internally consistent snapshot.
    ///
    /// All five collections are read from the primary store; if any read
    /// fails the whole export is aborted and the prior current snapshot is
    /// left untouched. Both files (current + historical) are written via a
    /// temp path and an atomic rename, so a concurrent reader never sees a
    /// partial document.
    pub async fn export(&self, store: &dyn ContentStore) -> Result<Snapshot> {
        let _guard = self.export_lock().lock().await;

        let (work_items, career_entries, education_entries, credentials, volunteer_entries) =
            tokio::try_join!(
                store.work_items(),
                store.career_entries(),
                store.education_entries(),
                store.credentials(),
                store.volunteer_entries(),
            )?;

        let snapshot = Snapshot {
            work_items,
            career_entries,
            education_entries,
            credentials,
            volunteer_entries,
            timestamp: Utc::now(),
            version: SNAPSHOT_VERSION.to_string(),
        };

        fs::create_dir_all(self.dir())
            .await
            .map_err(|err| StoreError::SnapshotWrite(err.to_string()))?;

        let json = serde_json::to_vec_pretty(&snapshot)
            .map_err(|err| StoreError::SnapshotWrite(err.to_string()))?;

        write_atomic(&self.current_path(), &json).await?;
        write_atomic(&self.backup_path(&snapshot.timestamp), &json).await?;

        info!(
            "exported snapshot at {} ({} work items, {} career, {} education, {} credentials, {} volunteer)",
            snapshot.timestamp,
            snapshot.work_items.len(),
            snapshot.career_entries.len(),
            snapshot.education_entries.len(),
            snapshot.credentials.len(),
            snapshot.volunteer_entries.len(),
        );

        Ok(snapshot)
    }

    /// Export followed by a best-effort retention pass. A failed cleaning
    /// never fails the export that preceded it.
    pub async fn export_and_clean(&self, store: &dyn ContentStore) -> Result<Snapshot> {
        let snapshot = self.export(store).await?;
        if let Err(err) = self.clean().await {
            warn!("retention cleaning after export failed: {err}");
        }
        Ok(snapshot)
    }
}

/// Writes to a `.tmp` sibling and renames into place.
async fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let tmp_path = path.with_extension("tmp");

    fs::write(&tmp_path, bytes)
        .await
        .map_err(|err| StoreError::SnapshotWrite(err.to_string()))?;

    fs::rename(&tmp_path, path)
        .await
        .map_err(|err| StoreError::SnapshotWrite(err.to_string()))?;

    Ok(())
}
