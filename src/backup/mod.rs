//! Snapshot export/load and retention. One `BackupService` value per
//! process, constructed with an injected snapshot directory so tests can
//! point it at a scratch location.

mod export;
mod load;
mod retention;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use crate::model::{
    CareerEntry, CollectionData, CollectionKind, Credential, EducationEntry, VolunteerEntry,
    WorkItem,
};

/// Version tag stamped into every snapshot document.
pub const SNAPSHOT_VERSION: &str = "1.0.0";

/// File holding the latest snapshot, overwritten atomically on every export.
pub const CURRENT_SNAPSHOT_FILE: &str = "current-data.json";

const BACKUP_PREFIX: &str = "backup-";
const BACKUP_SUFFIX: &str = ".json";
const DEFAULT_RETAIN: usize = 10;

/// Immutable point-in-time capture of all five collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub work_items: Vec<WorkItem>,
    pub career_entries: Vec<CareerEntry>,
    pub education_entries: Vec<EducationEntry>,
    pub credentials: Vec<Credential>,
    pub volunteer_entries: Vec<VolunteerEntry>,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl Snapshot {
    pub fn is_empty(&self) -> bool {
        self.work_items.is_empty()
            && self.career_entries.is_empty()
            && self.education_entries.is_empty()
            && self.credentials.is_empty()
            && self.volunteer_entries.is_empty()
    }

    /// Clones one collection out of the snapshot.
    pub fn collection(&self, kind: CollectionKind) -> CollectionData {
        match kind {
            CollectionKind::WorkItems => CollectionData::WorkItems(self.work_items.clone()),
            CollectionKind::CareerEntries => {
                CollectionData::CareerEntries(self.career_entries.clone())
            }
            CollectionKind::EducationEntries => {
                CollectionData::EducationEntries(self.education_entries.clone())
            }
            CollectionKind::Credentials => CollectionData::Credentials(self.credentials.clone()),
            CollectionKind::VolunteerEntries => {
                CollectionData::VolunteerEntries(self.volunteer_entries.clone())
            }
        }
    }
}

/// Snapshot file manager: sole writer of the snapshot directory.
///
/// Readers never take a lock; atomic rename on write keeps concurrent reads
/// safe. Exports are serialized through an internal mutex so two exports
/// cannot interleave their current/historical writes.
pub struct BackupService {
    dir: PathBuf,
    retain: usize,
    export_lock: Mutex<()>,
}

impl BackupService {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_retention(dir, DEFAULT_RETAIN)
    }

    /// `retain` bounds how many historical `backup-*.json` files survive a
    /// cleaning pass.
    pub fn with_retention(dir: impl Into<PathBuf>, retain: usize) -> Self {
        Self {
            dir: dir.into(),
            retain,
            export_lock: Mutex::new(()),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn retention(&self) -> usize {
        self.retain
    }

    pub(crate) fn current_path(&self) -> PathBuf {
        self.dir.join(CURRENT_SNAPSHOT_FILE)
    }

    /// Historical snapshot filename. Colons in the RFC 3339 timestamp are
    /// replaced with dashes so lexicographic filename order equals
    /// chronological order on every filesystem.
    pub(crate) fn backup_path(&self, timestamp: &DateTime<Utc>) -> PathBuf {
        let encoded = timestamp
            .to_rfc3339_opts(SecondsFormat::Millis, true)
            .replace(':', "-");
        self.dir.join(format!("{BACKUP_PREFIX}{encoded}{BACKUP_SUFFIX}"))
    }

    pub(crate) fn export_lock(&self) -> &Mutex<()> {
        &self.export_lock
    }

    pub(crate) fn is_backup_file_name(name: &str) -> bool {
        name.starts_with(BACKUP_PREFIX) && name.ends_with(BACKUP_SUFFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn backup_file_names_sort_chronologically() {
        let service = BackupService::new("/tmp/snapshots");
        let earlier = Utc.with_ymd_and_hms(2024, 3, 9, 23, 59, 59).unwrap();
        let later = Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 1).unwrap();

        let a = service.backup_path(&earlier);
        let b = service.backup_path(&later);
        assert!(a.file_name().unwrap() < b.file_name().unwrap());
    }

    #[test]
    fn backup_file_name_filter() {
        assert!(BackupService::is_backup_file_name(
            "backup-2024-03-10T00-00-01.000Z.json"
        ));
        assert!(!BackupService::is_backup_file_name("current-data.json"));
        assert!(!BackupService::is_backup_file_name(
            "backup-2024-03-10T00-00-01.000Z.tmp"
        ));
    }
}
