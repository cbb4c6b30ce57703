use async_trait::async_trait;
use bistore::{
    normalize_career_entry, normalize_credential, normalize_education_entry,
    normalize_volunteer_entry, normalize_work_item, BackupService, CareerEntry, CareerEntryDraft,
    CollectionKind, ContentStore, Credential, CredentialDraft, EducationEntry,
    EducationEntryDraft, MemoryStore, Result, StoreError, VolunteerEntry, VolunteerEntryDraft,
    WorkItem, WorkItemDraft, CURRENT_SNAPSHOT_FILE, SNAPSHOT_VERSION,
};
use tempfile::tempdir;

fn work_item(title: &str) -> WorkItem {
    normalize_work_item(WorkItemDraft {
        title_fr: Some(title.into()),
        description_fr: Some("Un projet".into()),
        ..Default::default()
    })
    .unwrap()
}

fn seeded_store() -> MemoryStore {
    MemoryStore {
        work_items: vec![work_item("Portfolio"), work_item("Moteur de rendu")],
        career_entries: vec![normalize_career_entry(CareerEntryDraft {
            position_fr: Some("Développeuse".into()),
            company: Some("Acme".into()),
            technologies: Some(vec!["Rust".into()]),
            start_date: Some("2021-01-15".into()),
            ..Default::default()
        })
        .unwrap()],
        education_entries: vec![normalize_education_entry(EducationEntryDraft {
            degree_fr: Some("Baccalauréat".into()),
            institution: Some("UQAM".into()),
            start_date: Some("2014-09-01".into()),
            ..Default::default()
        })
        .unwrap()],
        credentials: vec![normalize_credential(CredentialDraft {
            name_fr: Some("Architecte de solutions".into()),
            issuer: Some("AWS".into()),
            issue_date: Some("2024-03-01".into()),
            ..Default::default()
        })
        .unwrap()],
        volunteer_entries: vec![normalize_volunteer_entry(VolunteerEntryDraft {
            role_fr: Some("Mentore".into()),
            organization: Some("Club de code".into()),
            start_date: Some("2020-02-01".into()),
            ..Default::default()
        })
        .unwrap()],
    }
}

/// Primary store whose credential read always fails.
#[derive(Clone)]
struct BrokenCredentialStore(MemoryStore);

#[async_trait]
impl ContentStore for BrokenCredentialStore {
    async fn work_items(&self) -> Result<Vec<WorkItem>> {
        self.0.work_items().await
    }
    async fn career_entries(&self) -> Result<Vec<CareerEntry>> {
        self.0.career_entries().await
    }
    async fn education_entries(&self) -> Result<Vec<EducationEntry>> {
        self.0.education_entries().await
    }
    async fn credentials(&self) -> Result<Vec<Credential>> {
        Err(StoreError::PrimaryUnavailable("connection refused".into()))
    }
    async fn volunteer_entries(&self) -> Result<Vec<VolunteerEntry>> {
        self.0.volunteer_entries().await
    }
}

#[tokio::test]
async fn export_then_load_round_trips_every_collection() {
    let dir = tempdir().unwrap();
    let store = seeded_store();
    let service = BackupService::new(dir.path());

    let exported = service.export(&store).await.unwrap();
    let loaded = service.load_current().await.unwrap();

    assert_eq!(loaded.work_items.len(), store.work_items.len());
    assert_eq!(loaded.career_entries.len(), store.career_entries.len());
    assert_eq!(loaded.education_entries.len(), store.education_entries.len());
    assert_eq!(loaded.credentials.len(), store.credentials.len());
    assert_eq!(loaded.volunteer_entries.len(), store.volunteer_entries.len());
    assert_eq!(loaded.version, SNAPSHOT_VERSION);
    assert_eq!(loaded, exported);
}

#[tokio::test]
async fn export_writes_current_and_one_historical_file() {
    let dir = tempdir().unwrap();
    let service = BackupService::new(dir.path());

    service.export(&seeded_store()).await.unwrap();

    assert!(dir.path().join(CURRENT_SNAPSHOT_FILE).exists());
    assert_eq!(service.list_backups().await.unwrap().len(), 1);

    // A second export overwrites current and appends to the series.
    // Millisecond-resolution filenames; keep exports distinct.
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    service.export(&seeded_store()).await.unwrap();
    assert_eq!(service.list_backups().await.unwrap().len(), 2);

    // No stray temp files left behind.
    let mut names = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect::<Vec<_>>();
    names.sort();
    assert!(names.iter().all(|n| !n.ends_with(".tmp")), "{names:?}");
}

#[tokio::test]
async fn failed_export_preserves_the_previous_snapshot() {
    let dir = tempdir().unwrap();
    let service = BackupService::new(dir.path());
    let healthy = seeded_store();

    service.export(&healthy).await.unwrap();
    let before = service.load_current().await.unwrap();

    let broken = BrokenCredentialStore(healthy);
    let err = service.export(&broken).await.unwrap_err();
    assert!(matches!(err, StoreError::PrimaryUnavailable(_)));

    // Last-known-good: the prior current file is untouched, and the failed
    // attempt produced no historical file either.
    let after = service.load_current().await.unwrap();
    assert_eq!(after, before);
    assert_eq!(service.list_backups().await.unwrap().len(), 1);
}

#[tokio::test]
async fn snapshot_document_uses_the_documented_keys() {
    let dir = tempdir().unwrap();
    let service = BackupService::new(dir.path());
    service.export(&seeded_store()).await.unwrap();

    let bytes = tokio::fs::read(dir.path().join(CURRENT_SNAPSHOT_FILE))
        .await
        .unwrap();
    let document: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    for kind in CollectionKind::ALL {
        assert!(
            document.get(kind.snapshot_key()).is_some(),
            "missing key {}",
            kind.snapshot_key()
        );
    }
    assert!(document.get("timestamp").is_some());
    assert_eq!(document["version"], SNAPSHOT_VERSION);
}

#[tokio::test]
async fn loader_reports_missing_snapshot_as_none() {
    let dir = tempdir().unwrap();
    let service = BackupService::new(dir.path());
    assert!(service.load_current().await.is_none());
}

#[tokio::test]
async fn loader_reports_corrupt_snapshot_as_none() {
    let dir = tempdir().unwrap();
    let service = BackupService::new(dir.path());

    tokio::fs::write(dir.path().join(CURRENT_SNAPSHOT_FILE), b"{ not json")
        .await
        .unwrap();

    assert!(service.load_current().await.is_none());
}

#[tokio::test]
async fn retention_keeps_the_ten_most_recent_files() {
    let dir = tempdir().unwrap();
    let service = BackupService::with_retention(dir.path(), 10);

    // 15 synthetic historical snapshots with strictly increasing timestamps.
    for day in 1..=15 {
        let name = format!("backup-2024-03-{day:02}T00-00-00.000Z.json");
        tokio::fs::write(dir.path().join(name), b"{}").await.unwrap();
    }

    let deleted = service.clean().await.unwrap();
    assert_eq!(deleted, 5);

    let remaining = service.list_backups().await.unwrap();
    assert_eq!(remaining.len(), 10);

    // The survivors are the 10 newest (days 6..=15).
    let oldest = remaining.first().unwrap().file_name().unwrap().to_str().unwrap();
    assert_eq!(oldest, "backup-2024-03-06T00-00-00.000Z.json");
}

#[tokio::test]
async fn retention_is_configurable_and_idle_below_the_bound() {
    let dir = tempdir().unwrap();
    let service = BackupService::with_retention(dir.path(), 3);

    for day in 1..=3 {
        let name = format!("backup-2024-03-{day:02}T00-00-00.000Z.json");
        tokio::fs::write(dir.path().join(name), b"{}").await.unwrap();
    }
    assert_eq!(service.clean().await.unwrap(), 0);

    tokio::fs::write(
        dir.path().join("backup-2024-03-04T00-00-00.000Z.json"),
        b"{}",
    )
    .await
    .unwrap();
    assert_eq!(service.clean().await.unwrap(), 1);
}

#[tokio::test]
async fn export_and_clean_enforces_the_retention_bound() {
    let dir = tempdir().unwrap();
    let service = BackupService::with_retention(dir.path(), 2);
    let store = seeded_store();

    for _ in 0..4 {
        service.export_and_clean(&store).await.unwrap();
        // Millisecond-resolution filenames; keep exports distinct.
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    assert!(service.list_backups().await.unwrap().len() <= 2);
    assert!(service.load_current().await.is_some());
}
