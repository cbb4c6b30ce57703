use async_trait::async_trait;

use crate::core::Result;
use crate::model::{
    CareerEntry, CollectionData, CollectionKind, Credential, EducationEntry, VolunteerEntry,
    WorkItem,
};

/// The primary content store, treated as an opaque collaborator.
///
/// Five "read all, ordered" operations, one per collection. The store is
/// assumed to hold only canonical records (normalizer output) in display
/// order; anything else is a store-side defect.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn work_items(&self) -> Result<Vec<WorkItem>>;
    async fn career_entries(&self) -> Result<Vec<CareerEntry>>;
    async fn education_entries(&self) -> Result<Vec<EducationEntry>>;
    async fn credentials(&self) -> Result<Vec<Credential>>;
    async fn volunteer_entries(&self) -> Result<Vec<VolunteerEntry>>;
}

/// Reads one collection from the store by kind, wrapping it as
/// [`CollectionData`].
pub async fn read_collection(
    store: &dyn ContentStore,
    kind: CollectionKind,
) -> Result<CollectionData> {
    match kind {
        CollectionKind::WorkItems => store.work_items().await.map(CollectionData::WorkItems),
        CollectionKind::CareerEntries => store
            .career_entries()
            .await
            .map(CollectionData::CareerEntries),
        CollectionKind::EducationEntries => store
            .education_entries()
            .await
            .map(CollectionData::EducationEntries),
        CollectionKind::Credentials => store.credentials().await.map(CollectionData::Credentials),
        CollectionKind::VolunteerEntries => store
            .volunteer_entries()
            .await
            .map(CollectionData::VolunteerEntries),
    }
}

/// In-memory store used by the integration tests and local tooling.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub work_items: Vec<WorkItem>,
    pub career_entries: Vec<CareerEntry>,
    pub education_entries: Vec<EducationEntry>,
    pub credentials: Vec<Credential>,
    pub volunteer_entries: Vec<VolunteerEntry>,
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn work_items(&self) -> Result<Vec<WorkItem>> {
        Ok(self.work_items.clone())
    }

    async fn career_entries(&self) -> Result<Vec<CareerEntry>> {
        Ok(self.career_entries.clone())
    }

    async fn education_entries(&self) -> Result<Vec<EducationEntry>> {
        Ok(self.education_entries.clone())
    }

    async fn credentials(&self) -> Result<Vec<Credential>> {
        Ok(self.credentials.clone())
    }

    async fn volunteer_entries(&self) -> Result<Vec<VolunteerEntry>> {
        Ok(self.volunteer_entries.clone())
    }
}
