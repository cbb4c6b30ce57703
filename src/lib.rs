// ============================================================================
// bistore — resilient bilingual content persistence
// ============================================================================
//
// Five content collections (work items, career entries, education entries,
// credentials, volunteer entries), each bilingual: a required primary
// language (French) and an optional secondary language (English) per
// translatable field, with a legacy single-language column that always
// mirrors the primary value.
//
// The crate covers the write-side normalization into that canonical shape
// and the read-side availability guarantee: periodic snapshot exports to
// disk, and a fetch wrapper that falls back to the latest snapshot (with a
// small emulated query whitelist) whenever the primary store is unreachable.

pub mod backup;
pub mod core;
pub mod fetch;
pub mod model;
pub mod normalize;
pub mod store;

// Re-export main types for convenience
pub use crate::backup::{BackupService, Snapshot, CURRENT_SNAPSHOT_FILE, SNAPSHOT_VERSION};
pub use crate::core::{FieldIssue, Result, StoreError, ValidationFailure};
pub use crate::fetch::{FetchOutcome, ResilientFetcher, Source, DEFAULT_PRIMARY_TIMEOUT};
pub use crate::model::{
    CareerEntry, CareerEntryDraft, CollectionData, CollectionKind, Credential, CredentialDraft,
    EducationEntry, EducationEntryDraft, Entity, EntityDraft, VolunteerEntry, VolunteerEntryDraft,
    WorkItem, WorkItemDraft,
};
pub use crate::normalize::{
    normalize_career_entry, normalize_credential, normalize_education_entry, normalize_entity,
    normalize_volunteer_entry, normalize_work_item,
};
pub use crate::store::{ContentStore, MemoryStore};
