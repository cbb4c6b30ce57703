mod draft;
mod entities;

pub use draft::{
    CareerEntryDraft, CredentialDraft, EducationEntryDraft, EntityDraft, VolunteerEntryDraft,
    WorkItemDraft,
};
pub use entities::{
    CareerEntry, CollectionData, CollectionKind, Credential, EducationEntry, Entity,
    VolunteerEntry, WorkItem,
};
