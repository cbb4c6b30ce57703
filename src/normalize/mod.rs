//! Bilingual normalization: turns heterogeneous admin input (legacy
//! single-language fields mixed with `*_fr`/`*_en` fields) into the single
//! canonical shape that may be persisted or snapshotted.
//!
//! Every function here is pure and deterministic over its translatable
//! fields; nothing touches storage.

mod career;
mod credential;
mod education;
mod fields;
mod volunteer;
mod work_item;

pub use career::normalize_career_entry;
pub use credential::normalize_credential;
pub use education::normalize_education_entry;
pub use volunteer::normalize_volunteer_entry;
pub use work_item::normalize_work_item;

use crate::core::Result;
use crate::model::{Entity, EntityDraft};

/// Boundary entry point: normalizes a kind-tagged draft into the matching
/// canonical entity.
pub fn normalize_entity(draft: EntityDraft) -> Result<Entity> {
    match draft {
        EntityDraft::WorkItem(d) => normalize_work_item(d).map(Entity::WorkItem),
        EntityDraft::CareerEntry(d) => normalize_career_entry(d).map(Entity::CareerEntry),
        EntityDraft::EducationEntry(d) => normalize_education_entry(d).map(Entity::EducationEntry),
        EntityDraft::Credential(d) => normalize_credential(d).map(Entity::Credential),
        EntityDraft::VolunteerEntry(d) => normalize_volunteer_entry(d).map(Entity::VolunteerEntry),
    }
}
