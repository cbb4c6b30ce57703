use uuid::Uuid;

use super::fields::{
    display_order, optional_date, require_date, require_text, resolve_list,
    resolve_optional_text, resolve_required_text, timestamp_or_now, MAX_TEXT_LEN, MAX_TITLE_LEN,
};
use crate::core::{Result, ValidationFailure};
use crate::model::{VolunteerEntry, VolunteerEntryDraft};

/// Normalizes a raw volunteer-entry draft.
pub fn normalize_volunteer_entry(draft: VolunteerEntryDraft) -> Result<VolunteerEntry> {
    let mut issues = ValidationFailure::new();

    let role = resolve_required_text(
        &mut issues,
        "role",
        draft.role,
        draft.role_fr,
        draft.role_en,
        MAX_TITLE_LEN,
    );
    let description = resolve_optional_text(
        &mut issues,
        "description",
        draft.description,
        draft.description_fr,
        draft.description_en,
        MAX_TEXT_LEN,
    );
    let skills = resolve_list(draft.skills, draft.skills_fr, draft.skills_en);

    let organization = require_text(&mut issues, "organization", draft.organization, MAX_TITLE_LEN);
    let start_date = require_date(&mut issues, "start date", draft.start_date);
    let end_date = optional_date(&mut issues, "end date", draft.end_date);
    let order = display_order(&mut issues, draft.display_order);
    let created_at = timestamp_or_now(&mut issues, "created at", draft.created_at);
    let updated_at = timestamp_or_now(&mut issues, "updated at", draft.updated_at);

    let record = VolunteerEntry {
        id: draft.id.unwrap_or_else(Uuid::new_v4),
        role: role.legacy,
        role_fr: role.fr,
        role_en: role.en,
        organization,
        description: description.legacy,
        description_fr: description.fr,
        description_en: description.en,
        skills: skills.legacy,
        skills_fr: skills.fr,
        skills_en: skills.en,
        start_date,
        end_date,
        current: draft.current.unwrap_or(false),
        display_order: order,
        created_at,
        updated_at,
    };

    issues.into_result(record)
}
