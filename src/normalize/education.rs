use uuid::Uuid;

use super::fields::{
    display_order, optional_date, require_date, require_text, resolve_optional_text,
    resolve_required_text, timestamp_or_now, MAX_TEXT_LEN, MAX_TITLE_LEN,
};
use crate::core::{Result, ValidationFailure};
use crate::model::{EducationEntry, EducationEntryDraft};

/// Normalizes a raw education-entry draft.
pub fn normalize_education_entry(draft: EducationEntryDraft) -> Result<EducationEntry> {
    let mut issues = ValidationFailure::new();

    let degree = resolve_required_text(
        &mut issues,
        "degree",
        draft.degree,
        draft.degree_fr,
        draft.degree_en,
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

    let institution = require_text(&mut issues, "institution", draft.institution, MAX_TITLE_LEN);
    let start_date = require_date(&mut issues, "start date", draft.start_date);
    let end_date = optional_date(&mut issues, "end date", draft.end_date);
    let order = display_order(&mut issues, draft.display_order);
    let created_at = timestamp_or_now(&mut issues, "created at", draft.created_at);
    let updated_at = timestamp_or_now(&mut issues, "updated at", draft.updated_at);

    let record = EducationEntry {
        id: draft.id.unwrap_or_else(Uuid::new_v4),
        degree: degree.legacy,
        degree_fr: degree.fr,
        degree_en: degree.en,
        institution,
        description: description.legacy,
        description_fr: description.fr,
        description_en: description.en,
        start_date,
        end_date,
        current: draft.current.unwrap_or(false),
        display_order: order,
        created_at,
        updated_at,
    };

    issues.into_result(record)
}
