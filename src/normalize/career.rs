use uuid::Uuid;

use super::fields::{
    display_order, optional_date, optional_text, require_date, require_text, resolve_list,
    resolve_optional_text, resolve_required_text, timestamp_or_now, MAX_TEXT_LEN, MAX_TITLE_LEN,
};
use crate::core::{Result, ValidationFailure};
use crate::model::{CareerEntry, CareerEntryDraft};

/// Normalizes a raw career-entry draft. A career entry must name at least
/// one technology.
pub fn normalize_career_entry(draft: CareerEntryDraft) -> Result<CareerEntry> {
    let mut issues = ValidationFailure::new();

    let position = resolve_required_text(
        &mut issues,
        "position",
        draft.position,
        draft.position_fr,
        draft.position_en,
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
    let achievements = resolve_list(
        draft.achievements,
        draft.achievements_fr,
        draft.achievements_en,
    );

    let company = require_text(&mut issues, "company", draft.company, MAX_TITLE_LEN);
    let location = optional_text(&mut issues, "location", draft.location, MAX_TITLE_LEN);

    let technologies = draft.technologies.unwrap_or_default();
    if technologies.is_empty() {
        issues.push("technologies", "at least one technology is required");
    }

    let start_date = require_date(&mut issues, "start date", draft.start_date);
    let end_date = optional_date(&mut issues, "end date", draft.end_date);
    let order = display_order(&mut issues, draft.display_order);
    let created_at = timestamp_or_now(&mut issues, "created at", draft.created_at);
    let updated_at = timestamp_or_now(&mut issues, "updated at", draft.updated_at);

    let record = CareerEntry {
        id: draft.id.unwrap_or_else(Uuid::new_v4),
        position: position.legacy,
        position_fr: position.fr,
        position_en: position.en,
        company,
        description: description.legacy,
        description_fr: description.fr,
        description_en: description.en,
        achievements: achievements.legacy,
        achievements_fr: achievements.fr,
        achievements_en: achievements.en,
        technologies,
        location,
        start_date,
        end_date,
        current: draft.current.unwrap_or(false),
        display_order: order,
        created_at,
        updated_at,
    };

    issues.into_result(record)
}
