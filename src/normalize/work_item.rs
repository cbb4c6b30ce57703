use uuid::Uuid;

use super::fields::{
    display_order, resolve_required_text, timestamp_or_now, validate_url, MAX_TEXT_LEN,
    MAX_TITLE_LEN,
};
use crate::core::{Result, ValidationFailure};
use crate::model::{WorkItem, WorkItemDraft};

/// Normalizes a raw work-item draft into its canonical bilingual shape.
///
/// Pure: no storage, no filesystem. All validation problems are reported
/// together in a single [`crate::core::StoreError::Validation`].
pub fn normalize_work_item(draft: WorkItemDraft) -> Result<WorkItem> {
    let mut issues = ValidationFailure::new();

    let title = resolve_required_text(
        &mut issues,
        "title",
        draft.title,
        draft.title_fr,
        draft.title_en,
        MAX_TITLE_LEN,
    );
    let description = resolve_required_text(
        &mut issues,
        "description",
        draft.description,
        draft.description_fr,
        draft.description_en,
        MAX_TEXT_LEN,
    );

    let image_url = validate_url(&mut issues, "image URL", draft.image_url);
    let project_url = validate_url(&mut issues, "project URL", draft.project_url);
    let github_url = validate_url(&mut issues, "github URL", draft.github_url);
    let order = display_order(&mut issues, draft.display_order);
    let created_at = timestamp_or_now(&mut issues, "created at", draft.created_at);
    let updated_at = timestamp_or_now(&mut issues, "updated at", draft.updated_at);

    let record = WorkItem {
        id: draft.id.unwrap_or_else(Uuid::new_v4),
        title: title.legacy,
        title_fr: title.fr,
        title_en: title.en,
        description: description.legacy,
        description_fr: description.fr,
        description_en: description.en,
        technologies: draft.technologies.unwrap_or_default(),
        image_url,
        project_url,
        github_url,
        featured: draft.featured.unwrap_or(false),
        display_order: order,
        created_at,
        updated_at,
    };

    issues.into_result(record)
}
