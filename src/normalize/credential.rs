use uuid::Uuid;

use super::fields::{
    display_order, optional_date, optional_text, require_date, require_text,
    resolve_required_text, timestamp_or_now, validate_url, MAX_TITLE_LEN,
};
use crate::core::{Result, ValidationFailure};
use crate::model::{Credential, CredentialDraft};

/// Normalizes a raw credential draft. Credentials must carry an issuer.
pub fn normalize_credential(draft: CredentialDraft) -> Result<Credential> {
    let mut issues = ValidationFailure::new();

    let name = resolve_required_text(
        &mut issues,
        "name",
        draft.name,
        draft.name_fr,
        draft.name_en,
        MAX_TITLE_LEN,
    );

    let issuer = require_text(&mut issues, "issuer", draft.issuer, MAX_TITLE_LEN);
    let credential_id = optional_text(&mut issues, "credential id", draft.credential_id, MAX_TITLE_LEN);
    let credential_url = validate_url(&mut issues, "credential URL", draft.credential_url);
    let issue_date = require_date(&mut issues, "issue date", draft.issue_date);
    let expiry_date = optional_date(&mut issues, "expiry date", draft.expiry_date);
    let order = display_order(&mut issues, draft.display_order);
    let created_at = timestamp_or_now(&mut issues, "created at", draft.created_at);
    let updated_at = timestamp_or_now(&mut issues, "updated at", draft.updated_at);

    let record = Credential {
        id: draft.id.unwrap_or_else(Uuid::new_v4),
        name: name.legacy,
        name_fr: name.fr,
        name_en: name.en,
        issuer,
        credential_id,
        credential_url,
        issue_date,
        expiry_date,
        display_order: order,
        created_at,
        updated_at,
    };

    issues.into_result(record)
}
