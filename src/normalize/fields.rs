use chrono::{DateTime, NaiveDate, Utc};

use crate::core::ValidationFailure;

pub(crate) const MAX_TITLE_LEN: usize = 200;
pub(crate) const MAX_TEXT_LEN: usize = 2000;

/// Resolved bilingual scalar. `legacy` always equals `fr` after resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BilingualText {
    pub legacy: String,
    pub fr: String,
    pub en: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct OptionalBilingualText {
    pub legacy: Option<String>,
    pub fr: Option<String>,
    pub en: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct BilingualList {
    pub legacy: Vec<String>,
    pub fr: Vec<String>,
    pub en: Vec<String>,
}

fn present(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn present_list(value: Option<Vec<String>>) -> Vec<String> {
    value
        .unwrap_or_default()
        .into_iter()
        .filter_map(|s| present(Some(s)))
        .collect()
}

fn check_len(issues: &mut ValidationFailure, field: &str, value: &str, max_len: usize) {
    if value.chars().count() > max_len {
        issues.push(field, format!("must be at most {max_len} characters"));
    }
}

/// Bilingual precedence for a required scalar field.
///
/// Primary (`*_fr`) wins and the legacy slot is overwritten to match it; a
/// lone legacy value is promoted into the primary slot; neither present is a
/// validation failure named "primary {label}". The secondary value is kept
/// verbatim, never derived from the primary.
///
/// On failure the returned text is empty; the caller's issue list guarantees
/// it never reaches a canonical record.
pub(crate) fn resolve_required_text(
    issues: &mut ValidationFailure,
    label: &str,
    legacy: Option<String>,
    fr: Option<String>,
    en: Option<String>,
    max_len: usize,
) -> BilingualText {
    let legacy = present(legacy);
    let fr = present(fr);
    let en = present(en);

    let primary = match (fr, legacy) {
        (Some(fr), _) => Some(fr),
        (None, Some(legacy)) => Some(legacy),
        (None, None) => None,
    };

    let Some(primary) = primary else {
        issues.push(format!("primary {label}"), "required field is missing");
        return BilingualText {
            legacy: String::new(),
            fr: String::new(),
            en,
        };
    };

    check_len(issues, &format!("primary {label}"), &primary, max_len);
    if let Some(en) = &en {
        check_len(issues, &format!("secondary {label}"), en, max_len);
    }

    BilingualText {
        legacy: primary.clone(),
        fr: primary,
        en,
    }
}

/// Same precedence as [`resolve_required_text`] but absence is not an error;
/// all three slots stay empty.
pub(crate) fn resolve_optional_text(
    issues: &mut ValidationFailure,
    label: &str,
    legacy: Option<String>,
    fr: Option<String>,
    en: Option<String>,
    max_len: usize,
) -> OptionalBilingualText {
    let legacy = present(legacy);
    let fr = present(fr);
    let en = present(en);

    let primary = fr.or(legacy);
    if let Some(primary) = &primary {
        check_len(issues, &format!("primary {label}"), primary, max_len);
    }
    if let Some(en) = &en {
        check_len(issues, &format!("secondary {label}"), en, max_len);
    }

    OptionalBilingualText {
        legacy: primary.clone(),
        fr: primary,
        en,
    }
}

/// Bilingual precedence for a list field. A non-empty primary list wins, a
/// non-empty legacy list is promoted, and the secondary list defaults to
/// empty rather than null.
pub(crate) fn resolve_list(
    legacy: Option<Vec<String>>,
    fr: Option<Vec<String>>,
    en: Option<Vec<String>>,
) -> BilingualList {
    let legacy = present_list(legacy);
    let fr = present_list(fr);
    let en = present_list(en);

    let primary = if !fr.is_empty() { fr } else { legacy };

    BilingualList {
        legacy: primary.clone(),
        fr: primary,
        en,
    }
}

/// Required non-translatable text (issuer, company, ...). Empty on failure,
/// with the issue recorded.
pub(crate) fn require_text(
    issues: &mut ValidationFailure,
    label: &str,
    value: Option<String>,
    max_len: usize,
) -> String {
    match present(value) {
        Some(value) => {
            check_len(issues, label, &value, max_len);
            value
        }
        None => {
            issues.push(label, "required field is missing");
            String::new()
        }
    }
}

pub(crate) fn optional_text(
    issues: &mut ValidationFailure,
    label: &str,
    value: Option<String>,
    max_len: usize,
) -> Option<String> {
    let value = present(value)?;
    check_len(issues, label, &value, max_len);
    Some(value)
}

fn is_well_formed_url(value: &str) -> bool {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));
    match rest {
        Some(rest) => {
            let host = rest.split('/').next().unwrap_or("");
            !host.is_empty() && !rest.contains(char::is_whitespace)
        }
        None => false,
    }
}

/// Optional URL attribute. Present values must be well-formed http(s) URLs.
pub(crate) fn validate_url(
    issues: &mut ValidationFailure,
    label: &str,
    value: Option<String>,
) -> Option<String> {
    let value = present(value)?;
    if !is_well_formed_url(&value) {
        issues.push(label, "must be a well-formed http(s) URL");
        return None;
    }
    Some(value)
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.date_naive())
}

pub(crate) fn require_date(
    issues: &mut ValidationFailure,
    label: &str,
    value: Option<String>,
) -> NaiveDate {
    match present(value) {
        Some(raw) => match parse_date(&raw) {
            Some(date) => date,
            None => {
                issues.push(label, format!("'{raw}' is not a valid date"));
                NaiveDate::default()
            }
        },
        None => {
            issues.push(label, "required field is missing");
            NaiveDate::default()
        }
    }
}

pub(crate) fn optional_date(
    issues: &mut ValidationFailure,
    label: &str,
    value: Option<String>,
) -> Option<NaiveDate> {
    let raw = present(value)?;
    match parse_date(&raw) {
        Some(date) => Some(date),
        None => {
            issues.push(label, format!("'{raw}' is not a valid date"));
            None
        }
    }
}

/// Record timestamps: parsed from RFC 3339 input when supplied, otherwise
/// stamped at normalization time.
pub(crate) fn timestamp_or_now(
    issues: &mut ValidationFailure,
    label: &str,
    value: Option<String>,
) -> DateTime<Utc> {
    match present(value) {
        Some(raw) => match DateTime::parse_from_rfc3339(&raw) {
            Ok(dt) => dt.with_timezone(&Utc),
            Err(_) => {
                issues.push(label, format!("'{raw}' is not a valid timestamp"));
                Utc::now()
            }
        },
        None => Utc::now(),
    }
}

/// Display order defaults to 0 and must not be negative.
pub(crate) fn display_order(issues: &mut ValidationFailure, value: Option<i64>) -> i64 {
    let order = value.unwrap_or(0);
    if order < 0 {
        issues.push("display order", "must not be negative");
        return 0;
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_wins_and_overwrites_legacy() {
        let mut issues = ValidationFailure::new();
        let text = resolve_required_text(
            &mut issues,
            "title",
            Some("old".into()),
            Some("nouveau".into()),
            None,
            MAX_TITLE_LEN,
        );
        assert!(issues.is_empty());
        assert_eq!(text.legacy, "nouveau");
        assert_eq!(text.fr, "nouveau");
        assert_eq!(text.en, None);
    }

    #[test]
    fn legacy_promotes_into_primary_slot() {
        let mut issues = ValidationFailure::new();
        let text = resolve_required_text(
            &mut issues,
            "title",
            Some("ancien".into()),
            None,
            None,
            MAX_TITLE_LEN,
        );
        assert!(issues.is_empty());
        assert_eq!(text.legacy, "ancien");
        assert_eq!(text.fr, "ancien");
    }

    #[test]
    fn missing_both_reports_primary_field() {
        let mut issues = ValidationFailure::new();
        resolve_required_text(&mut issues, "title", None, Some("   ".into()), None, 10);
        assert!(issues.contains_field("primary title"));
    }

    #[test]
    fn secondary_is_kept_verbatim_never_copied() {
        let mut issues = ValidationFailure::new();
        let text = resolve_required_text(
            &mut issues,
            "description",
            None,
            Some("Un site".into()),
            Some("A site".into()),
            MAX_TEXT_LEN,
        );
        assert_eq!(text.en.as_deref(), Some("A site"));

        let without_en = resolve_required_text(
            &mut issues,
            "description",
            None,
            Some("Un site".into()),
            None,
            MAX_TEXT_LEN,
        );
        assert_eq!(without_en.en, None);
    }

    #[test]
    fn list_resolution_defaults_secondary_to_empty() {
        let list = resolve_list(Some(vec!["Rust".into()]), None, None);
        assert_eq!(list.legacy, vec!["Rust".to_string()]);
        assert_eq!(list.fr, vec!["Rust".to_string()]);
        assert!(list.en.is_empty());
    }

    #[test]
    fn url_validation_rejects_malformed_values() {
        let mut issues = ValidationFailure::new();
        assert_eq!(
            validate_url(&mut issues, "project URL", Some("notaurl".into())),
            None
        );
        assert!(issues.contains_field("project URL"));

        let mut clean = ValidationFailure::new();
        assert_eq!(
            validate_url(
                &mut clean,
                "project URL",
                Some("https://example.com/p".into())
            )
            .as_deref(),
            Some("https://example.com/p")
        );
        assert!(clean.is_empty());
    }

    #[test]
    fn dates_coerce_from_plain_and_rfc3339_forms() {
        let mut issues = ValidationFailure::new();
        let plain = require_date(&mut issues, "start date", Some("2023-05-01".into()));
        let iso = require_date(
            &mut issues,
            "start date",
            Some("2023-05-01T08:30:00Z".into()),
        );
        assert!(issues.is_empty());
        assert_eq!(plain, iso);
    }

    #[test]
    fn negative_display_order_is_rejected() {
        let mut issues = ValidationFailure::new();
        display_order(&mut issues, Some(-3));
        assert!(issues.contains_field("display order"));
    }
}
