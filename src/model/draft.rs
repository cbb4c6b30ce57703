use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Accepts a number or a numeric string for legacy admin payloads that send
/// display orders as text.
fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(n)) => Ok(Some(n)),
        Some(Raw::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Ok(None)
            } else {
                trimmed
                    .parse::<i64>()
                    .map(Some)
                    .map_err(serde::de::Error::custom)
            }
        }
    }
}

/// Raw work-item input as submitted by the admin surface. Any combination of
/// legacy and `*_fr`/`*_en` fields may be present; the normalizer resolves
/// them into the canonical shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkItemDraft {
    pub id: Option<Uuid>,
    pub title: Option<String>,
    pub title_fr: Option<String>,
    pub title_en: Option<String>,
    pub description: Option<String>,
    pub description_fr: Option<String>,
    pub description_en: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub image_url: Option<String>,
    pub project_url: Option<String>,
    pub github_url: Option<String>,
    pub featured: Option<bool>,
    #[serde(deserialize_with = "lenient_i64")]
    pub display_order: Option<i64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CareerEntryDraft {
    pub id: Option<Uuid>,
    pub position: Option<String>,
    pub position_fr: Option<String>,
    pub position_en: Option<String>,
    pub company: Option<String>,
    pub description: Option<String>,
    pub description_fr: Option<String>,
    pub description_en: Option<String>,
    pub achievements: Option<Vec<String>>,
    pub achievements_fr: Option<Vec<String>>,
    pub achievements_en: Option<Vec<String>>,
    pub technologies: Option<Vec<String>>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub current: Option<bool>,
    #[serde(deserialize_with = "lenient_i64")]
    pub display_order: Option<i64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntryDraft {
    pub id: Option<Uuid>,
    pub degree: Option<String>,
    pub degree_fr: Option<String>,
    pub degree_en: Option<String>,
    pub institution: Option<String>,
    pub description: Option<String>,
    pub description_fr: Option<String>,
    pub description_en: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub current: Option<bool>,
    #[serde(deserialize_with = "lenient_i64")]
    pub display_order: Option<i64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialDraft {
    pub id: Option<Uuid>,
    pub name: Option<String>,
    pub name_fr: Option<String>,
    pub name_en: Option<String>,
    pub issuer: Option<String>,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
    pub issue_date: Option<String>,
    pub expiry_date: Option<String>,
    #[serde(deserialize_with = "lenient_i64")]
    pub display_order: Option<i64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VolunteerEntryDraft {
    pub id: Option<Uuid>,
    pub role: Option<String>,
    pub role_fr: Option<String>,
    pub role_en: Option<String>,
    pub organization: Option<String>,
    pub description: Option<String>,
    pub description_fr: Option<String>,
    pub description_en: Option<String>,
    pub skills: Option<Vec<String>>,
    pub skills_fr: Option<Vec<String>>,
    pub skills_en: Option<Vec<String>>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub current: Option<bool>,
    #[serde(deserialize_with = "lenient_i64")]
    pub display_order: Option<i64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Discriminated union over the five draft shapes, tagged by `kind`. Input
/// crosses the system boundary through this type exactly once; downstream
/// code only sees canonical records.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum EntityDraft {
    WorkItem(WorkItemDraft),
    CareerEntry(CareerEntryDraft),
    EducationEntry(EducationEntryDraft),
    Credential(CredentialDraft),
    VolunteerEntry(VolunteerEntryDraft),
}
