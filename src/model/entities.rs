use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Portfolio project.
///
/// Translatable fields (`title`, `description`) follow the canonical bilingual
/// layout: the legacy column always mirrors the primary-language (`*_fr`)
/// column, the secondary-language (`*_en`) column is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkItem {
    pub id: Uuid,
    pub title: String,
    pub title_fr: String,
    pub title_en: Option<String>,
    pub description: String,
    pub description_fr: String,
    pub description_en: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub image_url: Option<String>,
    pub project_url: Option<String>,
    pub github_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub display_order: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Professional experience entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerEntry {
    pub id: Uuid,
    pub position: String,
    pub position_fr: String,
    pub position_en: Option<String>,
    pub company: String,
    pub description: Option<String>,
    pub description_fr: Option<String>,
    pub description_en: Option<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub achievements_fr: Vec<String>,
    #[serde(default)]
    pub achievements_en: Vec<String>,
    pub technologies: Vec<String>,
    pub location: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub display_order: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Degree or training entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub id: Uuid,
    pub degree: String,
    pub degree_fr: String,
    pub degree_en: Option<String>,
    pub institution: String,
    pub description: Option<String>,
    pub description_fr: Option<String>,
    pub description_en: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub display_order: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Certification or license.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credential {
    pub id: Uuid,
    pub name: String,
    pub name_fr: String,
    pub name_en: Option<String>,
    pub issuer: String,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
    pub issue_date: NaiveDate,
    pub expiry_date: Option<NaiveDate>,
    #[serde(default)]
    pub display_order: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Volunteer engagement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolunteerEntry {
    pub id: Uuid,
    pub role: String,
    pub role_fr: String,
    pub role_en: Option<String>,
    pub organization: String,
    pub description: Option<String>,
    pub description_fr: Option<String>,
    pub description_en: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub skills_fr: Vec<String>,
    #[serde(default)]
    pub skills_en: Vec<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub display_order: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Canonical record of any kind, tagged for boundary crossings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Entity {
    WorkItem(WorkItem),
    CareerEntry(CareerEntry),
    EducationEntry(EducationEntry),
    Credential(Credential),
    VolunteerEntry(VolunteerEntry),
}

/// The five snapshot collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollectionKind {
    WorkItems,
    CareerEntries,
    EducationEntries,
    Credentials,
    VolunteerEntries,
}

impl CollectionKind {
    pub const ALL: [CollectionKind; 5] = [
        CollectionKind::WorkItems,
        CollectionKind::CareerEntries,
        CollectionKind::EducationEntries,
        CollectionKind::Credentials,
        CollectionKind::VolunteerEntries,
    ];

    /// Fixed resource-identifier table. Any other identifier has no backup
    /// collection.
    pub fn from_resource(resource: &str) -> Option<Self> {
        match resource {
            "/work-items" => Some(Self::WorkItems),
            "/career-entries" => Some(Self::CareerEntries),
            "/education-entries" => Some(Self::EducationEntries),
            "/credentials" => Some(Self::Credentials),
            "/volunteer-entries" => Some(Self::VolunteerEntries),
            _ => None,
        }
    }

    pub fn resource(&self) -> &'static str {
        match self {
            Self::WorkItems => "/work-items",
            Self::CareerEntries => "/career-entries",
            Self::EducationEntries => "/education-entries",
            Self::Credentials => "/credentials",
            Self::VolunteerEntries => "/volunteer-entries",
        }
    }

    /// Key of the collection inside the snapshot document.
    pub fn snapshot_key(&self) -> &'static str {
        match self {
            Self::WorkItems => "workItems",
            Self::CareerEntries => "careerEntries",
            Self::EducationEntries => "educationEntries",
            Self::Credentials => "credentials",
            Self::VolunteerEntries => "volunteerEntries",
        }
    }
}

/// Flag accessors used by the backup-path query emulation. Kinds that do not
/// carry an attribute report `None`, which never matches a requested filter.
pub(crate) trait QueryFlags {
    fn featured_flag(&self) -> Option<bool> {
        None
    }
    fn current_flag(&self) -> Option<bool> {
        None
    }
}

impl QueryFlags for WorkItem {
    fn featured_flag(&self) -> Option<bool> {
        Some(self.featured)
    }
}

impl QueryFlags for CareerEntry {
    fn current_flag(&self) -> Option<bool> {
        Some(self.current)
    }
}

impl QueryFlags for EducationEntry {
    fn current_flag(&self) -> Option<bool> {
        Some(self.current)
    }
}

impl QueryFlags for Credential {}

impl QueryFlags for VolunteerEntry {
    fn current_flag(&self) -> Option<bool> {
        Some(self.current)
    }
}

/// One homogeneous collection slice, as returned by a fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CollectionData {
    WorkItems(Vec<WorkItem>),
    CareerEntries(Vec<CareerEntry>),
    EducationEntries(Vec<EducationEntry>),
    Credentials(Vec<Credential>),
    VolunteerEntries(Vec<VolunteerEntry>),
}

macro_rules! with_items {
    ($data:expr, $items:ident => $body:expr) => {
        match $data {
            CollectionData::WorkItems($items) => $body,
            CollectionData::CareerEntries($items) => $body,
            CollectionData::EducationEntries($items) => $body,
            CollectionData::Credentials($items) => $body,
            CollectionData::VolunteerEntries($items) => $body,
        }
    };
}

impl CollectionData {
    pub fn kind(&self) -> CollectionKind {
        match self {
            Self::WorkItems(_) => CollectionKind::WorkItems,
            Self::CareerEntries(_) => CollectionKind::CareerEntries,
            Self::EducationEntries(_) => CollectionKind::EducationEntries,
            Self::Credentials(_) => CollectionKind::Credentials,
            Self::VolunteerEntries(_) => CollectionKind::VolunteerEntries,
        }
    }

    pub fn len(&self) -> usize {
        with_items!(self, items => items.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn retain_featured(&mut self, want: bool) {
        with_items!(self, items => items.retain(|it| it.featured_flag() == Some(want)));
    }

    pub(crate) fn retain_current(&mut self, want: bool) {
        with_items!(self, items => items.retain(|it| it.current_flag() == Some(want)));
    }

    pub(crate) fn truncate(&mut self, limit: usize) {
        with_items!(self, items => items.truncate(limit));
    }
}
