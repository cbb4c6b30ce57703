//! Resilient reads: primary store first (bounded timeout), snapshot fallback
//! second, with a small documented query emulation on the fallback path.

use futures::future::join_all;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

use crate::backup::BackupService;
use crate::core::{Result, StoreError};
use crate::model::{CollectionData, CollectionKind};
use crate::store::{read_collection, ContentStore};

/// Default deadline for one primary-store attempt.
pub const DEFAULT_PRIMARY_TIMEOUT: Duration = Duration::from_secs(10);

/// Where a fetch result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Primary,
    Backup,
}

/// Outcome of one resilient fetch. `error` is only set when both the primary
/// store and the backup path came up empty-handed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FetchOutcome {
    pub data: Option<CollectionData>,
    pub source: Source,
    pub error: Option<String>,
}

impl FetchOutcome {
    fn primary(data: CollectionData) -> Self {
        Self {
            data: Some(data),
            source: Source::Primary,
            error: None,
        }
    }

    fn backup(data: CollectionData) -> Self {
        Self {
            data: Some(data),
            source: Source::Backup,
            error: None,
        }
    }

    fn backup_error(message: impl Into<String>) -> Self {
        Self {
            data: None,
            source: Source::Backup,
            error: Some(message.into()),
        }
    }
}

/// The whitelist of query parameters emulated over a snapshot: `featured`,
/// `current`, `limit`. Anything else the primary store may interpret is
/// logged and ignored here; the backup path serves a deliberately simpler
/// view than the live store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct BackupQuery {
    featured: Option<bool>,
    current: Option<bool>,
    limit: Option<usize>,
}

impl BackupQuery {
    fn parse(resource: &str, params: &HashMap<String, String>) -> Self {
        let mut query = Self::default();

        for (key, value) in params {
            match key.as_str() {
                "featured" => match value.parse::<bool>() {
                    Ok(want) => query.featured = Some(want),
                    Err(_) => warn!("ignoring non-boolean featured={value} for {resource}"),
                },
                "current" => match value.parse::<bool>() {
                    Ok(want) => query.current = Some(want),
                    Err(_) => warn!("ignoring non-boolean current={value} for {resource}"),
                },
                "limit" => match value.parse::<usize>() {
                    Ok(limit) if limit > 0 => query.limit = Some(limit),
                    _ => warn!("ignoring non-positive limit={value} for {resource}"),
                },
                other => {
                    warn!("query parameter '{other}' is not emulated on the backup path for {resource}");
                }
            }
        }

        query
    }

    /// Filters first, truncates last.
    fn apply(&self, data: &mut CollectionData) {
        if let Some(want) = self.featured {
            data.retain_featured(want);
        }
        if let Some(want) = self.current {
            data.retain_current(want);
        }
        if let Some(limit) = self.limit {
            data.truncate(limit);
        }
    }
}

/// Tries the primary store, falls back to the latest snapshot.
///
/// Cloning is cheap; a clone shares the store and backup service.
#[derive(Clone)]
pub struct ResilientFetcher {
    store: Arc<dyn ContentStore>,
    backup: Arc<BackupService>,
    primary_timeout: Duration,
}

impl ResilientFetcher {
    pub fn new(store: Arc<dyn ContentStore>, backup: Arc<BackupService>) -> Self {
        Self {
            store,
            backup,
            primary_timeout: DEFAULT_PRIMARY_TIMEOUT,
        }
    }

    pub fn with_primary_timeout(mut self, primary_timeout: Duration) -> Self {
        self.primary_timeout = primary_timeout;
        self
    }

    /// Fetch with the fetcher's default primary deadline.
    pub async fn fetch(&self, resource: &str, params: &HashMap<String, String>) -> FetchOutcome {
        self.fetch_with_timeout(resource, params, self.primary_timeout)
            .await
    }

    /// Fetch with a per-call primary deadline. Never returns an `Err`:
    /// primary failures are absorbed by the backup path, and a failed backup
    /// path degrades to an empty outcome with a descriptive message.
    pub async fn fetch_with_timeout(
        &self,
        resource: &str,
        params: &HashMap<String, String>,
        primary_timeout: Duration,
    ) -> FetchOutcome {
        let kind = CollectionKind::from_resource(resource);

        match self.try_primary(kind, primary_timeout).await {
            Ok(data) => FetchOutcome::primary(data),
            Err(err) => {
                warn!("primary read for {resource} failed ({err}); trying backup");
                self.serve_backup(resource, kind, params).await
            }
        }
    }

    /// Scatter/gather over a keyed map of resources. One task per key; a
    /// task's failure (including a panic) degrades only that key's outcome.
    pub async fn fetch_many(
        &self,
        resources: &HashMap<String, String>,
    ) -> HashMap<String, FetchOutcome> {
        let mut keys = Vec::with_capacity(resources.len());
        let mut handles = Vec::with_capacity(resources.len());

        for (key, resource) in resources {
            let fetcher = self.clone();
            let resource = resource.clone();
            keys.push(key.clone());
            handles.push(tokio::spawn(async move {
                fetcher.fetch(&resource, &HashMap::new()).await
            }));
        }

        let mut outcomes = HashMap::with_capacity(keys.len());
        for (key, joined) in keys.into_iter().zip(join_all(handles).await) {
            let outcome = match joined {
                Ok(outcome) => outcome,
                Err(err) => {
                    warn!("fetch task for '{key}' failed: {err}");
                    FetchOutcome::backup_error(format!("fetch task failed: {err}"))
                }
            };
            outcomes.insert(key, outcome);
        }
        outcomes
    }

    async fn try_primary(
        &self,
        kind: Option<CollectionKind>,
        deadline: Duration,
    ) -> Result<CollectionData> {
        let Some(kind) = kind else {
            return Err(StoreError::PrimaryUnavailable(
                "no primary operation for this resource".to_string(),
            ));
        };

        match timeout(deadline, read_collection(self.store.as_ref(), kind)).await {
            Ok(result) => result,
            // The in-flight primary attempt is dropped on expiry; the
            // wrapper moves straight on to the backup path.
            Err(_) => Err(StoreError::PrimaryUnavailable(format!(
                "timed out after {deadline:?}"
            ))),
        }
    }

    async fn serve_backup(
        &self,
        resource: &str,
        kind: Option<CollectionKind>,
        params: &HashMap<String, String>,
    ) -> FetchOutcome {
        let Some(kind) = kind else {
            return FetchOutcome::backup_error("no backup available for this resource");
        };

        let Some(snapshot) = self.backup.load_current().await else {
            return FetchOutcome::backup_error("backup unavailable");
        };

        let mut data = snapshot.collection(kind);
        BackupQuery::parse(resource, params).apply(&mut data);
        FetchOutcome::backup(data)
    }
}
