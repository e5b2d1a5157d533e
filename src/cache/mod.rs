// src/cache/mod.rs

pub mod disk;

pub use disk::{CacheEntry, DiskCache};

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Instant,
};
use tracing::{debug, info, instrument, warn};

use crate::catalog::{union_codes, VariableGroup};
use crate::error::Result;
use crate::fetch::{Downloader, FetchRequest, RawTable};
use crate::geography::Scope;

/// Memoizing front for a `Downloader`.
///
/// Successful results are kept for the life of the fetcher (and, with a
/// `DiskCache`, across processes). Failures are never stored, so a retry
/// always reaches the service again. The lock is held across the external
/// call: concurrent callers for the same key see exactly one download.
pub struct CachedFetcher<D> {
    downloader: D,
    entries: Mutex<HashMap<String, Arc<RawTable>>>,
    disk: Option<DiskCache>,
}

impl<D: Downloader> CachedFetcher<D> {
    pub fn new(downloader: D) -> Self {
        Self {
            downloader,
            entries: Mutex::new(HashMap::new()),
            disk: None,
        }
    }

    pub fn with_disk_cache(mut self, disk: DiskCache) -> Self {
        self.disk = Some(disk);
        self
    }

    pub fn downloader(&self) -> &D {
        &self.downloader
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Arc<RawTable>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The table for `request`, downloading it only on the first call.
    #[instrument(level = "debug", skip(self), fields(request = %request))]
    pub fn fetch(&self, request: &FetchRequest) -> Result<Arc<RawTable>> {
        let key = request.cache_key()?;
        let mut entries = self.lock();
        if let Some(hit) = entries.get(&key) {
            debug!("memory cache hit");
            return Ok(Arc::clone(hit));
        }

        if let Some(disk) = &self.disk {
            match disk.load(&key) {
                Ok(Some(table)) => {
                    debug!(rows = table.num_rows(), "disk cache hit");
                    let table = Arc::new(table);
                    entries.insert(key, Arc::clone(&table));
                    return Ok(table);
                }
                Ok(None) => {}
                Err(e) => warn!(error = %e, "ignoring unreadable disk cache entry"),
            }
        }

        let start = Instant::now();
        // Reorders to request order and rejects absent variables.
        let table = self
            .downloader
            .download(request)?
            .select(&request.variables)?;
        info!(rows = table.num_rows(), elapsed = ?start.elapsed(), "fetched");

        if let Some(disk) = &self.disk {
            if let Err(e) = disk.store(&key, &table) {
                warn!(error = %e, "could not persist fetch result");
            }
        }
        let table = Arc::new(table);
        entries.insert(key, Arc::clone(&table));
        Ok(table)
    }

    /// One call per scope for the union of every group's codes, stacked in
    /// `scopes` order. Slice per-group views out with
    /// [`CombinedFetch::group_view`].
    pub fn fetch_combined(
        &self,
        dataset: &str,
        year: u16,
        scopes: &[Scope],
        groups: &[VariableGroup],
    ) -> Result<CombinedFetch> {
        let codes = union_codes(groups);
        let parts = scopes
            .iter()
            .map(|&scope| {
                let request = FetchRequest::new(dataset, year, scope, codes.iter().copied())?;
                Ok(self.fetch(&request)?.as_ref().clone())
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(CombinedFetch {
            scopes: scopes.to_vec(),
            table: RawTable::concat(parts)?,
        })
    }

    /// Forget `request` in memory and on disk. Returns whether anything was
    /// dropped.
    pub fn invalidate(&self, request: &FetchRequest) -> Result<bool> {
        let key = request.cache_key()?;
        let mut removed = self.lock().remove(&key).is_some();
        if let Some(disk) = &self.disk {
            removed |= disk.remove(&key)?;
        }
        Ok(removed)
    }

    /// Drop every in-memory entry. The disk cache is left alone.
    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Result of [`CachedFetcher::fetch_combined`].
#[derive(Debug, Clone)]
pub struct CombinedFetch {
    scopes: Vec<Scope>,
    table: RawTable,
}

impl CombinedFetch {
    pub fn scopes(&self) -> &[Scope] {
        &self.scopes
    }

    pub fn table(&self) -> &RawTable {
        &self.table
    }

    /// The columns of `group`, as if it had been fetched alone.
    pub fn group_view(&self, group: &VariableGroup) -> Result<RawTable> {
        self.table.select(&group.codes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::GroupId;
    use crate::error::AcsError;
    use crate::testing::FakeService;
    use tempfile::tempdir;

    fn request(scope: Scope, vars: &[&str]) -> FetchRequest {
        FetchRequest::new("acs5", 2019, scope, vars.iter().copied()).unwrap()
    }

    #[test]
    fn second_identical_fetch_is_served_from_memory() {
        let service = FakeService::new();
        let fetcher = CachedFetcher::new(&service);
        let req = request(Scope::County, &["B01003_001E"]);

        let first = fetcher.fetch(&req).unwrap();
        let second = fetcher.fetch(&req).unwrap();
        assert_eq!(first, second);
        assert_eq!(service.calls(), 1);

        fetcher.fetch(&request(Scope::State, &["B01003_001E"])).unwrap();
        assert_eq!(service.calls(), 2);
        assert_eq!(fetcher.len(), 2);
    }

    #[test]
    fn failures_are_not_cached() {
        let service = FakeService::new().failing(1);
        let fetcher = CachedFetcher::new(&service);
        let req = request(Scope::State, &["B01003_001E"]);

        let err = fetcher.fetch(&req).unwrap_err();
        assert!(matches!(err, AcsError::ExternalCall { .. }));
        assert!(fetcher.is_empty());

        assert!(fetcher.fetch(&req).is_ok());
        assert_eq!(service.calls(), 2);
    }

    #[test]
    fn absent_variable_is_a_schema_violation() {
        let service = FakeService::new();
        let fetcher = CachedFetcher::new(&service);
        let err = fetcher
            .fetch(&request(Scope::State, &["NOT_A_CODE"]))
            .unwrap_err();
        assert!(matches!(err, AcsError::SchemaViolation(_)));
        assert!(fetcher.is_empty());
    }

    #[test]
    fn clear_and_invalidate_force_refetch() {
        let service = FakeService::new();
        let fetcher = CachedFetcher::new(&service);
        let req = request(Scope::State, &["B01003_001E"]);

        fetcher.fetch(&req).unwrap();
        assert!(fetcher.invalidate(&req).unwrap());
        assert!(!fetcher.invalidate(&req).unwrap());
        fetcher.fetch(&req).unwrap();
        fetcher.clear();
        fetcher.fetch(&req).unwrap();
        assert_eq!(service.calls(), 3);
    }

    #[test]
    fn disk_cache_survives_a_new_fetcher() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let service = FakeService::new();
        let req = request(Scope::County, &["B01003_001E", "B19058_001E"]);

        let first = {
            let fetcher = CachedFetcher::new(&service).with_disk_cache(DiskCache::new(dir.path())?);
            fetcher.fetch(&req)?
        };
        let fetcher = CachedFetcher::new(&service).with_disk_cache(DiskCache::new(dir.path())?);
        let second = fetcher.fetch(&req)?;

        assert_eq!(first, second);
        assert_eq!(service.calls(), 1);
        Ok(())
    }

    #[test]
    fn combined_view_matches_a_single_group_fetch() {
        let service = FakeService::new();
        let fetcher = CachedFetcher::new(&service);
        let groups: Vec<_> = [
            GroupId::Language,
            GroupId::PublicAssistance,
            GroupId::PovertyLevel,
            GroupId::TotalPopulation,
        ]
        .into_iter()
        .map(GroupId::group)
        .collect();
        let scopes = [Scope::State, Scope::County];

        let combined = fetcher.fetch_combined("acs5", 2019, &scopes, &groups).unwrap();
        assert_eq!(service.calls(), 2);
        assert_eq!(combined.scopes(), &scopes);

        for group in &groups {
            let alone = RawTable::concat(
                scopes
                    .iter()
                    .map(|&s| {
                        let req = FetchRequest::new("acs5", 2019, s, group.codes()).unwrap();
                        service.download(&req).unwrap()
                    })
                    .collect(),
            )
            .unwrap();
            assert_eq!(combined.group_view(group).unwrap(), alone);
        }

        // served from cache the second time
        fetcher.fetch_combined("acs5", 2019, &scopes, &groups).unwrap();
        assert_eq!(service.calls(), 2 + groups.len() * scopes.len());
    }
}
