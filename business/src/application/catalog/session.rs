use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures::future::join_all;
use uuid::Uuid;

use crate::domain::catalog::entry::{CatalogEntry, LocalKey};
use crate::domain::catalog::errors::{GatewayError, SessionError};
use crate::domain::catalog::gateway::{CatalogGateway, ProductSubmission};
use crate::domain::catalog::query::{QueryPage, QueryState, run_query};
use crate::domain::catalog::samples::sample_entries;
use crate::domain::catalog::summary::InventorySummary;
use crate::domain::catalog::transfer::{ExportFile, export_snapshot, parse_import};
use crate::domain::logger::Logger;
use crate::domain::product::draft::ProductDraft;
use crate::domain::product::errors::ValidationError;
use crate::domain::product::model::Product;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// Short-lived message for the user. Only the latest one is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Fetched,
    /// First load failed; the built-in sample catalog is shown.
    SampleFallback,
    /// A later load failed; the previous working set is kept.
    KeptWorkingSet,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The store confirmed the delete.
    Deleted,
    /// The entry was never persisted; no request was made.
    RemovedLocally,
}

/// Per-item result of a bulk delete.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkDeleteReport {
    pub deleted: Vec<LocalKey>,
    pub removed_locally: Vec<LocalKey>,
    pub failed: Vec<(LocalKey, GatewayError)>,
}

impl BulkDeleteReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Per-record result of an import, keyed by position in the file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportReport {
    pub created: Vec<Product>,
    pub rejected: Vec<(usize, ValidationError)>,
    pub failed: Vec<(usize, GatewayError)>,
    pub discarded: usize,
}

/// Client-side owner of the catalog working set.
///
/// Both the storefront search and the owner dashboard read from one session.
/// Every write is followed by a full re-fetch instead of a local patch, so
/// the working set converges on the store after each operation.
pub struct CatalogSession {
    gateway: Arc<dyn CatalogGateway>,
    logger: Arc<dyn Logger>,
    entries: Vec<CatalogEntry>,
    selected: BTreeSet<LocalKey>,
    known_keys: HashMap<Uuid, LocalKey>,
    next_key: u64,
    loaded: bool,
    notice: Option<Notice>,
}

impl CatalogSession {
    pub fn new(gateway: Arc<dyn CatalogGateway>, logger: Arc<dyn Logger>) -> Self {
        Self {
            gateway,
            logger,
            entries: Vec::new(),
            selected: BTreeSet::new(),
            known_keys: HashMap::new(),
            next_key: 1,
            loaded: false,
            notice: None,
        }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn entry(&self, key: LocalKey) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.key() == key)
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    pub fn query(&self, state: &QueryState) -> QueryPage<'_, CatalogEntry> {
        run_query(&self.entries, state)
    }

    pub fn summary(&self) -> InventorySummary {
        InventorySummary::from_items(&self.entries)
    }

    pub fn selected(&self) -> Vec<LocalKey> {
        self.selected.iter().copied().collect()
    }

    pub fn is_selected(&self, key: LocalKey) -> bool {
        self.selected.contains(&key)
    }

    /// Returns whether `key` is selected afterwards.
    pub fn toggle_selected(&mut self, key: LocalKey) -> bool {
        if self.selected.remove(&key) {
            return false;
        }
        if self.entry(key).is_none() {
            return false;
        }
        self.selected.insert(key);
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    fn allocate_key(&mut self) -> LocalKey {
        let key = LocalKey::new(self.next_key);
        self.next_key += 1;
        key
    }

    fn post(&mut self, level: NoticeLevel, message: impl Into<String>) {
        let message = message.into();
        match level {
            NoticeLevel::Info => self.logger.info(&message),
            NoticeLevel::Warning => self.logger.warn(&message),
            NoticeLevel::Error => self.logger.error(&message),
        }
        self.notice = Some(Notice { level, message });
    }

    fn replace_entries(&mut self, products: Vec<Product>) {
        let mut known_keys = HashMap::with_capacity(products.len());
        let mut entries = Vec::with_capacity(products.len());

        for product in products {
            let key = match self.known_keys.get(&product.id) {
                Some(key) => *key,
                None => self.allocate_key(),
            };
            known_keys.insert(product.id, key);
            entries.push(CatalogEntry::from_product(product, key));
        }

        self.known_keys = known_keys;
        self.entries = entries;
        let present: BTreeSet<LocalKey> = self.entries.iter().map(CatalogEntry::key).collect();
        self.selected.retain(|key| present.contains(key));
    }

    fn remove_local(&mut self, key: LocalKey) {
        self.entries.retain(|entry| entry.key() != key);
        self.selected.remove(&key);
    }

    /// Re-reads the full catalog from the store.
    pub async fn load(&mut self) -> LoadOutcome {
        match self.gateway.fetch_all().await {
            Ok(products) => {
                self.logger
                    .debug(&format!("Fetched {} products", products.len()));
                self.replace_entries(products);
                self.loaded = true;
                LoadOutcome::Fetched
            }
            Err(e) if !self.loaded => {
                self.logger
                    .warn(&format!("Initial catalog load failed: {}", e));
                let samples = sample_entries(Utc::now(), || self.allocate_key());
                self.entries = samples;
                self.known_keys.clear();
                self.selected.clear();
                self.loaded = true;
                self.post(NoticeLevel::Warning, "Using sample data (API unavailable)");
                LoadOutcome::SampleFallback
            }
            Err(e) => {
                self.post(
                    NoticeLevel::Error,
                    format!("Could not refresh products: {}", e),
                );
                LoadOutcome::KeptWorkingSet
            }
        }
    }

    /// Creates or updates a product from form input.
    ///
    /// `editing` names the entry being edited. An edited entry that was never
    /// persisted is created and keeps its local key.
    pub async fn save(
        &mut self,
        draft: &ProductDraft,
        editing: Option<LocalKey>,
    ) -> Result<Product, SessionError> {
        let details = match draft.validate() {
            Ok(details) => details,
            Err(e) => {
                self.post(NoticeLevel::Warning, e.notice());
                return Err(e.into());
            }
        };

        let target = match editing {
            Some(key) => {
                let entry = self.entry(key).ok_or(SessionError::UnknownEntry(key))?;
                Some((key, entry.identity.server(), entry.created_at))
            }
            None => None,
        };

        let result = match target {
            Some((_, Some(server), _)) => self.gateway.update(server, &details).await,
            Some((_, None, created_at)) => {
                self.gateway
                    .create(&ProductSubmission {
                        details,
                        created_at: Some(created_at),
                    })
                    .await
            }
            None => {
                self.gateway
                    .create(&ProductSubmission {
                        details,
                        created_at: None,
                    })
                    .await
            }
        };

        match result {
            Ok(product) => {
                let key = match target {
                    Some((key, _, _)) => key,
                    None => self.allocate_key(),
                };
                self.known_keys.insert(product.id, key);
                let updated = matches!(target, Some((_, Some(_), _)));
                self.post(
                    NoticeLevel::Info,
                    if updated {
                        "Product updated"
                    } else {
                        "Product added"
                    },
                );
                self.load().await;
                Ok(product)
            }
            Err(e) => {
                self.logger.error(&format!("Saving product failed: {}", e));
                self.post(NoticeLevel::Error, "Server error. Please check backend.");
                Err(e.into())
            }
        }
    }

    /// Removes one entry.
    ///
    /// Persisted entries are removed from the working set whatever the store
    /// answers, then re-fetched; a failed delete therefore reappears.
    pub async fn delete_one(&mut self, key: LocalKey) -> Result<DeleteOutcome, SessionError> {
        let entry = self.entry(key).ok_or(SessionError::UnknownEntry(key))?;

        let Some(server) = entry.identity.server() else {
            self.remove_local(key);
            self.post(NoticeLevel::Info, "Product deleted");
            return Ok(DeleteOutcome::RemovedLocally);
        };

        let result = self.gateway.delete(server).await;
        self.remove_local(key);

        let outcome = match result {
            Ok(()) => {
                self.post(NoticeLevel::Info, "Product deleted");
                Ok(DeleteOutcome::Deleted)
            }
            Err(e) => {
                self.logger
                    .error(&format!("Deleting product {} failed: {}", server, e));
                self.post(NoticeLevel::Error, "Server error. Could not delete");
                Err(e.into())
            }
        };

        self.load().await;
        outcome
    }

    /// Deletes several entries with one concurrent request per persisted entry.
    ///
    /// Unknown keys are ignored.
    pub async fn delete_many(&mut self, keys: &[LocalKey]) -> BulkDeleteReport {
        let mut report = BulkDeleteReport::default();
        let mut targets = Vec::new();

        for key in keys {
            match self.entry(*key).map(|entry| entry.identity.server()) {
                Some(Some(server)) => targets.push((*key, server)),
                Some(None) => {
                    self.remove_local(*key);
                    report.removed_locally.push(*key);
                }
                None => {}
            }
        }

        let gateway = Arc::clone(&self.gateway);
        let results = join_all(targets.iter().map(|(key, server)| {
            let gateway = Arc::clone(&gateway);
            async move { (*key, gateway.delete(*server).await) }
        }))
        .await;

        for (key, result) in results {
            self.selected.remove(&key);
            match result {
                Ok(()) => report.deleted.push(key),
                Err(e) => report.failed.push((key, e)),
            }
        }

        if report.is_complete() {
            self.post(NoticeLevel::Info, "Selected products deleted");
        } else {
            self.post(
                NoticeLevel::Error,
                "Server error. Some items may remain.",
            );
        }

        if !targets.is_empty() {
            self.load().await;
        }
        report
    }

    /// Deletes every selected entry and clears the selection.
    pub async fn delete_selected(&mut self) -> BulkDeleteReport {
        let keys = self.selected();
        if keys.is_empty() {
            return BulkDeleteReport::default();
        }
        let report = self.delete_many(&keys).await;
        self.selected.clear();
        report
    }

    /// Imports a JSON array of partial products, one create request per record.
    ///
    /// No duplicate detection against existing records.
    pub async fn import_batch(&mut self, raw: &str) -> Result<ImportReport, SessionError> {
        let batch = match parse_import(raw, Utc::now()) {
            Ok(batch) => batch,
            Err(e) => {
                self.post(NoticeLevel::Error, "Invalid JSON file");
                return Err(e.into());
            }
        };

        let mut report = ImportReport {
            discarded: batch.discarded,
            ..ImportReport::default()
        };
        let mut submissions = Vec::new();
        for record in batch.records {
            match record.draft.validate() {
                Ok(details) => submissions.push((
                    record.index,
                    ProductSubmission {
                        details,
                        created_at: Some(record.created_at),
                    },
                )),
                Err(e) => report.rejected.push((record.index, e)),
            }
        }

        let gateway = Arc::clone(&self.gateway);
        let results = join_all(submissions.iter().map(|(index, submission)| {
            let gateway = Arc::clone(&gateway);
            async move { (*index, gateway.create(submission).await) }
        }))
        .await;

        for (index, result) in results {
            match result {
                Ok(product) => report.created.push(product),
                Err(e) => report.failed.push((index, e)),
            }
        }

        self.logger.info(&format!(
            "Imported {} products ({} rejected, {} failed, {} discarded)",
            report.created.len(),
            report.rejected.len(),
            report.failed.len(),
            report.discarded
        ));
        self.load().await;
        if report.failed.is_empty() {
            self.post(NoticeLevel::Info, "Products imported");
        } else {
            self.post(NoticeLevel::Warning, "Server error. Some products were not imported.");
        }
        Ok(report)
    }

    /// Snapshot of the current working set; may lag behind the store.
    pub fn export_all(&self, now: DateTime<Utc>) -> Result<ExportFile, SessionError> {
        Ok(export_snapshot(&self.entries, now)?)
    }
}
