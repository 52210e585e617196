//! Book scanning service

use crate::{
    error::{AppError, AppResult},
    models::book::{BookRecord, MetadataLookup},
    repository::Repository,
    services::metadata::MetadataService,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
    metadata: MetadataService,
}

impl BooksService {
    pub fn new(repository: Repository, metadata: MetadataService) -> Self {
        Self { repository, metadata }
    }

    /// Record a scanned barcode: enrich it from the catalog and persist.
    ///
    /// Validation runs before any outbound call so an empty scan never
    /// touches the catalog or the database. A lookup that finds nothing
    /// (or fails) still saves the record, with sentinel metadata.
    pub async fn save_scan(&self, barcode: &str) -> AppResult<BookRecord> {
        let barcode = barcode.trim();
        if barcode.is_empty() {
            return Err(AppError::Validation("Barcode is required".to_string()));
        }

        let lookup = self.metadata.lookup(barcode).await;
        if lookup == MetadataLookup::Failed {
            tracing::warn!("Saving {} with sentinel metadata after lookup failure", barcode);
        }

        let metadata = lookup.into_metadata();
        let record = self.repository.books.insert(barcode, &metadata).await?;
        tracing::info!("Saved scan {} as book id={}", barcode, record.id);
        Ok(record)
    }

    /// List all scanned books, most recent first
    pub async fn list_books(&self) -> AppResult<Vec<BookRecord>> {
        self.repository.books.list_recent().await
    }

    /// Ping the record store
    pub async fn store_health(&self) -> AppResult<()> {
        self.repository.health().await
    }
}
