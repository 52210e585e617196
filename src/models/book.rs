//! Book record model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

pub const UNKNOWN_TITLE: &str = "Unknown Title";
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";
pub const UNKNOWN_PUBLISHER: &str = "Unknown Publisher";
pub const UNKNOWN_DATE: &str = "Unknown Date";

/// A scanned book as stored in the database.
///
/// `barcode` is always the raw scanned payload; the bibliographic fields
/// hold either real catalog metadata or the sentinel defaults. Records are
/// immutable once written.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    pub id: i32,
    pub barcode: String,
    pub title: String,
    pub authors: Vec<String>,
    pub publisher: String,
    pub published_date: String,
    pub scanned_at: DateTime<Utc>,
}

/// Save-scan request body
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBookRequest {
    /// Scanned identifier (ISBN or other barcode payload).
    /// A missing field is treated the same as an empty one.
    #[serde(default)]
    pub barcode: String,
}

/// Save-scan response body
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateBookResponse {
    pub message: String,
    pub book: BookRecord,
}

/// Bibliographic metadata for one catalog match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookMetadata {
    pub title: String,
    pub authors: Vec<String>,
    pub publisher: String,
    pub published_date: String,
}

impl Default for BookMetadata {
    /// Sentinel defaults stored when the catalog has nothing for a barcode
    fn default() -> Self {
        Self {
            title: UNKNOWN_TITLE.to_string(),
            authors: vec![UNKNOWN_AUTHOR.to_string()],
            publisher: UNKNOWN_PUBLISHER.to_string(),
            published_date: UNKNOWN_DATE.to_string(),
        }
    }
}

/// Outcome of a catalog lookup.
///
/// `NoMatch` and `Failed` are kept distinct for diagnostics but both
/// resolve to sentinel defaults in the stored record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataLookup {
    Found(BookMetadata),
    NoMatch,
    Failed,
}

impl MetadataLookup {
    /// Metadata to persist for this outcome
    pub fn into_metadata(self) -> BookMetadata {
        match self {
            MetadataLookup::Found(metadata) => metadata,
            MetadataLookup::NoMatch | MetadataLookup::Failed => BookMetadata::default(),
        }
    }
}
