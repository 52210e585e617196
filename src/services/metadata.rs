//! Catalog metadata client
//!
//! Queries a volumes search API (Google Books by default) for the
//! bibliographic data behind a scanned barcode. Lookup problems never
//! escape this module: the caller only ever sees found / no-match /
//! failed, and the latter two both fall back to sentinel defaults.

use serde::Deserialize;

use crate::{
    config::CatalogConfig,
    models::book::{BookMetadata, MetadataLookup},
};

/// One page of volume search results
#[derive(Debug, Deserialize)]
struct VolumesResponse {
    items: Option<Vec<Volume>>,
}

#[derive(Debug, Deserialize)]
struct Volume {
    #[serde(rename = "volumeInfo")]
    volume_info: Option<VolumeInfo>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VolumeInfo {
    title: Option<String>,
    authors: Option<Vec<String>>,
    publisher: Option<String>,
    published_date: Option<String>,
}

impl From<VolumeInfo> for BookMetadata {
    fn from(info: VolumeInfo) -> Self {
        let defaults = BookMetadata::default();
        Self {
            title: info.title.unwrap_or(defaults.title),
            authors: info.authors.unwrap_or(defaults.authors),
            publisher: info.publisher.unwrap_or(defaults.publisher),
            published_date: info.published_date.unwrap_or(defaults.published_date),
        }
    }
}

#[derive(Clone)]
pub struct MetadataService {
    client: reqwest::Client,
    base_url: String,
}

impl MetadataService {
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url,
        }
    }

    /// Look up bibliographic metadata for a scanned identifier.
    ///
    /// Issues a single search request filtered by ISBN and maps the first
    /// matching volume. No retries.
    pub async fn lookup(&self, identifier: &str) -> MetadataLookup {
        let url = format!("{}/volumes", self.base_url);

        let response = match self
            .client
            .get(&url)
            .query(&[("q", format!("isbn:{}", identifier))])
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Catalog lookup failed for {}: {}", identifier, e);
                return MetadataLookup::Failed;
            }
        };

        if !response.status().is_success() {
            tracing::warn!(
                "Catalog lookup for {} returned status {}",
                identifier,
                response.status()
            );
            return MetadataLookup::Failed;
        }

        let volumes = match response.json::<VolumesResponse>().await {
            Ok(volumes) => volumes,
            Err(e) => {
                tracing::warn!("Failed to parse catalog response for {}: {}", identifier, e);
                return MetadataLookup::Failed;
            }
        };

        match first_match(volumes) {
            Some(metadata) => {
                tracing::debug!("Catalog match for {}: {}", identifier, metadata.title);
                MetadataLookup::Found(metadata)
            }
            None => {
                tracing::info!("No catalog match for {}", identifier);
                MetadataLookup::NoMatch
            }
        }
    }
}

/// Extract the first volume's metadata, filling missing sub-fields with
/// the sentinel defaults
fn first_match(volumes: VolumesResponse) -> Option<BookMetadata> {
    let volume = volumes.items?.into_iter().next()?;
    Some(volume.volume_info.unwrap_or_default().into())
}
