//! Business logic services

pub mod books;
pub mod metadata;

use crate::{config::CatalogConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: books::BooksService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, catalog_config: CatalogConfig) -> Self {
        let metadata = metadata::MetadataService::new(catalog_config);
        Self {
            books: books::BooksService::new(repository, metadata),
        }
    }
}
