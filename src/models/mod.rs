//! Data models for Scanshelf

pub mod book;

// Re-export commonly used types
pub use book::{BookMetadata, BookRecord, CreateBookRequest, CreateBookResponse, MetadataLookup};
