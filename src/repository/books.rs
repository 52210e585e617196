//! Books repository

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::book::{BookMetadata, BookRecord},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Insert a scanned book. `scanned_at` is assigned here, at write time,
    /// and the fully stored row is returned.
    pub async fn insert(&self, barcode: &str, metadata: &BookMetadata) -> AppResult<BookRecord> {
        let record = sqlx::query_as::<_, BookRecord>(
            r#"
            INSERT INTO books (barcode, title, authors, publisher, published_date, scanned_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(barcode)
        .bind(&metadata.title)
        .bind(&metadata.authors)
        .bind(&metadata.publisher)
        .bind(&metadata.published_date)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        Ok(record)
    }

    /// List every stored book, most recently scanned first.
    /// The id tie-break keeps same-instant scans in a stable order.
    pub async fn list_recent(&self) -> AppResult<Vec<BookRecord>> {
        let records = sqlx::query_as::<_, BookRecord>(
            "SELECT * FROM books ORDER BY scanned_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(records)
    }
}
