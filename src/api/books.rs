//! Book scan endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::book::{BookRecord, CreateBookRequest, CreateBookResponse},
};

/// Save a scanned barcode, enriched from the catalog
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBookRequest,
    responses(
        (status = 201, description = "Book saved", body = CreateBookResponse),
        (status = 400, description = "Barcode missing or empty", body = crate::error::ErrorResponse),
        (status = 500, description = "Storage failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateBookRequest>,
) -> AppResult<(StatusCode, Json<CreateBookResponse>)> {
    let book = state.services.books.save_scan(&request.barcode).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateBookResponse {
            message: "Book saved successfully".to_string(),
            book,
        }),
    ))
}

/// List all scanned books, most recent first
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "Books sorted by scan time, newest first", body = Vec<BookRecord>),
        (status = 500, description = "Storage failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<BookRecord>>> {
    let books = state.services.books.list_books().await?;
    Ok(Json(books))
}
