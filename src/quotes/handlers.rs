use axum::{
    Json, Router,
    extract::{Extension, Path, Query, rejection::JsonRejection},
    http::StatusCode,
    routing::{delete, get},
};

use super::errors::ApiError;
use super::protocol::{
    CreateQuoteRequest, ENDPOINT_HEALTH, ENDPOINT_QUOTE_BY_ID, ENDPOINT_QUOTES, ENDPOINT_RANDOM,
    HealthResponse, ListQuotesParams,
};
use crate::storage::{Quote, QuoteId, SharedStorage};

/// Builds the HTTP router with the store attached as shared state.
pub fn router(store: SharedStorage) -> Router {
    Router::new()
        .route(
            ENDPOINT_QUOTES,
            get(handle_list_quotes).post(handle_create_quote),
        )
        .route(ENDPOINT_RANDOM, get(handle_random_quote))
        .route(ENDPOINT_QUOTE_BY_ID, delete(handle_delete_quote))
        .route(ENDPOINT_HEALTH, get(handle_health))
        .layer(Extension(store))
}

pub async fn handle_list_quotes(
    Extension(store): Extension<SharedStorage>,
    Query(params): Query<ListQuotesParams>,
) -> Json<Vec<Quote>> {
    let quotes = match params.author.as_deref() {
        Some(author) if !author.is_empty() => store.get_by_author(author),
        _ => store.get_all(),
    };

    tracing::debug!("Listing {} quotes", quotes.len());
    Json(quotes)
}

pub async fn handle_create_quote(
    Extension(store): Extension<SharedStorage>,
    payload: Result<Json<CreateQuoteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Quote>), ApiError> {
    let Json(req) = payload.map_err(|e| {
        tracing::debug!("Rejected request body: {}", e);
        ApiError::bad_request("Invalid request body")
    })?;

    if req.author.is_empty() || req.text.is_empty() {
        return Err(ApiError::unprocessable("Author and quote are required"));
    }

    let quote = store.create(&req.author, &req.text)?;
    tracing::info!("Created quote {} by {:?}", quote.id, quote.author);

    Ok((StatusCode::CREATED, Json(quote)))
}

pub async fn handle_random_quote(
    Extension(store): Extension<SharedStorage>,
) -> Result<Json<Quote>, ApiError> {
    let quote = store.get_random()?;
    Ok(Json(quote))
}

pub async fn handle_delete_quote(
    Extension(store): Extension<SharedStorage>,
    Path(id_str): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id: u64 = id_str
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid quote ID"))?;

    store.delete(QuoteId(id))?;
    tracing::info!("Deleted quote {}", id);

    Ok(StatusCode::NO_CONTENT)
}

pub async fn handle_health(Extension(store): Extension<SharedStorage>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        quotes: store.len(),
    })
}
