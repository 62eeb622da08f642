//! Translate HTTP Handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use std::sync::Arc;

use crate::application::{TranslateBatch, TranslateText};
use crate::infrastructure::http::dto::{
    ApiResponse, TranslateBatchRequest, TranslateBatchResponse, TranslateRequest, TranslatedText,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 翻译单条文本
pub async fn translate_one(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<TranslatedText>>, ApiError> {
    let Json(request) = payload?;

    let translated_text = state
        .translate_text_handler
        .handle(TranslateText {
            text: request.text,
            mode: request.mode,
        })
        .await?;

    Ok(Json(ApiResponse::success(TranslatedText { translated_text })))
}

/// 批量翻译
pub async fn translate_batch(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TranslateBatchRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<TranslateBatchResponse>>, ApiError> {
    let Json(request) = payload?;

    let translated = state
        .translate_batch_handler
        .handle(TranslateBatch {
            items: request.items.into_iter().map(|item| item.text).collect(),
            mode: request.mode,
        })
        .await?;

    Ok(Json(ApiResponse::success(TranslateBatchResponse {
        items: translated
            .into_iter()
            .map(|translated_text| TranslatedText { translated_text })
            .collect(),
    })))
}
