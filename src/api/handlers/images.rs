//! Handler for image link normalization.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::images::{
    BatchSummary, NormalizeImagesRequest, NormalizeImagesResponse, NormalizeResultItem,
};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::image_url::{classify_url, normalize_image_url_with};

/// Normalizes pasted hotel/room image links.
///
/// # Endpoint
///
/// `POST /api/images/normalize`
///
/// # Batch Processing
///
/// Processes links independently. If one fails, others continue processing.
/// Each result includes either the normalized link or error information.
///
/// # Request Body
///
/// ```json
/// { "urls": ["https://drive.google.com/file/d/ABC123xyz/view?usp=sharing"] }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "summary": { "total": 1, "successful": 1, "failed": 0 },
///   "items": [
///     {
///       "input": "https://drive.google.com/file/d/ABC123xyz/view?usp=sharing",
///       "url": "https://drive.google.com/uc?export=view&id=ABC123xyz",
///       "kind": "google-drive-share",
///       "message": "✓ Google Drive link detected - Auto-converting to direct URL"
///     }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the list is empty or larger than the configured
/// batch size.
pub async fn normalize_images_handler(
    State(state): State<AppState>,
    payload: Result<Json<NormalizeImagesRequest>, JsonRejection>,
) -> Result<Json<NormalizeImagesResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let total = payload.urls.len();
    if total > state.max_batch_size {
        return Err(AppError::bad_request(
            "Too many URLs in one request",
            json!({ "max": state.max_batch_size, "got": total }),
        ));
    }

    let mut items = Vec::with_capacity(total);
    let mut successful = 0;
    let mut failed = 0;

    for input in payload.urls {
        match normalize_image_url_with(&input, state.image_validation) {
            Ok(url) => {
                successful += 1;
                metrics::counter!("image_urls_normalized_total", "result" => "ok").increment(1);
                let kind = classify_url(&input);
                items.push(NormalizeResultItem::Success {
                    input,
                    url,
                    kind,
                    message: kind.message(),
                });
            }
            Err(err) => {
                failed += 1;
                metrics::counter!("image_urls_normalized_total", "result" => "invalid")
                    .increment(1);
                let error = AppError::bad_request(
                    err.to_string(),
                    json!({ "input": input.trim() }),
                )
                .to_error_info();
                items.push(NormalizeResultItem::Error { input, error });
            }
        }
    }

    Ok(Json(NormalizeImagesResponse {
        summary: BatchSummary {
            total,
            successful,
            failed,
        },
        items,
    }))
}
