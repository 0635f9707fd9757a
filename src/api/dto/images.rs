//! DTOs for the image link normalization endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::ErrorInfo;
use crate::utils::image_url::UrlKind;

/// Request to normalize one or more pasted image links.
#[derive(Debug, Deserialize, Validate)]
pub struct NormalizeImagesRequest {
    #[validate(length(min = 1, message = "At least one URL is required"))]
    pub urls: Vec<String>,
}

/// Response containing batch processing results.
#[derive(Debug, Serialize)]
pub struct NormalizeImagesResponse {
    pub summary: BatchSummary,
    pub items: Vec<NormalizeResultItem>,
}

/// Individual result for a link in the batch.
///
/// Uses untagged enum for cleaner JSON structure (no discriminator field).
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum NormalizeResultItem {
    Success {
        input: String,
        url: String,
        kind: UrlKind,
        message: &'static str,
    },
    Error {
        input: String,
        error: ErrorInfo,
    },
}

/// Summary statistics for batch processing.
#[derive(Debug, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
}
