//! Prediction Service Client
//!
//! Functions for communicating with the sentiment prediction HTTP API.

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Default prediction service URL
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

const API_BASE_STORAGE_KEY: &str = "dinesight_api_url";

/// Get the API base URL from local storage or use the default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(API_BASE_STORAGE_KEY) {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Prediction API failures
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Rejected locally; an empty review never issues a request
    #[error("Please enter a review first!")]
    EmptyReview,

    /// The service did not answer at all
    #[error("Could not connect to the prediction service")]
    Unreachable,

    /// The service answered with an error status and message
    #[error("{0}")]
    Backend(String),

    /// The response body did not match the expected shape
    #[error("Unexpected response: {0}")]
    Malformed(String),
}

// ============ Response Types ============

/// Result of one prediction call.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Prediction {
    pub sentiment: String,
    pub confidence: f64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub probabilities: HashMap<String, f64>,
}

/// One past prediction from the history endpoint.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ReviewRecord {
    pub review: String,
    pub sentiment: String,
    pub confidence: f64,
    pub timestamp: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

// ============ API Functions ============

/// Review text accepted for prediction, if any.
fn normalize_review(review: &str) -> Option<&str> {
    let trimmed = review.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Classify `review` via `POST /predict`.
///
/// Empty input (after trimming) fails locally with [`ApiError::EmptyReview`]
/// before any request is built.
pub async fn predict(review: &str) -> Result<Prediction, ApiError> {
    let review = normalize_review(review).ok_or(ApiError::EmptyReview)?;

    #[derive(Serialize)]
    struct PredictRequest<'a> {
        review: &'a str,
    }

    let response = Request::post(&format!("{}/predict", get_api_base()))
        .json(&PredictRequest { review })
        .map_err(|e| ApiError::Malformed(e.to_string()))?
        .send()
        .await
        .map_err(|_| ApiError::Unreachable)?;

    if !response.ok() {
        let body: ErrorBody = response.json().await.unwrap_or(ErrorBody {
            error: "Invalid review".to_string(),
        });
        return Err(ApiError::Backend(body.error));
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Malformed(e.to_string()))
}

/// Fetch the full prediction history in server order.
pub async fn fetch_history() -> Result<Vec<ReviewRecord>, ApiError> {
    let response = Request::get(&format!("{}/history", get_api_base()))
        .send()
        .await
        .map_err(|_| ApiError::Unreachable)?;

    if !response.ok() {
        let body: ErrorBody = response.json().await.unwrap_or(ErrorBody {
            error: "Failed to load history".to_string(),
        });
        return Err(ApiError::Backend(body.error));
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Malformed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_whitespace_reviews_are_rejected_locally() {
        assert_eq!(normalize_review(""), None);
        assert_eq!(normalize_review("   \n\t "), None);
    }

    #[test]
    fn review_text_is_trimmed_before_sending() {
        assert_eq!(normalize_review("  great food  "), Some("great food"));
    }
}
