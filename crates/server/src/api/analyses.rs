//! Analysis endpoints.

use std::sync::Arc;

use axum::{
    extract::{multipart::Field, Multipart, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use gatekeeper_core::{
    Analysis, AnalysisRequest, AnalysisResult, AnalyzeError, Category, TorrentMeta,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::handlers::{reject, ErrorResponse};
use crate::state::AppState;

type ApiError = (StatusCode, Json<ErrorResponse>);

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct TitleAnalysisRequest {
    pub category: String,
    pub title: String,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub category: Category,
    pub input_title: Option<String>,
    pub input_description: Option<String>,
    pub effective_title: String,
    pub torrent: Option<TorrentMeta>,
    pub result: AnalysisResult,
    pub created_at: DateTime<Utc>,
}

impl AnalysisResponse {
    fn new(analysis: Analysis, input_title: Option<String>, input_description: Option<String>) -> Self {
        Self {
            category: analysis.category,
            input_title,
            input_description,
            effective_title: analysis.effective_title,
            torrent: analysis.torrent,
            result: analysis.result,
            created_at: Utc::now(),
        }
    }
}

/// Fields of an analysis upload form.
#[derive(Debug, Default)]
pub(crate) struct UploadForm {
    pub category: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub torrent_file: Option<Vec<u8>>,
}

impl UploadForm {
    /// Read all fields. Empty text fields and empty files count as absent;
    /// unknown fields are ignored.
    pub(crate) async fn read(multipart: &mut Multipart) -> Result<Self, ApiError> {
        let mut form = UploadForm::default();

        loop {
            let field = match multipart.next_field().await {
                Ok(Some(field)) => field,
                Ok(None) => break,
                Err(e) => return Err(reject(e.status(), "multipart", e.body_text())),
            };

            let name = field.name().unwrap_or("").to_string();
            match name.as_str() {
                "category" => form.category = read_text(field).await?,
                "title" => form.title = read_text(field).await?,
                "description" => form.description = read_text(field).await?,
                "torrent_file" => {
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| reject(e.status(), "multipart", format!("Failed to read file: {}", e)))?;
                    if !bytes.is_empty() {
                        form.torrent_file = Some(bytes.to_vec());
                    }
                }
                other => debug!("Ignoring multipart field '{}'", other),
            }
        }

        Ok(form)
    }
}

async fn read_text(field: Field<'_>) -> Result<Option<String>, ApiError> {
    let text = field
        .text()
        .await
        .map_err(|e| reject(e.status(), "multipart", e.body_text()))?;
    Ok(if text.is_empty() { None } else { Some(text) })
}

fn parse_category(category: Option<&str>) -> Result<Category, ApiError> {
    category
        .and_then(|c| c.parse().ok())
        .ok_or_else(|| reject(StatusCode::BAD_REQUEST, "category", "Category must be Movie or TV"))
}

fn missing_title(e: AnalyzeError) -> ApiError {
    reject(StatusCode::BAD_REQUEST, "missing_title", e.to_string())
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/v1/analyses
///
/// Multipart form with `category`, optional `title`, optional `description`
/// and optional `torrent_file`.
pub async fn create_analysis(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let form = UploadForm::read(&mut multipart).await?;
    let category = parse_category(form.category.as_deref())?;

    let request = AnalysisRequest {
        category,
        title: form.title.clone(),
        torrent: form.torrent_file,
    };

    let analysis = state
        .analyzer()
        .analyze(request)
        .await
        .map_err(missing_title)?;

    Ok(Json(AnalysisResponse::new(analysis, form.title, form.description)))
}

/// POST /api/v1/analyses/title
///
/// Analyze a bare title without a torrent.
pub async fn analyze_title(
    State(state): State<Arc<AppState>>,
    Json(body): Json<TitleAnalysisRequest>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let category = parse_category(Some(&body.category))?;

    let analysis = state
        .analyzer()
        .analyze(AnalysisRequest::title(category, body.title.clone()))
        .await
        .map_err(missing_title)?;

    Ok(Json(AnalysisResponse::new(analysis, Some(body.title), None)))
}
