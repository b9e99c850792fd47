//! Axum route handlers for the resume render API.

use axum::extract::State;
use axum::http::header::{self, HeaderName};
use axum::Json;
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::layout::build_content;
use crate::models::resume::ResumeData;
use crate::render::pdf::render_pdf;
use crate::state::AppState;

/// POST {API_PREFIX}/v1/resume/generate
///
/// Accepts a resume record as JSON, builds the element sequence, renders it
/// through the page-flow engine, and streams back the PDF as an attachment.
/// Malformed records (empty name, no experience) map to 422; union-shape
/// violations are rejected by the JSON extractor before this handler runs.
pub async fn handle_generate_resume(
    State(state): State<AppState>,
    Json(record): Json<ResumeData>,
) -> Result<([(HeaderName, String); 2], Bytes), AppError> {
    info!("Start generating resume for '{}'", record.name);

    let elements = build_content(&record, &state.style)?;
    let bytes = render_pdf(&elements, &state.style, state.fonts.clone(), &record.name)?;

    let file_name = format!("{}.pdf", sanitize_file_stem(&record.name));
    info!("Generate resume done ({file_name})");

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        Bytes::from(bytes),
    ))
}

/// Lowercases the name and replaces spaces, dots, and commas with
/// underscores to form a safe attachment file stem.
fn sanitize_file_stem(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| match c {
            ' ' | '.' | ',' => '_',
            other => other,
        })
        .collect()
}
