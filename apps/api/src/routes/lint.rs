use std::path::{Path, PathBuf};

use anyhow::Context;
use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::analysis::analyze_resume;
use crate::errors::AppError;
use crate::extraction::DocumentFormat;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct LintResponse {
    pub mistakes: Vec<String>,
}

/// POST /api/v1/lint
/// Accepts a multipart upload with one `file` field, saves it under the
/// configured upload directory, and returns the analyzer's findings.
///
/// Only the upload plumbing can error here; analysis always returns a
/// (possibly empty) mistake list.
pub async fn handle_lint(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<LintResponse>, AppError> {
    let mut file_field = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("file") {
            let filename = field.file_name().map(sanitize_filename).unwrap_or_default();
            if filename.is_empty() {
                return Err(AppError::Validation("No selected file".to_string()));
            }
            let data: Bytes = field.bytes().await?;
            file_field = Some((filename, data));
            break;
        }
    }
    let (filename, data) =
        file_field.ok_or_else(|| AppError::Validation("No file part".to_string()))?;

    let saved_path =
        PathBuf::from(&state.config.upload_dir).join(format!("{}_{filename}", Uuid::new_v4()));
    tokio::fs::write(&saved_path, &data)
        .await
        .with_context(|| format!("saving upload to {}", saved_path.display()))?;

    let format = DocumentFormat::from_path(&saved_path);
    info!("Analyzing upload {} ({format:?})", saved_path.display());

    let allowlist = state.allowlist.clone();
    let corrector = state.corrector.clone();
    let mistakes = tokio::task::spawn_blocking(move || {
        analyze_resume(&saved_path, format, &allowlist, corrector.as_ref())
    })
    .await
    .context("analysis task panicked")?;

    Ok(Json(LintResponse { mistakes }))
}

/// Keeps only the final path component of the client-supplied name and drops
/// everything outside `[A-Za-z0-9._-]`.
fn sanitize_filename(name: &str) -> String {
    let base = Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("");
    base.chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect()
}
