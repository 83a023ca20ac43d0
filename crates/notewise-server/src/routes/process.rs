//! Note processing route — text and PDF/TXT uploads in, summary, tags and quiz out.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::multipart::{Multipart, MultipartError, MultipartRejection};
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use notewise_core::Error;
use notewise_ingest::{analyze_submission, Analysis, Submission};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use super::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/process", post(process_notes))
}

/// An uploaded file part, buffered before extraction.
struct Upload {
    filename: String,
    content_type: Option<String>,
    bytes: Bytes,
}

/// Parsed multipart form.
#[derive(Default)]
struct ProcessForm {
    text: String,
    files: Vec<Upload>,
    /// Single-file parts, only used when no `files` part was sent.
    file: Vec<Upload>,
    seed: Option<u64>,
}

impl ProcessForm {
    fn into_uploads(self) -> Vec<Upload> {
        if self.files.is_empty() {
            self.file
        } else {
            self.files
        }
    }
}

/// POST /api/process — multipart with optional `text`, repeated `files`
/// (or `file`), and an optional numeric `seed` fixing option order.
///
/// A body that is not multipart carries no form fields at all and is
/// answered like an empty form.
async fn process_notes(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Analysis>, ApiError> {
    let multipart = multipart.map_err(|e| {
        debug!("Request is not a multipart form: {}", e.body_text());
        Error::NoContent
    })?;
    let form = read_form(multipart).await?;

    let analysis = tokio::task::spawn_blocking(move || analyze_form(&state, form))
        .await
        .map_err(|e| Error::Internal(format!("analysis task failed: {}", e)))??;

    Ok(Json(analysis))
}

async fn read_form(mut multipart: Multipart) -> Result<ProcessForm, Error> {
    let mut form = ProcessForm::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "text" => {
                form.text = field.text().await.map_err(multipart_error)?;
            }
            "seed" => {
                let raw = field.text().await.map_err(multipart_error)?;
                let raw = raw.trim();
                if !raw.is_empty() {
                    let seed = raw.parse().map_err(|_| {
                        Error::Multipart(format!("seed must be an unsigned integer, got {:?}", raw))
                    })?;
                    form.seed = Some(seed);
                }
            }
            "files" | "file" => {
                let filename = field.file_name().unwrap_or("").to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await.map_err(multipart_error)?;
                debug!("Received upload {:?} ({} bytes)", filename, bytes.len());
                let upload = Upload {
                    filename,
                    content_type,
                    bytes,
                };
                if name == "files" {
                    form.files.push(upload);
                } else {
                    form.file.push(upload);
                }
            }
            other => debug!("Ignoring form field {:?}", other),
        }
    }

    Ok(form)
}

fn analyze_form(state: &AppState, form: ProcessForm) -> Result<Analysis, Error> {
    let mut rng = match form.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut submission = Submission::new();
    submission.push_text(&form.text);
    for upload in &form.into_uploads() {
        submission.push_file(&upload.filename, upload.content_type.as_deref(), &upload.bytes)?;
    }

    analyze_submission(&state.pipeline, submission, &mut rng)
}

fn multipart_error(err: MultipartError) -> Error {
    Error::Multipart(err.body_text())
}
