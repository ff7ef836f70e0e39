use crate::api::error::AppError;
use crate::models::StoredFile;
use axum::{
    Json,
    extract::{Multipart, State},
    http::StatusCode,
};
use tracing::info;

/// Accepts a multipart form and writes every file part to the storage
/// directory under its original client-supplied name. No collision
/// handling: a repeat name silently overwrites the previous upload.
/// Field names are not inspected; any part carrying a filename counts.
#[utoipa::path(
    post,
    path = "/api/upload",
    request_body(content = Vec<u8>, content_type = "multipart/form-data", description = "Multipart form with zero or more file parts"),
    responses(
        (status = 201, description = "Files stored", body = Vec<StoredFile>),
        (status = 400, description = "Method not allowed on this endpoint"),
        (status = 500, description = "Parse or persistence failure")
    ),
    tag = "files"
)]
pub async fn upload_files(
    State(state): State<crate::AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<Vec<StoredFile>>), AppError> {
    let mut uploaded = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.file_name().map(|s| s.to_string()) else {
            // Non-file form field, nothing to persist
            continue;
        };

        let declared_type = field
            .content_type()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string());

        let bytes = field.bytes().await?;
        let size = state.storage.put(&name, bytes.to_vec()).await?;

        info!("📥 Stored {} ({} bytes)", name, size);

        uploaded.push(StoredFile {
            public_path: state.config.public_path(&name),
            name,
            content_type: declared_type,
            size,
        });
    }

    Ok((StatusCode::CREATED, Json(uploaded)))
}

/// Any non-POST request to the upload endpoint is rejected outright
/// with an empty body, before any filesystem work happens.
pub async fn reject_method() -> StatusCode {
    StatusCode::BAD_REQUEST
}
