use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A file that lives in the storage directory. Rebuilt from disk on
/// every listing; the directory itself is the source of truth.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoredFile {
    /// Public path the file is served under (prefix + name)
    pub public_path: String,
    /// Original client-supplied filename, used verbatim on disk
    pub name: String,
    /// MIME type. Guessed from the extension at listing time; on upload
    /// responses this is whatever content type the uploader declared.
    #[serde(rename = "type")]
    pub content_type: String,
    /// Byte size
    pub size: u64,
}
