use std::env;
use std::path::PathBuf;

/// Runtime configuration for the upload demo
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory that holds uploaded files (default: "public/uploads")
    pub upload_dir: PathBuf,

    /// Public path prefix files are served under (default: "/uploads")
    pub public_prefix: String,

    /// Address the server binds to (default: "127.0.0.1:3000")
    pub bind_addr: String,

    /// Client-side upload size hint in bytes (default: 10 MB).
    /// Advisory only, never enforced by the server.
    pub max_client_file_size: u64,

    /// Client-side accept list for the file picker (default: "image/*,.pdf")
    pub accept_types: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from("public/uploads"),
            public_prefix: "/uploads".to_string(),
            bind_addr: "127.0.0.1:3000".to_string(),
            max_client_file_size: 10_000_000,
            accept_types: "image/*,.pdf".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let default = Self::default();

        Self {
            upload_dir: env::var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or(default.upload_dir),

            public_prefix: env::var("PUBLIC_PREFIX").unwrap_or(default.public_prefix),

            bind_addr: env::var("BIND_ADDR").unwrap_or(default.bind_addr),

            max_client_file_size: env::var("MAX_CLIENT_FILE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.max_client_file_size),

            accept_types: env::var("ACCEPT_TYPES").unwrap_or(default.accept_types),
        }
    }

    /// Build the public path for a stored file name
    pub fn public_path(&self, name: &str) -> String {
        format!("{}/{}", self.public_prefix.trim_end_matches('/'), name)
    }
}
