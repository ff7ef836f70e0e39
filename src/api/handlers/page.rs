use crate::api::error::AppError;
use crate::infrastructure::storage::PLACEHOLDER_MARKER;
use crate::models::StoredFile;
use axum::{extract::State, response::Html};

static PAGE_TEMPLATE: &str = include_str!("page.html");

/// Rebuild the listing from the storage directory. One stat per entry,
/// type guessed from the extension, order as enumerated.
pub async fn list_stored_files(state: &crate::AppState) -> Result<Vec<StoredFile>, AppError> {
    let mut files = Vec::new();

    for name in state.storage.list().await? {
        if name.ends_with(PLACEHOLDER_MARKER) {
            continue;
        }

        let size = state.storage.stat(&name).await?;
        let content_type = mime_guess::from_path(&name)
            .first_or_octet_stream()
            .to_string();

        files.push(StoredFile {
            public_path: state.config.public_path(&name),
            name,
            content_type,
            size,
        });
    }

    Ok(files)
}

/// GET / — the upload page with the current listing baked in.
pub async fn render_index(State(state): State<crate::AppState>) -> Result<Html<String>, AppError> {
    let files = list_stored_files(&state).await?;

    let mut items = String::new();
    for file in &files {
        items.push_str(&format!(
            "    <li><a href=\"{}\">{}</a> <span class=\"meta\">{} · {} bytes</span></li>\n",
            escape_html(&file.public_path),
            escape_html(&file.name),
            escape_html(&file.content_type),
            file.size,
        ));
    }

    let page = PAGE_TEMPLATE
        .replace("__ACCEPT__", &escape_html(&state.config.accept_types))
        .replace(
            "__MAX_SIZE__",
            &state.config.max_client_file_size.to_string(),
        )
        .replace("__HIDDEN__", if files.is_empty() { " hidden" } else { "" })
        .replace("__FILE_LIST__\n", &items);

    Ok(Html(page))
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
