use std::path::{Path, PathBuf};

use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;

/// Writes the rendered page to `target`, or to a fresh
/// `resume-{uuid}.html` under `export_dir`. Returns the written path.
pub fn export_html(
    html: &str,
    target: Option<&Path>,
    export_dir: &Path,
) -> Result<PathBuf, AppError> {
    let path = match target {
        Some(path) => path.to_path_buf(),
        None => {
            std::fs::create_dir_all(export_dir)?;
            export_dir.join(format!("resume-{}.html", Uuid::new_v4()))
        }
    };
    std::fs::write(&path, html)?;
    info!("Resume exported to {}", path.display());
    Ok(path)
}
