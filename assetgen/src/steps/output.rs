use eyre::WrapErr;
use std::{io::Write, path::Path};

/// Replaces `path` with `contents` through a temporary file in the same
/// directory, creating the directory if needed.
pub(crate) fn write_atomic(path: &Path, contents: &[u8]) -> eyre::Result<()> {
    let dir = path.parent().ok_or_else(|| {
        eyre::eyre!(
            "could not determine parent directory for {}",
            path.display()
        )
    })?;
    std::fs::create_dir_all(dir)
        .wrap_err_with(|| format!("failed to create directory {}", dir.display()))?;
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.persist(path)
        .wrap_err_with(|| format!("failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}
