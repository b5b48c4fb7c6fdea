use std::path::{Path, PathBuf};

use crate::config::{TreeConfig, relative_key};
use crate::fs::{FileSystem, is_permission_denied};

use super::TreeOptions;

/// Longest entry name, in characters, among entries whose root-relative path
/// has an annotation. Excluded names are neither counted nor descended, and
/// symlinks are never followed.
///
/// Returns 0 when no annotated path exists under `root`.
pub async fn max_annotated_name_len<F: FileSystem>(
    fs: &F,
    root: &Path,
    config: &TreeConfig,
    options: &TreeOptions,
) -> anyhow::Result<usize> {
    let mut max_len = 0;
    let mut pending: Vec<PathBuf> = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let entries = match fs.read_dir(&dir).await {
            Ok(entries) => entries,
            Err(err) if is_permission_denied(&err) => {
                tracing::debug!(dir = %dir.display(), "skipping unreadable directory in width scan");
                continue;
            }
            Err(err) => return Err(err),
        };

        for entry in entries {
            if options.is_excluded(config, &entry.name) {
                continue;
            }

            if let Some(key) = relative_key(root, &entry.path)
                && config.annotations.contains_key(&key)
            {
                max_len = max_len.max(entry.name.chars().count());
            }

            if entry.is_dir() {
                pending.push(entry.path);
            }
        }
    }

    Ok(max_len)
}
