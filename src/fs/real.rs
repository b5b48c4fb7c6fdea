use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::Path;

use crate::models::{EntryKind, FsEntry};

use super::FileSystem;

pub struct RealFileSystem;

#[async_trait]
impl FileSystem for RealFileSystem {
    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>> {
        let mut read_dir = tokio::fs::read_dir(dir)
            .await
            .with_context(|| dir.display().to_string())?;

        let mut entries = Vec::new();
        while let Some(entry) = read_dir
            .next_entry()
            .await
            .with_context(|| dir.display().to_string())?
        {
            // DirEntry::file_type does not follow symlinks.
            let kind = match entry.file_type().await {
                Ok(file_type) if file_type.is_symlink() => EntryKind::Symlink,
                Ok(file_type) if file_type.is_dir() => EntryKind::Directory,
                Ok(file_type) if file_type.is_file() => EntryKind::File,
                _ => EntryKind::Other,
            };

            entries.push(FsEntry {
                path: entry.path(),
                name: entry.file_name().to_string_lossy().into_owned(),
                kind,
            });
        }
        Ok(entries)
    }

    async fn is_dir_target(&self, path: &Path) -> bool {
        tokio::fs::metadata(path)
            .await
            .is_ok_and(|metadata| metadata.is_dir())
    }
}
