mod real;

#[cfg(test)]
mod mock;

pub use real::RealFileSystem;

#[cfg(test)]
pub use mock::MockFileSystem;

use anyhow::Result;
use async_trait::async_trait;
use std::io;
use std::path::Path;

use crate::models::FsEntry;

#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Lists the direct children of `dir` in no particular order.
    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>>;

    /// Whether `path` resolves to a directory once symlinks are followed.
    /// Unresolvable paths are not directories.
    async fn is_dir_target(&self, path: &Path) -> bool;
}

/// True when any error in the chain is an `io::Error` of kind `PermissionDenied`.
pub fn is_permission_denied(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|io_err| io_err.kind() == io::ErrorKind::PermissionDenied)
    })
}
