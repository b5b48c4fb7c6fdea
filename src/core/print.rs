use std::io::Write;
use std::path::Path;

use crate::config::{TreeConfig, relative_key};
use crate::fs::{FileSystem, is_permission_denied};
use crate::models::{EntryKind, FsEntry};

use super::TreeOptions;

const BRANCH: &str = "├── ";
const CORNER: &str = "└── ";
const PIPE: &str = "│   ";
const BLANK: &str = "    ";

/// Writes one line per visible entry below `root`, depth first.
pub struct TreePrinter<'a, F> {
    fs: &'a F,
    root: &'a Path,
    config: &'a TreeConfig,
    options: &'a TreeOptions,
    max_name_len: usize,
}

impl<'a, F: FileSystem> TreePrinter<'a, F> {
    pub fn new(
        fs: &'a F,
        root: &'a Path,
        config: &'a TreeConfig,
        options: &'a TreeOptions,
        max_name_len: usize,
    ) -> Self {
        Self {
            fs,
            root,
            config,
            options,
            max_name_len,
        }
    }

    /// The root itself gets no line; output starts with its children.
    pub async fn print<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        self.print_dir(out, self.root, "", 0).await
    }

    async fn print_dir<W: Write>(
        &self,
        out: &mut W,
        dir: &Path,
        prefix: &str,
        depth: usize,
    ) -> anyhow::Result<()> {
        if self.options.exceeds_max_depth(depth) {
            return Ok(());
        }

        let mut entries = match self.fs.read_dir(dir).await {
            Ok(entries) => entries,
            Err(err) if is_permission_denied(&err) => {
                tracing::debug!(dir = %dir.display(), "skipping unreadable directory");
                return Ok(());
            }
            Err(err) => return Err(err),
        };

        // Filter before picking the last entry so the corner lands on a visible one.
        entries.retain(|entry| !self.options.is_excluded(self.config, &entry.name));
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        let count = entries.len();
        for (index, entry) in entries.iter().enumerate() {
            let is_last = index + 1 == count;
            let connector = if is_last { CORNER } else { BRANCH };

            write!(out, "{prefix}{connector}{}", entry.name)?;
            if let Some(comment) = self.annotation(entry) {
                let padding = (self.max_name_len + 2).saturating_sub(entry.name.chars().count());
                write!(out, "{:padding$}# {comment}", "")?;
            }
            writeln!(out)?;

            if self.descends_into(entry).await {
                let child_prefix = format!("{prefix}{}", if is_last { BLANK } else { PIPE });
                Box::pin(self.print_dir(out, &entry.path, &child_prefix, depth + 1)).await?;
            }
        }

        Ok(())
    }

    /// Directories are descended, and so are symlinks that resolve to one.
    async fn descends_into(&self, entry: &FsEntry) -> bool {
        match entry.kind {
            EntryKind::Directory => true,
            EntryKind::Symlink => self.fs.is_dir_target(&entry.path).await,
            EntryKind::File | EntryKind::Other => false,
        }
    }

    fn annotation(&self, entry: &FsEntry) -> Option<&'a str> {
        if !self.options.show_annotations {
            return None;
        }
        let key = relative_key(self.root, &entry.path)?;
        self.config.annotation_for(&key)
    }
}
