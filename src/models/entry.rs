use std::path::PathBuf;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntryKind {
    Directory,
    File,
    Symlink,
    Other,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FsEntry {
    pub path: PathBuf,
    pub name: String,
    pub kind: EntryKind,
}

impl FsEntry {
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            kind,
        }
    }

    /// True only for real directories; a symlink to one reports `Symlink`.
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}
