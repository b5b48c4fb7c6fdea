mod print;
mod scan;

pub use print::TreePrinter;
pub use scan::max_annotated_name_len;

use std::path::Path;

use crate::config::TreeConfig;
use crate::fs::FileSystem;

/// Traversal options shared by the width scan and the print pass.
#[derive(Debug, Clone)]
pub struct TreeOptions {
    /// Deepest level whose contents are listed; the root is level 0.
    /// A negative limit lists nothing.
    pub max_depth: Option<i64>,
    /// Drop entries named in `TreeConfig::excluded_names`.
    pub ignore_temp: bool,
    pub show_annotations: bool,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            max_depth: None,
            ignore_temp: false,
            show_annotations: true,
        }
    }
}

impl TreeOptions {
    /// The single name filter both passes apply.
    pub fn is_excluded(&self, config: &TreeConfig, name: &str) -> bool {
        self.ignore_temp && config.excluded_names.contains(name)
    }

    pub fn exceeds_max_depth(&self, depth: usize) -> bool {
        self.max_depth
            .is_some_and(|max_depth| i64::try_from(depth).map_or(true, |depth| depth > max_depth))
    }
}

/// Width of the annotation column, or 0 when annotations are off.
pub async fn annotation_width<F: FileSystem>(
    fs: &F,
    root: &Path,
    config: &TreeConfig,
    options: &TreeOptions,
) -> anyhow::Result<usize> {
    if !options.show_annotations {
        return Ok(0);
    }

    let max_name_len = max_annotated_name_len(fs, root, config, options).await?;
    tracing::debug!(max_name_len, "resolved annotation column");
    Ok(max_name_len)
}
