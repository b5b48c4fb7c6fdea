//! Annotation table and excluded directory names.

use std::collections::{BTreeSet, HashMap};
use std::path::{Component, Path};

const BUILTIN_ANNOTATIONS: &[(&str, &str)] = &[
    (".github/workflows/update-json.yml", "GitHub Actions 工作流"),
    ("build.gradle.kts", "Gradle 构建脚本"),
    ("gradle/wrapper", "Gradle Wrapper 配置（会自动生成）"),
    ("gradlew", "Gradle 可执行脚本 (Linux/Mac)"),
    ("gradlew.bat", "Gradle 可执行脚本 (Windows)"),
    ("settings.gradle.kts", "Gradle 设置"),
    ("src/main/kotlin/UpdateJson.kt", "你的 Kotlin 主程序"),
    ("data.json", "存储数据的 JSON 文件"),
];

const BUILTIN_TEMP_DIRS: &[&str] = &["build", ".gradle", ".idea"];

/// Tables shared by the width scan and the print pass.
#[derive(Debug, Clone, Default)]
pub struct TreeConfig {
    /// Root-relative, slash-separated path to comment.
    pub annotations: HashMap<String, String>,
    /// Bare names dropped when temp directories are ignored.
    pub excluded_names: BTreeSet<String>,
}

impl TreeConfig {
    pub fn builtin() -> Self {
        Self {
            annotations: BUILTIN_ANNOTATIONS
                .iter()
                .map(|(path, comment)| ((*path).to_owned(), (*comment).to_owned()))
                .collect(),
            excluded_names: BUILTIN_TEMP_DIRS.iter().map(|&n| n.to_owned()).collect(),
        }
    }

    pub fn annotation_for(&self, relative_path: &str) -> Option<&str> {
        self.annotations.get(relative_path).map(String::as_str)
    }
}

/// Path of `path` relative to `root`, joined with `/` whatever the platform.
///
/// Returns `None` when `path` does not live under `root`.
pub fn relative_key(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    Some(parts.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn builtin_tables() {
        let config = TreeConfig::builtin();
        assert_eq!(config.annotations.len(), 8);
        assert_eq!(
            config.annotation_for("data.json"),
            Some("存储数据的 JSON 文件")
        );
        assert_eq!(config.annotation_for("gradle"), None);

        let names: Vec<&str> = config.excluded_names.iter().map(String::as_str).collect();
        assert_eq!(names, vec![".gradle", ".idea", "build"]);
    }

    #[test]
    fn relative_key_uses_forward_slashes() {
        let root = PathBuf::from("/work");
        let path = root.join("src").join("main").join("kotlin");
        assert_eq!(
            relative_key(&root, &path).as_deref(),
            Some("src/main/kotlin")
        );
    }

    #[test]
    fn relative_key_from_current_dir() {
        let root = PathBuf::from(".");
        let path = root.join("gradle").join("wrapper");
        assert_eq!(relative_key(&root, &path).as_deref(), Some("gradle/wrapper"));
    }

    #[test]
    fn relative_key_outside_root() {
        assert_eq!(relative_key(Path::new("/work"), Path::new("/other/x")), None);
    }
}
