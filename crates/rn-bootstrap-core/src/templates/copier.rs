//! Recursive template copying

use crate::templates::{FileGroup, TemplateStore};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Copy every selected group from the store into `dest`.
///
/// Directories are walked depth-first, recreating their structure at the
/// destination. Missing source paths are skipped so the store can omit
/// optional trees; existing destination files are overwritten. Returns the
/// destination paths of the files written.
pub fn copy_groups(
    store: &TemplateStore,
    dest: &Path,
    groups: &[FileGroup],
) -> Result<Vec<PathBuf>> {
    let mut copied = Vec::new();
    for group in groups {
        for relative in group.paths {
            let source = store.path_of(relative);
            if !source.exists() {
                continue;
            }
            copy_path(&source, &dest.join(relative), &mut copied)?;
        }
    }
    Ok(copied)
}

fn copy_path(source: &Path, dest: &Path, copied: &mut Vec<PathBuf>) -> Result<()> {
    if source.is_dir() {
        for entry in WalkDir::new(source) {
            let entry =
                entry.with_context(|| format!("failed to walk {}", source.display()))?;
            let relative = entry.path().strip_prefix(source)?;
            let target = dest.join(relative);
            if entry.file_type().is_dir() {
                fs::create_dir_all(&target)
                    .with_context(|| format!("failed to create directory: {}", target.display()))?;
            } else {
                copy_file(entry.path(), &target)?;
                copied.push(target);
            }
        }
    } else {
        copy_file(source, dest)?;
        copied.push(dest.to_path_buf());
    }
    Ok(())
}

fn copy_file(source: &Path, dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }
    fs::copy(source, dest)
        .with_context(|| format!("failed to write file: {}", dest.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str, contents: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    fn read(root: &Path, relative: &str) -> String {
        fs::read_to_string(root.join(relative)).unwrap()
    }

    fn store_with_payload() -> (TempDir, TemplateStore) {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "App.tsx", "export default App;");
        write(dir.path(), "src/components/Modal.tsx", "modal");
        write(dir.path(), "src/navigation/AppNavigator.tsx", "navigator");
        write(dir.path(), ".detoxrc.js", "module.exports = {};");
        let store = TemplateStore::new(dir.path());
        (dir, store)
    }

    const GROUP: FileGroup = FileGroup {
        name: "test",
        paths: &["src", "App.tsx", ".detoxrc.js"],
    };

    #[test]
    fn copies_files_and_directories_recursively() {
        let (_src, store) = store_with_payload();
        let dest = TempDir::new().unwrap();

        let copied = copy_groups(&store, dest.path(), &[GROUP]).unwrap();

        assert_eq!(copied.len(), 4);
        assert_eq!(read(dest.path(), "App.tsx"), "export default App;");
        assert_eq!(read(dest.path(), "src/components/Modal.tsx"), "modal");
        assert_eq!(
            read(dest.path(), "src/navigation/AppNavigator.tsx"),
            "navigator"
        );
        assert_eq!(read(dest.path(), ".detoxrc.js"), "module.exports = {};");
    }

    #[test]
    fn missing_source_paths_are_skipped_silently() {
        let (_src, store) = store_with_payload();
        let dest = TempDir::new().unwrap();

        const WITH_MISSING: FileGroup = FileGroup {
            name: "test",
            paths: &["does-not-exist", "App.tsx", "nor-this/"],
        };

        let copied = copy_groups(&store, dest.path(), &[WITH_MISSING]).unwrap();
        assert_eq!(copied.len(), 1);
        assert!(dest.path().join("App.tsx").exists());
        assert!(!dest.path().join("does-not-exist").exists());
    }

    #[test]
    fn existing_destination_files_are_overwritten() {
        let (_src, store) = store_with_payload();
        let dest = TempDir::new().unwrap();
        write(dest.path(), "App.tsx", "stale contents");

        copy_groups(&store, dest.path(), &[GROUP]).unwrap();
        assert_eq!(read(dest.path(), "App.tsx"), "export default App;");
    }

    #[test]
    fn copy_is_content_idempotent() {
        let (_src, store) = store_with_payload();
        let dest = TempDir::new().unwrap();

        let mut first = copy_groups(&store, dest.path(), &[GROUP]).unwrap();
        let mut second = copy_groups(&store, dest.path(), &[GROUP]).unwrap();
        first.sort();
        second.sort();

        assert_eq!(first, second);
        assert_eq!(read(dest.path(), "src/components/Modal.tsx"), "modal");
    }

    #[test]
    fn intermediate_destination_directories_are_created() {
        let (_src, store) = store_with_payload();
        let dest = TempDir::new().unwrap();
        let nested = dest.path().join("deeply/nested/project");

        copy_groups(&store, &nested, &[GROUP]).unwrap();
        assert!(nested.join("src/components/Modal.tsx").exists());
    }
}
