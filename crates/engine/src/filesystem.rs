use crate::config::Config;
use crate::header::matches_extension;
use ignore::{DirEntry, WalkBuilder};
use std::path::PathBuf;

/// Sequential recursive walk yielding every target file under `config.root`.
///
/// Hidden files are visited and ignore files are not honoured. Directory
/// symlinks are not descended into; any other symlink counts as a file.
/// Entries that cannot be listed are logged and skipped.
pub fn target_files(config: &Config) -> impl Iterator<Item = PathBuf> + '_ {
    let mut builder = WalkBuilder::new(&config.root);
    builder.standard_filters(false).follow_links(false);

    builder.build().filter_map(move |entry| match entry {
        Ok(entry) if is_target(&entry, &config.extension) => Some(entry.into_path()),
        Ok(_) => None,
        Err(e) => {
            log::warn!("Skipping unreadable entry: {e}");
            None
        }
    })
}

fn is_target(entry: &DirEntry, extension: &str) -> bool {
    let Some(ft) = entry.file_type() else {
        return false;
    };
    if ft.is_dir() {
        return false;
    }
    // Symlinked directories are listed but never entered.
    if ft.is_symlink() && entry.path().is_dir() {
        return false;
    }
    matches_extension(entry.file_name(), extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigBuilder;
    use std::fs;
    use tempfile::tempdir;

    fn collect(config: &Config) -> Vec<PathBuf> {
        let mut files: Vec<_> = target_files(config).collect();
        files.sort();
        files
    }

    #[test]
    fn finds_nested_and_hidden_targets() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("Sources/App")).unwrap();
        fs::create_dir_all(root.join(".build")).unwrap();
        fs::write(root.join("Top.swift"), "").unwrap();
        fs::write(root.join("Sources/App/Deep.swift"), "").unwrap();
        fs::write(root.join(".build/Hidden.swift"), "").unwrap();
        fs::write(root.join("README.md"), "").unwrap();

        let config = ConfigBuilder::default().root(root).build().unwrap();
        assert_eq!(
            collect(&config),
            vec![
                root.join(".build/Hidden.swift"),
                root.join("Sources/App/Deep.swift"),
                root.join("Top.swift"),
            ]
        );
    }

    #[test]
    fn gitignore_rules_are_not_applied() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join(".gitignore"), "*.swift\n").unwrap();
        fs::write(root.join("Kept.swift"), "").unwrap();

        let config = ConfigBuilder::default().root(root).build().unwrap();
        assert_eq!(collect(&config), vec![root.join("Kept.swift")]);
    }

    #[test]
    fn directory_named_like_target_is_not_a_file() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("Module.swift")).unwrap();
        fs::write(root.join("Module.swift/Inner.swift"), "").unwrap();

        let config = ConfigBuilder::default().root(root).build().unwrap();
        assert_eq!(collect(&config), vec![root.join("Module.swift/Inner.swift")]);
    }

    #[test]
    fn empty_tree_yields_nothing() {
        let dir = tempdir().unwrap();
        let config = ConfigBuilder::default().root(dir.path()).build().unwrap();
        assert!(collect(&config).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_directories_are_not_followed() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let outside = tempdir().unwrap();
        fs::write(outside.path().join("Outside.swift"), "").unwrap();
        std::os::unix::fs::symlink(outside.path(), root.join("linked.swift")).unwrap();
        std::os::unix::fs::symlink(outside.path().join("Outside.swift"), root.join("Alias.swift"))
            .unwrap();

        let config = ConfigBuilder::default().root(root).build().unwrap();
        assert_eq!(collect(&config), vec![root.join("Alias.swift")]);
    }
}
