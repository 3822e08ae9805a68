//! Builds a [`Tree`] mirroring a directory hierarchy.

use std::fs;
use std::path::Path;

use anyhow::Context;
use log::{debug, trace};
use sprig_collections::Tree;

/// Which entries to skip while walking, and how to label directories.
#[derive(Debug, Clone, Default)]
pub struct DirTreeOptions {
    /// Directory names that are skipped along with their contents.
    pub ignore_directories: Vec<String>,
    /// File extensions (without the dot) whose files are skipped.
    pub ignore_extensions: Vec<String>,
    /// Entry names matching any of these patterns are skipped.
    pub ignore_patterns: Vec<glob::Pattern>,
    /// Appends `/` to every directory label.
    pub mark_directories: bool,
}

impl DirTreeOptions {
    fn ignores_name(&self, name: &str) -> bool {
        self.ignore_patterns.iter().any(|pattern| pattern.matches(name))
    }

    fn ignores_directory(&self, name: &str) -> bool {
        self.ignore_directories.iter().any(|ignored| ignored == name) || self.ignores_name(name)
    }

    fn ignores_file(&self, path: &Path, name: &str) -> bool {
        let by_extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map_or(false, |ext| self.ignore_extensions.iter().any(|ignored| ignored == ext));
        by_extension || self.ignores_name(name)
    }

    fn directory_label(&self, name: String) -> String {
        if self.mark_directories {
            format!("{}/", name)
        } else {
            name
        }
    }
}

/// Walks `path` and returns one node per directory and file that survives
/// `options`. Entries are ordered by name within each directory.
///
/// The root is labelled with the final component of `path`, or with `path`
/// as given when it has none (such as `.` or `/`).
pub fn make_tree(path: impl AsRef<Path>, options: &DirTreeOptions) -> anyhow::Result<Tree<String>> {
    let path = path.as_ref();
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    walk(path, options.directory_label(name), options)
}

fn walk(dir: &Path, label: String, options: &DirTreeOptions) -> anyhow::Result<Tree<String>> {
    let mut entries = fs::read_dir(dir)
        .with_context(|| format!("unable to read directory {}", dir.display()))?
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("unable to list directory {}", dir.display()))?;
    entries.sort_by_key(|entry| entry.file_name());

    let mut children = Vec::with_capacity(entries.len());
    for entry in entries {
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        let file_type = entry
            .file_type()
            .with_context(|| format!("unable to stat {}", path.display()))?;

        if file_type.is_dir() {
            if options.ignores_directory(&name) {
                debug!("skipping directory {}", path.display());
                continue;
            }
            children.push(walk(&path, options.directory_label(name), options)?);
        } else {
            if options.ignores_file(&path, &name) {
                debug!("skipping file {}", path.display());
                continue;
            }
            trace!("adding file {}", path.display());
            children.push(Tree::leaf(name));
        }
    }
    Ok(Tree::new(label, children))
}

/// Renders the tree built by [`make_tree`].
pub fn directory_tree(path: impl AsRef<Path>, options: &DirTreeOptions) -> anyhow::Result<String> {
    Ok(make_tree(path, options)?.render())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use pretty_assertions::assert_eq;

    use crate::{directory_tree, make_tree, DirTreeOptions};

    fn populate(root: &Path) -> anyhow::Result<()> {
        fs::create_dir_all(root.join("adt/__pycache__"))?;
        fs::create_dir_all(root.join("sorting/results"))?;
        fs::write(root.join("adt/queue.py"), "")?;
        fs::write(root.join("adt/tree.py"), "")?;
        fs::write(root.join("adt/__pycache__/queue.pyc"), "")?;
        fs::write(root.join("sorting/sorting.py"), "")?;
        fs::write(root.join("sorting/results/merge.png"), "")?;
        fs::write(root.join("config.json"), "")?;
        fs::write(root.join("util.py"), "")?;
        fs::write(root.join("README"), "")?;
        Ok(())
    }

    #[test]
    fn test_full_tree() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        populate(dir.path())?;
        let tree = make_tree(dir.path(), &DirTreeOptions::default())?;
        assert_eq!(tree.len(), 13);
        assert_eq!(tree.height(), 4);
        assert_eq!(tree.search(&"merge.png".to_string()), Some(vec![3, 0, 0]));
        Ok(())
    }

    #[test]
    fn test_ignores() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        populate(dir.path())?;
        let options = DirTreeOptions {
            ignore_directories: vec!["__pycache__".to_string()],
            ignore_extensions: vec!["json".to_string()],
            ignore_patterns: vec![glob::Pattern::new("*.png")?],
            mark_directories: true,
        };
        let rendered = directory_tree(dir.path().join("adt"), &options)?;
        assert_eq!(rendered, "adt/\n├── queue.py\n└── tree.py");

        let tree = make_tree(dir.path(), &options)?;
        let labels: Vec<&str> = tree.children().iter().map(|c| c.root_datum().as_str()).collect();
        assert_eq!(labels, vec!["README", "adt/", "sorting/", "util.py"]);
        let sorting = tree.resolve(&[2])?;
        assert_eq!(sorting.render(), "sorting/\n├── results/\n└── sorting.py");
        Ok(())
    }

    #[test]
    fn test_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = make_tree(dir.path().join("absent"), &DirTreeOptions::default()).unwrap_err();
        assert!(err.to_string().starts_with("unable to read directory"));
    }
}
