//! Site directory traversal.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Finds every HTML file beneath the site directory, excluding paths that
/// contain any of the skip fragments.
///
/// Matching is substring-based against the full path string, so a fragment
/// like `assets/` excludes a whole directory while `404.html` excludes a
/// single file wherever it lives.
pub fn find_html_files(site_dir: &Path, skip_fragments: &[String]) -> Vec<PathBuf> {
    WalkDir::new(site_dir)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::debug!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "html"))
        .map(|entry| entry.into_path())
        .filter(|path| {
            let path_str = path.to_string_lossy();
            !skip_fragments.iter().any(|fragment| path_str.contains(fragment.as_str()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "<html></html>").unwrap();
    }

    #[test]
    fn test_find_html_files() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();

        touch(&root.join("index.html"));
        touch(&root.join("guides/foo.html"));
        touch(&root.join("guides/notes.txt"));
        touch(&root.join("assets/theme.html"));
        touch(&root.join("errors/404.html"));

        let skip = vec!["404.html".to_string(), "assets/".to_string()];
        let mut found = find_html_files(root, &skip);
        found.sort();

        assert_eq!(found, vec![root.join("guides/foo.html"), root.join("index.html")]);
    }

    #[test]
    fn test_find_html_files_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_html_files(dir.path(), &[]).is_empty());
    }
}
