use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Returns `true` when the file name of `path` ends in `.{extension}`, ignoring ASCII case.
///
/// A leading `.` on `extension` is ignored, so `"fa"` and `".fa"` behave the same. The
/// suffix is matched on the whole name, so a file called just `.fa` counts.
pub fn has_extension(path: &Path, extension: &str) -> bool {
    let suffix = format!(".{}", extension.trim_start_matches('.')).to_ascii_lowercase();
    path.file_name()
        .map(|name| name.to_string_lossy().to_ascii_lowercase().ends_with(&suffix))
        .unwrap_or(false)
}

/// Recursively collects every file under `root` whose extension matches, sorted by path.
///
/// Symbolic links to directories are not followed.
pub fn find_files(root: &Path, extension: &str) -> io::Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    collect(root, extension, &mut found)?;
    found.sort();
    Ok(found)
}

fn collect(dir: &Path, extension: &str, found: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            collect(&path, extension, found)?;
        } else if path.is_file() && has_extension(&path, extension) {
            found.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn has_extension_ignores_case_and_leading_dot() {
        assert!(has_extension(Path::new("a/b.FA"), "fa"));
        assert!(has_extension(Path::new("a/b.fa"), ".fa"));
        assert!(!has_extension(Path::new("a/b.fasta"), "fa"));
        assert!(!has_extension(Path::new("a/fa"), "fa"));
    }

    #[test]
    fn has_extension_matches_dot_files_named_after_the_extension() {
        assert!(has_extension(Path::new("seqs/.fa"), "fa"));
        assert!(has_extension(Path::new(".FA"), ".fa"));
        assert!(has_extension(Path::new("seqs/design.v2.fa"), "fa"));
        assert!(!has_extension(Path::new("seqs/.fasta"), "fa"));
    }

    #[test]
    fn find_files_walks_nested_directories_in_sorted_order() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("b/seqs")).unwrap();
        fs::create_dir_all(root.join("a/seqs")).unwrap();
        fs::write(root.join("b/seqs/x.fa"), ">r\nAAA\n").unwrap();
        fs::write(root.join("a/seqs/y.FA"), ">r\nAAA\n").unwrap();
        fs::write(root.join("a/seqs/notes.txt"), "ignored").unwrap();
        fs::write(root.join("top.fa"), ">r\nAAA\n").unwrap();
        fs::write(root.join("b/.fa"), ">r\nAAA\n").unwrap();

        let files = find_files(root, "fa").unwrap();
        assert_eq!(
            files,
            vec![
                root.join("a/seqs/y.FA"),
                root.join("b/.fa"),
                root.join("b/seqs/x.fa"),
                root.join("top.fa"),
            ]
        );
    }

    #[test]
    fn find_files_returns_empty_for_tree_without_matches() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("readme.md"), "").unwrap();
        assert!(find_files(dir.path(), "fa").unwrap().is_empty());
    }

    #[test]
    fn find_files_fails_for_missing_root() {
        let dir = tempdir().unwrap();
        let result = find_files(&dir.path().join("missing"), "fa");
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }
}
