use anyhow::Result;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use std::sync::mpsc;

pub fn scan_sources(root: &Path, ext: &str) -> Result<Vec<PathBuf>> {
    let (tx, rx) = mpsc::channel();
    let ext = ext.to_string();

    let walker = WalkBuilder::new(root)
        .hidden(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .build_parallel();

    walker.run(|| {
        let tx = tx.clone();
        let ext = ext.clone();
        Box::new(move |entry| {
            if let Ok(entry) = entry {
                let path = entry.path();
                if entry.file_type().is_some_and(|t| t.is_file())
                    && path.extension().is_some_and(|e| e == ext.as_str())
                {
                    let _ = tx.send(path.to_path_buf());
                }
            }
            ignore::WalkState::Continue
        })
    });

    drop(tx);
    let mut files: Vec<PathBuf> = rx.iter().collect();
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_dir(prefix: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!(
            "{prefix}-{}-{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_millis()
        ));
        p
    }

    #[test]
    fn finds_sources_recursively_and_sorted() {
        let root = temp_dir("bean-patch-scan");
        fs::create_dir_all(root.join("deep/nested")).unwrap();
        fs::write(root.join("B.java"), "class B {}").unwrap();
        fs::write(root.join("deep/nested/A.java"), "class A {}").unwrap();
        fs::write(root.join("README.md"), "docs").unwrap();

        let files = scan_sources(&root, "java").unwrap();
        assert_eq!(
            files,
            vec![root.join("B.java"), root.join("deep/nested/A.java")]
        );

        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn honors_extension_filter() {
        let root = temp_dir("bean-patch-scan-ext");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("A.java"), "class A {}").unwrap();
        fs::write(root.join("B.kt"), "class B").unwrap();

        let files = scan_sources(&root, "kt").unwrap();
        assert_eq!(files, vec![root.join("B.kt")]);

        let _ = fs::remove_dir_all(&root);
    }
}
