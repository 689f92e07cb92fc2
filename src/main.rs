use anyhow::Result;
use bean_patch::cli::{Cli, OutputFormat};
use bean_patch::patch::patch_file;
use bean_patch::report::{FileReport, RunReport, status_line};
use bean_patch::scan::scan_sources;
use clap::Parser;
use std::path::PathBuf;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let stream = matches!(cli.format, OutputFormat::Text);
    let report = run(&cli.roots, &cli.ext, &cli.marker, stream)?;

    match cli.format {
        OutputFormat::Text => {
            println!();
            println!(
                "Done! Updated {} out of {} files.",
                report.updated, report.examined
            );
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

fn run(roots: &[PathBuf], ext: &str, marker: &str, stream: bool) -> Result<RunReport> {
    let mut files = Vec::new();
    let mut updated = 0usize;

    for root in roots {
        if !root.is_dir() {
            if stream {
                println!("Directory not found: {}", root.display());
            } else {
                eprintln!("Directory not found: {}", root.display());
            }
            continue;
        }

        for path in scan_sources(root, ext)? {
            let outcome = patch_file(&path, marker);
            if stream {
                println!("{}", status_line(&path, &outcome));
            }
            if outcome.is_updated() {
                updated += 1;
            }
            files.push(FileReport::new(&path, &outcome));
        }
    }

    Ok(RunReport {
        roots: roots.iter().map(|r| r.display().to_string()).collect(),
        examined: files.len(),
        updated,
        files,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bean_patch::patch::DEFAULT_MARKER;
    use std::fs;

    fn temp_dir(prefix: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!(
            "{prefix}-{}-{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        p
    }

    #[test]
    fn missing_root_is_skipped_without_candidates() {
        let missing = temp_dir("bean-patch-missing-root");
        let report = run(&[missing], "java", DEFAULT_MARKER, false).unwrap();

        assert_eq!(report.examined, 0);
        assert_eq!(report.updated, 0);
        assert!(report.files.is_empty());
    }

    #[test]
    fn run_counts_updated_and_skipped_files() {
        let root = temp_dir("bean-patch-run");
        fs::create_dir_all(&root).unwrap();
        fs::write(
            root.join("Event.java"),
            "public class Event {\n    public String name() {\n        return name;\n    }\n}\n",
        )
        .unwrap();
        fs::write(root.join("Plain.java"), "public class Plain {\n}\n").unwrap();

        let report = run(std::slice::from_ref(&root), "java", DEFAULT_MARKER, false).unwrap();
        assert_eq!(report.examined, 2);
        assert_eq!(report.updated, 1);

        let statuses: Vec<&str> = report.files.iter().map(|f| f.status.as_str()).collect();
        assert_eq!(statuses, vec!["updated", "no-accessors"]);

        let _ = fs::remove_dir_all(&root);
    }
}
