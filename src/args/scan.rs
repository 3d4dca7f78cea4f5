//! Directory scan mode.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use contrastscan::config::Settings;
use contrastscan::scan::{ComplianceReport, ScanOptions, build_report};
use contrastscan::style::extract_color_pairs_from_str;
use serde::Serialize;
use walkdir::WalkDir;

/// Top-level result alias for the driver layer.
type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Compliance report for one scanned file.
#[derive(Debug, Serialize)]
pub struct FileReport {
    /// File the report was built from.
    pub path: PathBuf,
    /// Per-selector verdicts.
    #[serde(flatten)]
    pub report: ComplianceReport,
}

/// What: Collect files under `root` whose extension matches the settings.
///
/// Inputs:
/// - `root`: Directory to walk, or a single file.
/// - `settings`: Supplies the extension list.
///
/// Output:
/// - Matching paths, sorted for stable output.
///
/// # Errors
/// - `root` does not exist or cannot be read.
///
/// Details:
/// - A file given directly is returned even if its extension does not match.
/// - Symlinks below `root` are not followed, so link cycles cannot repeat files.
/// - Unreadable entries below `root` are logged and skipped.
pub fn collect_files(root: &Path, settings: &Settings) -> Result<Vec<PathBuf>> {
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }
    let mut out = Vec::new();
    for entry in WalkDir::new(root).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(e.into()),
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable entry");
                continue;
            }
        };
        if entry.file_type().is_file() && settings.matches_extension(entry.path()) {
            out.push(entry.into_path());
        }
    }
    out.sort();
    Ok(out)
}

/// What: Read, extract and evaluate one file.
///
/// # Errors
/// - I/O errors reading the file.
/// - `InvalidColorFormat` from any captured literal.
pub fn scan_file(path: &Path, options: &ScanOptions) -> Result<FileReport> {
    let html = std::fs::read_to_string(path)?;
    let pairs = extract_color_pairs_from_str(&html);
    let report = build_report(&pairs, options)?;
    tracing::info!(
        path = %path.display(),
        selectors = report.entries.len(),
        failing = report.non_compliant().count(),
        "scanned file"
    );
    Ok(FileReport {
        path: path.to_path_buf(),
        report,
    })
}

/// What: Render the non-compliant selectors of a report, one per line.
///
/// Output:
/// - Lines shaped `<path>: <selector> ["#c1", "#c2"]`.
pub fn format_failures(file: &FileReport) -> Vec<String> {
    file.report
        .non_compliant()
        .map(|e| format!("{}: {} {:?}", file.path.display(), e.selector, e.colors))
        .collect()
}

/// What: Scan every matching file under `root` and print failures.
///
/// Inputs:
/// - `root`: Directory or file to scan.
/// - `settings`: Effective settings.
/// - `json`: Print a JSON array of file reports instead of text lines.
///
/// Output:
/// - `SUCCESS` when at least one file was scanned (or none matched), `FAILURE` when `root`
///   is unreadable or every matching file failed to scan.
pub fn handle_scan(root: &Path, settings: &Settings, json: bool) -> ExitCode {
    let options = match settings.scan_options() {
        Ok(o) => o,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };
    let files = match collect_files(root, settings) {
        Ok(files) => files,
        Err(err) => {
            tracing::warn!(root = %root.display(), error = %err, "cannot read scan root");
            eprintln!("error: {}: {err}", root.display());
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(root = %root.display(), files = files.len(), "scan started");

    let mut reports = Vec::new();
    let mut failed = 0usize;
    for path in &files {
        match scan_file(path, &options) {
            Ok(r) => reports.push(r),
            Err(err) => {
                failed += 1;
                tracing::warn!(path = %path.display(), error = %err, "skipping file");
                eprintln!("warning: {}: {err}", path.display());
            }
        }
    }

    if json {
        match serde_json::to_string_pretty(&reports) {
            Ok(s) => println!("{s}"),
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        for line in reports.iter().flat_map(format_failures) {
            println!("{line}");
        }
    }

    if !files.is_empty() && failed == files.len() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Walker finds matching files recursively, sorted.
    ///
    /// Inputs:
    /// - Temp tree with `.html` files at two depths and a `.css` file.
    ///
    /// Output:
    /// - Only the HTML files, in sorted order.
    fn collect_files_filters_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("sub");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("b.html"), "").unwrap();
        std::fs::write(nested.join("a.HTML"), "").unwrap();
        std::fs::write(dir.path().join("style.css"), "").unwrap();

        let files = collect_files(dir.path(), &Settings::default()).unwrap();
        assert_eq!(files, vec![dir.path().join("b.html"), nested.join("a.HTML")]);
        let single = collect_files(&dir.path().join("style.css"), &Settings::default()).unwrap();
        assert_eq!(single.len(), 1);
    }

    #[cfg(unix)]
    #[test]
    /// What: Symlink cycles do not repeat files.
    ///
    /// Inputs:
    /// - Temp tree with one `.html` file and a `loop` link pointing back at the root.
    ///
    /// Output:
    /// - The file is collected exactly once.
    fn collect_files_ignores_symlink_cycles() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.html"), "").unwrap();
        std::os::unix::fs::symlink(dir.path(), dir.path().join("loop")).unwrap();
        std::os::unix::fs::symlink(dir.path(), dir.path().join("again")).unwrap();

        let files = collect_files(dir.path(), &Settings::default()).unwrap();
        assert_eq!(files, vec![dir.path().join("a.html")]);
    }

    #[test]
    /// What: A missing scan root is a failure, not an empty clean run.
    ///
    /// Inputs:
    /// - Path that does not exist under a temp directory.
    ///
    /// Output:
    /// - `collect_files` errors and `handle_scan` exits with `FAILURE`.
    fn missing_root_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("typo");
        assert!(collect_files(&missing, &Settings::default()).is_err());
        assert_eq!(
            handle_scan(&missing, &Settings::default(), false),
            ExitCode::FAILURE
        );
    }

    #[test]
    /// What: A readable root with no matching files is a clean run.
    ///
    /// Inputs:
    /// - Empty temp directory.
    ///
    /// Output:
    /// - `SUCCESS`.
    fn empty_root_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            handle_scan(dir.path(), &Settings::default(), false),
            ExitCode::SUCCESS
        );
    }

    #[test]
    /// What: One file end to end.
    ///
    /// Inputs:
    /// - Page with one failing and one passing class.
    ///
    /// Output:
    /// - Single failure line naming the file, selector and colours.
    fn scan_file_reports_failures() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.html");
        std::fs::write(
            &path,
            "<style>\n.ok {\n  color: #000;\n  background-color: #fff;\n}\n.low {\n  color: #777;\n  background: #888;\n}\n</style>",
        )
        .unwrap();
        let file = scan_file(&path, &ScanOptions::default()).unwrap();
        assert_eq!(file.report.entries.len(), 2);
        assert_eq!(
            format_failures(&file),
            vec![format!("{}: low [\"#777\", \"#888\"]", path.display())]
        );
    }

    #[test]
    /// What: Invalid colours and missing files are errors.
    ///
    /// Inputs:
    /// - Page with a truncated colour; a path that does not exist.
    ///
    /// Output:
    /// - Both return `Err`.
    fn scan_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.html");
        std::fs::write(&path, "<style>.x { color: #12; }</style>").unwrap();
        assert!(scan_file(&path, &ScanOptions::default()).is_err());
        assert!(scan_file(&dir.path().join("nope.html"), &ScanOptions::default()).is_err());
    }
}
