//! Directory walk and block emission
//!
//! Uses walkdir with per-directory name sorting so output is reproducible.

use std::fs;
use std::io::Write;
use tracing::debug;
use walkdir::WalkDir;

use crate::core::config::Config;
use crate::core::error::GatherError;
use crate::core::paths::extension_of;
use crate::core::render::write_block;

/// Counters for one walk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    /// Non-directory entries seen
    pub visited: usize,
    pub included: usize,
    pub skipped: usize,
    /// Bytes written to the output, framing included
    pub bytes: u64,
}

/// Walk `config.input_path` and write a block for every selected file to `out`.
///
/// Directories are descended into but never emitted. Any error (unreadable
/// entry, failed read, failed write) aborts the walk immediately.
pub fn gather<W: Write + ?Sized>(
    config: &Config,
    out: &mut W,
) -> Result<WalkSummary, GatherError> {
    let mut summary = WalkSummary::default();

    let walker = WalkDir::new(&config.input_path)
        .follow_links(false)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(GatherError::from_walk)?;
        if entry.file_type().is_dir() {
            continue;
        }
        summary.visited += 1;

        let path = entry.path();
        let extension = extension_of(path);

        debug!("Extension: {}", extension);
        debug!("Checking file: {}", path.display());

        if !config.extensions.matches(&extension) {
            debug!("Decision: Skip");
            summary.skipped += 1;
            continue;
        }
        debug!("Decision: Include");

        let contents = fs::read(path).map_err(|source| GatherError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        summary.bytes += write_block(out, path, &contents).map_err(GatherError::Write)?;
        summary.included += 1;
    }

    debug!(
        visited = summary.visited,
        included = summary.included,
        skipped = summary.skipped,
        bytes = summary.bytes,
        "walk finished"
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ExtensionSet;
    use std::fs::{self, File};
    use std::io;
    use std::path::Path;
    use tempfile::tempdir;

    fn config(root: &Path, extensions: &str) -> Config {
        Config {
            input_path: root.to_path_buf(),
            output: None,
            extensions: ExtensionSet::parse(extensions),
            debug: false,
        }
    }

    fn headers(out: &[u8]) -> Vec<String> {
        String::from_utf8_lossy(out)
            .lines()
            .filter_map(|l| l.strip_prefix("File: ").map(str::to_string))
            .collect()
    }

    #[test]
    fn test_gather_empty_dir() {
        let temp = tempdir().unwrap();
        let mut out = Vec::new();

        let summary = gather(&config(temp.path(), "go"), &mut out).unwrap();
        assert_eq!(summary, WalkSummary::default());
        assert!(out.is_empty());
    }

    #[test]
    fn test_gather_filters_by_extension_in_walk_order() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("b.txt"), "b").unwrap();
        fs::write(temp.path().join("a.go"), "package a\n").unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        fs::write(temp.path().join("sub/c.go"), "package c\n").unwrap();

        let mut out = Vec::new();
        let summary = gather(&config(temp.path(), "go"), &mut out).unwrap();

        let root = temp.path();
        assert_eq!(
            headers(&out),
            vec![
                root.join("a.go").display().to_string(),
                root.join("sub").join("c.go").display().to_string(),
            ]
        );
        assert_eq!(summary.visited, 3);
        assert_eq!(summary.included, 2);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.bytes, out.len() as u64);
    }

    #[test]
    fn test_gather_sorts_each_level() {
        let temp = tempdir().unwrap();
        for name in ["zeta.rs", "alpha.rs", "mid.rs"] {
            File::create(temp.path().join(name)).unwrap();
        }

        let mut out = Vec::new();
        gather(&config(temp.path(), "rs"), &mut out).unwrap();

        let names: Vec<_> = headers(&out)
            .into_iter()
            .map(|p| p.rsplit('/').next().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["alpha.rs", "mid.rs", "zeta.rs"]);
    }

    #[test]
    fn test_gather_empty_extensions_match_everything() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("Makefile"), "all:\n").unwrap();
        fs::write(temp.path().join("notes.md"), "# hi\n").unwrap();

        let mut out = Vec::new();
        let summary = gather(&config(temp.path(), ""), &mut out).unwrap();

        assert_eq!(summary.included, 2);
        assert_eq!(summary.skipped, 0);
    }

    #[test]
    fn test_gather_case_insensitive() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("UPPER.GO"), "x").unwrap();

        let mut out = Vec::new();
        let summary = gather(&config(temp.path(), "Go"), &mut out).unwrap();
        assert_eq!(summary.included, 1);
    }

    #[test]
    fn test_gather_content_is_verbatim() {
        let temp = tempdir().unwrap();
        let contents: &[u8] = b"line1\r\nline2\xff\n";
        fs::write(temp.path().join("data.go"), contents).unwrap();

        let mut out = Vec::new();
        gather(&config(temp.path(), "go"), &mut out).unwrap();

        let header = format!("File: {}\n```\n", temp.path().join("data.go").display());
        assert!(out.starts_with(header.as_bytes()));
        assert_eq!(&out[header.len()..header.len() + contents.len()], contents);
    }

    #[test]
    fn test_gather_is_idempotent() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("x/y")).unwrap();
        fs::write(temp.path().join("x/y/deep.go"), "deep").unwrap();
        fs::write(temp.path().join("x/top.go"), "top").unwrap();

        let cfg = config(temp.path(), "go");
        let mut first = Vec::new();
        let mut second = Vec::new();
        gather(&cfg, &mut first).unwrap();
        gather(&cfg, &mut second).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_gather_single_file_root() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("only.go");
        fs::write(&file, "package only\n").unwrap();

        let mut out = Vec::new();
        let summary = gather(&config(&file, "go"), &mut out).unwrap();
        assert_eq!(summary.included, 1);
    }

    #[test]
    fn test_gather_missing_root_fails_without_output() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("nope");

        let mut out = Vec::new();
        let err = gather(&config(&missing, "go"), &mut out).unwrap_err();

        assert!(matches!(err, GatherError::Walk { .. }));
        assert!(out.is_empty());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_gather_non_utf8_name_in_header() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp = tempdir().unwrap();
        let name = OsStr::from_bytes(b"caf\xe9.go");
        fs::write(temp.path().join(name), "package cafe\n").unwrap();

        let mut out = Vec::new();
        gather(&config(temp.path(), "go"), &mut out).unwrap();

        let mut header = b"File: ".to_vec();
        header.extend_from_slice(temp.path().join(name).as_os_str().as_bytes());
        header.extend_from_slice(b"\n```\n");
        assert!(out.starts_with(&header));
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_gather_write_failure_aborts() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a.go"), "a").unwrap();
        fs::write(temp.path().join("b.go"), "b").unwrap();

        let err = gather(&config(temp.path(), "go"), &mut FailingWriter).unwrap_err();
        assert!(matches!(err, GatherError::Write(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_gather_dangling_symlink_aborts() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a.go"), "a").unwrap();
        std::os::unix::fs::symlink(temp.path().join("gone.go"), temp.path().join("b.go"))
            .unwrap();

        let mut out = Vec::new();
        let err = gather(&config(temp.path(), "go"), &mut out).unwrap_err();

        assert!(matches!(err, GatherError::Read { .. }));
        assert_eq!(headers(&out).len(), 1);
    }
}
