//! Output destination: a truncated file or stdout

use std::fs::File;
use std::io::{self, BufWriter, StdoutLock, Write};
use std::path::Path;

use crate::core::error::GatherError;

/// The single sink receiving every block of a run
pub enum Output {
    File(BufWriter<File>),
    Stdout(StdoutLock<'static>),
}

impl Output {
    /// Create (or truncate) `path`, or lock stdout when no path is given
    pub fn open(path: Option<&Path>) -> Result<Self, GatherError> {
        match path {
            Some(path) => {
                let file = File::create(path).map_err(|source| GatherError::CreateOutput {
                    path: path.to_path_buf(),
                    source,
                })?;
                Ok(Self::File(BufWriter::new(file)))
            }
            None => Ok(Self::Stdout(io::stdout().lock())),
        }
    }

    /// Flush buffered output and close the destination
    pub fn finish(self) -> Result<(), GatherError> {
        match self {
            Self::File(writer) => {
                // Closed on drop. sync_all fails with EINVAL on pipes and character devices.
                writer
                    .into_inner()
                    .map(drop)
                    .map_err(|err| GatherError::Write(err.into_error()))
            }
            Self::Stdout(mut lock) => lock.flush().map_err(GatherError::Write),
        }
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::File(w) => w.write(buf),
            Self::Stdout(w) => w.write(buf),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self {
            Self::File(w) => w.write_all(buf),
            Self::Stdout(w) => w.write_all(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::File(w) => w.flush(),
            Self::Stdout(w) => w.flush(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_open_file_truncates_existing() {
        let temp = tempdir().unwrap();
        let target = temp.path().join("out.txt");
        fs::write(&target, "old content that is long").unwrap();

        let mut output = Output::open(Some(target.as_path())).unwrap();
        output.write_all(b"new").unwrap();
        output.finish().unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "new");
    }

    #[cfg(unix)]
    #[test]
    fn test_finish_on_character_device() {
        let mut output = Output::open(Some(Path::new("/dev/null"))).unwrap();
        output.write_all(b"discarded").unwrap();
        output.finish().unwrap();
    }

    #[test]
    fn test_open_file_in_missing_dir_fails() {
        let temp = tempdir().unwrap();
        let target = temp.path().join("no/such/dir/out.txt");

        match Output::open(Some(target.as_path())) {
            Err(GatherError::CreateOutput { path, .. }) => assert_eq!(path, target),
            Err(other) => panic!("unexpected error: {other:?}"),
            Ok(_) => panic!("expected creation to fail"),
        }
    }
}
