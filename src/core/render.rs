//! Output block formatting
//!
//! Each selected file becomes:
//!
//! ~~~text
//! File: <path>
//! ```
//! <raw bytes>
//! ```
//! -------------
//! ~~~

use std::io::{self, Write};
use std::path::Path;

use crate::core::paths::path_bytes;

pub const HEADER_PREFIX: &str = "File: ";
pub const FENCE: &str = "```";
pub const SEPARATOR: &str = "-------------";

/// Write one block and return the number of bytes written.
///
/// The header carries the raw bytes of `path` (see [`path_bytes`]) and
/// `contents` is copied verbatim. No newline is added before the closing fence,
/// so a file without a trailing newline ends on the fence line.
pub fn write_block<W: Write + ?Sized>(
    out: &mut W,
    path: &Path,
    contents: &[u8],
) -> io::Result<u64> {
    let path = path_bytes(path);
    out.write_all(HEADER_PREFIX.as_bytes())?;
    out.write_all(&path)?;
    out.write_all(b"\n")?;
    writeln!(out, "{}", FENCE)?;
    out.write_all(contents)?;
    writeln!(out, "{}", FENCE)?;
    writeln!(out, "{}", SEPARATOR)?;

    Ok(block_len(&path, contents))
}

fn block_len(path: &[u8], contents: &[u8]) -> u64 {
    let framing =
        HEADER_PREFIX.len() + path.len() + 1 + 2 * (FENCE.len() + 1) + SEPARATOR.len() + 1;
    (framing + contents.len()) as u64
}
