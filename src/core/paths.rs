//! Path helpers shared by the walker and the extension filter

use std::borrow::Cow;
use std::path::Path;

/// Raw bytes of a path as traversed.
///
/// Unix paths are emitted byte for byte, so non-UTF-8 names survive intact.
/// Elsewhere invalid sequences are replaced with U+FFFD.
#[cfg(unix)]
pub fn path_bytes(path: &Path) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(path.as_os_str().as_bytes())
}

#[cfg(not(unix))]
pub fn path_bytes(path: &Path) -> Cow<'_, [u8]> {
    match path.to_string_lossy() {
        Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
        Cow::Owned(s) => Cow::Owned(s.into_bytes()),
    }
}

/// Lower-cased extension of the final path segment, including the leading '.'
///
/// Everything from the last '.' of the file name onwards counts, so dotfiles
/// such as `.bashrc` have the extension `.bashrc`. Names without a '.' have
/// an empty extension.
pub fn extension_of(path: &Path) -> String {
    let name = match path.file_name() {
        Some(name) => name.to_string_lossy(),
        None => return String::new(),
    };

    match name.rfind('.') {
        Some(idx) => name[idx..].to_lowercase(),
        None => String::new(),
    }
}
